//! # Google Sign-In 사용자 정보 모델
//!
//! Google Sign-In SDK의 `signIn()`이 돌려주는 사용자 레코드입니다.
//! SDK의 JSON 표현(camelCase)을 그대로 역직렬화할 수 있습니다.
//!
//! ```json
//! {
//!   "idToken": "eyJhbGciOi...",
//!   "user": {
//!     "id": "1098...",
//!     "name": "Ann Lee",
//!     "email": "ann@example.com",
//!     "photo": "https://lh3.googleusercontent.com/a/...",
//!     "givenName": "Ann",
//!     "familyName": "Lee"
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use crate::domain::models::session::ProfileSummary;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleUser {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub id_token: Option<String>,

    pub user: GoogleUserProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleUserProfile {
    pub id: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub photo: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub given_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub family_name: Option<String>,
}

impl GoogleUser {
    /// 화면 표시용 프로필로 변환합니다.
    ///
    /// 이름이 없으면 이메일을 표시 이름으로 사용하고,
    /// 사진이 없으면 빈 URL을 사용합니다.
    pub fn to_profile_summary(&self) -> ProfileSummary {
        ProfileSummary {
            display_name: self
                .user
                .name
                .clone()
                .unwrap_or_else(|| self.user.email.clone()),
            photo_url: self.user.photo.clone().unwrap_or_default(),
            provider_user_id: self.user.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_sdk_payload() {
        let json = r#"{
            "idToken": "token-abc",
            "user": {
                "id": "g-1",
                "name": "Ann",
                "email": "ann@example.com",
                "photo": "https://x/a.png",
                "givenName": "Ann",
                "familyName": null
            }
        }"#;

        let user: GoogleUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.id_token.as_deref(), Some("token-abc"));
        assert_eq!(user.user.given_name.as_deref(), Some("Ann"));
        assert_eq!(user.user.family_name, None);

        let profile = user.to_profile_summary();
        assert_eq!(profile.display_name, "Ann");
        assert_eq!(profile.photo_url, "https://x/a.png");
        assert_eq!(profile.provider_user_id, "g-1");
    }

    #[test]
    fn test_profile_falls_back_to_email_without_name() {
        let json = r#"{"user": {"id": "g-2", "name": "  ", "email": "bo@example.com"}}"#;
        let user: GoogleUser = serde_json::from_str(json).unwrap();

        let profile = user.to_profile_summary();
        assert_eq!(profile.display_name, "bo@example.com");
        assert_eq!(profile.photo_url, "");
        assert!(user.id_token.is_none());
    }
}
