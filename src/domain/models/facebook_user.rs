//! # Facebook 프로필 레코드
//!
//! Graph API `/me?fields=id,name,first_name,last_name` 질의 결과입니다.

use serde::{Deserialize, Serialize};
use crate::config::facebook_picture_url;
use crate::domain::models::session::ProfileSummary;
use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacebookProfileRecord {
    pub id: String,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub first_name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub last_name: Option<String>,
}

impl FacebookProfileRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: Some(name.into()),
            first_name: None,
            last_name: None,
        }
    }

    /// 표시 이름: `name` → `first_name last_name` → 빈 문자열
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }

        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn picture_url(&self) -> String {
        facebook_picture_url(&self.id)
    }

    pub fn to_profile_summary(&self) -> ProfileSummary {
        ProfileSummary {
            display_name: self.display_name(),
            photo_url: self.picture_url(),
            provider_user_id: self.id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_response_to_profile() {
        let json = r#"{"id": "999", "name": "Bo", "first_name": "Bo", "last_name": "Kim"}"#;
        let record: FacebookProfileRecord = serde_json::from_str(json).unwrap();

        let profile = record.to_profile_summary();
        assert_eq!(profile.display_name, "Bo");
        assert_eq!(profile.photo_url, "http://graph.facebook.com/999/picture?type=large");
        assert_eq!(profile.provider_user_id, "999");
    }

    #[test]
    fn test_display_name_from_split_names() {
        let json = r#"{"id": "1", "first_name": "Bo", "last_name": "Kim"}"#;
        let record: FacebookProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_name(), "Bo Kim");

        let json = r#"{"id": "2", "last_name": "Kim"}"#;
        let record: FacebookProfileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.display_name(), "Kim");

        let record: FacebookProfileRecord = serde_json::from_str(r#"{"id": "3"}"#).unwrap();
        assert_eq!(record.display_name(), "");
    }
}
