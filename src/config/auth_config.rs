//! # Authentication Configuration Module
//!
//! Google Sign-In SDK 초기화 값과 Facebook Graph 질의 설정을 관리합니다.
//! 화면 초기화 시 한 번 읽어서 [`ScreenConfig`]로 묶습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export GOOGLE_WEB_CLIENT_ID="1234-abcd.apps.googleusercontent.com"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export FACEBOOK_GRAPH_URL="https://graph.facebook.com"
//! export FACEBOOK_GRAPH_VERSION="v19.0"
//! ```
//!
//! `offlineAccess`는 항상 `false`로 고정됩니다 (리프레시 토큰을 보관하지 않음).

use std::env;
use validator::Validate;
use crate::errors::{AppError, AppResult};

/// Facebook 프로필 사진 URL 템플릿 (`{id}` 자리에 사용자 ID)
pub const FACEBOOK_PICTURE_URL_TEMPLATE: &str = "http://graph.facebook.com/{id}/picture?type=large";

/// 프로필 질의에 요청하는 Graph 필드
pub const FACEBOOK_PROFILE_FIELDS: [&str; 4] = ["id", "name", "first_name", "last_name"];

pub struct GoogleSignInConfig;

impl GoogleSignInConfig {
    pub fn web_client_id() -> AppResult<String> {
        env::var("GOOGLE_WEB_CLIENT_ID")
            .map_err(|_| AppError::ConfigurationError("GOOGLE_WEB_CLIENT_ID must be set".to_string()))
    }

    /// 리프레시 토큰을 보관하지 않으므로 항상 false
    pub fn offline_access() -> bool {
        false
    }
}

pub struct FacebookGraphConfig;

impl FacebookGraphConfig {
    pub fn graph_url() -> String {
        env::var("FACEBOOK_GRAPH_URL")
            .unwrap_or_else(|_| "https://graph.facebook.com".to_string())
    }

    pub fn graph_version() -> Option<String> {
        env::var("FACEBOOK_GRAPH_VERSION")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// 화면 초기화 설정
///
/// 화면이 마운트될 때 한 번 만들어지고, Google 어댑터의 `configure` 호출과
/// Facebook Graph 클라이언트 생성에 사용됩니다.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct ScreenConfig {
    /// Google 콘솔에서 발급받은 웹 클라이언트 ID
    #[validate(length(min = 1, message = "GOOGLE_WEB_CLIENT_ID must not be empty"))]
    pub web_client_id: String,

    pub offline_access: bool,

    #[validate(url)]
    pub graph_url: String,

    pub graph_version: Option<String>,
}

impl ScreenConfig {
    pub fn new(web_client_id: impl Into<String>) -> Self {
        Self {
            web_client_id: web_client_id.into().trim().to_string(),
            offline_access: GoogleSignInConfig::offline_access(),
            graph_url: "https://graph.facebook.com".to_string(),
            graph_version: None,
        }
    }

    /// 환경 변수로부터 설정을 읽고 검증합니다.
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            web_client_id: GoogleSignInConfig::web_client_id()?.trim().to_string(),
            offline_access: GoogleSignInConfig::offline_access(),
            graph_url: FacebookGraphConfig::graph_url(),
            graph_version: FacebookGraphConfig::graph_version(),
        };

        config.validate()?;
        log::info!("화면 설정 로드됨 (graph_url={})", config.graph_url);
        Ok(config)
    }
}

/// 사용자 ID로 Facebook 프로필 사진 URL을 만듭니다.
pub fn facebook_picture_url(provider_user_id: &str) -> String {
    FACEBOOK_PICTURE_URL_TEMPLATE.replace("{id}", provider_user_id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    Google,

    Facebook,
}

impl AuthProvider {
    /// 화면 제목에 쓰이는 표시 이름
    pub fn display_name(&self) -> &'static str {
        match self {
            AuthProvider::Google => "Google",
            AuthProvider::Facebook => "Facebook",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_provider_serialization() {
        let json = serde_json::to_string(&AuthProvider::Facebook).unwrap();
        assert_eq!(json, "\"facebook\"");
        let deserialized: AuthProvider = serde_json::from_str("\"google\"").unwrap();
        assert_eq!(deserialized, AuthProvider::Google);
    }

    #[test]
    fn test_facebook_picture_url() {
        assert_eq!(
            facebook_picture_url("12345"),
            "http://graph.facebook.com/12345/picture?type=large"
        );
        assert_eq!(
            facebook_picture_url("999"),
            "http://graph.facebook.com/999/picture?type=large"
        );
        // ID는 인코딩 없이 그대로 들어감
        assert_eq!(
            facebook_picture_url("page.name"),
            "http://graph.facebook.com/page.name/picture?type=large"
        );
    }

    #[test]
    fn test_screen_config_validation() {
        let config = ScreenConfig::new("client-id.apps.googleusercontent.com");
        assert!(config.validate().is_ok());
        assert!(!config.offline_access);

        let empty = ScreenConfig::new("   ");
        assert!(empty.validate().is_err());

        let mut bad_url = ScreenConfig::new("client-id");
        bad_url.graph_url = "not a url".to_string();
        let err: AppError = bad_url.validate().unwrap_err().into();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
