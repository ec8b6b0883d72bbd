//! # Facebook 로그인 어댑터 포트
//!
//! Facebook SDK의 로그인 버튼은 스스로 로그인/로그아웃을 처리하고
//! 결과를 콜백으로 넘겨줍니다. 화면은 그 콜백을
//! `SessionController::handle_facebook_login_result` / `handle_facebook_logout`으로
//! 전달하고, 프로필은 Graph 질의 기능으로 따로 가져옵니다.

use async_trait::async_trait;
use crate::domain::models::FacebookProfileRecord;
use crate::errors::FacebookGraphError;

/// 로그인 버튼의 `onLoginFinished` 결과
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacebookLoginOutcome {
    Error(String),
    Cancelled,
    Success { access_token: String },
}

impl FacebookLoginOutcome {
    pub fn success(access_token: impl Into<String>) -> Self {
        FacebookLoginOutcome::Success {
            access_token: access_token.into(),
        }
    }
}

#[async_trait]
pub trait FacebookAuthAdapter: Send + Sync {
    /// 액세스 토큰으로 `/me` 프로필을 조회합니다.
    async fn fetch_profile(
        &self,
        access_token: &str,
        fields: &[&str],
    ) -> Result<FacebookProfileRecord, FacebookGraphError>;
}
