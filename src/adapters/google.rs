//! # Google Sign-In 어댑터 포트
//!
//! Google Sign-In SDK가 제공하는 기능 중 화면이 사용하는 다섯 가지 호출만 노출합니다.
//! OAuth 교환과 토큰 보관은 모두 SDK 내부에서 이루어집니다.
//!
//! ## 호출 순서
//!
//! ```text
//! 로그인:   check_availability() → sign_in()
//! 로그아웃: revoke_access() → sign_out()
//! ```
//!
//! 로그아웃 시 `revoke_access`를 먼저 호출해야 다음 로그인에서 계정 선택 창이
//! 다시 뜹니다.

use async_trait::async_trait;
use crate::domain::models::GoogleUser;
use crate::errors::GoogleSignInError;

#[async_trait]
pub trait GoogleAuthAdapter: Send + Sync {
    /// SDK 초기화. 화면 마운트 시 한 번 호출됩니다.
    fn configure(&self, web_client_id: &str, offline_access: bool);

    /// Play 서비스 등 로그인에 필요한 플랫폼 서비스 확인
    async fn check_availability(&self) -> Result<(), GoogleSignInError>;

    /// 대화형 로그인
    async fn sign_in(&self) -> Result<GoogleUser, GoogleSignInError>;

    async fn revoke_access(&self) -> Result<(), GoogleSignInError>;

    async fn sign_out(&self) -> Result<(), GoogleSignInError>;
}
