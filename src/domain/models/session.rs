//! # 세션 상태 모델
//!
//! 화면이 살아있는 동안 유지되는 인증 상태를 표현합니다.
//!
//! ```text
//! ┌──────────────────────┐   ┌──────────────────────┐   ┌─────────────────────┐
//! │ ProviderSession      │   │ ProviderSession      │   │ ScreenState         │
//! │  provider: Google    │   │  provider: Facebook  │   │  loading: bool      │
//! │  profile: Option<..> │   │  profile: Option<..> │   │  last_error: Option │
//! └──────────────────────┘   └──────────────────────┘   └─────────────────────┘
//! ```
//!
//! `ProviderSession`의 활성 여부는 프로필 존재 여부로 결정되므로
//! "프로필은 활성 상태일 때만 존재한다"는 조건이 타입 수준에서 항상 성립합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;

/// 로그인 후 화면에 표시되는 최소 프로필 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub display_name: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    pub provider_user_id: String,
}

/// 프로바이더 하나에 대한 로컬 세션 기록
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSession {
    provider: AuthProvider,
    profile: Option<ProfileSummary>,
}

impl ProviderSession {
    /// 비활성 상태의 세션을 만듭니다.
    pub fn new(provider: AuthProvider) -> Self {
        Self { provider, profile: None }
    }

    pub fn provider(&self) -> AuthProvider {
        self.provider
    }

    pub fn is_active(&self) -> bool {
        self.profile.is_some()
    }

    pub fn profile(&self) -> Option<&ProfileSummary> {
        self.profile.as_ref()
    }

    /// 로그인 성공: 프로필을 저장하고 활성화합니다.
    pub(crate) fn activate(&mut self, profile: ProfileSummary) {
        log::info!(
            "{} 세션 활성화: {} ({})",
            self.provider.display_name(),
            profile.display_name,
            profile.provider_user_id
        );
        self.profile = Some(profile);
    }

    /// 로그아웃: 프로필을 지우고 비활성화합니다.
    pub(crate) fn deactivate(&mut self) {
        if self.profile.take().is_some() {
            log::info!("{} 세션 비활성화", self.provider.display_name());
        }
    }
}

/// 가장 최근 실패 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorInfo {
    pub provider: AuthProvider,
    pub message: String,
    pub occurred_at: DateTime<Utc>,
}

impl ErrorInfo {
    pub fn new(provider: AuthProvider, message: impl Into<String>) -> Self {
        Self {
            provider,
            message: message.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// 화면 전역 상태
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    /// 프로바이더 호출이 진행 중이면 true. 모든 조작이 멈춥니다.
    pub loading: bool,
    pub last_error: Option<ErrorInfo>,
}
