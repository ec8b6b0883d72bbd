//! # 세션 컨트롤러
//!
//! 로그인 화면의 UI 동작과 두 프로바이더 어댑터 사이를 중재합니다.
//! 화면 하나에 컨트롤러 하나가 대응하며, 화면이 사라지면 상태도 함께 사라집니다.
//!
//! ## 유지하는 조건
//!
//! 1. Google과 Facebook 세션이 동시에 활성화되지 않음
//! 2. 프로필은 세션이 활성일 때만 존재함 ([`ProviderSession`]이 구조적으로 보장)
//! 3. `loading`은 진행 중인 호출 하나 동안만 true이고, 어떤 경로로 끝나든 false로 돌아감
//!
//! ## 작업 흐름
//!
//! ```text
//! sign_in_with_google()
//!   ├─ 전제조건 확인 (loading 아님, Facebook 비활성, Google 비활성)
//!   ├─ loading = true
//!   ├─ check_availability() → sign_in()
//!   ├─ 성공: Google 세션 활성화, last_error 초기화
//!   ├─ 실패: 분류 → 알림 (Other이면 last_error 기록)
//!   └─ loading = false
//!
//! sign_out_of_google()
//!   ├─ 전제조건 확인 (loading 아님, Google 활성)
//!   ├─ revoke_access() → sign_out()   (revoke 실패 시 sign_out 호출 안 함)
//!   ├─ 성공: Google 세션 비활성화
//!   └─ 실패: 알림, 세션 유지
//!
//! handle_facebook_login_result(outcome)
//!   ├─ Error / Cancelled: 로그만 남김
//!   └─ Success: fetch_profile() → Facebook 세션 활성화
//! ```
//!
//! 옵저버가 붙어 있으면 로딩 게이트가 걸릴 때(`ScreenView::Loading`)와
//! 작업이 끝난 뒤에 새 화면을 받습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let mut controller = SessionController::new(config, google, facebook, notifier);
//!
//! controller.sign_in_with_google().await;
//! render_to_screen(controller.view());
//! ```

use std::sync::Arc;
use crate::adapters::{FacebookAuthAdapter, FacebookLoginOutcome, GoogleAuthAdapter, Notifier, ScreenObserver};
use crate::config::{AuthProvider, ScreenConfig, FACEBOOK_PROFILE_FIELDS};
use crate::domain::models::{ErrorInfo, GoogleUser, Notice, ProviderSession, ScreenState};
use crate::domain::view::{render, ScreenView};
use crate::errors::{FacebookGraphError, GoogleSignInError};
use crate::services::session::loading_gate::LoadingGate;
use crate::utils::string_utils::mask_token;

/// 작업이 어떻게 끝났는지
///
/// 어댑터 실패는 모두 이 값으로 변환되어 반환되며, 에러로 전파되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Completed,
    /// 사용자가 로그인 창을 닫음. 실패로 취급하지 않음.
    Cancelled,
    Failed(OperationFailure),
    /// 전제조건을 만족하지 않아 어댑터를 호출하지 않음
    Rejected(RejectReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationFailure {
    Google(GoogleSignInError),
    FacebookLogin(String),
    FacebookGraph(FacebookGraphError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// 다른 호출이 진행 중
    Busy,
    /// 다른 프로바이더로 이미 로그인되어 있음
    OtherProviderActive(AuthProvider),
    AlreadySignedIn,
    NotSignedIn,
}

const GOOGLE_SIGN_IN: &str = "google_sign_in";
const GOOGLE_SIGN_OUT: &str = "google_sign_out";
const FACEBOOK_PROFILE_FETCH: &str = "facebook_profile_fetch";

pub struct SessionController {
    config: ScreenConfig,
    google: ProviderSession,
    facebook: ProviderSession,
    screen: ScreenState,
    google_auth: Arc<dyn GoogleAuthAdapter>,
    facebook_auth: Arc<dyn FacebookAuthAdapter>,
    notifier: Arc<dyn Notifier>,
    observer: Option<Arc<dyn ScreenObserver>>,
}

impl SessionController {
    /// 화면 마운트 시 컨트롤러를 만들고 Google SDK를 한 번 초기화합니다.
    pub fn new(
        config: ScreenConfig,
        google_auth: Arc<dyn GoogleAuthAdapter>,
        facebook_auth: Arc<dyn FacebookAuthAdapter>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        google_auth.configure(&config.web_client_id, config.offline_access);
        log::info!("🔐 로그인 화면 초기화 (offline_access={})", config.offline_access);

        Self {
            config,
            google: ProviderSession::new(AuthProvider::Google),
            facebook: ProviderSession::new(AuthProvider::Facebook),
            screen: ScreenState::default(),
            google_auth,
            facebook_auth,
            notifier,
            observer: None,
        }
    }

    /// 상태가 바뀔 때마다 새 화면을 받을 옵저버를 붙입니다.
    pub fn with_observer(mut self, observer: Arc<dyn ScreenObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    pub fn google_session(&self) -> &ProviderSession {
        &self.google
    }

    pub fn facebook_session(&self) -> &ProviderSession {
        &self.facebook
    }

    pub fn screen_state(&self) -> &ScreenState {
        &self.screen
    }

    pub fn view(&self) -> ScreenView {
        render(&self.google, &self.facebook, &self.screen)
    }

    /// Google 대화형 로그인
    ///
    /// # 전제조건
    ///
    /// - 진행 중인 호출이 없어야 함
    /// - Facebook 세션이 비활성이어야 함
    /// - Google 세션이 이미 활성이 아니어야 함
    ///
    /// 전제조건을 만족하지 않으면 어댑터를 호출하지 않고 `Rejected`를 돌려줍니다.
    pub async fn sign_in_with_google(&mut self) -> OperationStatus {
        let status = self.run_google_sign_in().await;
        self.publish_after(&status);
        status
    }

    async fn run_google_sign_in(&mut self) -> OperationStatus {
        let blocker = if self.screen.loading {
            Some(RejectReason::Busy)
        } else if self.facebook.is_active() {
            Some(RejectReason::OtherProviderActive(AuthProvider::Facebook))
        } else if self.google.is_active() {
            Some(RejectReason::AlreadySignedIn)
        } else {
            None
        };
        if let Some(reason) = blocker {
            log::warn!("Google 로그인 거부됨: {:?}", reason);
            return OperationStatus::Rejected(reason);
        }

        let mut gate = LoadingGate::engage(&mut self.screen, GOOGLE_SIGN_IN);
        publish(self.observer.as_deref(), &self.google, &self.facebook, gate.screen());
        let result = interactive_google_sign_in(self.google_auth.as_ref()).await;

        match result {
            Ok(user) => {
                log::debug!("Google 로그인 결과: {:?}", user.user);
                self.google.activate(user.to_profile_summary());
                gate.screen().last_error = None;
                OperationStatus::Completed
            }
            Err(error) => {
                self.notifier.notify(&Notice::for_google_error(&error));
                match error {
                    GoogleSignInError::UserCancelled => {
                        log::info!("Google 로그인 취소됨");
                        OperationStatus::Cancelled
                    }
                    GoogleSignInError::Other(message) => {
                        log::error!("Google 로그인 실패: {}", message);
                        gate.screen().last_error = Some(ErrorInfo::new(AuthProvider::Google, message.clone()));
                        OperationStatus::Failed(OperationFailure::Google(GoogleSignInError::Other(message)))
                    }
                    _ => {
                        log::warn!("Google 로그인 실패: {}", error);
                        OperationStatus::Failed(OperationFailure::Google(error))
                    }
                }
            }
        }
    }

    /// Google 로그아웃
    ///
    /// `revoke_access` 후 `sign_out`을 호출합니다. 어느 단계든 실패하면
    /// 어댑터 내부 상태를 알 수 없으므로 세션을 그대로 둡니다.
    pub async fn sign_out_of_google(&mut self) -> OperationStatus {
        let status = self.run_google_sign_out().await;
        self.publish_after(&status);
        status
    }

    async fn run_google_sign_out(&mut self) -> OperationStatus {
        let blocker = if self.screen.loading {
            Some(RejectReason::Busy)
        } else if !self.google.is_active() {
            Some(RejectReason::NotSignedIn)
        } else {
            None
        };
        if let Some(reason) = blocker {
            log::warn!("Google 로그아웃 거부됨: {:?}", reason);
            return OperationStatus::Rejected(reason);
        }

        let mut gate = LoadingGate::engage(&mut self.screen, GOOGLE_SIGN_OUT);
        publish(self.observer.as_deref(), &self.google, &self.facebook, gate.screen());
        let result = revoke_and_sign_out(self.google_auth.as_ref()).await;

        match result {
            Ok(()) => {
                self.google.deactivate();
                OperationStatus::Completed
            }
            Err(error) => {
                log::error!("Google 로그아웃 실패: {}", error);
                self.notifier.notify(&Notice::something_went_wrong(&error.to_string()));
                OperationStatus::Failed(OperationFailure::Google(error))
            }
        }
    }

    /// Facebook 로그인 버튼의 `onLoginFinished` 콜백
    ///
    /// Google로 로그인된 동안에는 Facebook 버튼이 화면에 없으므로 이 콜백은
    /// 도달할 수 없고, 도달하더라도 거부됩니다.
    pub async fn handle_facebook_login_result(&mut self, outcome: FacebookLoginOutcome) -> OperationStatus {
        let status = self.run_facebook_login_result(outcome).await;
        self.publish_after(&status);
        status
    }

    async fn run_facebook_login_result(&mut self, outcome: FacebookLoginOutcome) -> OperationStatus {
        let blocker = if self.screen.loading {
            Some(RejectReason::Busy)
        } else if self.google.is_active() {
            Some(RejectReason::OtherProviderActive(AuthProvider::Google))
        } else if self.facebook.is_active() {
            Some(RejectReason::AlreadySignedIn)
        } else {
            None
        };
        if let Some(reason) = blocker {
            log::warn!("Facebook 로그인 결과 무시됨: {:?}", reason);
            return OperationStatus::Rejected(reason);
        }

        let access_token = match outcome {
            FacebookLoginOutcome::Error(message) => {
                log::error!("Facebook 로그인 에러: {}", message);
                return OperationStatus::Failed(OperationFailure::FacebookLogin(message));
            }
            FacebookLoginOutcome::Cancelled => {
                log::info!("Facebook 로그인 취소됨");
                return OperationStatus::Cancelled;
            }
            FacebookLoginOutcome::Success { access_token } => access_token,
        };

        log::info!("Facebook 로그인 성공, 프로필 조회 (token={})", mask_token(&access_token));

        let mut gate = LoadingGate::engage(&mut self.screen, FACEBOOK_PROFILE_FETCH);
        publish(self.observer.as_deref(), &self.google, &self.facebook, gate.screen());

        match self.facebook_auth.fetch_profile(&access_token, &FACEBOOK_PROFILE_FIELDS).await {
            Ok(record) => {
                log::debug!("Facebook 프로필: {:?}", record);
                self.facebook.activate(record.to_profile_summary());
                gate.screen().last_error = None;
                OperationStatus::Completed
            }
            Err(error) => {
                log::error!("Facebook 프로필 조회 실패: {}", error);
                OperationStatus::Failed(OperationFailure::FacebookGraph(error))
            }
        }
    }

    /// Facebook 로그인 버튼의 `onLogoutFinished` 콜백
    pub fn handle_facebook_logout(&mut self) {
        self.facebook.deactivate();
        self.publish_after(&OperationStatus::Completed);
    }

    /// 거부된 작업은 상태를 바꾸지 않으므로 화면을 다시 보내지 않음
    fn publish_after(&self, status: &OperationStatus) {
        if !matches!(status, OperationStatus::Rejected(_)) {
            publish(self.observer.as_deref(), &self.google, &self.facebook, &self.screen);
        }
    }
}

fn publish(
    observer: Option<&dyn ScreenObserver>,
    google: &ProviderSession,
    facebook: &ProviderSession,
    screen: &ScreenState,
) {
    if let Some(observer) = observer {
        observer.screen_changed(&render(google, facebook, screen));
    }
}

async fn interactive_google_sign_in(adapter: &dyn GoogleAuthAdapter) -> Result<GoogleUser, GoogleSignInError> {
    adapter.check_availability().await?;
    adapter.sign_in().await
}

/// revoke_access 실패 시 sign_out은 호출하지 않음
async fn revoke_and_sign_out(adapter: &dyn GoogleAuthAdapter) -> Result<(), GoogleSignInError> {
    adapter.revoke_access().await?;
    adapter.sign_out().await
}
