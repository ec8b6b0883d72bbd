//! # 스크립트 어댑터
//!
//! 네트워크나 실제 SDK 없이 세션 컨트롤러를 구동하기 위한 어댑터 구현입니다.
//! 각 호출의 결과를 미리 큐에 넣어두고, 실제로 어떤 호출이 어떤 순서로
//! 일어났는지 기록합니다. 테스트와 데모 바이너리에서 사용합니다.
//!
//! ```rust,ignore
//! let google = Arc::new(ScriptedGoogleAuth::new());
//! google.push_sign_in(Ok(user));
//! google.fail_revoke_access(GoogleSignInError::Other("revoked".into()));
//!
//! // ... 컨트롤러 실행 ...
//!
//! assert_eq!(google.calls(), vec![GoogleCall::RevokeAccess]);
//! ```

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use async_trait::async_trait;
use crate::adapters::facebook::FacebookAuthAdapter;
use crate::adapters::google::GoogleAuthAdapter;
use crate::domain::models::{FacebookProfileRecord, GoogleUser, GoogleUserProfile};
use crate::errors::{FacebookGraphError, GoogleSignInError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// `ScriptedGoogleAuth`가 기록하는 호출
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoogleCall {
    Configure { web_client_id: String, offline_access: bool },
    CheckAvailability,
    SignIn,
    RevokeAccess,
    SignOut,
}

#[derive(Default)]
struct GoogleScript {
    availability: VecDeque<Result<(), GoogleSignInError>>,
    sign_in: VecDeque<Result<GoogleUser, GoogleSignInError>>,
    revoke_access: VecDeque<Result<(), GoogleSignInError>>,
    sign_out: VecDeque<Result<(), GoogleSignInError>>,
}

/// 결과를 미리 지정할 수 있는 Google 어댑터
///
/// 큐가 비어 있으면 `check_availability`, `revoke_access`, `sign_out`은 성공하고
/// `sign_in`은 `Other` 에러를 돌려줍니다.
#[derive(Default)]
pub struct ScriptedGoogleAuth {
    script: Mutex<GoogleScript>,
    calls: Mutex<Vec<GoogleCall>>,
}

impl ScriptedGoogleAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// 로그인 성공 결과 하나를 가진 어댑터
    pub fn signing_in_as(user: GoogleUser) -> Self {
        let adapter = Self::new();
        adapter.push_sign_in(Ok(user));
        adapter
    }

    pub fn push_sign_in(&self, result: Result<GoogleUser, GoogleSignInError>) {
        lock(&self.script).sign_in.push_back(result);
    }

    pub fn fail_availability(&self, error: GoogleSignInError) {
        lock(&self.script).availability.push_back(Err(error));
    }

    pub fn fail_revoke_access(&self, error: GoogleSignInError) {
        lock(&self.script).revoke_access.push_back(Err(error));
    }

    pub fn fail_sign_out(&self, error: GoogleSignInError) {
        lock(&self.script).sign_out.push_back(Err(error));
    }

    /// 지금까지 기록된 호출 (순서 유지)
    pub fn calls(&self) -> Vec<GoogleCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: GoogleCall) {
        lock(&self.calls).push(call);
    }
}

/// 데모와 테스트용 Google 사용자 레코드
pub fn sample_google_user(id: &str, name: &str, photo: &str) -> GoogleUser {
    GoogleUser {
        id_token: None,
        user: GoogleUserProfile {
            id: id.to_string(),
            name: Some(name.to_string()),
            email: format!("{}@example.com", name.to_lowercase()),
            photo: Some(photo.to_string()),
            given_name: Some(name.to_string()),
            family_name: None,
        },
    }
}

#[async_trait]
impl GoogleAuthAdapter for ScriptedGoogleAuth {
    fn configure(&self, web_client_id: &str, offline_access: bool) {
        self.record(GoogleCall::Configure {
            web_client_id: web_client_id.to_string(),
            offline_access,
        });
    }

    async fn check_availability(&self) -> Result<(), GoogleSignInError> {
        self.record(GoogleCall::CheckAvailability);
        lock(&self.script).availability.pop_front().unwrap_or(Ok(()))
    }

    async fn sign_in(&self) -> Result<GoogleUser, GoogleSignInError> {
        self.record(GoogleCall::SignIn);
        lock(&self.script)
            .sign_in
            .pop_front()
            .unwrap_or_else(|| Err(GoogleSignInError::Other("no scripted sign-in result".to_string())))
    }

    async fn revoke_access(&self) -> Result<(), GoogleSignInError> {
        self.record(GoogleCall::RevokeAccess);
        lock(&self.script).revoke_access.pop_front().unwrap_or(Ok(()))
    }

    async fn sign_out(&self) -> Result<(), GoogleSignInError> {
        self.record(GoogleCall::SignOut);
        lock(&self.script).sign_out.pop_front().unwrap_or(Ok(()))
    }
}

/// `ScriptedFacebookAuth`가 기록하는 프로필 요청
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRequest {
    pub access_token: String,
    pub fields: Vec<String>,
}

/// 결과를 미리 지정할 수 있는 Facebook 프로필 질의 어댑터
///
/// 큐가 비어 있으면 `Request` 에러를 돌려줍니다.
#[derive(Default)]
pub struct ScriptedFacebookAuth {
    profiles: Mutex<VecDeque<Result<FacebookProfileRecord, FacebookGraphError>>>,
    requests: Mutex<Vec<ProfileRequest>>,
}

impl ScriptedFacebookAuth {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn returning(record: FacebookProfileRecord) -> Self {
        let adapter = Self::new();
        adapter.push_profile(Ok(record));
        adapter
    }

    pub fn push_profile(&self, result: Result<FacebookProfileRecord, FacebookGraphError>) {
        lock(&self.profiles).push_back(result);
    }

    pub fn requests(&self) -> Vec<ProfileRequest> {
        lock(&self.requests).clone()
    }
}

#[async_trait]
impl FacebookAuthAdapter for ScriptedFacebookAuth {
    async fn fetch_profile(
        &self,
        access_token: &str,
        fields: &[&str],
    ) -> Result<FacebookProfileRecord, FacebookGraphError> {
        lock(&self.requests).push(ProfileRequest {
            access_token: access_token.to_string(),
            fields: fields.iter().map(|f| f.to_string()).collect(),
        });

        lock(&self.profiles)
            .pop_front()
            .unwrap_or_else(|| Err(FacebookGraphError::Request("no scripted profile result".to_string())))
    }
}
