//! # 프로바이더 어댑터 에러
//!
//! Google Sign-In SDK와 Facebook Graph 질의가 돌려주는 실패를
//! 세션 컨트롤러가 분류할 수 있는 형태로 정의합니다.
//!
//! | 에러 | 의미 | 화면 동작 |
//! |------|------|-----------|
//! | `UserCancelled` | 사용자가 로그인 창을 닫음 | 알림만 표시, 실패로 기록하지 않음 |
//! | `AlreadyInProgress` | 이미 로그인 진행 중 | 알림만 표시 |
//! | `ServiceUnavailable` | Play 서비스 없음 | 알림만 표시 |
//! | `Other` | 그 밖의 모든 실패 | 알림 표시 + `last_error` 기록 |

use thiserror::Error;

/// Google SDK 상태 코드: 사용자가 로그인을 취소함
pub const SIGN_IN_CANCELLED: &str = "SIGN_IN_CANCELLED";
/// Google SDK 상태 코드: 로그인 진행 중
pub const IN_PROGRESS: &str = "IN_PROGRESS";
/// Google SDK 상태 코드: Play 서비스 사용 불가
pub const PLAY_SERVICES_NOT_AVAILABLE: &str = "PLAY_SERVICES_NOT_AVAILABLE";

/// Google 로그인 어댑터 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GoogleSignInError {
    #[error("sign-in cancelled by user")]
    UserCancelled,

    #[error("sign-in already in progress")]
    AlreadyInProgress,

    #[error("play services are not available")]
    ServiceUnavailable,

    #[error("{0}")]
    Other(String),
}

impl GoogleSignInError {
    /// SDK가 넘겨준 상태 코드 문자열을 에러로 변환합니다.
    ///
    /// 알 수 없는 코드는 모두 `Other`로 떨어지며, 메시지가 비어 있으면
    /// 코드 자체를 메시지로 사용합니다.
    pub fn from_status_code(code: &str, message: &str) -> Self {
        match code {
            SIGN_IN_CANCELLED => GoogleSignInError::UserCancelled,
            IN_PROGRESS => GoogleSignInError::AlreadyInProgress,
            PLAY_SERVICES_NOT_AVAILABLE => GoogleSignInError::ServiceUnavailable,
            _ if message.trim().is_empty() => GoogleSignInError::Other(code.to_string()),
            _ => GoogleSignInError::Other(message.to_string()),
        }
    }

    pub fn status_code(&self) -> Option<&'static str> {
        match self {
            GoogleSignInError::UserCancelled => Some(SIGN_IN_CANCELLED),
            GoogleSignInError::AlreadyInProgress => Some(IN_PROGRESS),
            GoogleSignInError::ServiceUnavailable => Some(PLAY_SERVICES_NOT_AVAILABLE),
            GoogleSignInError::Other(_) => None,
        }
    }
}

/// Facebook Graph 프로필 질의 에러
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FacebookGraphError {
    /// 네트워크/전송 계층 실패
    #[error("graph request failed: {0}")]
    Request(String),

    /// Graph API가 돌려준 에러 응답
    #[error("graph api error {code}: {message}")]
    Api { code: i64, message: String },

    /// 응답 본문 파싱 실패
    #[error("graph response could not be decoded: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_google_error_from_status_code() {
        assert_eq!(
            GoogleSignInError::from_status_code("SIGN_IN_CANCELLED", "cancelled"),
            GoogleSignInError::UserCancelled
        );
        assert_eq!(
            GoogleSignInError::from_status_code("IN_PROGRESS", ""),
            GoogleSignInError::AlreadyInProgress
        );
        assert_eq!(
            GoogleSignInError::from_status_code("PLAY_SERVICES_NOT_AVAILABLE", ""),
            GoogleSignInError::ServiceUnavailable
        );
        assert_eq!(
            GoogleSignInError::from_status_code("DEVELOPER_ERROR", "bad client id"),
            GoogleSignInError::Other("bad client id".to_string())
        );
        // 메시지가 없으면 코드가 메시지가 됨
        assert_eq!(
            GoogleSignInError::from_status_code("10", "  "),
            GoogleSignInError::Other("10".to_string())
        );
    }

    #[test]
    fn test_google_error_status_code_roundtrip() {
        for error in [
            GoogleSignInError::UserCancelled,
            GoogleSignInError::AlreadyInProgress,
            GoogleSignInError::ServiceUnavailable,
        ] {
            let code = error.status_code().unwrap();
            assert_eq!(GoogleSignInError::from_status_code(code, ""), error);
        }
        assert_eq!(GoogleSignInError::Other("x".to_string()).status_code(), None);
    }

    #[test]
    fn test_facebook_error_display() {
        let error = FacebookGraphError::Api {
            code: 190,
            message: "Invalid OAuth access token.".to_string(),
        };
        assert_eq!(error.to_string(), "graph api error 190: Invalid OAuth access token.");
    }
}
