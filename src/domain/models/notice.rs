//! # 사용자 알림 모델
//!
//! 실패한 작업 뒤에 사용자가 확인 버튼을 눌러야 닫히는 알림입니다.
//! 제목 문구는 기존 화면에서 쓰던 문구를 그대로 유지합니다.

use std::fmt;
use serde::Serialize;
use crate::errors::GoogleSignInError;

pub const PROCESS_CANCELLED: &str = "Process Cancelled";
pub const PROCESS_IN_PROGRESS: &str = "Process in progress";
pub const PLAY_SERVICES_UNAVAILABLE: &str = "Play services are not available";
pub const SOMETHING_WENT_WRONG: &str = "Something else went wrong... ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub message: Option<String>,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: Option<String>) -> Self {
        Self {
            title: title.into(),
            message,
        }
    }

    /// Google 로그인/로그아웃 에러에 대응하는 알림
    pub fn for_google_error(error: &GoogleSignInError) -> Self {
        match error {
            GoogleSignInError::UserCancelled => Self::new(PROCESS_CANCELLED, None),
            GoogleSignInError::AlreadyInProgress => Self::new(PROCESS_IN_PROGRESS, None),
            GoogleSignInError::ServiceUnavailable => Self::new(PLAY_SERVICES_UNAVAILABLE, None),
            GoogleSignInError::Other(message) => Self::something_went_wrong(message),
        }
    }

    pub fn something_went_wrong(message: &str) -> Self {
        Self::new(SOMETHING_WENT_WRONG, Some(message.to_string()))
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}{}", self.title, message),
            None => write!(f, "{}", self.title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_titles_per_error() {
        assert_eq!(
            Notice::for_google_error(&GoogleSignInError::UserCancelled).title,
            "Process Cancelled"
        );
        assert_eq!(
            Notice::for_google_error(&GoogleSignInError::AlreadyInProgress).title,
            "Process in progress"
        );
        assert_eq!(
            Notice::for_google_error(&GoogleSignInError::ServiceUnavailable).title,
            "Play services are not available"
        );

        let notice = Notice::for_google_error(&GoogleSignInError::Other("network".to_string()));
        assert_eq!(notice.title, "Something else went wrong... ");
        assert_eq!(notice.message.as_deref(), Some("network"));
        assert_eq!(notice.to_string(), "Something else went wrong... network");
    }
}
