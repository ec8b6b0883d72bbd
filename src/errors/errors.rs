//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 설정 로딩, Facebook Graph 통신, 데모 실행 등 화면 바깥쪽 계층에서
//! 발생하는 에러를 하나의 타입으로 통합합니다.
//! 프로바이더 어댑터가 돌려주는 분류된 에러는 [`super::provider_errors`]에 있으며,
//! 세션 컨트롤러 경계에서 모두 처리되어 이 타입으로 전파되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! fn web_client_id() -> Result<String, AppError> {
//!     std::env::var("GOOGLE_WEB_CLIENT_ID")
//!         .map_err(|_| AppError::ConfigurationError("GOOGLE_WEB_CLIENT_ID must be set".to_string()))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 환경 변수 누락 등 설정 에러
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// 입력값 검증 에러
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 외부 서비스(Facebook Graph 등) 에러
    #[error("External service error: {0}")]
    ExternalServiceError(String),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::ValidationError(errors.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_prefixes() {
        let error = AppError::ConfigurationError("GOOGLE_WEB_CLIENT_ID must be set".to_string());
        assert_eq!(error.to_string(), "Configuration error: GOOGLE_WEB_CLIENT_ID must be set");

        let error = AppError::ExternalServiceError("graph timeout".to_string());
        assert_eq!(error.to_string(), "External service error: graph timeout");
    }

    #[test]
    fn test_validation_errors_convert_to_app_error() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("graph_url", validator::ValidationError::new("url"));

        let error: AppError = errors.into();
        assert!(matches!(error, AppError::ValidationError(_)));
    }
}
