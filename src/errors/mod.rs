//! 에러 타입 모듈
//!
//! - [`errors`] - 애플리케이션 전역 에러 (`AppError`)
//! - [`provider_errors`] - Google/Facebook 어댑터 에러

pub mod errors;
pub mod provider_errors;

pub use errors::*;
pub use provider_errors::*;
