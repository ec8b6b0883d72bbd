//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 화면 하나의 수명 동안 인증 상태를 관리하는 [`session::SessionController`]를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::session::SessionController;
//!
//! let mut controller = SessionController::new(config, google, facebook, notifier);
//! let status = controller.sign_in_with_google().await;
//! ```

pub mod session;
