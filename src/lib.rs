//! 소셜 로그인 화면 세션 코어
//!
//! Google, Facebook 두 아이덴티티 프로바이더로 로그인하는 화면의
//! 세션 수명주기와 상호 배제 정책을 구현합니다.
//! 실제 인증 과정은 모두 프로바이더 SDK에 위임하고, 이 크레이트는
//! 어댑터(포트)를 통해서만 SDK와 대화합니다.
//!
//! # Features
//!
//! - **세션 컨트롤러**: 로그인/로그아웃, 로딩 게이트, 에러 분류와 알림
//! - **상호 배제**: 한 번에 하나의 프로바이더만 활성
//! - **뷰 선택**: 상태 → 화면 구성의 순수 함수
//! - **어댑터**: Facebook Graph HTTP 클라이언트, 스크립트 어댑터
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   Screen / UI   │ ← 버튼 이벤트, SDK 콜백
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← SessionController
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Adapters     │ ← Google / Facebook / Notifier 포트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Provider SDKs  │ ← 외부
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use social_login_screen::adapters::{ScriptedFacebookAuth, ScriptedGoogleAuth, TerminalNotifier};
//! use social_login_screen::config::ScreenConfig;
//! use social_login_screen::services::session::SessionController;
//!
//! let mut controller = SessionController::new(
//!     ScreenConfig::from_env()?,
//!     Arc::new(ScriptedGoogleAuth::new()),
//!     Arc::new(ScriptedFacebookAuth::new()),
//!     Arc::new(TerminalNotifier),
//! );
//!
//! controller.sign_in_with_google().await;
//! let view = controller.view();
//! ```

pub mod config;
pub mod domain;
pub mod adapters;
pub mod services;
pub mod utils;
pub mod errors;
