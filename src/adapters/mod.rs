//! # Provider Adapters
//!
//! 세션 컨트롤러가 외부 프로바이더 SDK와 대화하는 경계(포트)입니다.
//! 실제 SDK 바인딩과 테스트용 스크립트 구현이 같은 trait을 구현합니다.
//!
//! ```text
//! ┌───────────────────┐
//! │ SessionController │
//! └───────────────────┘
//!     │         │              │              │
//!     ▼         ▼              ▼              ▼
//! ┌────────┐ ┌──────────┐ ┌──────────┐ ┌────────────────┐
//! │ Google │ │ Facebook │ │ Notifier │ │ ScreenObserver │  ← trait (port)
//! └────────┘ └──────────┘ └──────────┘ └────────────────┘
//!     │         │              │              │
//!     ▼         ▼              ▼              ▼
//!  SDK 바인딩  Graph 클라이언트   터미널         터미널
//!  Scripted    Scripted          Recording      Recording
//! ```
//!
//! # Modules
//!
//! - [`google`] - `GoogleAuthAdapter` trait
//! - [`facebook`] - `FacebookAuthAdapter` trait, 로그인 결과 타입
//! - [`facebook_graph_client`] - `reqwest` 기반 Graph API 구현
//! - [`scripted`] - 결과를 미리 지정하고 호출을 기록하는 구현
//! - [`notifier`] - 사용자 알림 포트와 구현들
//! - [`screen_observer`] - 화면 갱신 포트와 구현들

pub mod google;
pub mod facebook;
pub mod facebook_graph_client;
pub mod scripted;
pub mod notifier;
pub mod screen_observer;

pub use google::*;
pub use facebook::*;
pub use facebook_graph_client::*;
pub use scripted::*;
pub use notifier::*;
pub use screen_observer::*;
