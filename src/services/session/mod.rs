//! 로그인 화면 세션 서비스
//!
//! - [`session_controller`] - 두 프로바이더 세션과 화면 상태를 관리하는 컨트롤러
//! - `loading_gate` - 호출 진행 중 `loading` 플래그를 관리하는 가드

pub mod session_controller;
mod loading_gate;

pub use session_controller::*;
