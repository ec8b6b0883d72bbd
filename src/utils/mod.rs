//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 프로필 문자열 정리, 토큰 마스킹
//! - [`display_terminal`] - 화면 상태를 터미널에 박스 형태로 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::print_screen;
//!
//! print_screen("초기 화면", &controller.view());
//! ```

pub mod string_utils;
pub mod display_terminal;
