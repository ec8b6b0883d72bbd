//! # Configuration Module
//!
//! 화면 초기화에 필요한 설정값을 환경 변수에서 읽어 중앙에서 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - `.env` 로딩, 실행 환경, 로그 필터
//! - [`auth_config`] - Google Sign-In, Facebook Graph 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{load_env_file, Environment, ScreenConfig};
//!
//! load_env_file();
//! let env = Environment::current();
//! let config = ScreenConfig::from_env()?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export PROFILE="dev"                      # dev, prod, 그 외는 .env
//! export ENVIRONMENT="development"          # development, test, staging, production
//! export GOOGLE_WEB_CLIENT_ID="your-web-client-id"
//! export FACEBOOK_GRAPH_URL="https://graph.facebook.com"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
