//! 도메인 모델
//!
//! - [`session`] - 프로바이더 세션, 화면 상태, 에러 정보
//! - [`google_user`] - Google SDK 사용자 레코드
//! - [`facebook_user`] - Facebook Graph 프로필 레코드
//! - [`notice`] - 사용자 알림

pub mod session;
pub mod google_user;
pub mod facebook_user;
pub mod notice;

pub use session::*;
pub use google_user::*;
pub use facebook_user::*;
pub use notice::*;
