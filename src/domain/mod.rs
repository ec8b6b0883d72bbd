//! # Domain Layer
//!
//! 로그인 화면의 핵심 데이터 모델과 뷰 선택 규칙을 정의합니다.
//! 이 계층은 어댑터나 런타임에 의존하지 않습니다.
//!
//! ```text
//! domain/
//! ├── models/     ← 세션, 화면 상태, 프로바이더 레코드, 알림
//! └── view.rs     ← 상태 → ScreenView 순수 함수
//! ```

pub mod models;
pub mod view;
