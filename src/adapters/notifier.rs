//! # 사용자 알림 포트
//!
//! 실패한 작업을 사용자에게 알리는 차단형 알림(확인 버튼이 있는 대화상자)의 경계입니다.

use std::sync::Mutex;
use crate::domain::models::Notice;
use crate::utils::display_terminal::print_notice;

pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// 알림을 터미널 대화상자로 출력하는 구현 (데모용)
#[derive(Debug, Default)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, notice: &Notice) {
        log::warn!("⚠️ 알림: {}", notice);
        print_notice(notice);
    }
}

/// 받은 알림을 모두 보관하는 구현
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn titles(&self) -> Vec<String> {
        self.notices().into_iter().map(|n| n.title).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        log::debug!("알림 기록: {}", notice);
        self.notices
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(notice.clone());
    }
}
