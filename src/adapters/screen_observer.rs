//! # 화면 갱신 포트
//!
//! 컨트롤러 상태가 바뀔 때마다 새로 그려진 [`ScreenView`]를 받습니다.
//! 로딩 게이트가 걸리는 순간(`ScreenView::Loading`)과 작업이 끝난 직후에 호출됩니다.

use std::sync::Mutex;
use crate::domain::view::ScreenView;
use crate::utils::display_terminal::print_screen;

pub trait ScreenObserver: Send + Sync {
    fn screen_changed(&self, view: &ScreenView);
}

/// 바뀐 화면을 터미널에 그리는 구현 (데모용)
#[derive(Debug)]
pub struct TerminalScreenObserver {
    title: String,
}

impl TerminalScreenObserver {
    pub fn new(title: impl Into<String>) -> Self {
        Self { title: title.into() }
    }
}

impl ScreenObserver for TerminalScreenObserver {
    fn screen_changed(&self, view: &ScreenView) {
        print_screen(&self.title, view);
    }
}

/// 받은 화면을 순서대로 보관하는 구현
#[derive(Debug, Default)]
pub struct RecordingScreenObserver {
    views: Mutex<Vec<ScreenView>>,
}

impl RecordingScreenObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn views(&self) -> Vec<ScreenView> {
        self.views
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// 가장 최근에 받은 화면
    pub fn current(&self) -> Option<ScreenView> {
        self.views
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .last()
            .cloned()
    }
}

impl ScreenObserver for RecordingScreenObserver {
    fn screen_changed(&self, view: &ScreenView) {
        log::trace!("화면 갱신: {:?}", view);
        self.views
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(view.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_observer_keeps_latest_view() {
        let observer = RecordingScreenObserver::new();
        assert!(observer.current().is_none());

        observer.screen_changed(&ScreenView::Loading);
        assert_eq!(observer.current(), Some(ScreenView::Loading));
        assert_eq!(observer.views().len(), 1);
    }
}
