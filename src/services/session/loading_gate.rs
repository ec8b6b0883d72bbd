//! 로딩 게이트
//!
//! 프로바이더 호출이 진행되는 동안 `ScreenState::loading`을 true로 유지하고,
//! 게이트가 사라지는 순간(성공, 실패, 퓨처 취소, 패닉 모두) false로 되돌립니다.

use crate::domain::models::ScreenState;

pub(crate) struct LoadingGate<'a> {
    screen: &'a mut ScreenState,
    operation: &'static str,
}

impl<'a> LoadingGate<'a> {
    pub(crate) fn engage(screen: &'a mut ScreenState, operation: &'static str) -> Self {
        screen.loading = true;
        log::debug!("⏳ {} 시작 (loading=true)", operation);
        Self { screen, operation }
    }

    pub(crate) fn screen(&mut self) -> &mut ScreenState {
        self.screen
    }
}

impl Drop for LoadingGate<'_> {
    fn drop(&mut self) {
        self.screen.loading = false;
        log::debug!("{} 종료 (loading=false)", self.operation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AuthProvider;
    use crate::domain::models::ErrorInfo;

    #[test]
    fn test_gate_sets_and_resets_loading() {
        let mut screen = ScreenState::default();
        {
            let mut gate = LoadingGate::engage(&mut screen, "test");
            assert!(gate.screen().loading);
            gate.screen().last_error = Some(ErrorInfo::new(AuthProvider::Google, "x"));
        }
        assert!(!screen.loading);
        assert!(screen.last_error.is_some());
    }

    #[test]
    fn test_gate_resets_loading_on_panic() {
        let mut screen = ScreenState::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _gate = LoadingGate::engage(&mut screen, "panicking");
            panic!("adapter exploded");
        }));
        assert!(result.is_err());
        assert!(!screen.loading);
    }
}
