//! 터미널 출력 포맷팅 유틸리티
//!
//! 로그인 화면의 [`ScreenView`]를 터미널에 박스 형태로 그립니다.
//! 데모 바이너리와 `TerminalNotifier`가 사용합니다.

use crate::domain::models::Notice;
use crate::domain::view::{FacebookPanel, GooglePanel, ProfileCard, ScreenView};

const CONTENT_WIDTH: usize = 50;

pub fn print_boxed_title(title: &str) {
    let border = "═".repeat(CONTENT_WIDTH);

    println!("╔{}╗", border);
    println!("║{:^49}║", title);
    println!("╚{}╝", border);
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 확인 버튼이 있는 알림 대화상자
pub fn print_notice(notice: &Notice) {
    println!();
    print_boxed_title("⚠ NOTICE");
    println!("   {}", notice.title.trim_end());
    if let Some(message) = &notice.message {
        println!("   {}", message);
    }
    println!("   [ OK ]");
    println!();
}

fn card_lines(card: &ProfileCard) -> Vec<String> {
    vec![
        card.heading.clone(),
        format!("[photo] {}", card.photo_url),
        card.greeting.clone(),
    ]
}

/// 화면 뷰를 줄 단위 텍스트로 변환합니다.
pub fn screen_lines(view: &ScreenView) -> Vec<String> {
    let (google, facebook) = match view {
        ScreenView::Loading => return vec!["⏳ Loading...".to_string()],
        ScreenView::Ready { google, facebook } => (google, facebook),
    };

    let mut lines = Vec::new();

    match google {
        GooglePanel::Hidden => {}
        GooglePanel::SignInButton => lines.push("[ Sign in with Google ]".to_string()),
        GooglePanel::SignedIn { card, sign_out_label } => {
            lines.extend(card_lines(card));
            lines.push(format!("[ {} ]", sign_out_label));
        }
    }

    if let FacebookPanel::Visible { card, login_button } = facebook {
        if let Some(card) = card {
            lines.extend(card_lines(card));
        }
        lines.push(format!("[ {} ]", login_button.label()));
    }

    lines
}

pub fn print_screen(title: &str, view: &ScreenView) {
    print_boxed_title(title);
    for line in screen_lines(view) {
        println!("   {}", line);
    }
    println!();
}
