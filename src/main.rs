//! 소셜 로그인 화면 데모
//!
//! 세션 컨트롤러를 스크립트 어댑터로 구동하면서 각 단계의 화면을 터미널에 출력합니다.
//! `FACEBOOK_ACCESS_TOKEN`이 설정되어 있으면 실제 Graph API로 프로필을 조회합니다.

use std::sync::Arc;
use env_logger::Env;
use log::{error, info};
use social_login_screen::adapters::{
    sample_google_user, FacebookAuthAdapter, FacebookGraphClient, FacebookLoginOutcome,
    ScriptedFacebookAuth, ScriptedGoogleAuth, TerminalNotifier, TerminalScreenObserver,
};
use social_login_screen::config::{load_env_file, Environment, ScreenConfig};
use social_login_screen::domain::models::FacebookProfileRecord;
use social_login_screen::errors::AppResult;
use social_login_screen::services::session::SessionController;
use social_login_screen::utils::display_terminal::{print_screen, print_step_start, print_sub_task};

const SCREEN_TITLE: &str = "📱 LOGIN SCREEN";

#[actix_web::main]
async fn main() {
    load_env_file();
    init_logging();

    info!("🚀 소셜 로그인 화면 데모 시작중...");

    if let Err(e) = run().await {
        error!("데모 실행 실패: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    let environment = Environment::current();
    env_logger::init_from_env(Env::default().default_filter_or(environment.default_log_filter()));
}

async fn run() -> AppResult<()> {
    let config = ScreenConfig::from_env()?;

    let google = Arc::new(ScriptedGoogleAuth::signing_in_as(sample_google_user(
        "demo-google-1",
        "Ann",
        "https://lh3.googleusercontent.com/a/default-user",
    )));
    let (facebook, access_token) = facebook_adapter(&config)?;

    let mut controller = SessionController::new(config, google, facebook, Arc::new(TerminalNotifier))
        .with_observer(Arc::new(TerminalScreenObserver::new(SCREEN_TITLE)));
    print_screen(SCREEN_TITLE, &controller.view());

    print_step_start(1, "Sign in with Google");
    let status = controller.sign_in_with_google().await;
    print_sub_task("google", &format!("{:?}", status));

    print_step_start(2, "Sign out of Google");
    let status = controller.sign_out_of_google().await;
    print_sub_task("google", &format!("{:?}", status));

    print_step_start(3, "Continue with Facebook");
    let status = controller
        .handle_facebook_login_result(FacebookLoginOutcome::success(access_token))
        .await;
    print_sub_task("facebook", &format!("{:?}", status));

    print_step_start(4, "Log out of Facebook");
    controller.handle_facebook_logout();

    info!("✅ 데모 완료");
    Ok(())
}

fn facebook_adapter(config: &ScreenConfig) -> AppResult<(Arc<dyn FacebookAuthAdapter>, String)> {
    match std::env::var("FACEBOOK_ACCESS_TOKEN") {
        Ok(token) if !token.trim().is_empty() => {
            info!("🌐 Facebook Graph API 사용: {}", config.graph_url);
            let client = FacebookGraphClient::from_config(config)?;
            Ok((Arc::new(client), token.trim().to_string()))
        }
        _ => {
            info!("Facebook 스크립트 어댑터 사용 (FACEBOOK_ACCESS_TOKEN 없음)");
            let scripted = ScriptedFacebookAuth::returning(FacebookProfileRecord::new("4", "Demo User"));
            Ok((Arc::new(scripted), "demo-access-token".to_string()))
        }
    }
}
