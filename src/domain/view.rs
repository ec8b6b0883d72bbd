//! # 화면 뷰 선택
//!
//! 세션 상태로부터 화면에 무엇을 그릴지 결정하는 순수 함수입니다.
//! UI 프레임워크와 무관하게 [`ScreenView`] 값만 돌려주므로
//! 어떤 렌더러(터미널, 모바일 바인딩 등)에서도 그대로 사용할 수 있습니다.
//!
//! ## 렌더링 규칙
//!
//! ```text
//! loading ────────────────► ScreenView::Loading (조작 불가)
//!
//! Google 패널:
//!   Facebook 활성 ────────► Hidden
//!   Google 활성 ──────────► 프로필 + 로그아웃 버튼
//!   그 외 ────────────────► 로그인 버튼
//!
//! Facebook 패널:
//!   Google 활성 ──────────► Hidden
//!   그 외 ────────────────► (활성이면 프로필 카드) + 로그인/로그아웃 버튼
//! ```

use crate::config::AuthProvider;
use crate::domain::models::{ProfileSummary, ProviderSession, ScreenState};

pub const GOOGLE_SIGN_IN_LABEL: &str = "Sign in with Google";
pub const GOOGLE_SIGN_OUT_LABEL: &str = "Sign Out";
pub const FACEBOOK_LOG_IN_LABEL: &str = "Continue with Facebook";
pub const FACEBOOK_LOG_OUT_LABEL: &str = "Log out";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenView {
    /// 진행 표시기만 보이고 모든 컨트롤이 사라진 상태
    Loading,
    Ready {
        google: GooglePanel,
        facebook: FacebookPanel,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GooglePanel {
    Hidden,
    SignInButton,
    SignedIn {
        card: ProfileCard,
        sign_out_label: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacebookPanel {
    Hidden,
    Visible {
        card: Option<ProfileCard>,
        login_button: FacebookLoginButton,
    },
}

/// Facebook SDK 로그인 버튼은 로그인 상태에 따라 문구만 바뀝니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacebookLoginButton {
    LogIn,
    LogOut,
}

impl FacebookLoginButton {
    pub fn label(&self) -> &'static str {
        match self {
            FacebookLoginButton::LogIn => FACEBOOK_LOG_IN_LABEL,
            FacebookLoginButton::LogOut => FACEBOOK_LOG_OUT_LABEL,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileCard {
    pub heading: String,
    pub photo_url: String,
    pub greeting: String,
}

impl ProfileCard {
    fn new(provider: AuthProvider, profile: &ProfileSummary) -> Self {
        Self {
            heading: format!("Logged in using {}", provider.display_name()),
            photo_url: profile.photo_url.clone(),
            greeting: format!("Hello, {}", profile.display_name),
        }
    }
}

impl ScreenView {
    /// 상호작용 가능한 컨트롤이 하나라도 있는지
    pub fn is_interactive(&self) -> bool {
        !matches!(self, ScreenView::Loading)
    }

    pub fn google_panel(&self) -> Option<&GooglePanel> {
        match self {
            ScreenView::Loading => None,
            ScreenView::Ready { google, .. } => Some(google),
        }
    }

    pub fn facebook_panel(&self) -> Option<&FacebookPanel> {
        match self {
            ScreenView::Loading => None,
            ScreenView::Ready { facebook, .. } => Some(facebook),
        }
    }

    /// Facebook 로그인 버튼이 화면에 있어서 콜백이 도달할 수 있는지
    pub fn accepts_facebook_callbacks(&self) -> bool {
        matches!(self.facebook_panel(), Some(FacebookPanel::Visible { .. }))
    }
}

pub fn render(google: &ProviderSession, facebook: &ProviderSession, screen: &ScreenState) -> ScreenView {
    if screen.loading {
        return ScreenView::Loading;
    }

    ScreenView::Ready {
        google: render_google_panel(google, facebook),
        facebook: render_facebook_panel(google, facebook),
    }
}

fn render_google_panel(google: &ProviderSession, facebook: &ProviderSession) -> GooglePanel {
    if facebook.is_active() {
        return GooglePanel::Hidden;
    }

    match google.profile() {
        Some(profile) => GooglePanel::SignedIn {
            card: ProfileCard::new(AuthProvider::Google, profile),
            sign_out_label: GOOGLE_SIGN_OUT_LABEL,
        },
        None => GooglePanel::SignInButton,
    }
}

fn render_facebook_panel(google: &ProviderSession, facebook: &ProviderSession) -> FacebookPanel {
    if google.is_active() {
        return FacebookPanel::Hidden;
    }

    let card = facebook
        .profile()
        .map(|profile| ProfileCard::new(AuthProvider::Facebook, profile));
    let login_button = if facebook.is_active() {
        FacebookLoginButton::LogOut
    } else {
        FacebookLoginButton::LogIn
    };

    FacebookPanel::Visible { card, login_button }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, photo: &str) -> ProfileSummary {
        ProfileSummary {
            display_name: name.to_string(),
            photo_url: photo.to_string(),
            provider_user_id: "id-1".to_string(),
        }
    }

    fn sessions() -> (ProviderSession, ProviderSession) {
        (
            ProviderSession::new(AuthProvider::Google),
            ProviderSession::new(AuthProvider::Facebook),
        )
    }

    #[test]
    fn test_initial_screen_shows_both_sign_in_controls() {
        let (google, facebook) = sessions();
        let view = render(&google, &facebook, &ScreenState::default());

        assert_eq!(
            view,
            ScreenView::Ready {
                google: GooglePanel::SignInButton,
                facebook: FacebookPanel::Visible {
                    card: None,
                    login_button: FacebookLoginButton::LogIn,
                },
            }
        );
        assert!(view.is_interactive());
        assert!(view.accepts_facebook_callbacks());
    }

    #[test]
    fn test_loading_replaces_everything() {
        let (mut google, facebook) = sessions();
        google.activate(profile("Ann", "https://x/a.png"));
        let screen = ScreenState { loading: true, last_error: None };

        let view = render(&google, &facebook, &screen);
        assert_eq!(view, ScreenView::Loading);
        assert!(!view.is_interactive());
        assert!(view.google_panel().is_none());
        assert!(!view.accepts_facebook_callbacks());
    }

    #[test]
    fn test_google_signed_in_hides_facebook() {
        let (mut google, facebook) = sessions();
        google.activate(profile("Ann", "https://x/a.png"));

        let view = render(&google, &facebook, &ScreenState::default());
        assert_eq!(view.facebook_panel(), Some(&FacebookPanel::Hidden));
        assert!(!view.accepts_facebook_callbacks());

        match view.google_panel() {
            Some(GooglePanel::SignedIn { card, sign_out_label }) => {
                assert_eq!(card.heading, "Logged in using Google");
                assert_eq!(card.photo_url, "https://x/a.png");
                assert_eq!(card.greeting, "Hello, Ann");
                assert_eq!(*sign_out_label, "Sign Out");
            }
            other => panic!("unexpected google panel: {:?}", other),
        }
    }

    #[test]
    fn test_facebook_signed_in_hides_google_and_shows_logout() {
        let (google, mut facebook) = sessions();
        facebook.activate(profile("Bo", "http://graph.facebook.com/999/picture?type=large"));

        let view = render(&google, &facebook, &ScreenState::default());
        assert_eq!(view.google_panel(), Some(&GooglePanel::Hidden));

        match view.facebook_panel() {
            Some(FacebookPanel::Visible { card: Some(card), login_button }) => {
                assert_eq!(card.heading, "Logged in using Facebook");
                assert_eq!(card.greeting, "Hello, Bo");
                assert_eq!(card.photo_url, "http://graph.facebook.com/999/picture?type=large");
                assert_eq!(login_button.label(), "Log out");
            }
            other => panic!("unexpected facebook panel: {:?}", other),
        }
    }
}
