//! Screen controllers: bind view-model outputs to a [`Presenter`] and carry
//! the nickname from the modal back to the login screen.

mod login;
mod nickname;

pub use login::LoginScreen;
pub use nickname::NicknameScreen;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenId {
    Login,
    Nickname,
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScreenId::Login => write!(f, "login"),
            ScreenId::Nickname => write!(f, "nickname"),
        }
    }
}

/// Navigation requested by a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum Route {
    /// Nickname sheet presented over the login screen
    PresentNickname,
    /// Nickname sheet went away, `saved` tells whether a nickname came back
    DismissNickname { saved: bool },
    /// Successful login
    Welcome {
        identifier: String,
        nickname: Option<String>,
    },
}

/// The view layer. Everything a screen wants shown goes through here.
pub trait Presenter: Send + Sync {
    /// Submit button interactive/visual state.
    fn button_changed(&self, screen: ScreenId, enabled: bool);

    fn alert(&self, title: &str, message: &str);

    fn navigate(&self, route: Route);

    /// Label mirroring the nickname field while typing.
    fn nickname_preview(&self, _text: Option<&str>) {}

    /// Free-form feedback (help, usage, state dumps).
    fn notice(&self, _text: &str) {}
}
