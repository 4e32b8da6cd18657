use crate::screens::{Presenter, Route, ScreenId};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io::Write;

/// Plain-text presenter. Button changes are printed only when the state
/// actually flips.
pub struct ConsolePresenter {
    out: Mutex<Box<dyn Write + Send>>,
    buttons: Mutex<HashMap<ScreenId, bool>>,
}

impl ConsolePresenter {
    pub fn stdout() -> Self {
        Self::new(Box::new(std::io::stdout()))
    }

    pub fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out: Mutex::new(out),
            buttons: Mutex::new(HashMap::new()),
        }
    }

    fn line(&self, s: impl AsRef<str>) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{}", s.as_ref()).and_then(|_| out.flush()) {
            tracing::warn!(error = %e, "console write failed");
        }
    }
}

impl Presenter for ConsolePresenter {
    fn button_changed(&self, screen: ScreenId, enabled: bool) {
        let prev = self.buttons.lock().insert(screen, enabled);
        if prev == Some(enabled) {
            return;
        }
        let label = match screen {
            ScreenId::Login => "login",
            ScreenId::Nickname => "save",
        };
        let state = if enabled { "enabled" } else { "disabled" };
        self.line(format!("[{screen}] {label} button {state}"));
    }

    fn alert(&self, title: &str, message: &str) {
        self.line(format!("!! {title}: {message}"));
    }

    fn navigate(&self, route: Route) {
        match route {
            Route::PresentNickname => self.line("[nickname] sheet opened"),
            Route::DismissNickname { saved: true } => self.line("[nickname] saved, sheet closed"),
            Route::DismissNickname { saved: false } => {
                // sheet is gone, so is its button
                self.buttons.lock().remove(&ScreenId::Nickname);
                self.line("[nickname] sheet closed")
            }
            Route::Welcome { identifier, nickname } => {
                let name = nickname.as_deref().unwrap_or(identifier.as_str());
                self.line(format!("Welcome, {name}! (logged in as {identifier})"));
            }
        }
    }

    fn nickname_preview(&self, text: Option<&str>) {
        if let Some(t) = text.filter(|t| !t.is_empty()) {
            self.line(format!("[nickname] preview: {t}"));
        }
    }

    fn notice(&self, text: &str) {
        self.line(text);
    }
}
