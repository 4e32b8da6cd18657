#![allow(dead_code)]

use formflow::screens::{Presenter, Route, ScreenId};
use parking_lot::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    Button(ScreenId, bool),
    Alert(String, String),
    Nav(Route),
    Preview(Option<String>),
    Notice(String),
}

/// Presenter that records everything it is asked to show.
#[derive(Default)]
pub struct Recorder {
    pub shown: Mutex<Vec<Shown>>,
}

impl Recorder {
    pub fn take(&self) -> Vec<Shown> {
        std::mem::take(&mut *self.shown.lock())
    }

    pub fn alerts(&self) -> Vec<String> {
        self.shown
            .lock()
            .iter()
            .filter_map(|s| match s {
                Shown::Alert(title, _) => Some(title.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn routes(&self) -> Vec<Route> {
        self.shown
            .lock()
            .iter()
            .filter_map(|s| match s {
                Shown::Nav(r) => Some(r.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_button(&self, screen: ScreenId) -> Option<bool> {
        self.shown.lock().iter().rev().find_map(|s| match s {
            Shown::Button(id, flag) if *id == screen => Some(*flag),
            _ => None,
        })
    }

    pub fn notices(&self) -> Vec<String> {
        self.shown
            .lock()
            .iter()
            .filter_map(|s| match s {
                Shown::Notice(n) => Some(n.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for Recorder {
    fn button_changed(&self, screen: ScreenId, enabled: bool) {
        self.shown.lock().push(Shown::Button(screen, enabled));
    }

    fn alert(&self, title: &str, message: &str) {
        self.shown.lock().push(Shown::Alert(title.into(), message.into()));
    }

    fn navigate(&self, route: Route) {
        self.shown.lock().push(Shown::Nav(route));
    }

    fn nickname_preview(&self, text: Option<&str>) {
        self.shown.lock().push(Shown::Preview(text.map(str::to_string)));
    }

    fn notice(&self, text: &str) {
        self.shown.lock().push(Shown::Notice(text.into()));
    }
}
