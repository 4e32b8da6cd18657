use super::{empty_field, trace_change, trace_result};
use crate::models::field::{FieldKind, non_empty};
use crate::models::result::{ErrorKind, SubmissionResult};
use crate::state::{Cell, Subscription, Trigger};
use crate::validation::FormatValidator;
use std::sync::Arc;

/// Single-field nickname form.
pub struct NicknameViewModel {
    validator: Arc<dyn FormatValidator>,
    nickname: Cell<Option<String>>,
    save_tap: Trigger,
}

impl NicknameViewModel {
    pub fn new(validator: Arc<dyn FormatValidator>) -> Self {
        Self {
            validator,
            nickname: Cell::new(empty_field()),
            save_tap: Trigger::new(),
        }
    }

    pub fn nickname_changed(&self, text: Option<&str>) {
        trace_change(FieldKind::Nickname, text);
        self.nickname.set(text.map(str::to_string));
    }

    pub fn save_tapped(&self) {
        tracing::debug!("save tapped");
        self.save_tap.fire();
    }

    pub fn nickname(&self) -> Option<String> {
        self.nickname.get()
    }

    pub fn is_save_enabled(&self) -> bool {
        self.nickname.with(|v| non_empty(v.as_deref()))
    }

    pub fn on_save_enabled(&self, f: impl Fn(bool) + Send + Sync + 'static) -> Subscription {
        self.nickname.subscribe(move |v| f(non_empty(v.as_deref())))
    }

    /// Every value written to the nickname field, starting with the current one.
    pub fn on_nickname(&self, f: impl Fn(Option<&str>) + Send + Sync + 'static) -> Subscription {
        self.nickname.subscribe(move |v| f(v.as_deref()))
    }

    pub fn on_save_result(&self, f: impl Fn(SubmissionResult) + Send + Sync + 'static) -> Subscription {
        let nickname = self.nickname.clone();
        let validator = self.validator.clone();

        self.save_tap.subscribe(move || {
            let result = evaluate(nickname.get().as_deref(), validator.as_ref());
            trace_result("nickname", &result);
            f(result);
        })
    }

    pub fn save_result(&self) -> SubmissionResult {
        evaluate(self.nickname.get().as_deref(), self.validator.as_ref())
    }
}

fn evaluate(nickname: Option<&str>, validator: &dyn FormatValidator) -> SubmissionResult {
    let Some(nickname) = nickname else {
        return SubmissionResult::Failure(ErrorKind::Unknown);
    };

    if !validator.check(nickname, FieldKind::Nickname) {
        return SubmissionResult::Failure(ErrorKind::InvalidNickname);
    }

    SubmissionResult::Success(nickname.to_string())
}
