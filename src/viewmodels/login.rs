use super::{empty_field, trace_change, trace_result};
use crate::models::field::{FieldKind, non_empty};
use crate::models::result::{ErrorKind, SubmissionResult};
use crate::state::{Cell, Subscription, Trigger, derive};
use crate::validation::FormatValidator;
use std::sync::Arc;

/// Identifier + password form.
///
/// Inputs arrive through `identifier_changed`, `password_changed` and
/// `login_tapped`. Outputs are the enablement flag (recomputed on every
/// keystroke) and a [`SubmissionResult`] per login tap.
pub struct LoginViewModel {
    validator: Arc<dyn FormatValidator>,
    identifier: Cell<Option<String>>,
    password: Cell<Option<String>>,
    login_tap: Trigger,
}

impl LoginViewModel {
    pub fn new(validator: Arc<dyn FormatValidator>) -> Self {
        Self {
            validator,
            identifier: Cell::new(empty_field()),
            password: Cell::new(empty_field()),
            login_tap: Trigger::new(),
        }
    }

    // ---- input ----

    pub fn identifier_changed(&self, text: Option<&str>) {
        trace_change(FieldKind::Identifier, text);
        self.identifier.set(text.map(str::to_string));
    }

    pub fn password_changed(&self, text: Option<&str>) {
        trace_change(FieldKind::Password, text);
        self.password.set(text.map(str::to_string));
    }

    pub fn login_tapped(&self) {
        tracing::debug!("login tapped");
        self.login_tap.fire();
    }

    // ---- output ----

    pub fn identifier(&self) -> Option<String> {
        self.identifier.get()
    }

    pub fn password(&self) -> Option<String> {
        self.password.get()
    }

    pub fn is_login_enabled(&self) -> bool {
        login_enabled(self.identifier.get().as_deref(), self.password.get().as_deref())
    }

    /// Current enablement right away, then once per field change.
    pub fn on_login_enabled(&self, f: impl Fn(bool) + Send + Sync + 'static) -> Subscription {
        derive(
            &[&self.identifier, &self.password],
            |v| login_enabled(v[0].as_deref(), v[1].as_deref()),
            f,
        )
    }

    /// One result per login tap, computed from the field values at tap time.
    pub fn on_login_result(&self, f: impl Fn(SubmissionResult) + Send + Sync + 'static) -> Subscription {
        let identifier = self.identifier.clone();
        let password = self.password.clone();
        let validator = self.validator.clone();

        self.login_tap.subscribe(move || {
            let result = evaluate(
                identifier.get().as_deref(),
                password.get().as_deref(),
                validator.as_ref(),
            );
            trace_result("login", &result);
            f(result);
        })
    }

    /// What a login tap would produce right now.
    pub fn login_result(&self) -> SubmissionResult {
        evaluate(
            self.identifier.get().as_deref(),
            self.password.get().as_deref(),
            self.validator.as_ref(),
        )
    }
}

fn login_enabled(identifier: Option<&str>, password: Option<&str>) -> bool {
    non_empty(identifier) && non_empty(password)
}

/// Absent cell first, then identifier, then password. The identifier is
/// always checked before the password.
fn evaluate(identifier: Option<&str>, password: Option<&str>, validator: &dyn FormatValidator) -> SubmissionResult {
    let (Some(identifier), Some(password)) = (identifier, password) else {
        return SubmissionResult::Failure(ErrorKind::Unknown);
    };

    if !validator.check(identifier, FieldKind::Identifier) {
        return SubmissionResult::Failure(ErrorKind::InvalidIdentifier);
    }
    if !validator.check(password, FieldKind::Password) {
        return SubmissionResult::Failure(ErrorKind::InvalidPassword);
    }

    SubmissionResult::Success(identifier.to_string())
}
