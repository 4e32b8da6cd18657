mod login;
mod nickname;

pub use login::LoginViewModel;
pub use nickname::NicknameViewModel;

use crate::models::field::FieldKind;
use crate::models::result::{ErrorKind, SubmissionResult};

/// Cell value for a freshly opened screen.
pub(crate) fn empty_field() -> Option<String> {
    Some(String::new())
}

/// Logs the outcome of a submit. `Unknown` means a field cell was absent,
/// which the view layer never does on its own.
pub(crate) fn trace_result(form: &'static str, result: &SubmissionResult) {
    match result {
        SubmissionResult::Success(_) => tracing::info!(form, "submit accepted"),
        SubmissionResult::Failure(ErrorKind::Unknown) => {
            tracing::error!(form, "submit with an absent field cell")
        }
        SubmissionResult::Failure(kind) => tracing::warn!(form, error = ?kind, "submit rejected"),
    }
}

pub(crate) fn trace_change(field: FieldKind, text: Option<&str>) {
    // never log the password itself
    match (field, text) {
        (FieldKind::Password, Some(t)) => tracing::debug!(%field, len = t.chars().count(), "field changed"),
        (_, Some(t)) => tracing::debug!(%field, value = t, "field changed"),
        (_, None) => tracing::debug!(%field, "field cleared to null"),
    }
}
