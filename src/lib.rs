pub mod config;
pub mod error;
pub mod models;
pub mod screens;
pub mod shell;
pub mod state;
pub mod validation;
pub mod viewmodels;

// Convenient re-exports (so call sites can do `formflow::LoginViewModel`, etc.)
pub use models::field::FieldKind;
pub use models::result::{ErrorKind, SubmissionResult};
pub use validation::{FormatValidator, RuleSet, ValidationRule, matches};
pub use viewmodels::{LoginViewModel, NicknameViewModel};
