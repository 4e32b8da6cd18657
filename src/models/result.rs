use serde::Serialize;

/// Why a submit did not go through. Each kind carries the text shown in the
/// failure alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidIdentifier,
    InvalidPassword,
    InvalidNickname,
    /// A field cell was absent when the submit fired.
    Unknown,
}

impl ErrorKind {
    /// Alert title
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::InvalidIdentifier => "Invalid ID",
            ErrorKind::InvalidPassword => "Invalid password",
            ErrorKind::InvalidNickname => "Invalid nickname",
            ErrorKind::Unknown => "Something went wrong",
        }
    }

    /// Alert body
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidIdentifier => "Please enter your ID as an e-mail address.",
            ErrorKind::InvalidPassword => {
                "Passwords are 8 to 20 characters and mix letters, digits and symbols."
            }
            ErrorKind::InvalidNickname => {
                "Nicknames are 1 to 10 Korean letters, Latin letters or digits."
            }
            ErrorKind::Unknown => "An unknown error occurred. Please try again.",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Outcome of one submit. Produced fresh on every trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum SubmissionResult {
    Success(String),
    Failure(ErrorKind),
}

impl SubmissionResult {
    pub fn into_result(self) -> Result<String, ErrorKind> {
        match self {
            SubmissionResult::Success(payload) => Ok(payload),
            SubmissionResult::Failure(kind) => Err(kind),
        }
    }
}
