// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Validator responses.

/// Severity of a validator message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    Error,
    Warning,
    Success,
}

impl FeedbackKind {
    /// Get the lowercase name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Error => "error",
            FeedbackKind::Warning => "warning",
            FeedbackKind::Success => "success",
        }
    }
}

/// The outcome of running a validator function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatorResponse {
    /// The value passed; there is nothing to report.
    Valid,
    /// The value failed with a message.
    Error(String),
    /// The value passed with a warning.
    Warning(String),
    /// The value passed with an explicit success message.
    Success(String),
}

impl ValidatorResponse {
    /// Whether this response reports a failure.
    pub fn is_error(&self) -> bool {
        matches!(self, ValidatorResponse::Error(_))
    }

    /// The message template carried by this response, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidatorResponse::Valid => None,
            ValidatorResponse::Error(message)
            | ValidatorResponse::Warning(message)
            | ValidatorResponse::Success(message) => Some(message),
        }
    }

    /// The severity of this response, if it carries a message.
    pub fn kind(&self) -> Option<FeedbackKind> {
        match self {
            ValidatorResponse::Valid => None,
            ValidatorResponse::Error(_) => Some(FeedbackKind::Error),
            ValidatorResponse::Warning(_) => Some(FeedbackKind::Warning),
            ValidatorResponse::Success(_) => Some(FeedbackKind::Success),
        }
    }
}

/// `true` passes, `false` fails with an empty message for the caller to fill.
impl From<bool> for ValidatorResponse {
    fn from(passed: bool) -> Self {
        if passed {
            ValidatorResponse::Valid
        } else {
            ValidatorResponse::Error(String::new())
        }
    }
}

/// An empty string passes, anything else is an error message.
impl From<&str> for ValidatorResponse {
    fn from(message: &str) -> Self {
        if message.is_empty() {
            ValidatorResponse::Valid
        } else {
            ValidatorResponse::Error(message.to_string())
        }
    }
}

impl From<String> for ValidatorResponse {
    fn from(message: String) -> Self {
        if message.is_empty() {
            ValidatorResponse::Valid
        } else {
            ValidatorResponse::Error(message)
        }
    }
}
