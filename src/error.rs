//! Validation error taxonomy
//!
//! One error kind per violated condition. Rules raise the error for the
//! first failing condition and never accumulate several violations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("password must be longer than {expected} characters")]
    MinimumLength { expected: usize },
    #[error("password must contain at least one uppercase letter")]
    NoUppercase,
    #[error("password must contain at least one lowercase letter")]
    NoLowercase,
    #[error("password must contain at least one digit")]
    NoDigit,
    #[error("password must contain at least one special character (@, _, #, $, %)")]
    NoSpecialCharacter,
    #[error("password must contain the word \"calisto\" with 2 to 6 uppercase letters")]
    NoSecretWord,
}
