//! Shared character-class checks
//!
//! Free functions composed by every rule, so rule variants don't duplicate
//! the scans. All scans are single passes over the exposed password.

/// Checks if the password is strictly longer than `expected` characters.
///
/// Lengths are character counts, not byte counts.
pub fn exceeds_length(password: &str, expected: usize) -> bool {
    password.chars().count() > expected
}

/// Checks if the password contains at least one uppercase letter.
pub fn contains_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_uppercase())
}

/// Checks if the password contains at least one lowercase letter.
pub fn contains_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_lowercase())
}

/// Checks if the password contains at least one decimal digit.
pub fn contains_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
