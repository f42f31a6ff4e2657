//! Ganimedes rule - length plus full character variety.

use secrecy::{ExposeSecret, SecretString};

use crate::checks;
use crate::error::ValidationError;
use crate::rule::ValidationRule;

const EXPECTED_LENGTH: usize = 8;

/// Characters accepted as special. Nothing outside this set counts.
const SPECIAL_CHARACTERS: [char; 5] = ['@', '_', '#', '$', '%'];

/// Policy requiring length over 8, both letter cases, a digit and a
/// special character from the fixed set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ganimedes;

/// Checks if the password contains a character from `SPECIAL_CHARACTERS`.
fn contains_special_character(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(&c))
}

impl ValidationRule for Ganimedes {
    fn name(&self) -> &'static str {
        "Ganimedes"
    }

    fn expected_length(&self) -> usize {
        EXPECTED_LENGTH
    }

    fn is_valid(&self, password: &SecretString) -> Result<(), ValidationError> {
        let pwd = password.expose_secret();

        if !checks::exceeds_length(pwd, self.expected_length()) {
            return Err(ValidationError::MinimumLength {
                expected: self.expected_length(),
            });
        }
        if !checks::contains_uppercase(pwd) {
            return Err(ValidationError::NoUppercase);
        }
        if !checks::contains_lowercase(pwd) {
            return Err(ValidationError::NoLowercase);
        }
        if !checks::contains_digit(pwd) {
            return Err(ValidationError::NoDigit);
        }
        if !contains_special_character(pwd) {
            return Err(ValidationError::NoSpecialCharacter);
        }
        Ok(())
    }
}
