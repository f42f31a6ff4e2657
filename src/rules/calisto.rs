//! Calisto rule - length, digit and the themed secret word.

use secrecy::{ExposeSecret, SecretString};

use crate::checks;
use crate::error::ValidationError;
use crate::rule::ValidationRule;

const EXPECTED_LENGTH: usize = 6;

const SECRET_WORD: &str = "calisto";

/// Uppercase letters required inside the matched word: at least this many,
/// strictly fewer than the word length.
const MIN_UPPERCASE: usize = 2;

/// Policy requiring length over 6, a digit and the word "calisto" written
/// with a mix of cases.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calisto;

/// Checks if the password contains "calisto" (case-insensitive) where the
/// matched substring has at least 2 but not all of its letters uppercase.
///
/// Scans every window of the word's length; a window matching the word but
/// failing the uppercase count does not stop the scan. Passwords shorter
/// than the word never match.
fn contains_secret_word(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    let word_len = SECRET_WORD.len();

    for window in chars.windows(word_len) {
        let candidate: String = window.iter().collect();
        if candidate.to_lowercase() != SECRET_WORD {
            continue;
        }
        let uppercase = window.iter().filter(|c| c.is_uppercase()).count();
        if uppercase >= MIN_UPPERCASE && uppercase < word_len {
            return true;
        }
    }
    false
}

impl ValidationRule for Calisto {
    fn name(&self) -> &'static str {
        "Calisto"
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
        if !checks::contains_digit(pwd) {
            return Err(ValidationError::NoDigit);
        }
        if !contains_secret_word(pwd) {
            return Err(ValidationError::NoSecretWord);
        }
        Ok(())
    }
}
