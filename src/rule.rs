//! Rule contract shared by every password policy.

use secrecy::SecretString;

use crate::error::ValidationError;

/// A named password policy.
///
/// A rule evaluates its ordered conditions against a candidate password and
/// stops at the first violated one. Rules are immutable after construction
/// and safe to reuse across evaluations.
pub trait ValidationRule {
    /// Short name identifying the rule in reports.
    fn name(&self) -> &'static str;

    /// Character count the password must strictly exceed.
    fn expected_length(&self) -> usize;

    /// Evaluates the rule against `password`.
    ///
    /// # Returns
    /// - `Ok(())` if every condition of the rule holds
    /// - `Err(...)` carrying the first violated condition
    fn is_valid(&self, password: &SecretString) -> Result<(), ValidationError>;
}

impl<R: ValidationRule + ?Sized> ValidationRule for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn expected_length(&self) -> usize {
        (**self).expected_length()
    }

    fn is_valid(&self, password: &SecretString) -> Result<(), ValidationError> {
        (**self).is_valid(password)
    }
}

impl<R: ValidationRule + ?Sized> ValidationRule for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn expected_length(&self) -> usize {
        (**self).expected_length()
    }

    fn is_valid(&self, password: &SecretString) -> Result<(), ValidationError> {
        (**self).is_valid(password)
    }
}
