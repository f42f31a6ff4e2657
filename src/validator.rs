//! Password validation - wrapper and rule orchestration.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::ValidationError;
use crate::rule::ValidationRule;
use crate::rules::{Calisto, Ganimedes};

/// Thin wrapper holding one rule and delegating evaluation to it.
///
/// Gives callers a uniform call surface over heterogeneous rules; through
/// the blanket impls it holds owned, borrowed or boxed rules alike.
#[derive(Debug, Clone, Copy)]
pub struct Validator<R: ValidationRule> {
    rule: R,
}

impl<R: ValidationRule> Validator<R> {
    pub fn new(rule: R) -> Self {
        Self { rule }
    }

    /// The held rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Delegates to the held rule; same return/error contract.
    pub fn is_valid(&self, password: &SecretString) -> Result<(), ValidationError> {
        self.rule.is_valid(password)
    }
}

/// Outcome of evaluating one rule against a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    /// Name of the rule that produced this outcome.
    pub rule: &'static str,
    /// `Ok(())` or the first violated condition.
    pub outcome: Result<(), ValidationError>,
}

impl RuleOutcome {
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Per-rule outcomes of validating one password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordReport {
    /// One entry per evaluated rule, in input order.
    pub outcomes: Vec<RuleOutcome>,
    /// True if validation was cancelled before every rule ran.
    pub cancelled: bool,
}

impl PasswordReport {
    /// True if every rule ran and accepted the password.
    pub fn all_valid(&self) -> bool {
        !self.cancelled && !self.outcomes.is_empty() && self.outcomes.iter().all(RuleOutcome::is_valid)
    }
}

/// The stock rule set: Ganimedes and Calisto.
pub fn default_rules() -> Vec<Box<dyn ValidationRule + Send + Sync>> {
    vec![Box::new(Ganimedes), Box::new(Calisto)]
}

/// Validates a password against every supplied rule and returns a detailed
/// report.
///
/// # Arguments
/// * `password` - The password to validate
/// * `rules` - Rules to evaluate, in order
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordReport` with one `RuleOutcome` per rule.
pub fn validate_password(
    password: &SecretString,
    rules: &[Box<dyn ValidationRule + Send + Sync>],
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordReport {
    let mut outcomes = Vec::with_capacity(rules.len());
    let mut cancelled = false;

    for rule in rules {
        // Check cancellation before each rule (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    cancelled = true;
                    break;
                }
            }
        }

        let validator = Validator::new(rule);
        let outcome = validator.is_valid(password);

        #[cfg(feature = "tracing")]
        match &outcome {
            Ok(()) => tracing::debug!("password is valid for rule {}", validator.rule().name()),
            Err(e) => tracing::debug!("rule {} rejected password: {}", validator.rule().name(), e),
        }

        outcomes.push(RuleOutcome {
            rule: validator.rule().name(),
            outcome,
        });
    }

    PasswordReport { outcomes, cancelled }
}

/// Async version that sends the report via channel.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    rules: &[Box<dyn ValidationRule + Send + Sync>],
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    let report = validate_password(password, rules, Some(token));

    if let Err(e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation report: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn validate(password: &str) -> PasswordReport {
        let rules = default_rules();
        let pwd = secret(password);

        #[cfg(feature = "async")]
        let report = validate_password(&pwd, &rules, None);

        #[cfg(not(feature = "async"))]
        let report = validate_password(&pwd, &rules);

        report
    }

    #[test]
    fn test_validator_delegates_to_held_rule() {
        let pwd = secret("CaLisTo95");
        let validator = Validator::new(Calisto);
        assert_eq!(validator.is_valid(&pwd), Calisto.is_valid(&pwd));
        assert_eq!(validator.rule().name(), "Calisto");
    }

    #[test]
    fn test_validator_holds_boxed_rule() {
        let rule: Box<dyn ValidationRule + Send + Sync> = Box::new(Ganimedes);
        let validator = Validator::new(rule);
        assert_eq!(validator.is_valid(&secret("ASdDS234_-@")), Ok(()));
    }

    #[test]
    fn test_too_short_for_both_rules() {
        let report = validate("abc123");

        assert_eq!(report.outcomes.len(), 2);
        assert_eq!(report.outcomes[0].rule, "Ganimedes");
        assert_eq!(
            report.outcomes[0].outcome,
            Err(ValidationError::MinimumLength { expected: 8 })
        );
        assert_eq!(report.outcomes[1].rule, "Calisto");
        assert_eq!(
            report.outcomes[1].outcome,
            Err(ValidationError::MinimumLength { expected: 6 })
        );
        assert!(!report.all_valid());
    }

    #[test]
    fn test_valid_for_ganimedes_only() {
        let report = validate("ASdDS234_-@");

        assert!(report.outcomes[0].is_valid());
        assert_eq!(report.outcomes[1].outcome, Err(ValidationError::NoSecretWord));
        assert!(!report.all_valid());
    }

    #[test]
    fn test_valid_for_calisto_only() {
        let report = validate("CaLisTo95");

        assert_eq!(report.outcomes[0].outcome, Err(ValidationError::NoDigit));
        assert!(report.outcomes[1].is_valid());
    }

    #[test]
    fn test_empty_rule_list_is_not_all_valid() {
        let pwd = secret("whatever1");
        let rules: Vec<Box<dyn ValidationRule + Send + Sync>> = Vec::new();

        #[cfg(feature = "async")]
        let report = validate_password(&pwd, &rules, None);

        #[cfg(not(feature = "async"))]
        let report = validate_password(&pwd, &rules);

        assert!(report.outcomes.is_empty());
        assert!(!report.all_valid());
    }

    #[test]
    fn test_all_valid_when_every_rule_accepts() {
        let rules: Vec<Box<dyn ValidationRule + Send + Sync>> = vec![Box::new(Calisto)];
        let pwd = secret("CaLisTo95");

        #[cfg(feature = "async")]
        let report = validate_password(&pwd, &rules, None);

        #[cfg(not(feature = "async"))]
        let report = validate_password(&pwd, &rules);

        assert!(report.all_valid());
    }
}
