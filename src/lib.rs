//! Password rule validation library
//!
//! This library validates candidate passwords against named policy rules
//! and reports, per rule, either success or the first violated condition.
//!
//! # Features
//!
//! - `async` (default): Enables async validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{default_rules, validate_password};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("CaLisTo95".to_string().into());
//! let rules = default_rules();
//!
//! #[cfg(feature = "async")]
//! let report = validate_password(&password, &rules, None);
//!
//! #[cfg(not(feature = "async"))]
//! let report = validate_password(&password, &rules);
//!
//! for entry in &report.outcomes {
//!     match &entry.outcome {
//!         Ok(()) => println!("password is valid for {}", entry.rule),
//!         Err(e) => println!("Error: {}: {}", entry.rule, e),
//!     }
//! }
//! ```

// Internal modules
mod error;
mod rule;
mod rules;
mod validator;

// Character-class primitives, public so downstream rules can compose them
pub mod checks;

// Public API
pub use error::ValidationError;
pub use rule::ValidationRule;
pub use rules::{Calisto, Ganimedes};
pub use validator::{PasswordReport, RuleOutcome, Validator, default_rules, validate_password};

#[cfg(feature = "async")]
pub use validator::validate_password_tx;
