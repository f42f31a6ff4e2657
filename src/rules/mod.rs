//! Concrete password policies
//!
//! Each policy composes the shared checks with its own conditions.

mod calisto;
mod ganimedes;

pub use calisto::Calisto;
pub use ganimedes::Ganimedes;
