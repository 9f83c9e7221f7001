//! Style rules evaluated while scanning.
//!
//! [`StyleEvaluator`] dispatches each significant lexeme and each finished
//! line to the checks in [`checks`]; in-source directives are handled by
//! [`suppression`].

pub mod checks;
mod diagnostic;
mod evaluator;
pub mod suppression;

pub use diagnostic::{Diagnostic, ErrorKey};
pub use evaluator::{EndOfLineCheck, FinishedLine, StyleEvaluator};
pub use suppression::{Command, apply_directive};
