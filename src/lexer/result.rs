use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum ScanStatus {
    Success,
    Error,
}

impl ScanStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// Primary payload of a scan: the tokens, or the unmatched-quote errors that
/// make the token stream unreliable.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum ScanOutcome {
    Tokens(Vec<Token>),
    Errors(Vec<String>),
}

/// Terminal value of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub outcome: ScanOutcome,
    /// Rendered style warnings in scan order.
    pub warnings: Vec<String>,
}

impl ScanResult {
    #[must_use]
    pub const fn status(&self) -> ScanStatus {
        match self.outcome {
            ScanOutcome::Tokens(_) => ScanStatus::Success,
            ScanOutcome::Errors(_) => ScanStatus::Error,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, ScanOutcome::Tokens(_))
    }

    /// Tokens of a successful scan; empty on error.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        match &self.outcome {
            ScanOutcome::Tokens(tokens) => tokens,
            ScanOutcome::Errors(_) => &[],
        }
    }

    /// Unmatched-quote errors; empty on success.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        match &self.outcome {
            ScanOutcome::Tokens(_) => &[],
            ScanOutcome::Errors(errors) => errors,
        }
    }

    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.is_success() || !self.warnings.is_empty()
    }
}

impl Serialize for ScanResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ScanResult", 3)?;
        state.serialize_field("Status", &self.status())?;
        state.serialize_field("Tokens", &self.outcome)?;
        state.serialize_field("Warnings", &self.warnings)?;
        state.end()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
