use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Settings for the in-place (compound assignment) operators.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ArithConfig {
    pub on_mismatch: MismatchAction,
}

/// What a compound assignment does when its operands are not conformant.
///
/// The target is never modified on a mismatch; the variants only differ in
/// how loudly that is reported.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MismatchAction {
    /// Leave the target unchanged without any report.
    Ignore,
    /// Leave the target unchanged and emit a `log::warn!`.
    #[default]
    Warn,
    /// Panic with the conformance error.
    Panic,
}

impl FromStr for MismatchAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(MismatchAction::Ignore),
            "warn" => Ok(MismatchAction::Warn),
            "panic" => Ok(MismatchAction::Panic),
            _ => Err(format!(
                "Unknown mismatch action: {}. Expected one of ignore, warn, panic",
                s
            )),
        }
    }
}

impl ArithConfig {
    pub fn new(on_mismatch: MismatchAction) -> Self {
        Self { on_mismatch }
    }
}
