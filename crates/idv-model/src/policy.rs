use serde::{Deserialize, Serialize};

/// Password evaluation rules.
///
/// Every field has a documented default; deserialization fills omitted
/// fields from those defaults, so a policy file only needs to name the
/// rules it changes. A policy is immutable for the duration of one
/// evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordPolicy {
    /// Minimum length, inclusive. Default 8.
    pub min_length: usize,
    /// Maximum length, inclusive. Default 128.
    pub max_length: usize,
    /// Require at least one uppercase letter. Default true.
    pub require_upper: bool,
    /// Require at least one lowercase letter. Default true.
    pub require_lower: bool,
    /// Require at least one decimal digit. Default true.
    pub require_number: bool,
    /// Require at least one non-alphanumeric character. Default true.
    pub require_symbol: bool,
    /// Reject members of the common-password denylist. Default true.
    pub forbid_common_passwords: bool,
    /// Longest allowed run of one repeated character. Default 2
    /// (three in a row is a violation).
    pub max_consecutive_repeats: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 128,
            require_upper: true,
            require_lower: true,
            require_number: true,
            require_symbol: true,
            forbid_common_passwords: true,
            max_consecutive_repeats: 2,
        }
    }
}
