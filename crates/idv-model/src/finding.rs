//! Validation finding types.
//!
//! The Finding enum provides type-safe validation failure reporting where
//! each variant carries only its needed data. Engine logic and callers
//! compare tags; human-readable text lives in `message()` and belongs to
//! the presentation layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad grouping of findings, used by presentation layers to organize
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingCategory {
    /// Input length constraints.
    Length,
    /// Structural shape of the input.
    Format,
    /// Check-digit arithmetic.
    Checksum,
    /// Password policy rules.
    Policy,
}

impl FindingCategory {
    pub fn label(&self) -> &'static str {
        match self {
            FindingCategory::Length => "Length",
            FindingCategory::Format => "Format",
            FindingCategory::Checksum => "Checksum",
            FindingCategory::Policy => "Policy",
        }
    }
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validation failure - each variant carries only its needed data.
///
/// Findings are accumulated: a report lists every rule the input broke,
/// not just the first. The one exception is checksum evaluation, which is
/// skipped entirely while any format finding is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Finding {
    // Identifier checks
    /// Digit count differs from the scheme's expected length.
    WrongLength { expected: usize, actual: usize },
    /// Every digit is identical (degenerate identifiers like
    /// `00000000000` pass the checksum arithmetic but are invalid).
    RepeatedSequence,
    /// Computed check digits disagree with the supplied trailing pair.
    CheckDigitMismatch {
        expected: [u8; 2],
        supplied: [u8; 2],
    },

    // Email checks
    /// Input is empty after trimming.
    Empty,
    /// Address exceeds the maximum total length.
    TooLong { length: usize, max: usize },
    /// Local part (before the `@`) exceeds its maximum length.
    LocalPartTooLong { length: usize, max: usize },
    /// Address does not match the structural pattern.
    FormatInvalid,

    // Password policy checks
    PasswordTooShort { length: usize, min: usize },
    PasswordTooLong { length: usize, max: usize },
    MissingUppercase,
    MissingLowercase,
    MissingNumber,
    MissingSymbol,
    /// A character repeats consecutively more than the policy allows.
    RepeatedRun { run: usize, max: usize },
    /// Member of the common-password denylist.
    CommonPassword,
    /// Leading or trailing whitespace.
    SurroundingWhitespace,
}

impl Finding {
    /// Stable kebab-case tag for presentation layers and logs.
    pub fn code(&self) -> &'static str {
        match self {
            Finding::WrongLength { .. } => "wrong-length",
            Finding::RepeatedSequence => "repeated-sequence",
            Finding::CheckDigitMismatch { .. } => "check-digit-mismatch",
            Finding::Empty => "empty",
            Finding::TooLong { .. } => "too-long",
            Finding::LocalPartTooLong { .. } => "local-part-too-long",
            Finding::FormatInvalid => "format-invalid",
            Finding::PasswordTooShort { .. } => "password-too-short",
            Finding::PasswordTooLong { .. } => "password-too-long",
            Finding::MissingUppercase => "missing-uppercase",
            Finding::MissingLowercase => "missing-lowercase",
            Finding::MissingNumber => "missing-number",
            Finding::MissingSymbol => "missing-symbol",
            Finding::RepeatedRun { .. } => "repeated-run",
            Finding::CommonPassword => "common-password",
            Finding::SurroundingWhitespace => "surrounding-whitespace",
        }
    }

    /// Category for this finding type.
    pub fn category(&self) -> FindingCategory {
        match self {
            Finding::WrongLength { .. } => FindingCategory::Length,
            Finding::RepeatedSequence => FindingCategory::Format,
            Finding::CheckDigitMismatch { .. } => FindingCategory::Checksum,
            Finding::Empty => FindingCategory::Length,
            Finding::TooLong { .. } => FindingCategory::Length,
            Finding::LocalPartTooLong { .. } => FindingCategory::Length,
            Finding::FormatInvalid => FindingCategory::Format,
            Finding::PasswordTooShort { .. } => FindingCategory::Policy,
            Finding::PasswordTooLong { .. } => FindingCategory::Policy,
            Finding::MissingUppercase => FindingCategory::Policy,
            Finding::MissingLowercase => FindingCategory::Policy,
            Finding::MissingNumber => FindingCategory::Policy,
            Finding::MissingSymbol => FindingCategory::Policy,
            Finding::RepeatedRun { .. } => FindingCategory::Policy,
            Finding::CommonPassword => FindingCategory::Policy,
            Finding::SurroundingWhitespace => FindingCategory::Policy,
        }
    }

    /// Format message with finding-specific data.
    pub fn message(&self) -> String {
        match self {
            Finding::WrongLength { expected, actual } => {
                format!("identifier has {actual} digits, expected {expected}")
            }
            Finding::RepeatedSequence => {
                "identifier is a single repeated digit".to_string()
            }
            Finding::CheckDigitMismatch { expected, supplied } => {
                format!(
                    "check digits {}{} do not match computed {}{}",
                    supplied[0], supplied[1], expected[0], expected[1]
                )
            }
            Finding::Empty => "address is empty".to_string(),
            Finding::TooLong { length, max } => {
                format!("address is {length} characters, maximum is {max}")
            }
            Finding::LocalPartTooLong { length, max } => {
                format!("local part is {length} characters, maximum is {max}")
            }
            Finding::FormatInvalid => "address is not structurally valid".to_string(),
            Finding::PasswordTooShort { length, min } => {
                format!("password is {length} characters, minimum is {min}")
            }
            Finding::PasswordTooLong { length, max } => {
                format!("password is {length} characters, maximum is {max}")
            }
            Finding::MissingUppercase => "password has no uppercase letter".to_string(),
            Finding::MissingLowercase => "password has no lowercase letter".to_string(),
            Finding::MissingNumber => "password has no digit".to_string(),
            Finding::MissingSymbol => "password has no symbol".to_string(),
            Finding::RepeatedRun { run, max } => {
                format!("password repeats a character {run} times in a row, maximum is {max}")
            }
            Finding::CommonPassword => "password is on the common-password list".to_string(),
            Finding::SurroundingWhitespace => {
                "password has leading or trailing whitespace".to_string()
            }
        }
    }
}
