use serde::{Deserialize, Serialize};

use crate::finding::Finding;
use crate::request::ValidationKind;

/// Kind-specific result metadata.
///
/// Password evaluations always carry their strength score and input
/// length, valid or not; the other kinds put their canonical form in
/// `ValidationReport::normalized` and need nothing further.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportMetadata {
    #[default]
    None,
    Password {
        /// Heuristic strength score, 0-6.
        strength: u8,
        /// Character count of the evaluated input.
        length: usize,
    },
}

/// The outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub kind: ValidationKind,
    /// Canonical rendering of the input when it validated: punctuated
    /// identifier, or trimmed/lowercased address. Absent for passwords
    /// and for invalid input.
    pub normalized: Option<String>,
    /// Every rule the input broke; empty means valid.
    pub findings: Vec<Finding>,
    #[serde(default)]
    pub metadata: ReportMetadata,
}

impl ValidationReport {
    pub fn valid(kind: ValidationKind, normalized: impl Into<String>) -> Self {
        Self {
            kind,
            normalized: Some(normalized.into()),
            findings: Vec::new(),
            metadata: ReportMetadata::None,
        }
    }

    pub fn invalid(kind: ValidationKind, findings: Vec<Finding>) -> Self {
        Self {
            kind,
            normalized: None,
            findings,
            metadata: ReportMetadata::None,
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: ReportMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.findings.is_empty()
    }

    /// Stable tags of the accumulated findings, in report order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.findings.iter().map(Finding::code).collect()
    }
}
