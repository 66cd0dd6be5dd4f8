use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::fingerprint::Fingerprint;
use crate::policy::PasswordPolicy;

/// The identifier families the engine knows how to validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ValidationKind {
    /// 11-digit national tax ID for individuals (`XXX.XXX.XXX-YY`).
    #[serde(rename = "tax-id-11")]
    TaxId11,
    /// 14-digit national tax ID for companies (`XX.XXX.XXX/XXXX-YY`).
    #[serde(rename = "tax-id-14")]
    TaxId14,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "password")]
    Password,
}

impl ValidationKind {
    /// Wire name as accepted by callers and used in cache fingerprints.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::TaxId11 => "tax-id-11",
            ValidationKind::TaxId14 => "tax-id-14",
            ValidationKind::Email => "email",
            ValidationKind::Password => "password",
        }
    }

    /// All supported kinds, in wire-name order.
    pub fn all() -> &'static [ValidationKind] {
        &[
            ValidationKind::Email,
            ValidationKind::Password,
            ValidationKind::TaxId11,
            ValidationKind::TaxId14,
        ]
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationKind {
    type Err = ModelError;

    /// Parse a wire name. An unrecognized name is the caller's
    /// `UnsupportedKind` condition; it never enters the engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tax-id-11" => Ok(ValidationKind::TaxId11),
            "tax-id-14" => Ok(ValidationKind::TaxId14),
            "email" => Ok(ValidationKind::Email),
            "password" => Ok(ValidationKind::Password),
            _ => Err(ModelError::UnsupportedKind(s.to_string())),
        }
    }
}

/// A single validation call, constructed per incoming request and
/// discarded after use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub kind: ValidationKind,
    pub raw_value: String,
    /// Password evaluations only; other kinds ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PasswordPolicy>,
}

impl ValidationRequest {
    pub fn new(kind: ValidationKind, raw_value: impl Into<String>) -> Self {
        Self {
            kind,
            raw_value: raw_value.into(),
            policy: None,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: PasswordPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Cache key for this request, derived from `(kind, raw_value)`.
    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::compute(self.kind, &self.raw_value)
    }
}
