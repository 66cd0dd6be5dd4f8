pub mod error;
pub mod finding;
pub mod fingerprint;
pub mod policy;
pub mod report;
pub mod request;

pub use error::{ModelError, Result};
pub use finding::{Finding, FindingCategory};
pub use fingerprint::Fingerprint;
pub use policy::PasswordPolicy;
pub use report::{ReportMetadata, ValidationReport};
pub use request::{ValidationKind, ValidationRequest};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_validity_follows_findings() {
        let valid = ValidationReport::valid(ValidationKind::Email, "user@example.com");
        assert!(valid.is_valid());
        assert_eq!(valid.normalized.as_deref(), Some("user@example.com"));

        let invalid = ValidationReport::invalid(
            ValidationKind::Email,
            vec![Finding::FormatInvalid],
        );
        assert!(!invalid.is_valid());
        assert_eq!(invalid.findings.len(), 1);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = ValidationReport::invalid(
            ValidationKind::Password,
            vec![Finding::MissingUppercase, Finding::CommonPassword],
        )
        .with_metadata(ReportMetadata::Password {
            strength: 1,
            length: 8,
        });
        let json = serde_json::to_string(&report).expect("serialize report");
        let round: ValidationReport = serde_json::from_str(&json).expect("deserialize report");
        assert_eq!(round, report);
    }

    #[test]
    fn kind_parses_wire_names() {
        assert_eq!(
            "tax-id-11".parse::<ValidationKind>().unwrap(),
            ValidationKind::TaxId11
        );
        assert_eq!(
            "password".parse::<ValidationKind>().unwrap(),
            ValidationKind::Password
        );
        assert!("calendar".parse::<ValidationKind>().is_err());
    }
}
