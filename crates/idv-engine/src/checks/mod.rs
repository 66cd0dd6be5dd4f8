//! Validation check modules.
//!
//! Each module validates one identifier family and returns a complete
//! report; the dispatcher routes a typed request to the matching module.

mod email;
mod password;
mod tax_id;

pub use email::validate_email;
pub use password::{MAX_STRENGTH, evaluate_password};
pub use tax_id::{validate_tax_id11, validate_tax_id14};

use idv_model::{ValidationKind, ValidationReport, ValidationRequest};

/// Run the validator matching the request's kind.
pub(crate) fn dispatch(request: &ValidationRequest) -> ValidationReport {
    match request.kind {
        ValidationKind::TaxId11 => tax_id::validate_tax_id11(&request.raw_value),
        ValidationKind::TaxId14 => tax_id::validate_tax_id14(&request.raw_value),
        ValidationKind::Email => email::validate_email(&request.raw_value),
        ValidationKind::Password => {
            let policy = request.policy.clone().unwrap_or_default();
            password::evaluate_password(&request.raw_value, &policy)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idv_model::PasswordPolicy;

    #[test]
    fn dispatch_routes_by_kind() {
        let report = dispatch(&ValidationRequest::new(
            ValidationKind::Email,
            "USER@example.com",
        ));
        assert_eq!(report.kind, ValidationKind::Email);
        assert_eq!(report.normalized.as_deref(), Some("user@example.com"));

        let report = dispatch(&ValidationRequest::new(
            ValidationKind::TaxId11,
            "529.982.247-25",
        ));
        assert_eq!(report.kind, ValidationKind::TaxId11);
        assert!(report.is_valid());
    }

    #[test]
    fn password_dispatch_defaults_the_policy() {
        let report = dispatch(&ValidationRequest::new(ValidationKind::Password, "abcdefgh"));
        assert!(!report.is_valid());

        let relaxed = PasswordPolicy {
            require_upper: false,
            require_number: false,
            require_symbol: false,
            ..PasswordPolicy::default()
        };
        let report = dispatch(
            &ValidationRequest::new(ValidationKind::Password, "abcdefgh").with_policy(relaxed),
        );
        assert!(report.is_valid());
    }
}
