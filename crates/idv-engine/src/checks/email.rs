//! Structural email validation.

use std::sync::LazyLock;

use regex::Regex;

use idv_model::{Finding, ValidationKind, ValidationReport};

/// RFC 5321 limit on the full address.
const MAX_ADDRESS_LEN: usize = 254;
/// RFC 5321 limit on the part before the `@`.
const MAX_LOCAL_PART_LEN: usize = 64;

/// Structural pattern over the trimmed, lowercased input: exactly one `@`,
/// a non-empty local part from a restricted character class, and a domain
/// of dot-separated labels of 1-63 characters each starting and ending
/// alphanumeric.
static ADDRESS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-z0-9.!#$%&'*+/=?^_~-]+@[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

/// Validate an email address. Valid addresses normalize to their trimmed,
/// lowercased form.
///
/// An empty input reports only `Empty`; everything else accumulates all
/// applicable findings. The local-part length check needs a well-defined
/// local part and so only runs when the input has exactly one `@`.
pub fn validate_email(raw: &str) -> ValidationReport {
    let normalized = raw.trim().to_lowercase();
    if normalized.is_empty() {
        return ValidationReport::invalid(ValidationKind::Email, vec![Finding::Empty]);
    }

    let mut findings = Vec::new();
    let length = normalized.chars().count();
    if length > MAX_ADDRESS_LEN {
        findings.push(Finding::TooLong {
            length,
            max: MAX_ADDRESS_LEN,
        });
    }
    if normalized.matches('@').count() == 1
        && let Some((local, _domain)) = normalized.split_once('@')
    {
        let local_length = local.chars().count();
        if local_length > MAX_LOCAL_PART_LEN {
            findings.push(Finding::LocalPartTooLong {
                length: local_length,
                max: MAX_LOCAL_PART_LEN,
            });
        }
    }
    if !ADDRESS_REGEX.is_match(&normalized) {
        findings.push(Finding::FormatInvalid);
    }

    if findings.is_empty() {
        ValidationReport::valid(ValidationKind::Email, normalized)
    } else {
        ValidationReport::invalid(ValidationKind::Email, findings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        for address in [
            "user@example.com",
            "user.name@example.com",
            "user+tag@example.co.uk",
            "u@d",
            "first_last@sub.domain.example",
        ] {
            let report = validate_email(address);
            assert!(report.is_valid(), "rejected {address}: {:?}", report.codes());
        }
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        let report = validate_email("  USER@Example.COM  ");
        assert!(report.is_valid());
        assert_eq!(report.normalized.as_deref(), Some("user@example.com"));
    }

    #[test]
    fn rejects_structural_failures() {
        for address in [
            "not-an-email",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@.com",
            "user@example..com",
            "user@-example.com",
            "user@example-.com",
            "user name@example.com",
        ] {
            let report = validate_email(address);
            assert_eq!(report.codes(), vec!["format-invalid"], "address {address}");
        }
    }

    #[test]
    fn empty_input_reports_only_empty() {
        assert_eq!(validate_email("").codes(), vec!["empty"]);
        assert_eq!(validate_email("   ").codes(), vec!["empty"]);
    }

    #[test]
    fn overlong_address_accumulates_with_format() {
        // 250 character local part: too long overall, local part too
        // long, and still structurally matched, so exactly two findings.
        let address = format!("{}@example.com", "a".repeat(250));
        let report = validate_email(&address);
        assert_eq!(
            report.codes(),
            vec!["too-long", "local-part-too-long"]
        );
    }

    #[test]
    fn long_domain_label_is_a_format_failure() {
        let address = format!("user@{}.com", "a".repeat(64));
        let report = validate_email(&address);
        assert_eq!(report.codes(), vec!["format-invalid"]);
    }

    #[test]
    fn local_part_boundary_is_inclusive() {
        let report = validate_email(&format!("{}@example.com", "a".repeat(64)));
        assert!(report.is_valid());

        let report = validate_email(&format!("{}@example.com", "a".repeat(65)));
        assert_eq!(report.codes(), vec!["local-part-too-long"]);
    }
}
