//! Policy-driven password evaluation.
//!
//! Every rule appends its own finding, and the heuristic strength score
//! is computed for every input, valid or not, so callers can render a
//! strength meter alongside the violations.

use idv_model::{Finding, PasswordPolicy, ReportMetadata, ValidationKind, ValidationReport};

/// Extremely common passwords, rejected case-insensitively when the
/// policy asks for it. Configuration data: extending the list changes no
/// contract.
const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "password1",
    "123456",
    "1234567",
    "12345678",
    "123456789",
    "1234567890",
    "qwerty",
    "qwertyuiop",
    "abc123",
    "letmein",
    "welcome",
    "monkey",
    "dragon",
    "iloveyou",
    "sunshine",
    "princess",
    "football",
    "admin",
    "master",
    "freedom",
    "whatever",
    "trustno1",
    "superman",
    "shadow",
];

/// Highest strength score the heuristic can award.
pub const MAX_STRENGTH: u8 = 6;

/// Evaluate a password against a policy.
///
/// The report's metadata always carries the strength score and input
/// length, even when findings make it invalid.
pub fn evaluate_password(raw: &str, policy: &PasswordPolicy) -> ValidationReport {
    let length = raw.chars().count();
    let mut findings = Vec::new();

    if length < policy.min_length {
        findings.push(Finding::PasswordTooShort {
            length,
            min: policy.min_length,
        });
    }
    if length > policy.max_length {
        findings.push(Finding::PasswordTooLong {
            length,
            max: policy.max_length,
        });
    }
    if policy.require_upper && !raw.chars().any(char::is_uppercase) {
        findings.push(Finding::MissingUppercase);
    }
    if policy.require_lower && !raw.chars().any(char::is_lowercase) {
        findings.push(Finding::MissingLowercase);
    }
    if policy.require_number && !raw.chars().any(|c| c.is_ascii_digit()) {
        findings.push(Finding::MissingNumber);
    }
    if policy.require_symbol && !raw.chars().any(|c| !c.is_alphanumeric()) {
        findings.push(Finding::MissingSymbol);
    }
    let run = longest_repeat_run(raw);
    if run > policy.max_consecutive_repeats {
        findings.push(Finding::RepeatedRun {
            run,
            max: policy.max_consecutive_repeats,
        });
    }
    if policy.forbid_common_passwords && is_common_password(raw) {
        findings.push(Finding::CommonPassword);
    }
    if raw != raw.trim() {
        findings.push(Finding::SurroundingWhitespace);
    }

    let metadata = ReportMetadata::Password {
        strength: strength_score(raw, length),
        length,
    };
    ValidationReport {
        kind: ValidationKind::Password,
        normalized: None,
        findings,
        metadata,
    }
}

/// Heuristic 0-6 score: +2 for length >= 12, +1 for mixed case, +1 for a
/// digit, +2 for any non-alphanumeric character.
fn strength_score(raw: &str, length: usize) -> u8 {
    let mut score = 0;
    if length >= 12 {
        score += 2;
    }
    let has_upper = raw.chars().any(char::is_uppercase);
    let has_lower = raw.chars().any(char::is_lowercase);
    if has_upper && has_lower {
        score += 1;
    }
    if raw.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if raw.chars().any(|c| !c.is_alphanumeric()) {
        score += 2;
    }
    score
}

fn longest_repeat_run(raw: &str) -> usize {
    let mut longest = 0;
    let mut run = 0;
    let mut previous = None;
    for c in raw.chars() {
        run = if previous == Some(c) { run + 1 } else { 1 };
        previous = Some(c);
        longest = longest.max(run);
    }
    longest
}

fn is_common_password(raw: &str) -> bool {
    COMMON_PASSWORDS
        .iter()
        .any(|common| raw.eq_ignore_ascii_case(common))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluate(raw: &str) -> ValidationReport {
        evaluate_password(raw, &PasswordPolicy::default())
    }

    fn strength_of(report: &ValidationReport) -> u8 {
        match report.metadata {
            ReportMetadata::Password { strength, .. } => strength,
            ReportMetadata::None => panic!("password report without metadata"),
        }
    }

    #[test]
    fn strong_password_passes_with_full_score() {
        let report = evaluate("Str0ng!Pass99");
        assert!(report.is_valid());
        assert_eq!(strength_of(&report), MAX_STRENGTH);
        assert_eq!(
            report.metadata,
            ReportMetadata::Password {
                strength: 6,
                length: 13
            }
        );
    }

    #[test]
    fn lowercase_only_accumulates_every_missing_class() {
        let report = evaluate("abcdefgh");
        assert_eq!(
            report.codes(),
            vec!["missing-uppercase", "missing-number", "missing-symbol"]
        );
        assert_eq!(strength_of(&report), 0);
    }

    #[test]
    fn metadata_is_present_on_invalid_reports() {
        let report = evaluate("abc");
        assert!(!report.is_valid());
        assert_eq!(
            report.metadata,
            ReportMetadata::Password {
                strength: 0,
                length: 3
            }
        );
        assert!(report.normalized.is_none());
    }

    #[test]
    fn triple_repeat_is_a_finding() {
        let report = evaluate("Goood!Pass1");
        assert_eq!(
            report.findings,
            vec![Finding::RepeatedRun { run: 3, max: 2 }]
        );

        // Two in a row stays within the default policy.
        let report = evaluate("Good!Pass12");
        assert!(report.is_valid());
    }

    #[test]
    fn common_passwords_are_rejected_case_insensitively() {
        let report = evaluate("TrustNo1");
        assert!(report.codes().contains(&"common-password"));
    }

    #[test]
    fn surrounding_whitespace_is_a_finding() {
        let report = evaluate(" Str0ng!Pass99 ");
        assert_eq!(report.codes(), vec!["surrounding-whitespace"]);
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let policy = PasswordPolicy {
            min_length: 4,
            max_length: 6,
            require_upper: false,
            require_number: false,
            require_symbol: false,
            ..PasswordPolicy::default()
        };
        assert!(evaluate_password("abcd", &policy).is_valid());
        assert!(evaluate_password("abcdef", &policy).is_valid());
        assert_eq!(
            evaluate_password("abc", &policy).codes(),
            vec!["password-too-short"]
        );
        assert_eq!(
            evaluate_password("abcdefg", &policy).codes(),
            vec!["password-too-long"]
        );
    }

    #[test]
    fn policy_flags_disable_their_checks() {
        let policy = PasswordPolicy {
            require_upper: false,
            require_lower: false,
            require_number: false,
            require_symbol: false,
            forbid_common_passwords: false,
            ..PasswordPolicy::default()
        };
        let report = evaluate_password("password", &policy);
        assert!(report.is_valid());
    }

    #[test]
    fn strength_scores_follow_the_heuristic() {
        // Length only.
        assert_eq!(strength_of(&evaluate("aaaaaaaaaaaa")), 2);
        // Mixed case.
        assert_eq!(strength_of(&evaluate("aB")), 1);
        // Digit.
        assert_eq!(strength_of(&evaluate("a1")), 1);
        // Symbol.
        assert_eq!(strength_of(&evaluate("a!")), 2);
        // Everything at once.
        assert_eq!(strength_of(&evaluate("aB1!aB1!aB1!")), 6);
    }

    #[test]
    fn empty_password_scores_zero() {
        let report = evaluate("");
        assert_eq!(strength_of(&report), 0);
        assert!(report.codes().contains(&"password-too-short"));
    }
}
