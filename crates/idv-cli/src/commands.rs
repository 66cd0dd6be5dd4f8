//! Command implementations.

use std::fs;

use anyhow::{Context, Result};

use idv_cache::{CacheConfig, ResultCache};
use idv_engine::Engine;
use idv_model::{PasswordPolicy, ValidationKind, ValidationRequest};

use crate::cli::CheckArgs;
use crate::output::{print_report, print_report_json};

/// Run `idv check`. Returns whether the value validated.
pub fn run_check(args: &CheckArgs) -> Result<bool> {
    let kind: ValidationKind = args.kind.parse().with_context(|| {
        format!(
            "supported kinds: {}",
            ValidationKind::all()
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    let mut request = ValidationRequest::new(kind, args.value.clone());
    if let Some(path) = &args.policy_file {
        if kind != ValidationKind::Password {
            tracing::warn!(kind = %kind, "policy file is only used for password checks");
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read policy file {}", path.display()))?;
        let policy: PasswordPolicy = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse policy file {}", path.display()))?;
        request = request.with_policy(policy);
    }

    let engine = Engine::new(ResultCache::new(CacheConfig::default()));
    let report = engine.validate(&request);
    tracing::info!(kind = %report.kind, valid = report.is_valid(), "validation complete");

    if args.json {
        print_report_json(&report)?;
    } else {
        print_report(&report);
    }
    Ok(report.is_valid())
}

/// Run `idv kinds`.
pub fn run_kinds() {
    for kind in ValidationKind::all() {
        println!("{kind}");
    }
}
