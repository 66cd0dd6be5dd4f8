//! Dispatching facade over the validators.

use idv_cache::ResultCache;
use idv_model::{ValidationReport, ValidationRequest};

use crate::checks;

/// Validation facade: computes the request fingerprint, serves repeats
/// from the cache, and dispatches misses to the matching validator.
///
/// The engine owns its cache; construct one per cache lifecycle and share
/// it by reference (it is `Send + Sync`, validators are pure and the
/// cache locks internally).
pub struct Engine {
    cache: ResultCache,
}

impl Engine {
    pub fn new(cache: ResultCache) -> Self {
        Self { cache }
    }

    /// Validate a request, memoizing the result.
    ///
    /// The fingerprint covers `(kind, raw value)` only. Password policies
    /// are not part of the key; a caller evaluating one password under
    /// several policies should call
    /// [`evaluate_password`](crate::evaluate_password) directly instead
    /// of going through the cache.
    pub fn validate(&self, request: &ValidationRequest) -> ValidationReport {
        let fingerprint = request.fingerprint();
        if let Some(report) = self.cache.get(&fingerprint) {
            tracing::debug!(kind = %request.kind, %fingerprint, "validation cache hit");
            return report;
        }
        tracing::debug!(kind = %request.kind, %fingerprint, "validation cache miss");
        let report = checks::dispatch(request);
        self.cache.put(fingerprint, report.clone());
        report
    }

    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }
}
