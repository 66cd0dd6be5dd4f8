//! Identifier validation engine.
//!
//! This crate provides the validators behind the identifier-validation
//! service:
//!
//! - **National tax IDs**: 11-digit and 14-digit formats, each with two
//!   check digits computed by a shared weighted-sum-mod-11 primitive
//! - **Email addresses**: structural pattern plus length constraints
//! - **Passwords**: policy-configurable rule checks plus a heuristic
//!   strength score
//!
//! Validators accumulate every rule an input broke; results are data
//! ([`idv_model::ValidationReport`]), never errors. The [`Engine`] facade
//! dispatches typed requests and memoizes results in a TTL-bounded cache.
//!
//! # Example
//!
//! ```ignore
//! use idv_cache::{CacheConfig, ResultCache};
//! use idv_engine::Engine;
//! use idv_model::{ValidationKind, ValidationRequest};
//!
//! let engine = Engine::new(ResultCache::new(CacheConfig::default()));
//! let report = engine.validate(&ValidationRequest::new(
//!     ValidationKind::TaxId11,
//!     "529.982.247-25",
//! ));
//! assert!(report.is_valid());
//! ```

mod checks;
mod engine;
pub mod normalize;

pub use checks::{
    MAX_STRENGTH, evaluate_password, validate_email, validate_tax_id11, validate_tax_id14,
};
pub use engine::Engine;
