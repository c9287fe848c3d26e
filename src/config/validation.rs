//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, chain ID non-zero)
//! - Keep fee settings representable in wei (finite, non-negative tip)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BuilderConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use crate::config::schema::BuilderConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Dotted path of the offending field (e.g., "network.chain_id").
    pub field: String,

    /// What is wrong with the value.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every semantic error.
pub fn validate_config(config: &BuilderConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.network.rpc_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError {
            field: "network.rpc_url".to_string(),
            message: format!("'{}' is not a valid URL", config.network.rpc_url),
        });
    }

    if config.network.chain_id == 0 {
        errors.push(ValidationError {
            field: "network.chain_id".to_string(),
            message: "must be non-zero".to_string(),
        });
    }

    if config.network.rpc_timeout_secs == 0 {
        errors.push(ValidationError {
            field: "network.rpc_timeout_secs".to_string(),
            message: "must be greater than zero".to_string(),
        });
    }

    if !config.fees.tip_gwei.is_finite() || config.fees.tip_gwei < 0.0 {
        errors.push(ValidationError {
            field: "fees.tip_gwei".to_string(),
            message: format!("'{}' is not a finite, non-negative gwei amount", config.fees.tip_gwei),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
