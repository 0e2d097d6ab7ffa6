//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, scores <= 100, addresses parse)
//! - Check the efficiency table is complete and unambiguous
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AdvisorConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use thiserror::Error;

use crate::advisor::tier::ThroughputTier;
use crate::config::schema::AdvisorConfig;

/// Highest score a method may carry for a tier.
pub const MAX_SCORE: u32 = 100;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} '{value}' is not a socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("timeouts.request_secs must be > 0")]
    ZeroTimeout,

    #[error("thresholds.high ({high}) must be greater than thresholds.medium ({medium})")]
    ThresholdOrder { high: i64, medium: i64 },

    #[error("at least one control method is required")]
    NoMethods,

    #[error("methods[{index}] has an empty name")]
    EmptyMethodName { index: usize },

    #[error("control method '{0}' is defined more than once")]
    DuplicateMethod(String),

    #[error("control method '{method}' has no {} score", .tier.as_str())]
    MissingScore { method: String, tier: ThroughputTier },

    #[error("control method '{method}' {} score {score} exceeds {}", .tier.as_str(), MAX_SCORE)]
    ScoreOutOfRange { method: String, tier: ThroughputTier, score: u32 },
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &AdvisorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_address(&mut errors, "listener.bind_address", &config.listener.bind_address);
    if config.observability.metrics_enabled {
        check_address(
            &mut errors,
            "observability.metrics_address",
            &config.observability.metrics_address,
        );
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let thresholds = config.thresholds;
    if thresholds.high <= thresholds.medium {
        errors.push(ValidationError::ThresholdOrder {
            high: thresholds.high,
            medium: thresholds.medium,
        });
    }

    if config.methods.is_empty() {
        errors.push(ValidationError::NoMethods);
    }

    let mut seen = HashSet::new();
    for (index, method) in config.methods.iter().enumerate() {
        if method.name.trim().is_empty() {
            errors.push(ValidationError::EmptyMethodName { index });
        } else if !seen.insert(method.name.as_str()) {
            errors.push(ValidationError::DuplicateMethod(method.name.clone()));
        }

        for tier in ThroughputTier::ALL {
            match method.efficiency.entry(tier) {
                None => errors.push(ValidationError::MissingScore {
                    method: method.name.clone(),
                    tier,
                }),
                Some(score) if score > MAX_SCORE => {
                    errors.push(ValidationError::ScoreOutOfRange {
                        method: method.name.clone(),
                        tier,
                        score,
                    })
                }
                Some(_) => {}
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_address(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}
