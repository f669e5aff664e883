//! Error types for the tickmatch matching core.
//!
//! All errors use the `TM_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order errors
//! - 5xx: Matching / engine integrity errors
//! - 9xx: General errors

use thiserror::Error;

use crate::OrderId;

/// Central error enum for all tickmatch operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickmatchError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// Price or size is not a positive integer. Nothing was registered.
    #[error("TM_ERR_100: Invalid order: {reason}")]
    InvalidOrder { reason: String },

    /// The requested order was never submitted to this engine.
    #[error("TM_ERR_101: Order not found: {0}")]
    OrderNotFound(OrderId),

    /// The text could not be parsed as an order id.
    #[error("TM_ERR_102: Invalid order id: {0}")]
    InvalidOrderId(String),

    // =================================================================
    // Matching / Engine Errors (5xx)
    // =================================================================
    /// Book or order bookkeeping is inconsistent. Not recoverable.
    #[error("TM_ERR_500: Invariant violation: {reason}")]
    InvariantViolation { reason: String },

    /// The engine hit an invariant violation earlier and refuses further work.
    #[error("TM_ERR_501: Engine halted after fatal fault: {reason}")]
    EngineHalted { reason: String },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Configuration error (unparseable environment value, etc.).
    #[error("TM_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

impl TickmatchError {
    pub(crate) fn invalid_order(reason: impl Into<String>) -> Self {
        Self::InvalidOrder {
            reason: reason.into(),
        }
    }

    /// Build an [`InvariantViolation`](Self::InvariantViolation).
    pub fn invariant(reason: impl Into<String>) -> Self {
        Self::InvariantViolation {
            reason: reason.into(),
        }
    }

    /// `true` for errors that mean the engine state can no longer be trusted.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvariantViolation { .. } | Self::EngineHalted { .. }
        )
    }
}

impl From<::config::ConfigError> for TickmatchError {
    fn from(err: ::config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, TickmatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = TickmatchError::OrderNotFound(OrderId::new());
        let msg = format!("{err}");
        assert!(msg.starts_with("TM_ERR_101"), "Got: {msg}");
    }

    #[test]
    fn invalid_order_display() {
        let err = TickmatchError::invalid_order("price 0 must be greater than 0");
        let msg = format!("{err}");
        assert!(msg.contains("TM_ERR_100"));
        assert!(msg.contains("price 0"));
    }

    #[test]
    fn fatal_classification() {
        assert!(TickmatchError::invariant("crossed book").is_fatal());
        assert!(
            TickmatchError::EngineHalted {
                reason: "x".into()
            }
            .is_fatal()
        );
        assert!(!TickmatchError::OrderNotFound(OrderId::new()).is_fatal());
        assert!(!TickmatchError::invalid_order("size").is_fatal());
    }

    #[test]
    fn all_errors_have_tm_err_prefix() {
        let errors = vec![
            TickmatchError::invalid_order("x"),
            TickmatchError::OrderNotFound(OrderId::new()),
            TickmatchError::InvalidOrderId("x".into()),
            TickmatchError::invariant("x"),
            TickmatchError::EngineHalted { reason: "x".into() },
            TickmatchError::Configuration("x".into()),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("TM_ERR_"),
                "Error missing TM_ERR_ prefix: {msg}"
            );
        }
    }
}
