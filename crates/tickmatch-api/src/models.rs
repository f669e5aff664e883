//! Request and response bodies.
//!
//! `price` and `size` are accepted as JSON integers or as integer strings.
//! Anything else (floats, negatives, zero, other JSON types) is rejected
//! with the core's `InvalidOrder` error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tickmatch_types::{OrderId, OrderSide, Result, TickmatchError};

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitOrderRequest {
    pub price: Option<Value>,
    pub size: Option<Value>,
    pub order_type: Option<String>,
}

/// A request that passed field validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidOrder {
    pub side: OrderSide,
    pub size: u64,
    pub price: u64,
}

impl SubmitOrderRequest {
    pub fn validate(&self) -> Result<ValidOrder> {
        let price = positive_integer("price", self.price.as_ref())?;
        let size = positive_integer("size", self.size.as_ref())?;
        let side = self
            .order_type
            .as_deref()
            .ok_or_else(|| missing("order_type"))?
            .parse::<OrderSide>()?;
        Ok(ValidOrder { side, size, price })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitOrderResponse {
    pub order_id: OrderId,
}

fn missing(field: &str) -> TickmatchError {
    TickmatchError::InvalidOrder {
        reason: format!("missing field {field}"),
    }
}

fn positive_integer(field: &str, value: Option<&Value>) -> Result<u64> {
    let value = value.ok_or_else(|| missing(field))?;
    let parsed = match value {
        Value::Number(n) => n
            .as_u64()
            .map(i128::from)
            .or_else(|| n.as_i64().map(i128::from)),
        Value::String(s) => s.trim().parse::<i128>().ok(),
        _ => None,
    };
    let Some(parsed) = parsed else {
        return Err(TickmatchError::InvalidOrder {
            reason: format!("{field} must be an integer, got {value}"),
        });
    };
    if parsed <= 0 {
        return Err(TickmatchError::InvalidOrder {
            reason: format!("{field} {parsed} must be greater than 0"),
        });
    }
    u64::try_from(parsed).map_err(|_| TickmatchError::InvalidOrder {
        reason: format!("{field} {parsed} is too large"),
    })
}
