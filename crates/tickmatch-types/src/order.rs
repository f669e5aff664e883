//! Order types for the tickmatch matching core.
//!
//! An [`Order`] owns its own fill history. Its unmatched size is never
//! stored: it is recomputed from the recorded [`Match`]es on every read.

use serde::{Deserialize, Serialize};

use crate::{Match, MatchSummary, OrderId, OrderSummary, Result, TickmatchError};

/// Which side of the book this order is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    /// The side an incoming order on `self` matches against.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Whether an incoming order on this side at `incoming_price` may trade
    /// with a resting order at `resting_price`.
    #[must_use]
    pub fn crosses(self, incoming_price: u64, resting_price: u64) -> bool {
        match self {
            Self::Buy => resting_price <= incoming_price,
            Self::Sell => resting_price >= incoming_price,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl std::str::FromStr for OrderSide {
    type Err = TickmatchError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            other => Err(TickmatchError::invalid_order(format!(
                "order_type {other:?} must be BUY or SELL"
            ))),
        }
    }
}

/// Fill state derived from an order's matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// No fills yet.
    Open,
    /// Some but not all of the size has been matched. May still rest.
    PartiallyFilled,
    /// Fully matched. Terminal; the order never rests again.
    Filled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::PartiallyFilled => write!(f, "PARTIALLY_FILLED"),
            Self::Filled => write!(f, "FILLED"),
        }
    }
}

/// A single limit order and its append-only fill history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub side: OrderSide,
    /// Limit price in the smallest currency unit.
    pub price: u64,
    /// Original size. Never changes after construction.
    pub size: u64,
    matches: Vec<Match>,
}

impl Order {
    /// Create a validated order with a fresh random id and no fills.
    ///
    /// # Errors
    /// `InvalidOrder` if `price` or `size` is zero.
    pub fn new(price: u64, size: u64, side: OrderSide) -> Result<Self> {
        if price == 0 {
            return Err(TickmatchError::invalid_order(format!(
                "price {price} must be greater than 0"
            )));
        }
        if size == 0 {
            return Err(TickmatchError::invalid_order(format!(
                "size {size} must be greater than 0"
            )));
        }
        Ok(Self {
            id: OrderId::new(),
            side,
            price,
            size,
            matches: Vec::new(),
        })
    }

    /// Sum of all matched sizes.
    #[must_use]
    pub fn filled_size(&self) -> u64 {
        self.matches.iter().map(|m| m.size).sum()
    }

    /// `size - filled_size()`.
    ///
    /// The engine never records more than the unmatched size, so this
    /// cannot underflow unless the matching loop is broken. In that case the
    /// result saturates at zero and the engine's invariant check catches it.
    #[must_use]
    pub fn unmatched_size(&self) -> u64 {
        let filled = self.filled_size();
        debug_assert!(filled <= self.size, "order {} overfilled", self.id);
        self.size.saturating_sub(filled)
    }

    /// Append a fill. Does not validate; see [`Order::unmatched_size`].
    pub fn add_match(&mut self, m: Match) {
        self.matches.push(m);
    }

    /// Fills in the order they happened.
    #[must_use]
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    #[must_use]
    pub fn status(&self) -> OrderStatus {
        if self.matches.is_empty() {
            OrderStatus::Open
        } else if self.unmatched_size() == 0 {
            OrderStatus::Filled
        } else {
            OrderStatus::PartiallyFilled
        }
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.unmatched_size() == 0
    }

    /// Point-in-time snapshot for callers outside the engine.
    #[must_use]
    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            size: self.size,
            price: self.price,
            side: self.side,
            unmatched_size: self.unmatched_size(),
            matches: self.matches.iter().map(Match::summary).collect::<Vec<MatchSummary>>(),
        }
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Order {
    pub fn dummy(side: OrderSide, price: u64, size: u64) -> Self {
        Self::new(price, size, side).expect("dummy orders use positive price and size")
    }
}
