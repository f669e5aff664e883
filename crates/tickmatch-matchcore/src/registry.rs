//! Permanent store of every order the engine has accepted.
//!
//! Append-only: orders are never removed, so fully filled orders stay
//! queryable for the lifetime of the engine.

use std::collections::HashMap;

use tickmatch_types::{Order, OrderId, Result, TickmatchError};

use crate::OrderLookup;

#[derive(Debug, Default)]
pub struct OrderRegistry {
    orders: HashMap<OrderId, Order>,
}

impl OrderRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a newly created order.
    ///
    /// # Errors
    /// `InvariantViolation` if the id is already taken. With random v4 ids
    /// this means the id source is broken, not that the caller erred.
    pub fn insert(&mut self, order: Order) -> Result<()> {
        let id = order.id;
        if self.contains(&id) {
            return Err(TickmatchError::invariant(format!(
                "order id {id} registered twice"
            )));
        }
        self.orders.insert(id, order);
        Ok(())
    }

    #[must_use]
    pub fn find(&self, id: &OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    pub fn get(&self, id: &OrderId) -> Result<&Order> {
        self.orders
            .get(id)
            .ok_or(TickmatchError::OrderNotFound(*id))
    }

    pub fn get_mut(&mut self, id: &OrderId) -> Result<&mut Order> {
        self.orders
            .get_mut(id)
            .ok_or(TickmatchError::OrderNotFound(*id))
    }

    #[must_use]
    pub fn contains(&self, id: &OrderId) -> bool {
        self.orders.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// All registered orders, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }
}

impl OrderLookup for OrderRegistry {
    fn lookup(&self, id: &OrderId) -> Option<&Order> {
        self.find(id)
    }
}
