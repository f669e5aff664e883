//! Integrity checks over orders and the book.
//!
//! A failure here means the matching loop or book bookkeeping is broken.
//! The engine treats any failure as fatal and halts.

use tickmatch_types::{Order, OrderSide, Result, TickmatchError};

use crate::{OrderLookup, UnmatchedOrderBook};

/// Fill history of one order is self-consistent.
///
/// - every match has a positive size
/// - every match names this order on the order's own side
/// - matched sizes sum to no more than the original size
pub fn check_order(order: &Order) -> Result<()> {
    let mut filled: u64 = 0;
    for m in order.matches() {
        if m.size == 0 {
            return Err(TickmatchError::invariant(format!(
                "order {} has a zero-size match",
                order.id
            )));
        }
        let own_id = match order.side {
            OrderSide::Buy => m.buy_order_id,
            OrderSide::Sell => m.sell_order_id,
        };
        if own_id != order.id {
            return Err(TickmatchError::invariant(format!(
                "order {} holds a match for {own_id}",
                order.id
            )));
        }
        filled = filled.checked_add(m.size).ok_or_else(|| {
            TickmatchError::invariant(format!("order {} fill total overflows", order.id))
        })?;
    }
    if filled > order.size {
        return Err(TickmatchError::invariant(format!(
            "order {} overfilled: {filled} matched of {}",
            order.id, order.size
        )));
    }
    Ok(())
}

/// The book is not crossed and both best orders are live.
pub fn check_book<L: OrderLookup + ?Sized>(book: &UnmatchedOrderBook, orders: &L) -> Result<()> {
    for side in [OrderSide::Buy, OrderSide::Sell] {
        let Some(id) = book.peek_best(side) else {
            continue;
        };
        let order = orders.lookup(&id).ok_or_else(|| {
            TickmatchError::invariant(format!("best {side} order {id} is not registered"))
        })?;
        if order.side != side {
            return Err(TickmatchError::invariant(format!(
                "{} order {id} rests on the {side} side",
                order.side
            )));
        }
        if order.unmatched_size() == 0 {
            return Err(TickmatchError::invariant(format!(
                "fully matched order {id} still rests on the {side} side"
            )));
        }
    }

    if let (Some(buy), Some(sell)) = (book.best_buy_price(), book.best_sell_price()) {
        if buy >= sell {
            return Err(TickmatchError::invariant(format!(
                "book crossed: best buy {buy} >= best sell {sell}"
            )));
        }
    }
    Ok(())
}

/// Total matched size seen from buy orders equals total seen from sell
/// orders. Linear in the number of orders; meant for audits and tests.
pub fn check_conservation<'a, I>(orders: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Order>,
{
    let (mut bought, mut sold) = (0u128, 0u128);
    for order in orders {
        let filled = u128::from(order.filled_size());
        match order.side {
            OrderSide::Buy => bought += filled,
            OrderSide::Sell => sold += filled,
        }
    }
    if bought != sold {
        return Err(TickmatchError::invariant(format!(
            "fill conservation broken: bought {bought}, sold {sold}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use tickmatch_types::*;

    use super::*;

    #[test]
    fn fresh_order_is_consistent() {
        check_order(&Order::dummy(OrderSide::Buy, 10, 10)).unwrap();
    }

    #[test]
    fn overfilled_order_is_rejected() {
        let mut order = Order::dummy(OrderSide::Sell, 10, 5);
        let id = order.id;
        order.add_match(Match::new(OrderId::new(), id, 3, 10));
        check_order(&order).unwrap();
        order.add_match(Match::new(OrderId::new(), id, 3, 10));
        let err = check_order(&order).unwrap_err();
        assert!(format!("{err}").contains("overfilled"));
    }

    #[test]
    fn zero_size_match_is_rejected() {
        let mut order = Order::dummy(OrderSide::Buy, 10, 5);
        let id = order.id;
        order.add_match(Match::new(id, OrderId::new(), 0, 10));
        assert!(check_order(&order).is_err());
    }

    #[test]
    fn foreign_match_is_rejected() {
        let mut order = Order::dummy(OrderSide::Buy, 10, 5);
        order.add_match(Match::new(OrderId::new(), order.id, 1, 10));
        assert!(check_order(&order).is_err());
    }

    #[test]
    fn crossed_book_is_rejected() {
        let mut book = UnmatchedOrderBook::new();
        let mut orders = HashMap::new();
        for order in [
            Order::dummy(OrderSide::Buy, 101, 1),
            Order::dummy(OrderSide::Sell, 100, 1),
        ] {
            book.add(&order);
            orders.insert(order.id, order);
        }
        let err = check_book(&book, &orders).unwrap_err();
        assert!(format!("{err}").contains("crossed"));
    }

    #[test]
    fn filled_resting_order_is_rejected() {
        let mut book = UnmatchedOrderBook::new();
        let mut order = Order::dummy(OrderSide::Sell, 100, 1);
        book.add(&order);
        order.add_match(Match::new(OrderId::new(), order.id, 1, 100));
        let orders = HashMap::from([(order.id, order)]);
        assert!(check_book(&book, &orders).is_err());
    }

    #[test]
    fn uncrossed_book_passes() {
        let mut book = UnmatchedOrderBook::new();
        let mut orders = HashMap::new();
        for order in [
            Order::dummy(OrderSide::Buy, 99, 1),
            Order::dummy(OrderSide::Sell, 100, 1),
        ] {
            book.add(&order);
            orders.insert(order.id, order);
        }
        check_book(&book, &orders).unwrap();
    }

    #[test]
    fn conservation_detects_one_sided_fill() {
        let mut buy = Order::dummy(OrderSide::Buy, 10, 5);
        let mut sell = Order::dummy(OrderSide::Sell, 10, 5);
        let m = Match::new(buy.id, sell.id, 2, 10);
        buy.add_match(m.clone());
        check_conservation([&buy, &sell]).unwrap_err();
        sell.add_match(m);
        check_conservation([&buy, &sell]).unwrap();
    }
}
