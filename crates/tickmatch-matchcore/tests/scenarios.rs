//! Integration tests: end-to-end submission scenarios.
//!
//! Each test drives a fresh `MatchingEngine` through a sequence of
//! submissions and checks the resulting book levels and fills.

use std::collections::BTreeMap;

use tickmatch_matchcore::{MatchingEngine, invariants};
use tickmatch_types::*;

fn levels(pairs: &[(u64, u64)]) -> BTreeMap<u64, u64> {
    pairs.iter().copied().collect()
}

fn assert_book(engine: &MatchingEngine, buys: &[(u64, u64)], sells: &[(u64, u64)]) {
    let summary = engine.get_summary().unwrap();
    assert_eq!(summary.buy_levels, levels(buys), "buy levels");
    assert_eq!(summary.sell_levels, levels(sells), "sell levels");
}

#[test]
fn buy_sweeps_book_and_rests_remainder() {
    let mut engine = MatchingEngine::new();

    engine.submit_sell(10, 30).unwrap();
    engine.submit_sell(10, 20).unwrap();
    engine.submit_sell(10, 10).unwrap();
    assert_book(&engine, &[], &[(10, 10), (20, 10), (30, 10)]);

    let buy_id = engine.submit_buy(40, 40).unwrap();
    assert_eq!(engine.get_order(&buy_id).unwrap().unmatched_size(), 10);
    assert_book(&engine, &[(40, 10)], &[]);
}

#[test]
fn interleaved_buys_and_sells() {
    let mut engine = MatchingEngine::new();

    engine.submit_buy(50, 400).unwrap();
    engine.submit_sell(10, 200).unwrap();
    engine.submit_buy(10, 450).unwrap();
    engine.submit_sell(5, 200).unwrap();
    engine.submit_sell(30, 500).unwrap();
    engine.submit_buy(5, 500).unwrap();
    engine.submit_buy(40, 300).unwrap();

    assert_book(&engine, &[(300, 40), (400, 40), (450, 5)], &[(500, 25)]);
}

#[test]
fn realistic_ladder_around_150() {
    let mut engine = MatchingEngine::new();

    for (size, price) in [
        (30, 148),
        (40, 148),
        (80, 148),
        (10, 148),
        (10, 148),
        (20, 148),
        (30, 149),
        (10, 149),
        (10, 149),
        (20, 149),
        (10, 150),
        (20, 150),
    ] {
        engine.submit_buy(size, price).unwrap();
    }
    for (size, price) in [
        (10, 151),
        (20, 151),
        (40, 151),
        (10, 152),
        (10, 152),
        (20, 152),
        (30, 152),
        (10, 152),
        (10, 153),
        (20, 153),
        (10, 153),
        (20, 153),
        (80, 153),
    ] {
        engine.submit_sell(size, price).unwrap();
    }
    assert_book(
        &engine,
        &[(148, 190), (149, 70), (150, 30)],
        &[(151, 70), (152, 80), (153, 140)],
    );

    // Buy 1 executes completely against the head of 151.
    let buy1 = engine.submit_buy(5, 151).unwrap();
    assert_eq!(engine.get_order(&buy1).unwrap().unmatched_size(), 0);
    assert_book(
        &engine,
        &[(148, 190), (149, 70), (150, 30)],
        &[(151, 65), (152, 80), (153, 140)],
    );

    // Buy 2 finishes the first 151 seller and eats into the second.
    let buy2 = engine.submit_buy(15, 151).unwrap();
    assert_eq!(engine.get_order(&buy2).unwrap().unmatched_size(), 0);
    assert_book(
        &engine,
        &[(148, 190), (149, 70), (150, 30)],
        &[(151, 50), (152, 80), (153, 140)],
    );

    let sell1 = engine.submit_sell(5, 150).unwrap();
    assert_eq!(engine.get_order(&sell1).unwrap().unmatched_size(), 0);
    assert_book(
        &engine,
        &[(148, 190), (149, 70), (150, 25)],
        &[(151, 50), (152, 80), (153, 140)],
    );

    // Sell 2 clears the 150 bids and becomes the best sell.
    let sell2 = engine.submit_sell(40, 150).unwrap();
    assert_eq!(engine.get_order(&sell2).unwrap().unmatched_size(), 15);
    assert_book(
        &engine,
        &[(148, 190), (149, 70)],
        &[(150, 15), (151, 50), (152, 80), (153, 140)],
    );
    let summary = engine.get_summary().unwrap();
    assert_eq!(summary.best_buy_level(), Some((149, 70)));
    assert_eq!(summary.best_sell_level(), Some((150, 15)));
    let buy_prices: Vec<u64> = summary.buy_levels_best_first().map(|(p, _)| p).collect();
    assert_eq!(buy_prices, vec![149, 148]);

    // Buy 3 takes what is left of sell 2 and rests the remainder at 150.
    let buy3 = engine.submit_buy(25, 150).unwrap();
    let buy3_order = engine.get_order(&buy3).unwrap();
    assert_eq!(buy3_order.matches()[0].sell_order_id, sell2);
    assert_eq!(buy3_order.unmatched_size(), 10);
    assert_eq!(engine.get_order(&sell2).unwrap().unmatched_size(), 0);
    assert_book(
        &engine,
        &[(148, 190), (149, 70), (150, 10)],
        &[(151, 50), (152, 80), (153, 140)],
    );

    invariants::check_conservation(engine.registry().iter()).unwrap();
}

#[test]
fn fills_record_resting_price_and_both_ids() {
    let mut engine = MatchingEngine::new();
    let resting = engine.submit_buy(10, 400).unwrap();
    let incoming = engine.submit_sell(4, 200).unwrap();

    let on_buy = engine.get_order(&resting).unwrap().matches().to_vec();
    let on_sell = engine.get_order(&incoming).unwrap().matches().to_vec();
    assert_eq!(on_buy, on_sell, "both orders carry the same fill");
    assert_eq!(on_buy[0].price, 400);
    assert_eq!(on_buy[0].size, 4);
    assert_eq!(on_buy[0].buy_order_id, resting);
    assert_eq!(on_buy[0].sell_order_id, incoming);
}

#[test]
fn invalid_sizes_and_prices_are_rejected() {
    let mut engine = MatchingEngine::new();
    assert!(matches!(
        engine.submit_buy(30, 0),
        Err(TickmatchError::InvalidOrder { .. })
    ));
    assert!(matches!(
        engine.submit_sell(0, 10),
        Err(TickmatchError::InvalidOrder { .. })
    ));
    assert_eq!(engine.order_count(), 0);
    assert!(engine.get_summary().unwrap().is_empty());
}

#[test]
fn very_large_prices_rest_without_crossing() {
    let mut engine = MatchingEngine::new();
    let big = 9_223_372_036_854_775_808_u64;

    engine.submit_buy(10, big).unwrap();
    engine.submit_sell(10, big + 1).unwrap();

    assert_book(&engine, &[(big, 10)], &[(big + 1, 10)]);
    assert_eq!(engine.book().spread(), Some(1));
}

#[test]
fn find_order_before_and_after_submission() {
    let mut engine = MatchingEngine::new();
    assert!("I dont exist".parse::<OrderId>().is_err());
    assert!(engine.find_order(&OrderId::new()).is_none());

    let id = engine.submit_sell(10, 30).unwrap();
    assert!(engine.find_order(&id).is_some());
}

#[test]
fn order_summary_after_partial_fill() {
    let mut engine = MatchingEngine::new();
    let sell = engine.submit_sell(20, 20).unwrap();
    let buy1 = engine.submit_buy(10, 20).unwrap();
    let buy2 = engine.submit_buy(5, 25).unwrap();

    let summary = engine.get_order(&sell).unwrap().summary();
    assert_eq!(summary.side, OrderSide::Sell);
    assert_eq!(summary.unmatched_size, 5);
    assert_eq!(
        summary.matches,
        vec![
            MatchSummary {
                buy_order_id: buy1,
                sell_order_id: sell,
                size: 10,
                price: 20,
            },
            MatchSummary {
                buy_order_id: buy2,
                sell_order_id: sell,
                size: 5,
                price: 20,
            },
        ]
    );

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["order_type"], "SELL");
    assert_eq!(json["matches"][1]["price"], 20);
}
