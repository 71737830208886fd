//! Weighted desirability score for a single item.
//!
//! `score = 0.5 * mentions + 0.3 * sentiment + 0.2 * value`, each term in
//! `[0, 1]`, so the score is in `[0, 1]` as well.

use gadgetbuddy_types::tier::Item;

pub const MENTIONS_WEIGHT: f64 = 0.5;
pub const SENTIMENT_WEIGHT: f64 = 0.3;
pub const VALUE_WEIGHT: f64 = 0.2;

/// Price at or below which the value term saturates at 1.0.
pub const VALUE_PIVOT_PRICE: f64 = 500.0;

/// Value term used when the price is unknown.
pub const NEUTRAL_VALUE: f64 = 0.5;

/// Compute an item's score.
pub fn score_item(item: &Item) -> f64 {
    let sentiment = (sentiment_term(item.pros.len(), item.cons.len()) + 1.0) / 2.0;
    MENTIONS_WEIGHT * mentions_term(item.mentions)
        + SENTIMENT_WEIGHT * sentiment
        + VALUE_WEIGHT * value_term(item.price)
}

/// Diminishing-returns mention count, saturating at 99 mentions.
pub fn mentions_term(mentions: u32) -> f64 {
    if mentions == 0 {
        return 0.0;
    }
    ((1.0 + f64::from(mentions)).log10() / 2.0).min(1.0)
}

/// Net sentiment in `[-1, 1]`; zero when there are no bullets at all.
pub fn sentiment_term(pros: usize, cons: usize) -> f64 {
    let total = (pros + cons).max(1) as f64;
    (pros as f64 - cons as f64) / total
}

/// Cheaper scores higher, capped at 1.0.
///
/// Zero, negative, and non-finite prices are treated as unknown.
pub fn value_term(price: Option<f64>) -> f64 {
    match price {
        Some(price) if price.is_finite() && price > 0.0 => (VALUE_PIVOT_PRICE / price).min(1.0),
        _ => NEUTRAL_VALUE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn empty_item_scores_a_quarter() {
        let item = Item::named("Unknown");
        assert!((score_item(&item) - 0.25).abs() < EPS);
    }

    #[test]
    fn mentions_saturate_at_99() {
        assert_eq!(mentions_term(0), 0.0);
        assert!((mentions_term(9) - 0.5).abs() < EPS);
        assert!((mentions_term(99) - 1.0).abs() < EPS);
        assert_eq!(mentions_term(10_000), 1.0);
        assert!(mentions_term(1) < mentions_term(2));
    }

    #[test]
    fn sentiment_counts_bullets() {
        assert_eq!(sentiment_term(0, 0), 0.0);
        assert_eq!(sentiment_term(3, 0), 1.0);
        assert_eq!(sentiment_term(0, 2), -1.0);
        assert_eq!(sentiment_term(3, 1), 0.5);
    }

    #[test]
    fn value_term_pivots_at_500() {
        assert_eq!(value_term(None), 0.5);
        assert_eq!(value_term(Some(500.0)), 1.0);
        assert_eq!(value_term(Some(1000.0)), 0.5);
        assert_eq!(value_term(Some(99.0)), 1.0);
    }

    #[test]
    fn non_positive_prices_are_unknown() {
        assert_eq!(value_term(Some(0.0)), NEUTRAL_VALUE);
        assert_eq!(value_term(Some(-40.0)), NEUTRAL_VALUE);
        assert_eq!(value_term(Some(f64::NAN)), NEUTRAL_VALUE);
        assert_eq!(value_term(Some(f64::INFINITY)), NEUTRAL_VALUE);
    }

    #[test]
    fn fully_loaded_item_scores_one() {
        let item = Item {
            price: Some(200.0),
            mentions: 150,
            pros: vec!["great ANC".to_string()],
            ..Item::named("Best")
        };
        assert!((score_item(&item) - 1.0).abs() < EPS);
    }
}
