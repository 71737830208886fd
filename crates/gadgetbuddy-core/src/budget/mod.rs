//! Budget detection in free-text product queries.
//!
//! [`detect_budget`] looks for a price range first (`€100-€200`,
//! `300 to 500`) and only then for a single, optionally qualified, price
//! (`under $150`, `around £1,000`). The heuristic is intentionally
//! approximate: it takes the first numeric signal it finds.

pub mod number;

use std::sync::LazyLock;

use regex::{Captures, Regex};

use gadgetbuddy_types::money::{Currency, Money, Qualifier};

use self::number::{parse_amount, parse_number};

/// Currency symbols and ISO codes accepted next to a number.
const CURRENCY: &str = r"[$€£]|usd|eur|gbp";

/// Grouped integer (`1,000`, `1.000.000`) or plain integer, with an
/// optional fractional part.
const NUMBER: &str = r"(?:[0-9]{1,3}(?:[.,][0-9]{3})+|[0-9]+)(?:[.,][0-9]+)?";

static RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:(?P<cur_low>{CURRENCY})\s*)?(?P<low>{NUMBER})\s*(?:-|to|–|—)\s*(?:(?P<cur_high>{CURRENCY})\s*)?(?P<high>{NUMBER})"
    ))
    .expect("static range pattern")
});

static SINGLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)(?:(?P<qualifier>under|below|<=|less\s+than|around|~|about|approx(?:imately|\.)?)\s*)?(?:(?P<cur>{CURRENCY})\s*)?(?P<amount>{NUMBER})"
    ))
    .expect("static single-price pattern")
});

/// Detect a budget in `text`.
///
/// Returns `None` when no positive amount is found. Matches whose amount
/// parses to zero are skipped in favour of later matches. A range bound may
/// be zero as long as the midpoint is positive.
///
/// The first numeric signal wins even when it is not a price: in
/// `"top 10 earbuds under €150"` the budget is `10 EUR (exact)`.
pub fn detect_budget(text: &str) -> Option<Money> {
    if let Some(money) = RANGE
        .captures_iter(text)
        .find_map(|caps| range_budget(&caps, text))
    {
        tracing::debug!(value = money.value, currency = %money.currency, "range budget detected");
        return Some(money);
    }

    let money = SINGLE
        .captures_iter(text)
        .find_map(|caps| single_budget(&caps, text))?;
    tracing::debug!(
        value = money.value,
        currency = %money.currency,
        qualifier = %money.qualifier_label(),
        "budget detected"
    );
    Some(money)
}

fn range_budget(caps: &Captures<'_>, text: &str) -> Option<Money> {
    let low = parse_number(caps.name("low")?.as_str())?;
    let high = parse_number(caps.name("high")?.as_str())?;
    let value = (low + high) / 2.0;
    if !(value.is_finite() && value > 0.0) {
        return None;
    }

    let currency = marker_currency(caps, "cur_low")
        .or_else(|| marker_currency(caps, "cur_high"))
        .unwrap_or_else(|| infer_currency(text));

    Some(Money {
        value,
        currency,
        qualifier: Some(Qualifier::Range),
    })
}

fn single_budget(caps: &Captures<'_>, text: &str) -> Option<Money> {
    let value = parse_amount(caps.name("amount")?.as_str())?;
    let qualifier = caps
        .name("qualifier")
        .and_then(|m| classify_qualifier(m.as_str()));
    let currency = marker_currency(caps, "cur").unwrap_or_else(|| infer_currency(text));

    Some(Money {
        value,
        currency,
        qualifier,
    })
}

fn marker_currency(caps: &Captures<'_>, group: &str) -> Option<Currency> {
    caps.name(group)
        .and_then(|m| Currency::from_marker(m.as_str()))
}

fn classify_qualifier(word: &str) -> Option<Qualifier> {
    let word = word.to_lowercase();
    if word.starts_with("under") || word.starts_with("below") || word.starts_with("less") || word == "<=" {
        Some(Qualifier::Under)
    } else if word.starts_with("around") || word.starts_with("about") || word.starts_with("approx") || word == "~" {
        Some(Qualifier::Around)
    } else {
        None
    }
}

/// Infer a currency from the whole text, in priority order EUR, USD, GBP.
///
/// Falls back to EUR when nothing matches.
pub fn infer_currency(text: &str) -> Currency {
    let upper = text.to_uppercase();
    if text.contains('€') || upper.contains("EUR") {
        Currency::Eur
    } else if text.contains('$') || upper.contains("USD") {
        Currency::Usd
    } else if text.contains('£') || upper.contains("GBP") {
        Currency::Gbp
    } else {
        Currency::Eur
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(value: f64, currency: Currency, qualifier: Option<Qualifier>) -> Money {
        Money {
            value,
            currency,
            qualifier,
        }
    }

    #[test]
    fn under_dollar_amount() {
        assert_eq!(
            detect_budget("under $150"),
            Some(money(150.0, Currency::Usd, Some(Qualifier::Under)))
        );
    }

    #[test]
    fn euro_range_takes_midpoint() {
        assert_eq!(
            detect_budget("€100-€200"),
            Some(money(150.0, Currency::Eur, Some(Qualifier::Range)))
        );
    }

    #[test]
    fn no_numbers_means_no_budget() {
        assert_eq!(detect_budget("nice headphones"), None);
        assert_eq!(detect_budget(""), None);
    }

    #[test]
    fn around_pounds_with_thousands_separator() {
        assert_eq!(
            detect_budget("around £1,000"),
            Some(money(1000.0, Currency::Gbp, Some(Qualifier::Around)))
        );
    }

    #[test]
    fn range_wins_over_single_value() {
        let budget = detect_budget("under 900, ideally 300 to 500 USD").unwrap();
        assert_eq!(budget, money(400.0, Currency::Usd, Some(Qualifier::Range)));
    }

    #[test]
    fn range_separators() {
        for text in ["100 - 200", "100 to 200", "100–200", "100 — 200", "100 TO 200"] {
            let budget = detect_budget(text).unwrap();
            assert_eq!(budget.value, 150.0, "separator in {text:?}");
            assert_eq!(budget.qualifier, Some(Qualifier::Range));
        }
    }

    #[test]
    fn range_currency_prefers_bound_markers_over_text() {
        // Whole-text inference alone would pick EUR because of the euro sign.
        let budget = detect_budget("€ prices are rare, so $100-$200").unwrap();
        assert_eq!(budget.currency, Currency::Usd);

        let budget = detect_budget("100 - £300").unwrap();
        assert_eq!(budget.currency, Currency::Gbp);
        assert_eq!(budget.value, 200.0);
    }

    #[test]
    fn range_without_markers_falls_back_to_text() {
        let budget = detect_budget("somewhere 1.000-2.000 GBP").unwrap();
        assert_eq!(budget, money(1500.0, Currency::Gbp, Some(Qualifier::Range)));
    }

    #[test]
    fn qualifier_words() {
        let cases = [
            ("below 80", Some(Qualifier::Under)),
            ("less than 99", Some(Qualifier::Under)),
            ("<= 200", Some(Qualifier::Under)),
            ("~300", Some(Qualifier::Around)),
            ("about 50", Some(Qualifier::Around)),
            ("approx. 120", Some(Qualifier::Around)),
            ("Around 75", Some(Qualifier::Around)),
            ("budget 250", None),
        ];
        for (text, expected) in cases {
            let budget = detect_budget(text).unwrap();
            assert_eq!(budget.qualifier, expected, "qualifier for {text:?}");
        }
    }

    #[test]
    fn currency_inference_order_and_default() {
        assert_eq!(detect_budget("under 150 usd").unwrap().currency, Currency::Usd);
        assert_eq!(detect_budget("under 150").unwrap().currency, Currency::Eur);
        assert_eq!(detect_budget("150 gbp max").unwrap().currency, Currency::Gbp);
        // EUR has priority when several currencies are mentioned.
        assert_eq!(detect_budget("150, paying in EUR or USD").unwrap().currency, Currency::Eur);
    }

    #[test]
    fn fractional_part_is_kept() {
        let budget = detect_budget("exactly 150.99").unwrap();
        assert_eq!(budget.value, 150.99);
        assert_eq!(budget.qualifier, None);
    }

    #[test]
    fn dotted_thousands_separator() {
        assert_eq!(detect_budget("max €1.000").unwrap().value, 1000.0);
        assert_eq!(detect_budget("1.000,50 EUR").unwrap().value, 1000.5);
    }

    #[test]
    fn four_digit_plain_number() {
        let budget = detect_budget("gaming laptop under 1500").unwrap();
        assert_eq!(budget.value, 1500.0);
        assert_eq!(budget.qualifier, Some(Qualifier::Under));
    }

    #[test]
    fn zero_amounts_are_skipped() {
        assert_eq!(detect_budget("0 interest"), None);
        let budget = detect_budget("top 0 picks under 90").unwrap();
        assert_eq!(budget.value, 90.0);
    }

    #[test]
    fn range_with_zero_bound_keeps_midpoint() {
        assert_eq!(
            detect_budget("$0-$300"),
            Some(money(150.0, Currency::Usd, Some(Qualifier::Range)))
        );
        let budget = detect_budget("anything from 0 to 500 dollars").unwrap();
        assert_eq!(budget.value, 250.0);
        assert_eq!(budget.qualifier, Some(Qualifier::Range));
        assert_eq!(detect_budget("0-0"), None);
    }

    #[test]
    fn first_number_wins_even_if_not_a_price() {
        assert_eq!(
            detect_budget("top 10 earbuds under €150"),
            Some(money(10.0, Currency::Eur, None))
        );
    }

    #[test]
    fn value_is_always_positive_and_finite() {
        for text in ["0-0", "$0", "under 0.0", "9999999999999999999999", "5 to 7"] {
            if let Some(budget) = detect_budget(text) {
                assert!(budget.value.is_finite() && budget.value > 0.0, "{text:?}");
            }
        }
    }
}
