//! Monetary estimates produced by the budget extractor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Currencies the budget extractor can recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    #[default]
    Eur,
    Gbp,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// Map a currency symbol or ISO code (any case) to a currency.
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker.trim() {
            "$" => Some(Currency::Usd),
            "€" => Some(Currency::Eur),
            "£" => Some(Currency::Gbp),
            other => other.parse().ok(),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "EUR" => Ok(Currency::Eur),
            "GBP" => Ok(Currency::Gbp),
            other => Err(format!("invalid currency: '{other}'")),
        }
    }
}

/// Semantic modifier attached to a detected price.
///
/// "Exact" has no variant: it is represented by `Money::qualifier == None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Qualifier {
    Under,
    Around,
    Range,
}

impl fmt::Display for Qualifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Qualifier::Under => write!(f, "under"),
            Qualifier::Around => write!(f, "around"),
            Qualifier::Range => write!(f, "range"),
        }
    }
}

/// A budget estimate found in free text.
///
/// `value` is always positive and finite. For a range it is the mean of
/// the two bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub value: f64,
    pub currency: Currency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<Qualifier>,
}

impl Money {
    /// Qualifier label, with `"exact"` standing in for an absent qualifier.
    pub fn qualifier_label(&self) -> String {
        self.qualifier
            .map(|q| q.to_string())
            .unwrap_or_else(|| "exact".to_string())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.value, self.currency, self.qualifier_label())
    }
}
