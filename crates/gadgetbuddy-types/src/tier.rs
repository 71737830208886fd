//! Candidate items and their ranked, tiered form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A candidate product with the evidence gathered about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    /// Unknown when absent; never interpreted as "free".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Informational only, not used in scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    /// Number of independent sources referencing the item.
    #[serde(default)]
    pub mentions: u32,
    #[serde(default)]
    pub pros: Vec<String>,
    #[serde(default)]
    pub cons: Vec<String>,
    #[serde(default)]
    pub links: Vec<String>,
}

impl Item {
    /// Create an item with no evidence attached.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price: None,
            currency: None,
            mentions: 0,
            pros: Vec::new(),
            cons: Vec::new(),
            links: Vec::new(),
        }
    }
}

/// Ordinal bucket assigned by rank percentile, S best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
    D,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::S => write!(f, "S"),
            Tier::A => write!(f, "A"),
            Tier::B => write!(f, "B"),
            Tier::C => write!(f, "C"),
            Tier::D => write!(f, "D"),
        }
    }
}

impl FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "S" => Ok(Tier::S),
            "A" => Ok(Tier::A),
            "B" => Ok(Tier::B),
            "C" => Ok(Tier::C),
            "D" => Ok(Tier::D),
            other => Err(format!("invalid tier: '{other}'")),
        }
    }
}

/// An [`Item`] with its desirability score and tier.
///
/// The item's own fields are flattened in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedItem {
    #[serde(flatten)]
    pub item: Item,
    /// Sort key only; not stable across versions.
    pub score: f64,
    pub tier: Tier,
}
