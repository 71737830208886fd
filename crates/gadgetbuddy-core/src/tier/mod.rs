//! Tier list construction.
//!
//! Items are scored with [`score::score_item`], sorted best first, and
//! bucketed into S/A/B/C/D by the position of their rank within the list.

pub mod score;

use gadgetbuddy_types::tier::{Item, RankedItem, Tier};

use self::score::score_item;

/// Cumulative rank-percentile upper bounds, checked in order with a
/// strict `<`. Anything past the last bound is D.
const TIER_BOUNDS: [(f64, Tier); 4] = [
    (0.15, Tier::S),
    (0.35, Tier::A),
    (0.60, Tier::B),
    (0.85, Tier::C),
];

/// Score, sort, and tier `items`.
///
/// The sort is stable, so items with equal scores keep their input order.
/// The input is not modified.
pub fn build_tier_list(items: &[Item]) -> Vec<RankedItem> {
    let mut scored: Vec<(f64, &Item)> = items.iter().map(|item| (score_item(item), item)).collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));

    let n = scored.len();
    scored
        .into_iter()
        .enumerate()
        .map(|(rank, (score, item))| RankedItem {
            item: item.clone(),
            score,
            tier: tier_for_rank(rank, n),
        })
        .collect()
}

/// Tier for zero-based `rank` among `n` items.
pub fn tier_for_rank(rank: usize, n: usize) -> Tier {
    let k = rank as f64;
    let n = n as f64;
    TIER_BOUNDS
        .iter()
        .find(|(bound, _)| k < bound * n)
        .map(|(_, tier)| *tier)
        .unwrap_or(Tier::D)
}
