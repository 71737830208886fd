//! Turning model output into ranked items and back into chat text.

use serde_json::Value;

use gadgetbuddy_types::tier::{Item, RankedItem};

/// Parse the model's candidate list.
///
/// Accepts a bare JSON array or one wrapped in a fenced code block or
/// surrounding prose. Each element is read leniently: malformed fields take
/// neutral defaults, and only elements without a usable name are dropped.
/// Returns `None` when nothing usable is found.
pub fn parse_candidates(text: &str) -> Option<Vec<Item>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }

    let values: Vec<Value> = serde_json::from_str(&text[start..=end]).ok()?;
    let items: Vec<Item> = values.iter().filter_map(candidate).collect();
    if items.len() < values.len() {
        tracing::debug!(dropped = values.len() - items.len(), "skipped unusable candidates");
    }

    (!items.is_empty()).then_some(items)
}

fn candidate(value: &Value) -> Option<Item> {
    let fields = value.as_object()?;
    let name = fields.get("name")?.as_str()?;
    if name.trim().is_empty() {
        return None;
    }

    Some(Item {
        name: name.to_string(),
        price: fields.get("price").and_then(Value::as_f64),
        currency: fields.get("currency").and_then(Value::as_str).map(str::to_string),
        mentions: fields.get("mentions").map_or(0, mention_count),
        pros: strings(fields.get("pros")),
        cons: strings(fields.get("cons")),
        links: strings(fields.get("links")),
    })
}

/// Whole, non-negative counts; `12.0` and `"12"` read as 12, anything else as 0.
fn mention_count(value: &Value) -> u32 {
    let count = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match count {
        Some(c) if c.is_finite() && c >= 0.0 => c.floor().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// String elements of an array; other shapes yield nothing.
fn strings(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Render ranked items as a Markdown table `Tier | Model | Why | Price`.
pub fn render_tier_table(ranked: &[RankedItem]) -> String {
    let mut out = String::from("| Tier | Model | Why | Price |\n|---|---|---|---|");
    for entry in ranked {
        out.push_str(&format!(
            "\n| {} | {} | {} | {} |",
            entry.tier,
            cell(&entry.item.name),
            cell(&why(&entry.item)),
            format_price(entry.item.price, entry.item.currency.as_deref()),
        ));
    }
    out
}

/// Up to two pros, else the first con, else a dash.
fn why(item: &Item) -> String {
    if !item.pros.is_empty() {
        item.pros.iter().take(2).map(String::as_str).collect::<Vec<_>>().join("; ")
    } else if let Some(con) = item.cons.first() {
        format!("but: {con}")
    } else {
        "-".to_string()
    }
}

fn format_price(price: Option<f64>, currency: Option<&str>) -> String {
    let Some(price) = price.filter(|p| p.is_finite() && *p > 0.0) else {
        return "?".to_string();
    };
    let amount = if price.fract() == 0.0 {
        format!("{price:.0}")
    } else {
        format!("{price:.2}")
    };
    match currency {
        Some(code) if !code.trim().is_empty() => format!("{amount} {}", code.trim()),
        _ => amount,
    }
}

/// Keep a table cell on one line and out of the column separators.
fn cell(text: &str) -> String {
    text.replace('|', "/").replace(['\n', '\r'], " ")
}
