//! Budget detection and tier list commands.

use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use gadgetbuddy_core::budget::detect_budget;
use gadgetbuddy_core::tier::build_tier_list;
use gadgetbuddy_types::tier::{Item, RankedItem, Tier};

/// Print the budget detected in `text`.
pub fn budget(text: &str, json: bool) -> Result<()> {
    let money = detect_budget(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&money)?);
        return Ok(());
    }

    match money {
        Some(money) => println!(
            "  {} {} {} ({})",
            style("✓").green().bold(),
            style(money.value).bold(),
            money.currency,
            style(money.qualifier_label()).dim()
        ),
        None => println!("  {}", style("no budget").dim()),
    }
    Ok(())
}

/// Rank the items in `path` and print the tier list.
pub async fn tier(path: &Path, json: bool) -> Result<()> {
    let items = load_items(path).await?;
    let ranked = build_tier_list(&items);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("  {}", style("No items to rank.").dim());
        return Ok(());
    }

    println!("{}", tier_table(&ranked));
    Ok(())
}

/// Read a JSON array of items.
pub async fn load_items(path: &Path) -> Result<Vec<Item>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("{} is not a JSON array of items", path.display()))
}

fn tier_table(ranked: &[RankedItem]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Tier").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Score").fg(Color::White),
        Cell::new("Mentions").fg(Color::White),
        Cell::new("Price").fg(Color::White),
    ]);

    for entry in ranked {
        let price = match entry.item.price {
            Some(price) => format!("{price} {}", entry.item.currency.as_deref().unwrap_or("")).trim().to_string(),
            None => "?".to_string(),
        };
        table.add_row(vec![
            Cell::new(entry.tier).fg(tier_color(entry.tier)),
            Cell::new(&entry.item.name).fg(Color::Cyan),
            Cell::new(format!("{:.3}", entry.score)),
            Cell::new(entry.item.mentions),
            Cell::new(price).fg(Color::DarkGrey),
        ]);
    }
    table
}

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::S => Color::Magenta,
        Tier::A => Color::Green,
        Tier::B => Color::Yellow,
        Tier::C => Color::White,
        Tier::D => Color::DarkGrey,
    }
}
