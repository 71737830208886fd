//! Configuration and credential status command.

use anyhow::Result;
use console::style;

use crate::state::AppState;

const GROUPS: [&str; 4] = ["openai", "reddit", "discord", "api_key"];

/// Display which credential groups are set and the effective settings.
pub async fn status(state: &AppState, json: bool) -> Result<()> {
    let config = &state.config;

    if json {
        let groups: serde_json::Map<String, serde_json::Value> = GROUPS
            .iter()
            .map(|g| (g.to_string(), state.configured.contains(g).into()))
            .collect();
        let status = serde_json::json!({
            "version": env!("CARGO_PKG_VERSION"),
            "data_dir": state.data_dir.display().to_string(),
            "credentials": groups,
            "llm": { "base_url": config.llm.base_url, "model": config.llm.model },
            "server": { "host": config.server.host, "port": config.server.port },
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!();
    println!("  {} GadgetBuddy v{}", style("⚡").bold(), env!("CARGO_PKG_VERSION"));
    println!();

    println!("  {}", style("── Credentials ──").dim());
    for group in GROUPS {
        let mark = if state.configured.contains(&group) {
            style("✓").green()
        } else {
            style("✗").red()
        };
        println!("  {mark} {group}");
    }
    println!();

    println!("  {}", style("── LLM ──").dim());
    println!("  Model:    {}", style(&config.llm.model).cyan());
    println!("  Endpoint: {}", style(&config.llm.base_url).dim());
    println!();

    println!("  {}", style("── System ──").dim());
    println!("  Data dir: {}", style(state.data_dir.display()).dim());
    println!("  Server:   {}:{}", config.server.host, config.server.port);
    println!();

    Ok(())
}
