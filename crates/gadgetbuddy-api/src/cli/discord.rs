//! `gbuddy register-commands`: publish the slash commands to Discord.

use anyhow::Result;
use console::style;

use crate::state::AppState;

/// Register the slash commands, guild-scoped when a guild id is configured.
pub async fn register_commands(state: &AppState, json: bool) -> Result<()> {
    let discord = state.discord()?;
    let count = discord
        .client
        .register_commands(&discord.app_id, discord.guild_id.as_deref())
        .await?;

    let scope = match discord.guild_id.as_deref() {
        Some(guild) => format!("guild {guild}"),
        None => "global".to_string(),
    };

    if json {
        let out = serde_json::json!({ "registered": count, "scope": scope });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!(
            "  {} Registered {} command(s) ({})",
            style("✓").green().bold(),
            style(count).bold(),
            style(scope).dim()
        );
    }
    Ok(())
}
