//! `gbuddy ask`: run the assistant pipeline from the terminal.

use anyhow::Result;
use console::style;

use gadgetbuddy_types::command::ChatCommand;

use crate::state::AppState;

/// Run `command` for `query` and print the reply chunks.
pub async fn ask(state: &AppState, command: ChatCommand, query: &str, json: bool) -> Result<()> {
    let assistant = state.assistant()?;
    let reply = assistant.handle(command, query).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    if let Some(budget) = reply.budget {
        println!("  {} {}", style("Budget:").bold(), budget);
    }
    println!(
        "  {} {}",
        style("Evidence posts:").bold(),
        style(reply.evidence_count).dim()
    );
    println!();
    for (i, chunk) in reply.chunks.iter().enumerate() {
        if i > 0 {
            println!("{}", style("───").dim());
        }
        println!("{chunk}");
    }
    Ok(())
}
