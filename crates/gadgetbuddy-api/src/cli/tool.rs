//! `gbuddy tool`: invoke a content-source tool directly.

use anyhow::{Context, Result};

use gadgetbuddy_core::tools;
use gadgetbuddy_types::content::ToolCall;

use crate::state::AppState;

/// Dispatch `name` with the JSON `input` and print the raw result.
pub async fn run_tool(state: &AppState, name: &str, input: &str, json: bool) -> Result<()> {
    let call = parse_call(name, input)?;
    let source = state.content_source()?;
    let result = tools::dispatch(source, &call).await?;

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

fn parse_call(name: &str, input: &str) -> Result<ToolCall> {
    let input: serde_json::Value =
        serde_json::from_str(input).context("--input must be a JSON object")?;
    anyhow::ensure!(input.is_object(), "--input must be a JSON object");
    Ok(ToolCall {
        tool: name.to_string(),
        input,
    })
}
