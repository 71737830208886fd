//! Slash-command definitions in Discord's application-command JSON shape.

use serde::Serialize;

use gadgetbuddy_types::command::ChatCommand;

/// `CHAT_INPUT` application command type.
const CHAT_INPUT: u8 = 1;

/// `STRING` option type.
const STRING_OPTION: u8 = 3;

#[derive(Debug, Clone, Serialize)]
pub struct SlashCommand {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommandOption {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    pub required: bool,
}

/// One command per [`ChatCommand`], each with a required `query` string.
pub fn slash_commands() -> Vec<SlashCommand> {
    ChatCommand::ALL
        .iter()
        .map(|command| SlashCommand {
            name: command.name(),
            description: command.description(),
            kind: CHAT_INPUT,
            options: vec![CommandOption {
                name: "query",
                description: command.query_hint(),
                kind: STRING_OPTION,
                required: true,
            }],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_shape() {
        let json = serde_json::to_value(slash_commands()).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 2);
        assert_eq!(json[0]["name"], "tierlist");
        assert_eq!(json[0]["type"], 1);
        assert_eq!(json[0]["options"][0]["name"], "query");
        assert_eq!(json[0]["options"][0]["type"], 3);
        assert_eq!(json[0]["options"][0]["required"], true);
        assert_eq!(json[1]["name"], "browse");
        assert_eq!(json[1]["description"], "Ask the bot to browse");
    }
}
