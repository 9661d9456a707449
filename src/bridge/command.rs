use serde::Serialize;

/// Application command type for message context-menu commands
pub const MESSAGE_COMMAND_TYPE: u8 = 3;

/// Installation context: installed to a user
pub const INTEGRATION_TYPE_USER: u8 = 1;

pub const CONTEXT_GUILD: u8 = 0;
pub const CONTEXT_BOT_DM: u8 = 1;
pub const CONTEXT_PRIVATE_CHANNEL: u8 = 2;

/// Static description of an application command
///
/// Serializes to the body expected by Discord's command registration endpoint.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: u8,
    pub integration_types: &'static [u8],
    pub contexts: &'static [u8],
}

/// "Send to Webhook" message command
pub static SEND_TO_WEBHOOK: CommandSpec = CommandSpec {
    name: "Send to Webhook",
    kind: MESSAGE_COMMAND_TYPE,
    integration_types: &[INTEGRATION_TYPE_USER],
    contexts: &[CONTEXT_GUILD, CONTEXT_BOT_DM, CONTEXT_PRIVATE_CHANNEL],
};

/// Commands this relay knows how to handle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownCommand {
    SendToWebhook,
}

impl KnownCommand {
    pub const ALL: [KnownCommand; 1] = [KnownCommand::SendToWebhook];

    pub fn spec(self) -> &'static CommandSpec {
        match self {
            KnownCommand::SendToWebhook => &SEND_TO_WEBHOOK,
        }
    }

    /// Resolve an invoked command name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|command| command.spec().name.to_lowercase() == name)
    }

    /// Registration bodies for every known command
    pub fn registrations() -> Vec<&'static CommandSpec> {
        Self::ALL.into_iter().map(KnownCommand::spec).collect()
    }
}
