use serde::Deserialize;
use serde_json::{Map, Value};
use serenity::model::application::InteractionType;
use thiserror::Error;
use tracing::debug;

/// Interaction received on the HTTP interactions endpoint
///
/// Only the fields this relay reads are modelled; everything else in the
/// payload is ignored during decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    /// Interaction type (`1` = PING, `2` = APPLICATION_COMMAND, ...)
    #[serde(rename = "type")]
    pub kind: InteractionType,

    /// Command payload, present for application commands
    #[serde(default)]
    pub data: Option<CommandData>,

    /// Guild the interaction was invoked in (absent in DMs and private channels)
    #[serde(default)]
    pub guild_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub resolved: Option<ResolvedData>,
}

/// Objects resolved by Discord for the invoked command
#[derive(Debug, Clone, Deserialize)]
pub struct ResolvedData {
    /// Messages keyed by message ID, kept in payload order
    #[serde(default)]
    pub messages: Option<Map<String, Value>>,
}

/// Message a message command was invoked on
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResolvedMessage {
    pub id: String,
    pub channel_id: String,
    #[serde(default)]
    pub content: String,
    pub author: MessageAuthor,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MessageAuthor {
    pub username: String,
    #[serde(default)]
    pub global_name: Option<String>,
}

/// The command data did not carry a usable resolved message
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("No message found in data")]
    NoMessage,
    #[error("messages object was empty")]
    EmptyMessages,
    #[error("resolved message could not be decoded")]
    InvalidMessage(#[source] serde_json::Error),
}

impl CommandData {
    /// Return the first resolved message
    ///
    /// Discord resolves exactly one message for a message command. Should more
    /// ever be present, the first one in payload order wins and the rest are ignored.
    pub fn first_resolved_message(&self) -> Result<ResolvedMessage, ExtractionError> {
        let messages = self
            .resolved
            .as_ref()
            .and_then(|resolved| resolved.messages.as_ref())
            .ok_or(ExtractionError::NoMessage)?;

        let (message_id, message) = messages
            .iter()
            .next()
            .ok_or(ExtractionError::EmptyMessages)?;

        if messages.len() > 1 {
            debug!(
                count = messages.len(),
                %message_id,
                "Multiple resolved messages, using the first one"
            );
        }

        serde_json::from_value(message.clone()).map_err(ExtractionError::InvalidMessage)
    }
}
