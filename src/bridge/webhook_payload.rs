use crate::bridge::interaction::ResolvedMessage;
use serde::Serialize;

/// Guild segment Discord uses in message links outside of guilds
const DIRECT_MESSAGE_GUILD: &str = "@me";

/// Payload POSTed to the webhook for a relayed message
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    pub message_content: String,
    #[serde(rename = "messageURL")]
    pub message_url: String,
    pub author: String,
    pub author_global_name: Option<String>,
}

impl WebhookPayload {
    /// Build the payload for a resolved message
    ///
    /// # Arguments
    ///
    /// * `message` - The message the command was invoked on
    /// * `guild_id` - The guild of the interaction, if any
    pub fn from_message(message: &ResolvedMessage, guild_id: Option<&str>) -> Self {
        Self {
            message_content: message.content.clone(),
            message_url: message_url(guild_id, &message.channel_id, &message.id),
            author: message.author.username.clone(),
            author_global_name: message.author.global_name.clone(),
        }
    }
}

/// Jump link to a message
///
/// Messages outside a guild (DMs, group DMs) use `@me` as the guild segment.
pub fn message_url(guild_id: Option<&str>, channel_id: &str, message_id: &str) -> String {
    format!(
        "https://discord.com/channels/{}/{}/{}",
        guild_id.unwrap_or(DIRECT_MESSAGE_GUILD),
        channel_id,
        message_id
    )
}
