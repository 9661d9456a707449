use crate::adapters::{ForwardOutcome, WebhookSender};
use crate::bridge::command::KnownCommand;
use crate::bridge::discord_text::truncate_content;
use crate::bridge::interaction::{ExtractionError, Interaction};
use crate::bridge::interaction_reply::InteractionReply;
use crate::bridge::webhook_payload::WebhookPayload;
use serenity::model::application::InteractionType;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const DELIVERED_MESSAGE: &str = "✅ Message sent to webhook.";
pub const UNREACHABLE_MESSAGE: &str = "Error: could not reach webhook.";

/// Route verified interactions and relay message commands to the webhook
pub struct InteractionBridge<S>
where
    S: WebhookSender,
{
    webhook_sender: Arc<S>,
}

impl<S> InteractionBridge<S>
where
    S: WebhookSender,
{
    /// Create a new InteractionBridge
    ///
    /// # Arguments
    ///
    /// * `webhook_sender` - The sender used for relaying messages
    pub fn new(webhook_sender: Arc<S>) -> Self {
        Self { webhook_sender }
    }

    /// Handle a verified interaction
    pub async fn dispatch(&self, interaction: &Interaction) -> InteractionReply {
        match interaction.kind {
            InteractionType::Ping => {
                debug!("Answering ping");
                InteractionReply::Pong
            }
            InteractionType::Command => self.handle_command(interaction).await,
            kind => {
                warn!(?kind, "Unsupported interaction type");
                InteractionReply::UnsupportedInteraction
            }
        }
    }

    async fn handle_command(&self, interaction: &Interaction) -> InteractionReply {
        let name = interaction
            .data
            .as_ref()
            .map(|data| data.name.as_str())
            .unwrap_or_default();

        match KnownCommand::from_name(name) {
            Some(KnownCommand::SendToWebhook) => self.send_to_webhook(interaction).await,
            None => {
                warn!(command = %name, "Unknown command");
                InteractionReply::UnknownCommand
            }
        }
    }

    /// Relay the message the command was invoked on
    async fn send_to_webhook(&self, interaction: &Interaction) -> InteractionReply {
        let message = match interaction
            .data
            .as_ref()
            .ok_or(ExtractionError::NoMessage)
            .and_then(|data| data.first_resolved_message())
        {
            Ok(message) => message,
            Err(err) => {
                error!(?err, "Could not find message in command data");
                return InteractionReply::MessageNotFound;
            }
        };

        info!(
            message_id = %message.id,
            channel_id = %message.channel_id,
            author = %message.author.username,
            "Relaying message to webhook"
        );

        let payload = WebhookPayload::from_message(&message, interaction.guild_id.as_deref());
        InteractionReply::Ephemeral(self.forward(&payload).await)
    }

    /// Send the payload and describe the outcome for the invoking user
    pub async fn forward(&self, payload: &WebhookPayload) -> String {
        match self.webhook_sender.send(payload).await {
            Ok(ForwardOutcome::Delivered { .. }) => DELIVERED_MESSAGE.to_string(),
            Ok(ForwardOutcome::Rejected { body, .. }) => {
                truncate_content(&format!("Error: {}", body))
            }
            Err(err) => {
                error!(?err, "Failed to reach webhook");
                UNREACHABLE_MESSAGE.to_string()
            }
        }
    }
}
