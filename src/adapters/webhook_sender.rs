use crate::adapters::forward_outcome::ForwardOutcome;
use crate::bridge::webhook_payload::WebhookPayload;
use serenity::async_trait;

/// Delivers relayed messages to the configured webhook
#[async_trait]
pub trait WebhookSender: Send + Sync {
    /// POST the payload once
    ///
    /// # Returns
    ///
    /// * `Ok(ForwardOutcome::Delivered)` - The endpoint returned a 2xx status
    /// * `Ok(ForwardOutcome::Rejected)` - The endpoint returned any other status
    /// * `Err(_)` - The endpoint could not be reached
    async fn send(&self, payload: &WebhookPayload) -> anyhow::Result<ForwardOutcome>;
}
