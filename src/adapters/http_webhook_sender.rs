use super::forward_outcome::ForwardOutcome;
use super::webhook_sender::WebhookSender;
use crate::bridge::webhook_payload::WebhookPayload;
use anyhow::Context as _;
use serenity::async_trait;
use tracing::{info, warn};
use url::Url;

/// Implementation for sending payloads via HTTP
pub struct HttpWebhookSender {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpWebhookSender {
    /// Create a new HttpWebhookSender
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The webhook URL
    /// * `insecure_mode` - If true, accept invalid TLS certificates
    pub fn new(endpoint: Url, insecure_mode: bool) -> anyhow::Result<Self> {
        let client = reqwest::ClientBuilder::new()
            .danger_accept_invalid_certs(insecure_mode)
            .build()
            .context("Building HTTP Client")?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl WebhookSender for HttpWebhookSender {
    async fn send(&self, payload: &WebhookPayload) -> anyhow::Result<ForwardOutcome> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(payload)
            .send()
            .await
            .context("Sending payload to webhook")?;

        let status = response.status();
        if status.is_success() {
            info!(%status, message_url = %payload.message_url, "Message sent to webhook");
            return Ok(ForwardOutcome::Delivered { status });
        }

        let body = response
            .text()
            .await
            .context("Reading webhook error response")?;
        warn!(
            %status,
            message_url = %payload.message_url,
            body_len = body.len(),
            "Webhook returned non-success status"
        );

        Ok(ForwardOutcome::Rejected { status, body })
    }
}
