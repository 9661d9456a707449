use anyhow::anyhow;
use msghook::adapters::{ForwardOutcome, WebhookSender};
use msghook::bridge::webhook_payload::WebhookPayload;
use reqwest::StatusCode;
use serenity::async_trait;
use std::sync::{Arc, Mutex};

/// Canned behaviour of the mock webhook
#[derive(Debug, Clone)]
pub enum MockBehavior {
    Respond(ForwardOutcome),
    Unreachable,
}

pub struct MockWebhookSender {
    pub sent_payloads: Arc<Mutex<Vec<WebhookPayload>>>,
    pub behavior: MockBehavior,
}

impl Default for MockWebhookSender {
    fn default() -> Self {
        Self::new()
    }
}

impl MockWebhookSender {
    /// Webhook that accepts every payload
    pub fn new() -> Self {
        Self::with_behavior(MockBehavior::Respond(ForwardOutcome::Delivered {
            status: StatusCode::OK,
        }))
    }

    /// Webhook that answers with the given status and body
    pub fn rejecting(status: StatusCode, body: &str) -> Self {
        Self::with_behavior(MockBehavior::Respond(ForwardOutcome::Rejected {
            status,
            body: body.to_string(),
        }))
    }

    /// Webhook that cannot be reached
    pub fn unreachable() -> Self {
        Self::with_behavior(MockBehavior::Unreachable)
    }

    pub fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            sent_payloads: Arc::new(Mutex::new(Vec::new())),
            behavior,
        }
    }

    pub fn get_sent_payloads(&self) -> Vec<WebhookPayload> {
        self.sent_payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookSender for MockWebhookSender {
    async fn send(&self, payload: &WebhookPayload) -> anyhow::Result<ForwardOutcome> {
        self.sent_payloads.lock().unwrap().push(payload.clone());
        match &self.behavior {
            MockBehavior::Respond(outcome) => Ok(outcome.clone()),
            MockBehavior::Unreachable => Err(anyhow!("connection refused")),
        }
    }
}
