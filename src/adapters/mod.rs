// Trait definitions
pub mod webhook_sender;

// Type definitions
pub mod forward_outcome;

// Implementations
pub mod http_webhook_sender;

// Re-exports for convenience
pub use forward_outcome::ForwardOutcome;
pub use http_webhook_sender::HttpWebhookSender;
pub use webhook_sender::WebhookSender;
