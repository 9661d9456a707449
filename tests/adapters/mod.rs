// Mock implementations for adapter layer testing

pub mod mock_webhook_sender;

pub use mock_webhook_sender::MockWebhookSender;
