pub mod command;
pub mod discord_text;
pub mod interaction;
pub mod interaction_bridge;
pub mod interaction_reply;
pub mod signature;
pub mod webhook_payload;
