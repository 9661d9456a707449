use serde::Serialize;

/// ACK a PING
pub const RESPONSE_TYPE_PONG: u8 = 1;
/// Respond to an interaction with a message
pub const RESPONSE_TYPE_CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;
/// Message flag: only the invoking user can see the message
pub const FLAG_EPHEMERAL: u64 = 1 << 6;

/// Outcome of dispatching an interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InteractionReply {
    /// Handshake acknowledgement
    Pong,
    /// Message shown only to the invoking user
    Ephemeral(String),
    /// The command data carried no resolved message
    MessageNotFound,
    /// Command name not handled by this application
    UnknownCommand,
    /// Interaction type not handled by this application
    UnsupportedInteraction,
}

impl InteractionReply {
    /// Interaction response body, for successful replies
    pub fn response(&self) -> Option<InteractionResponse> {
        match self {
            InteractionReply::Pong => Some(InteractionResponse::pong()),
            InteractionReply::Ephemeral(content) => {
                Some(InteractionResponse::ephemeral(content.clone()))
            }
            _ => None,
        }
    }

    /// Error message, for rejected interactions
    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            InteractionReply::MessageNotFound => Some("Could not find message"),
            InteractionReply::UnknownCommand => Some("Unknown command"),
            InteractionReply::UnsupportedInteraction => Some("Unsupported interaction type"),
            InteractionReply::Pong | InteractionReply::Ephemeral(_) => None,
        }
    }
}

/// Interaction response as sent back to Discord
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<InteractionResponseData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionResponseData {
    pub content: String,
    pub flags: u64,
}

impl InteractionResponse {
    pub fn pong() -> Self {
        Self {
            kind: RESPONSE_TYPE_PONG,
            data: None,
        }
    }

    pub fn ephemeral(content: String) -> Self {
        Self {
            kind: RESPONSE_TYPE_CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(InteractionResponseData {
                content,
                flags: FLAG_EPHEMERAL,
            }),
        }
    }
}

/// JSON error body for rejected interactions
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_pong_serialization() {
        let value = serde_json::to_value(InteractionResponse::pong()).unwrap();
        assert_eq!(value, json!({"type": 1}));
    }

    #[test]
    fn test_ephemeral_serialization() {
        let value = serde_json::to_value(InteractionResponse::ephemeral("hi".to_string())).unwrap();
        assert_eq!(value, json!({"type": 4, "data": {"content": "hi", "flags": 64}}));
    }

    #[rstest]
    #[case::pong(InteractionReply::Pong, true)]
    #[case::ephemeral(InteractionReply::Ephemeral("x".to_string()), true)]
    #[case::not_found(InteractionReply::MessageNotFound, false)]
    #[case::unknown_command(InteractionReply::UnknownCommand, false)]
    #[case::unsupported(InteractionReply::UnsupportedInteraction, false)]
    fn test_reply_is_either_response_or_error(#[case] reply: InteractionReply, #[case] ok: bool) {
        assert_eq!(reply.response().is_some(), ok);
        assert_eq!(reply.error_message().is_some(), !ok);
    }
}
