use anyhow::Context as _;
use serde::Deserialize;
use url::Url;

/// Default address the interactions endpoint listens on
fn default_listen_addr() -> String {
    "0.0.0.0:8787".to_string()
}

#[derive(Deserialize, Clone)]
pub struct Params {
    #[serde(default)]
    pub insecure_mode: bool,
    pub discord_application_id: String,
    pub discord_public_key: String,
    pub webhook_url: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
}

/// Mask sensitive strings by showing only first and last few characters
fn mask_token(s: &str) -> String {
    const VISIBLE_CHARS: usize = 4;

    let chars: Vec<char> = s.chars().collect();
    if chars.is_empty() {
        return "<empty>".to_string();
    }
    if chars.len() <= VISIBLE_CHARS * 2 {
        return format!("{}***", chars[0]);
    }

    let head: String = chars[..VISIBLE_CHARS].iter().collect();
    let tail: String = chars[chars.len() - VISIBLE_CHARS..].iter().collect();
    format!("{}***{}", head, tail)
}

// Webhook URLs usually carry their credential in the path, so the URL is masked
impl std::fmt::Debug for Params {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Params")
            .field("insecure_mode", &self.insecure_mode)
            .field("discord_application_id", &self.discord_application_id)
            .field("discord_public_key", &self.discord_public_key)
            .field("webhook_url", &mask_token(&self.webhook_url))
            .field("listen_addr", &self.listen_addr)
            .finish()
    }
}

impl Params {
    pub fn new() -> anyhow::Result<Params> {
        envy::from_env::<Params>().context("Failed to load configuration")
    }

    /// Parsed webhook URL
    pub fn webhook_endpoint(&self) -> anyhow::Result<Url> {
        Url::parse(&self.webhook_url).context("Parsing WEBHOOK_URL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn params(webhook_url: &str) -> Params {
        Params {
            insecure_mode: false,
            discord_application_id: "1234567890".to_string(),
            discord_public_key: "ab".repeat(32),
            webhook_url: webhook_url.to_string(),
            listen_addr: default_listen_addr(),
        }
    }

    #[rstest]
    #[case::long_string("MTExMjIyMzMzNDQ0NTU1NjY2Nzc3ODg4OTk5", "MTEx***OTk5")]
    #[case::short_string("short", "s***")]
    #[case::empty_string("", "<empty>")]
    #[case::multibyte("ああああいいいいうう", "ああああ***いいうう")]
    fn test_mask_token(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(mask_token(input), expected);
    }

    #[test]
    fn test_params_debug_masks_webhook_url() {
        let params = params("https://discord.com/api/webhooks/123/secret-token-value");
        let debug_output = format!("{:?}", params);

        assert!(debug_output.contains("http***alue"));
        assert!(!debug_output.contains("secret-token"));
        assert!(debug_output.contains("1234567890"));
    }

    #[rstest]
    #[case::valid("https://example.com/hook", true)]
    #[case::relative("/hook", false)]
    #[case::empty("", false)]
    fn test_webhook_endpoint(#[case] url: &str, #[case] ok: bool) {
        assert_eq!(params(url).webhook_endpoint().is_ok(), ok);
    }

    #[test]
    fn test_default_listen_addr() {
        assert_eq!(default_listen_addr(), "0.0.0.0:8787");
    }
}
