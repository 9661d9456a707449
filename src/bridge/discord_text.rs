//! Discord text limits
//!
//! Interaction replies are regular messages and share the 2000 character
//! content limit. Lengths are counted in characters, not bytes.

use tracing::warn;

/// Maximum message content length accepted by Discord
pub const MAX_CONTENT_LEN: usize = 2000;

/// Fit reply content into a single Discord message
///
/// Over-long content is cut to 1997 characters followed by "...".
pub fn truncate_content(content: &str) -> String {
    let char_count = content.chars().count();
    if char_count <= MAX_CONTENT_LEN {
        return content.to_string();
    }

    let mut truncated: String = content.chars().take(MAX_CONTENT_LEN - 3).collect();
    truncated.push_str("...");

    warn!(
        original_len = char_count,
        truncated_len = MAX_CONTENT_LEN,
        "Reply content exceeds Discord limit, truncated"
    );

    truncated
}
