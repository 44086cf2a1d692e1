use anyhow::{anyhow, Result};

/// Shown instead of a voter name when the account has none.
pub const NAMELESS_PLACEHOLDER: &str = "Без имени";

/// Label used for chats without a title (private chats).
pub const UNTITLED_CHAT_LABEL: &str = "Чат";

const MAX_LABEL_CHARS: usize = 30;

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Positive IDs should be within reasonable range for user chats (up to 2^31-1)
    if chat_id > 2147483647 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Negative IDs can be:
    // - Group chats: small negative numbers like -12345 (up to around -2^31)
    // - Supergroups: very large negative numbers starting around -1000000000000
    if chat_id < -2000000000000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

/// Trims the voter's first name, falling back to a placeholder when blank.
pub fn normalize_display_name(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        NAMELESS_PLACEHOLDER.to_string()
    } else {
        name.to_string()
    }
}

/// Drops empty handles and a leading `@` so the renderer can add its own.
pub fn normalize_handle(handle: Option<&str>) -> Option<String> {
    handle
        .map(|h| h.trim().trim_start_matches('@'))
        .filter(|h| !h.is_empty())
        .map(str::to_string)
}

/// Turns a chat label into a filename fragment.
///
/// Strips `\/:*?"<>|`, collapses whitespace runs into a single `_` and keeps
/// at most 30 characters. An empty label becomes `chat`.
pub fn sanitize_chat_label(label: &str) -> String {
    let label = if label.is_empty() { "chat" } else { label };

    let mut out = String::with_capacity(label.len());
    let mut in_whitespace = false;
    for c in label.chars() {
        if matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
            continue;
        }
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }

    out.chars().take(MAX_LABEL_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_unsafe_characters() {
        assert_eq!(sanitize_chat_label(r#"a\b/c:d*e?f"g<h>i|j"#), "abcdefghij");
    }

    #[test]
    fn test_sanitize_collapses_whitespace() {
        assert_eq!(sanitize_chat_label("10 \t Б  класс"), "10_Б_класс");
    }

    #[test]
    fn test_sanitize_truncates_by_characters() {
        let long = "я".repeat(50);
        assert_eq!(sanitize_chat_label(&long).chars().count(), 30);
    }

    #[test]
    fn test_sanitize_empty_label() {
        assert_eq!(sanitize_chat_label(""), "chat");
    }

    #[test]
    fn test_display_name_placeholder() {
        assert_eq!(normalize_display_name("   "), NAMELESS_PLACEHOLDER);
        assert_eq!(normalize_display_name(" Аня "), "Аня");
    }

    #[test]
    fn test_handle_normalization() {
        assert_eq!(normalize_handle(Some("@anya")), Some("anya".to_string()));
        assert_eq!(normalize_handle(Some("")), None);
        assert_eq!(normalize_handle(None), None);
    }
}
