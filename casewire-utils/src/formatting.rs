/// Zero-width space inserted after `@` so user text cannot ping anyone.
const MENTION_BREAK: &str = "@\u{200B}";

/// Discord caps embed field values at 1024 characters.
pub const EMBED_FIELD_LIMIT: usize = 1024;

/// Render a user mention (e.g. 42 -> "<@42>").
pub fn user_mention(user_id: u64) -> String {
    format!("<@{}>", user_id)
}

/// Neutralize `@everyone`, `@here` and raw mentions in user supplied text.
pub fn sanitize_mentions(text: &str) -> String {
    text.replace('@', MENTION_BREAK)
}

/// Format a per-guild case number as shown to users (e.g. 12 -> "#12").
pub fn format_case_label(case_id: u64) -> String {
    format!("#{}", case_id)
}

/// Cut text down to `max_chars` characters, marking the cut with an ellipsis.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }

    let keep = max_chars.saturating_sub(1);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push('…');
    truncated
}

/// Sanitize and clamp user text so it is safe to place in an embed field.
pub fn embed_field_text(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return "-".to_owned();
    }

    truncate_with_ellipsis(&sanitize_mentions(trimmed), EMBED_FIELD_LIMIT)
}

/// Discord timestamp markup, rendered client-side in the reader's timezone.
pub fn discord_timestamp(unix_secs: i64, style: char) -> String {
    format!("<t:{}:{}>", unix_secs, style)
}

#[cfg(test)]
mod tests {
    use super::{
        EMBED_FIELD_LIMIT, discord_timestamp, embed_field_text, format_case_label,
        sanitize_mentions, truncate_with_ellipsis, user_mention,
    };

    #[test]
    fn formats_mentions_and_labels() {
        assert_eq!(user_mention(1234), "<@1234>");
        assert_eq!(format_case_label(7), "#7");
        assert_eq!(discord_timestamp(1_700_000_000, 'R'), "<t:1700000000:R>");
    }

    #[test]
    fn breaks_mentions() {
        assert_eq!(sanitize_mentions("hi @everyone"), "hi @\u{200B}everyone");
        assert_eq!(sanitize_mentions("no pings"), "no pings");
    }

    #[test]
    fn truncates_on_char_boundaries() {
        assert_eq!(truncate_with_ellipsis("short", 10), "short");
        assert_eq!(truncate_with_ellipsis("abcdef", 4), "abc…");
        assert_eq!(truncate_with_ellipsis("ääääää", 3), "ää…");
    }

    #[test]
    fn embed_field_text_is_never_empty() {
        assert_eq!(embed_field_text("   "), "-");
        assert_eq!(embed_field_text(" @here "), "@\u{200B}here");

        let long = "x".repeat(EMBED_FIELD_LIMIT + 50);
        assert_eq!(embed_field_text(&long).chars().count(), EMBED_FIELD_LIMIT);
    }
}
