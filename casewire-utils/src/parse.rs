const WEBHOOK_PREFIXES: [&str; 4] = [
    "https://discord.com/api/webhooks/",
    "https://discordapp.com/api/webhooks/",
    "https://ptb.discord.com/api/webhooks/",
    "https://canary.discord.com/api/webhooks/",
];

/// Validate a Discord webhook URL of the form `https://discord.com/api/webhooks/<id>/<token>`.
///
/// Returns the trimmed URL when it is usable, `None` otherwise.
pub fn parse_webhook_url(raw: &str) -> Option<String> {
    let value = raw.trim().trim_start_matches('<').trim_end_matches('>');

    let rest = WEBHOOK_PREFIXES
        .iter()
        .find_map(|prefix| value.strip_prefix(prefix))?;

    let mut parts = rest.trim_end_matches('/').split('/');
    let id = parts.next()?;
    let token = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    if id.is_empty() || !id.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    if token.is_empty()
        || !token
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_')
    {
        return None;
    }

    Some(value.trim_end_matches('/').to_owned())
}

/// Hide the secret token part of a webhook URL for display.
pub fn redact_webhook_url(url: &str) -> String {
    match url.rsplit_once('/') {
        Some((head, _token)) => format!("{}/…", head),
        None => "…".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_webhook_url, redact_webhook_url};

    #[test]
    fn accepts_discord_webhook_urls() {
        assert_eq!(
            parse_webhook_url("https://discord.com/api/webhooks/123/abc-DEF_9"),
            Some("https://discord.com/api/webhooks/123/abc-DEF_9".to_owned())
        );
        assert_eq!(
            parse_webhook_url(" <https://discordapp.com/api/webhooks/1/t/> "),
            Some("https://discordapp.com/api/webhooks/1/t".to_owned())
        );
    }

    #[test]
    fn rejects_foreign_or_malformed_urls() {
        assert_eq!(parse_webhook_url("http://discord.com/api/webhooks/1/t"), None);
        assert_eq!(parse_webhook_url("https://example.com/api/webhooks/1/t"), None);
        assert_eq!(parse_webhook_url("https://discord.com/api/webhooks/abc/t"), None);
        assert_eq!(parse_webhook_url("https://discord.com/api/webhooks/1"), None);
        assert_eq!(parse_webhook_url("https://discord.com/api/webhooks/1/t/x"), None);
        assert_eq!(parse_webhook_url(""), None);
    }

    #[test]
    fn redacts_tokens() {
        assert_eq!(
            redact_webhook_url("https://discord.com/api/webhooks/1/secret"),
            "https://discord.com/api/webhooks/1/…"
        );
    }
}
