//! URL redaction for log output

use url::Url;

/// Query keys that carry credentials and must never reach the logs.
const REDACTED_KEYS: [&str; 2] = ["token", "access_token"];

/// Remove credential-bearing query parameters from a URL.
///
/// The result is for log output only; the outgoing request always uses the
/// original URL. A URL without a query component, or one that does not parse,
/// is returned unchanged. Remaining keys may be re-encoded in normalized
/// form, and a query left empty after filtering loses its `?`.
pub(crate) fn redact_url(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if parsed.query().is_none() {
        return url.to_string();
    }

    let kept: Vec<(String, String)> = parsed
        .query_pairs()
        .filter(|(key, _)| !REDACTED_KEYS.contains(&key.as_ref()))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    if kept.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(&kept);
    }
    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_removed() {
        assert_eq!(
            redact_url("https://api.example.com/items?token=secret&q=shoes"),
            "https://api.example.com/items?q=shoes"
        );
    }

    #[test]
    fn test_access_token_is_removed() {
        assert_eq!(
            redact_url("https://api.example.com/items?q=shoes&access_token=secret"),
            "https://api.example.com/items?q=shoes"
        );
    }

    #[test]
    fn test_query_of_only_credentials_disappears() {
        assert_eq!(
            redact_url("https://api.example.com/items?token=a&access_token=b"),
            "https://api.example.com/items"
        );
    }

    #[test]
    fn test_url_without_query_is_unchanged() {
        assert_eq!(
            redact_url("https://api.example.com/items"),
            "https://api.example.com/items"
        );
    }

    #[test]
    fn test_unparseable_input_is_unchanged() {
        assert_eq!(redact_url("not a url"), "not a url");
    }

    #[test]
    fn test_prefixed_keys_are_kept() {
        // Only exact key matches are credentials; `csrf_token` is not.
        assert_eq!(
            redact_url("https://api.example.com/items?csrf_token=x&token=y"),
            "https://api.example.com/items?csrf_token=x"
        );
    }

    #[test]
    fn test_fragment_survives() {
        assert_eq!(
            redact_url("https://api.example.com/items?token=x&q=1#section"),
            "https://api.example.com/items?q=1#section"
        );
    }

    #[test]
    fn test_remaining_key_order_is_preserved() {
        assert_eq!(
            redact_url("https://api.example.com/items?b=2&token=x&a=1"),
            "https://api.example.com/items?b=2&a=1"
        );
    }
}
