//! Per-call options

use tracing::Level;

/// Optional inputs for a single call.
///
/// The defaults match the common case: no extra headers, the response body
/// logged at debug, 404 responses classified at warn.
#[derive(Debug, Clone)]
pub struct CallOptions {
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) suppress_body_log: bool,
    pub(crate) not_found_level: Level,
}

impl Default for CallOptions {
    fn default() -> Self {
        Self {
            headers: Vec::new(),
            suppress_body_log: false,
            not_found_level: Level::WARN,
        }
    }
}

impl CallOptions {
    /// Create options with the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a header to the request.
    ///
    /// Headers are applied after the verb-specific ones, so a caller-supplied
    /// `Content-Type` takes precedence over the implicit form encoding.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Skip the debug log line carrying the raw response body.
    pub fn suppress_body_log(mut self, suppress: bool) -> Self {
        self.suppress_body_log = suppress;
        self
    }

    /// Severity for the classification line of a 404 response.
    pub fn not_found_level(mut self, level: Level) -> Self {
        self.not_found_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = CallOptions::default();
        assert!(options.headers.is_empty());
        assert!(!options.suppress_body_log);
        assert_eq!(options.not_found_level, Level::WARN);
    }

    #[test]
    fn test_chained_setters() {
        let options = CallOptions::new()
            .header("Authorization", "Bearer abc")
            .header("X-Request-Id", "42")
            .suppress_body_log(true)
            .not_found_level(Level::ERROR);

        assert_eq!(
            options.headers,
            vec![
                ("Authorization".to_string(), "Bearer abc".to_string()),
                ("X-Request-Id".to_string(), "42".to_string()),
            ]
        );
        assert!(options.suppress_body_log);
        assert_eq!(options.not_found_level, Level::ERROR);
    }
}
