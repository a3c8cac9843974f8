//! The caller and its shared execution path

use std::time::{Duration, Instant};

use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tracing::Level;

use crate::body::PostBody;
use crate::error::CallError;
use crate::options::CallOptions;
use crate::result::CallResult;
use crate::sanitize::redact_url;

/// Connect timeout applied unless overridden on the builder.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP caller.
///
/// Wraps a shared [`reqwest::Client`]; every verb method issues exactly one
/// request, logs duration, transport errors, status classification and the
/// response body against a credential-redacted URL, and returns a
/// [`CallResult`] on every path.
#[derive(Debug, Clone)]
pub struct HttpCaller {
    client: reqwest::Client,
}

impl HttpCaller {
    /// Create a caller with the default transport settings.
    pub fn new() -> Result<Self, CallError> {
        Self::builder().build()
    }

    /// Create a caller builder.
    pub fn builder() -> HttpCallerBuilder {
        HttpCallerBuilder::default()
    }

    /// Create a caller from an already-configured [`reqwest::Client`].
    ///
    /// The builder defaults (connect timeout, TLS verification) are not
    /// applied; the given client is used as-is.
    pub fn from_reqwest(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Issue a GET request.
    ///
    /// Non-empty `parameters` are URL-encoded and appended to `url` with `?`.
    /// The join is unconditional, so callers must not pass parameters
    /// alongside a URL that already carries a query string.
    pub async fn get(
        &self,
        url: &str,
        parameters: &[(&str, &str)],
        options: &CallOptions,
    ) -> CallResult {
        let url = if parameters.is_empty() {
            url.to_string()
        } else {
            let query = serde_urlencoded::to_string(parameters).unwrap_or_default();
            format!("{url}?{query}")
        };

        tracing::debug!("calling GET: {}", redact_url(&url));

        self.execute(Method::GET, &url, None, options).await
    }

    /// Issue a POST request with the given payload.
    pub async fn post(&self, url: &str, body: &PostBody, options: &CallOptions) -> CallResult {
        tracing::debug!("calling POST: {} with body {}", redact_url(url), body);

        self.execute(Method::POST, url, Some(body.encoded()), options)
            .await
    }

    /// Issue a PUT request.
    ///
    /// `parameters` are always URL-encoded into the request body.
    pub async fn put(
        &self,
        url: &str,
        parameters: &[(&str, &str)],
        options: &CallOptions,
    ) -> CallResult {
        let body = serde_urlencoded::to_string(parameters).unwrap_or_default();

        tracing::debug!("calling PUT: {} with body {}", redact_url(url), body);

        self.execute(Method::PUT, url, Some(body), options).await
    }

    /// Issue a DELETE request. No body is sent.
    pub async fn delete(&self, url: &str, options: &CallOptions) -> CallResult {
        tracing::debug!("calling DELETE: {}", redact_url(url));

        self.execute(Method::DELETE, url, None, options).await
    }

    /// Shared execution path for all verbs: send the request, then log
    /// duration, transport errors, the status classification and the body,
    /// in that order, all against the redacted URL.
    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        options: &CallOptions,
    ) -> CallResult {
        let display_url = redact_url(url);

        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            let caller_sets_content_type = options
                .headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("content-type"));
            if !caller_sets_content_type {
                request = request.header(CONTENT_TYPE, FORM_CONTENT_TYPE);
            }
            request = request.body(body);
        }
        for (name, value) in &options.headers {
            request = request.header(name.as_str(), value.as_str());
        }

        let start = Instant::now();
        let outcome = request.send().await;
        let elapsed = start.elapsed();

        tracing::debug!(
            "call duration: {:.3}s for url: {}",
            elapsed.as_secs_f64(),
            display_url
        );

        let (body, response_code) = match outcome {
            Ok(response) => {
                let code = response.status().as_u16();
                match response.text().await {
                    Ok(text) => (Some(text), code),
                    Err(err) => {
                        let err = CallError::from(err);
                        tracing::error!("transfer error ({}) url: {}", err, display_url);
                        (None, code)
                    }
                }
            }
            Err(err) => {
                let err = CallError::from(err);
                tracing::error!("transfer error ({}) url: {}", err, display_url);
                (None, 0)
            }
        };

        if let Some((level, line)) = classify(response_code, options.not_found_level, &display_url)
        {
            log_at(level, &line);
        }

        if !options.suppress_body_log {
            match &body {
                Some(text) => tracing::debug!("result: ({}) {}", response_code, text),
                None => tracing::debug!("result: ({}) <no body>", response_code),
            }
        }

        CallResult {
            body,
            response_code,
        }
    }
}

/// Builder for the caller's construction-time transport configuration.
#[derive(Debug)]
pub struct HttpCallerBuilder {
    connect_timeout: Duration,
    accept_invalid_certs: bool,
}

impl Default for HttpCallerBuilder {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            accept_invalid_certs: false,
        }
    }
}

impl HttpCallerBuilder {
    /// Timeout for establishing the connection (default 10 seconds).
    ///
    /// Only the connect phase is bounded. A server that accepts the
    /// connection and never sends a response will hang the call.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Accept invalid TLS certificates (default false).
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Build the caller.
    pub fn build(self) -> Result<HttpCaller, CallError> {
        let client = reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(CallError::from)?;
        Ok(HttpCaller { client })
    }
}

/// Map a status code to the severity and message of its classification log
/// line. Codes below 300 produce no line.
fn classify(code: u16, not_found_level: Level, url: &str) -> Option<(Level, String)> {
    if code >= 500 {
        Some((Level::ERROR, format!("http call error: {code} url: {url}")))
    } else if code == 404 {
        Some((not_found_level, format!("http call: {code} url: {url}")))
    } else if code >= 300 {
        Some((Level::WARN, format!("http call warning: {code} url: {url}")))
    } else {
        None
    }
}

/// Emit a message at a severity chosen at runtime. The level-specific macros
/// require a compile-time level, so dispatch over the five levels.
fn log_at(level: Level, message: &str) {
    match level {
        Level::ERROR => tracing::error!("{message}"),
        Level::WARN => tracing::warn!("{message}"),
        Level::INFO => tracing::info!("{message}"),
        Level::DEBUG => tracing::debug!("{message}"),
        Level::TRACE => tracing::trace!("{message}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://api.example.com/items";

    #[test]
    fn test_success_codes_are_not_classified() {
        assert!(classify(200, Level::WARN, URL).is_none());
        assert!(classify(201, Level::WARN, URL).is_none());
        assert!(classify(299, Level::WARN, URL).is_none());
        assert!(classify(0, Level::WARN, URL).is_none());
    }

    #[test]
    fn test_server_errors_classify_at_error() {
        let (level, line) = classify(500, Level::WARN, URL).expect("5xx must classify");
        assert_eq!(level, Level::ERROR);
        assert_eq!(line, "http call error: 500 url: https://api.example.com/items");

        let (level, _) = classify(503, Level::WARN, URL).expect("5xx must classify");
        assert_eq!(level, Level::ERROR);
    }

    #[test]
    fn test_redirects_and_client_errors_classify_at_warn() {
        for code in [300, 301, 403, 410, 499] {
            let (level, line) = classify(code, Level::ERROR, URL).expect("must classify");
            assert_eq!(level, Level::WARN);
            assert_eq!(
                line,
                format!("http call warning: {code} url: https://api.example.com/items")
            );
        }
    }

    #[test]
    fn test_not_found_uses_the_configured_level() {
        let (level, line) = classify(404, Level::WARN, URL).expect("404 must classify");
        assert_eq!(level, Level::WARN);
        assert_eq!(line, "http call: 404 url: https://api.example.com/items");

        let (level, _) = classify(404, Level::ERROR, URL).expect("404 must classify");
        assert_eq!(level, Level::ERROR);

        let (level, _) = classify(404, Level::DEBUG, URL).expect("404 must classify");
        assert_eq!(level, Level::DEBUG);
    }

    #[test]
    fn test_builder_defaults() {
        let builder = HttpCallerBuilder::default();
        assert_eq!(builder.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
        assert!(!builder.accept_invalid_certs);
    }

    #[test]
    fn test_builder_build() {
        let result = HttpCaller::builder()
            .connect_timeout(Duration::from_secs(2))
            .danger_accept_invalid_certs(true)
            .build();
        assert!(result.is_ok());
    }

    #[test]
    fn test_from_reqwest() {
        let caller = HttpCaller::from_reqwest(reqwest::Client::new());
        let _ = format!("{caller:?}");
    }
}
