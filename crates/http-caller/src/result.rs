//! Uniform call result type

/// Outcome of a single HTTP call.
///
/// Every verb method returns one of these regardless of how the call went;
/// callers inspect `response_code` and `body` to tell the cases apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallResult {
    /// Response body. `None` only if the transfer itself failed.
    pub body: Option<String>,
    /// HTTP status code. 0 if no response was received.
    pub response_code: u16,
}

impl CallResult {
    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.response_code)
    }

    /// Check if the response status is a client error (4xx)
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.response_code)
    }

    /// Check if the response status is a server error (5xx)
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.response_code)
    }

    /// Check if the transfer failed before any response was received
    pub fn transfer_failed(&self) -> bool {
        self.response_code == 0
    }
}
