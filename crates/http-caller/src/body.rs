//! POST payload variants

use std::fmt;

/// Payload for a POST call.
///
/// A POST accepts either structured key/value fields, sent form-encoded, or
/// a body the caller has already encoded, sent verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostBody {
    /// Key/value pairs, sent as `application/x-www-form-urlencoded`.
    Form(Vec<(String, String)>),
    /// A pre-encoded body, sent verbatim.
    Raw(String),
}

impl PostBody {
    /// Build a form payload from key/value pairs.
    pub fn form<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        PostBody::Form(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a raw payload from an already-encoded string.
    pub fn raw(body: impl Into<String>) -> Self {
        PostBody::Raw(body.into())
    }

    /// The bytes that go on the wire.
    pub(crate) fn encoded(&self) -> String {
        match self {
            PostBody::Form(pairs) => serde_urlencoded::to_string(pairs).unwrap_or_default(),
            PostBody::Raw(body) => body.clone(),
        }
    }
}

impl fmt::Display for PostBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostBody::Form(_) => f.write_str(&self.encoded()),
            PostBody::Raw(body) => f.write_str(body),
        }
    }
}
