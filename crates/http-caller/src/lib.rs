//! Logging HTTP client wrapper
//!
//! This crate provides a single component, [`HttpCaller`]. Each verb method
//! issues one HTTP call through a shared transport client, logs request and
//! response metadata through `tracing`, strips `token`/`access_token` query
//! parameters from every logged URL, and returns a uniform [`CallResult`].
//!
//! Transport failures do not surface as errors: the failure is logged and the
//! call returns `CallResult { body: None, response_code: 0 }`. Non-2xx
//! responses are logged at a severity derived from the status code and
//! returned normally.
//!
//! # Example
//!
//! ```no_run
//! use http_caller::{CallOptions, HttpCaller};
//!
//! async fn example() -> Result<(), http_caller::CallError> {
//!     let caller = HttpCaller::new()?;
//!     let result = caller
//!         .get(
//!             "https://api.example.com/items",
//!             &[("q", "shoes")],
//!             &CallOptions::default(),
//!         )
//!         .await;
//!     println!("status: {}", result.response_code);
//!     Ok(())
//! }
//! ```

mod body;
mod caller;
mod error;
mod options;
mod result;
mod sanitize;

pub use body::PostBody;
pub use caller::{HttpCaller, HttpCallerBuilder};
pub use error::CallError;
pub use options::CallOptions;
pub use result::CallResult;
