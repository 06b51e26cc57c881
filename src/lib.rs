//! graphql client with redundant request racing
//!
//! this crate provides a small async client for a single graphql endpoint.
//! each execute call json-encodes the request variables, posts the query as
//! form data, and races a fixed fan-out of identical attempts; the first
//! outcome to arrive wins and its body is handed to a caller-supplied
//! [`ResultParser`]. losing attempts are abandoned and cleaned up by the
//! transport's own timeout.
//!
//! ## quick start
//!
//! ```no_run
//! use gqlrace::{Client, ClientConfig, JsonParser, Request};
//! use std::collections::HashMap;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(ClientConfig::new("https://api.example.com/graphql"))?;
//! let request = Request::new(
//!     "query($id: ID!) { node(id: $id) { name } }",
//!     serde_json::json!({"id": "42"}),
//!     JsonParser::<HashMap<String, serde_json::Value>>::new(),
//! );
//! let result = client.execute(request).await?;
//! println!("{:?}", result.value);
//! # Ok(())
//! # }
//! ```
//!
//! ## race semantics
//!
//! the winner of the race is whichever attempt *completes* first, whether it
//! succeeded or failed. this bounds tail latency at the cost of occasionally
//! reporting a fast failure while a slower attempt would have succeeded; see
//! [`Client::execute`] for how callers can compensate.

mod client;
mod config;
mod error;
mod parser;
mod race;
mod request;

pub use client::Client;
pub use config::{ClientConfig, DEFAULT_FAN_OUT};
pub use error::{BoxError, Error, Result};
pub use parser::{parser_fn, JsonParser, ParserFn, ResultParser};
pub use request::{QueryResult, Request};
