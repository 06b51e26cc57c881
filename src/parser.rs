//! result parsing
//!
//! the response body is opaque bytes; the caller decides what they mean by
//! supplying a [`ResultParser`]. wrap a closure with [`parser_fn`], or use
//! [`JsonParser`] for the common deserialize-into-a-type case.

use crate::error::BoxError;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;

/// capability for turning a raw response body into a typed value
///
/// invoked exactly once per successful execute, after the body has been
/// fully buffered.
pub trait ResultParser {
    /// parsed value type
    type Output;

    /// parse the raw body bytes
    fn parse(&self, body: &[u8]) -> std::result::Result<Self::Output, BoxError>;
}

/// parser backed by a plain closure
pub struct ParserFn<F>(F);

/// wrap a closure as a [`ResultParser`]
pub fn parser_fn<T, F>(f: F) -> ParserFn<F>
where
    F: Fn(&[u8]) -> std::result::Result<T, BoxError>,
{
    ParserFn(f)
}

impl<T, F> ResultParser for ParserFn<F>
where
    F: Fn(&[u8]) -> std::result::Result<T, BoxError>,
{
    type Output = T;

    fn parse(&self, body: &[u8]) -> std::result::Result<T, BoxError> {
        (self.0)(body)
    }
}

/// parser that deserializes the body as json into `T`
pub struct JsonParser<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonParser<T> {
    /// create a json parser for `T`
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for JsonParser<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonParser<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for JsonParser<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JsonParser")
    }
}

impl<T: DeserializeOwned> ResultParser for JsonParser<T> {
    type Output = T;

    fn parse(&self, body: &[u8]) -> std::result::Result<T, BoxError> {
        serde_json::from_slice(body).map_err(Into::into)
    }
}
