//! request and result types
//!
//! a [`Request`] bundles the query text, its variables, and the parser that
//! interprets the response body. execute consumes the request and returns it
//! inside the [`QueryResult`] alongside the parsed value.

use crate::error::Result;
use crate::parser::ResultParser;
use serde::Serialize;

/// a graphql query or mutation ready to execute
///
/// immutable once constructed. `variables` may be any serializable tree of
/// scalars, mappings, and sequences; encoding happens before anything is
/// sent, so a failing `Serialize` impl never reaches the wire.
pub struct Request<V, P> {
    /// raw query or mutation text
    pub query: String,
    /// query variables, json-encoded at execute time
    pub variables: V,
    /// parser applied to the raw response body
    pub parser: P,
}

impl<V, P> Request<V, P>
where
    V: Serialize,
    P: ResultParser,
{
    /// create a new request
    pub fn new(query: impl Into<String>, variables: V, parser: P) -> Self {
        Self {
            query: query.into(),
            variables,
            parser,
        }
    }

    /// json-encode the variables for the wire
    ///
    /// struct fields encode in declaration order, so encoding the same value
    /// twice yields the same string; map-typed variables follow the map's
    /// iteration order.
    pub(crate) fn encoded_variables(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.variables)?)
    }
}

impl<V, P> std::fmt::Debug for Request<V, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

/// the outcome of a successfully executed request
///
/// only constructed when encoding, transport, and parsing all succeeded.
pub struct QueryResult<V, P: ResultParser> {
    /// the originating request
    pub request: Request<V, P>,
    /// the parsed response value
    pub value: P::Output,
}

impl<V, P: ResultParser> std::fmt::Debug for QueryResult<V, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryResult")
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{BoxError, Error};
    use crate::parser::parser_fn;
    use serde::Serializer;

    fn noop_parser() -> impl ResultParser<Output = ()> {
        parser_fn(|_body: &[u8]| -> std::result::Result<(), BoxError> { Ok(()) })
    }

    #[test]
    fn test_encode_simple_tree() {
        let variables = serde_json::json!({"name": "ada", "limit": 3, "tags": ["a", "b"]});
        let request = Request::new("query { thing }", variables, noop_parser());
        let encoded = request.encoded_variables().unwrap();
        assert_eq!(encoded, r#"{"limit":3,"name":"ada","tags":["a","b"]}"#);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let variables = serde_json::json!({"b": 2, "a": 1});
        let request = Request::new("", variables, noop_parser());
        let first = request.encoded_variables().unwrap();
        let second = request.encoded_variables().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_encode_null_variables() {
        let request = Request::new("query { thing }", serde_json::Value::Null, noop_parser());
        assert_eq!(request.encoded_variables().unwrap(), "null");
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> std::result::Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused to serialize"))
        }
    }

    #[test]
    fn test_encode_failure_surfaces_as_encoding_error() {
        let request = Request::new("query { thing }", Unserializable, noop_parser());
        let err = request.encoded_variables().unwrap_err();
        assert!(matches!(err, Error::Encoding(_)));
    }

    #[test]
    fn test_debug_summarizes_without_variables() {
        let variables = serde_json::json!({"secret": "hunter2"});
        let request = Request::new("query { thing }", variables, noop_parser());
        let debug = format!("{request:?}");
        assert!(debug.contains("query { thing }"));
        assert!(!debug.contains("hunter2"));

        let result = QueryResult {
            request,
            value: (),
        };
        let debug = format!("{result:?}");
        assert!(debug.contains("QueryResult"));
        assert!(debug.contains("query { thing }"));
    }
}
