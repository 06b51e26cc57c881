//! client configuration
//!
//! build a [`ClientConfig`] with the endpoint url and optional overrides.
//! pass it to [`crate::Client::new`] to create a client.

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// number of identical attempts raced per request
pub const DEFAULT_FAN_OUT: usize = 3;

/// configuration for the racing graphql client
#[derive(Clone)]
pub struct ClientConfig {
    /// original endpoint url input
    pub(crate) raw_endpoint: String,

    /// parsed query-execution endpoint, or the error the input produced
    /// (e.g., "<https://api.example.com/graphql>")
    pub(crate) endpoint: std::result::Result<Url, url::ParseError>,

    /// number of redundant attempts launched per execute call
    pub(crate) fan_out: usize,

    /// per-attempt request timeout
    pub(crate) timeout: Duration,

    /// user agent string
    pub(crate) user_agent: String,

    /// whether to verify ssl certificates
    pub(crate) verify_ssl: bool,

    /// additional headers to send with every request
    pub(crate) extra_headers: HeaderMap,

    /// prebuilt http client (takes precedence over http_client_builder)
    pub(crate) http_client: Option<reqwest::Client>,

    /// callback to customize the http client builder before building
    pub(crate) http_client_builder:
        Option<Arc<dyn Fn(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + Sync>>,
}

impl ClientConfig {
    /// create a new client configuration
    ///
    /// # arguments
    ///
    /// * `endpoint` - the full url of the query-execution endpoint
    ///
    /// # example
    ///
    /// ```
    /// use gqlrace::ClientConfig;
    ///
    /// let config = ClientConfig::new("https://api.example.com/graphql");
    /// ```
    pub fn new(endpoint: impl AsRef<str>) -> Self {
        let endpoint_str = endpoint.as_ref();

        let normalized = endpoint_str.trim_end_matches('/');

        let endpoint = Url::parse(normalized)
            .or_else(|_| Url::parse(&format!("https://{}", normalized)));

        Self {
            raw_endpoint: endpoint_str.to_string(),
            endpoint,
            fan_out: DEFAULT_FAN_OUT,
            timeout: Duration::from_secs(30),
            user_agent: format!("gqlrace/{} (Rust)", env!("CARGO_PKG_VERSION")),
            verify_ssl: true,
            extra_headers: HeaderMap::new(),
            http_client: None,
            http_client_builder: None,
        }
    }

    /// set the number of redundant attempts raced per request
    ///
    /// default: 3. must be at least 1. every attempt is identical and hits
    /// the same endpoint, so raising this multiplies load on the server.
    pub fn with_fan_out(mut self, fan_out: usize) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// set the per-attempt request timeout
    ///
    /// default: 30 seconds. abandoned attempts rely on this deadline for
    /// cleanup once a race is decided.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// set a custom user agent string
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// disable ssl certificate verification (not recommended for production)
    ///
    /// default: enabled
    pub fn with_ssl_verification(mut self, verify: bool) -> Self {
        self.verify_ssl = verify;
        self
    }

    /// add a header to every request
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.extra_headers.insert(name, value);
        self
    }

    /// add a set of headers to every request
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.extra_headers.extend(headers);
        self
    }

    /// access extra headers configured on this client
    pub fn extra_headers(&self) -> &HeaderMap {
        &self.extra_headers
    }

    /// inject a prebuilt http client.
    ///
    /// when set, this client is used as-is and takes precedence over
    /// `with_http_client_builder`. all transport configuration — headers,
    /// tls, timeouts, ssl verification, user agent — comes from the prebuilt
    /// client; the corresponding `ClientConfig` fields are ignored.
    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// customize the http client builder before the client is created.
    ///
    /// the callback receives a builder that already has the extra headers,
    /// user agent, timeout, and ssl settings applied. use this to add proxy
    /// config, custom tls roots, or other transport settings without
    /// reimplementing the defaults.
    ///
    /// ignored if `with_http_client` is also set.
    pub fn with_http_client_builder<F>(mut self, f: F) -> Self
    where
        F: Fn(reqwest::ClientBuilder) -> reqwest::ClientBuilder + Send + Sync + 'static,
    {
        self.http_client_builder = Some(Arc::new(f));
        self
    }

    /// validate the configuration
    pub(crate) fn validate(&self) -> Result<()> {
        let endpoint = match &self.endpoint {
            Ok(url) => url,
            Err(err) => {
                return Err(Error::Config(format!(
                    "invalid endpoint url {}: {}",
                    self.raw_endpoint, err
                )))
            }
        };

        if endpoint.scheme() != "http" && endpoint.scheme() != "https" {
            return Err(Error::Config(format!(
                "invalid url scheme: {}. must be http or https",
                endpoint.scheme()
            )));
        }

        if self.fan_out == 0 {
            return Err(Error::Config("fan-out must be at least 1".to_string()));
        }

        Ok(())
    }

    /// resolve the endpoint url for a request
    pub(crate) fn endpoint_url(&self) -> Result<Url> {
        self.endpoint.clone().map_err(Error::from)
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("fan_out", &self.fan_out)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("verify_ssl", &self.verify_ssl)
            .field("extra_headers", &self.extra_headers.len())
            .field("http_client", &self.http_client.is_some())
            .field("http_client_builder", &self.http_client_builder.is_some())
            .finish()
    }
}
