//! main client
//!
//! executes a request in a straight line: encode variables, race a fixed
//! fan-out of identical form posts, hand the winning body to the request's
//! parser.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::parser::ResultParser;
use crate::race;
use crate::request::{QueryResult, Request};
use reqwest::StatusCode;
use serde::Serialize;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use url::Url;

/// wire payload of one attempt: the raw query plus json-encoded variables,
/// posted as a urlencoded form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct QueryForm {
    pub(crate) query: String,
    pub(crate) variables: String,
}

/// graphql client that races redundant requests against one endpoint
#[derive(Clone)]
pub struct Client {
    config: Arc<ClientConfig>,
    http: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// create a new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = match &config.http_client {
            Some(http) => http.clone(),
            None => {
                let mut builder = reqwest::Client::builder()
                    .default_headers(config.extra_headers.clone())
                    .user_agent(config.user_agent.clone())
                    .timeout(config.timeout)
                    .danger_accept_invalid_certs(!config.verify_ssl);
                if let Some(customize) = &config.http_client_builder {
                    builder = customize(builder);
                }
                builder.build()?
            }
        };

        Ok(Self {
            config: Arc::new(config),
            http,
        })
    }

    /// access the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// execute a query or mutation request
    ///
    /// launches the configured fan-out of identical attempts and settles on
    /// whichever completes first, success or failure; a fast failing attempt
    /// beats slower successful ones. that trade favors bounded tail latency
    /// over best-effort success, and callers wanting another try can match
    /// on [`Error::is_network`].
    pub async fn execute<V, P>(&self, request: Request<V, P>) -> Result<QueryResult<V, P>>
    where
        V: Serialize,
        P: ResultParser,
    {
        let http = self.http.clone();
        self.execute_with(request, move |url, form| {
            let http = http.clone();
            async move {
                let response = http.post(url).form(&form).send().await?;
                let status = response.status();
                let body = response.bytes().await?.to_vec();
                Ok((status, body))
            }
        })
        .await
    }
}

impl Client {
    pub(crate) async fn execute_with<V, P, F, Fut>(
        &self,
        request: Request<V, P>,
        send: F,
    ) -> Result<QueryResult<V, P>>
    where
        V: Serialize,
        P: ResultParser,
        F: Fn(Url, QueryForm) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<(StatusCode, Vec<u8>)>> + Send + 'static,
    {
        // encoding failures must surface before anything is sent
        let encoded = request.encoded_variables()?;
        let url = self.config.endpoint_url()?;
        let form = QueryForm {
            query: request.query.clone(),
            variables: encoded,
        };

        let send = Arc::new(send);
        let started = Instant::now();
        let winner = race::first(self.config.fan_out, |_| {
            let send = Arc::clone(&send);
            let url = url.clone();
            let form = form.clone();
            async move {
                let (status, body) = send(url, form).await?;
                if status != StatusCode::OK {
                    return Err(Error::Protocol {
                        status: status.as_u16(),
                    });
                }
                Ok(body)
            }
        })
        .await
        .ok_or_else(|| Error::Config("fan-out must be at least 1".to_string()))?;

        let (attempt, outcome) = winner;
        tracing::debug!(
            attempt,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "request race settled"
        );

        let body = match outcome {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(error = %err, "winning attempt failed");
                return Err(err);
            }
        };

        match request.parser.parse(&body) {
            Ok(value) => Ok(QueryResult { request, value }),
            Err(err) => {
                tracing::warn!(error = %err, "result parser rejected response body");
                Err(Error::Parse(err))
            }
        }
    }
}
