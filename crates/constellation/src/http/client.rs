//! HTTP transport for the Constellation API.

use reqwest::header::{ACCEPT, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, trace};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{DecodeError, Error, InvalidInputError, ProtocolError, TransportError};

use super::endpoints::{ErrorBody, LinksParams};

/// HTTP client performing JSON GET requests against one base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    config: ClientConfig,
    user_agent: HeaderValue,
}

impl HttpClient {
    /// Create a client for `config`.
    ///
    /// # Errors
    ///
    /// Fails if the User-Agent is not a legal header value or the TLS
    /// backend cannot be initialised.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let user_agent =
            HeaderValue::from_str(&config.user_agent).map_err(|_| InvalidInputError::UserAgent {
                value: config.user_agent.clone(),
            })?;

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::from_reqwest(e, config.timeout))?;

        Ok(Self {
            client,
            config,
            user_agent,
        })
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the GET request for `endpoint`, appending `params` as the query
    /// string when given.
    pub fn build_request(
        &self,
        endpoint: &str,
        params: Option<&LinksParams<'_>>,
    ) -> Result<reqwest::Request, Error> {
        let url = self.endpoint_url(endpoint)?;

        let mut builder = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(USER_AGENT, self.user_agent.clone());
        if let Some(params) = params {
            builder = builder.query(params);
        }

        builder
            .build()
            .map_err(|e| TransportError::from_reqwest(e, self.config.timeout).into())
    }

    /// GET `endpoint` and decode the JSON body.
    #[instrument(skip(self, params), fields(base_url = %self.config.base_url))]
    pub async fn get_json<R>(
        &self,
        endpoint: &'static str,
        params: Option<&LinksParams<'_>>,
    ) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        let request = self.build_request(endpoint, params)?;
        debug!(url = %request.url(), "GET");
        trace!(?params, "query parameters");

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        trace!(status = %status, "response");

        if !status.is_success() {
            return Err(Self::parse_error_response(response).await.into());
        }

        let body = response.bytes().await.map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&body).map_err(|source| DecodeError { endpoint, source }.into())
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, Error> {
        let base = self.config.base_url.trim_end_matches('/');
        let raw = format!("{}{}", base, endpoint);
        Url::parse(&raw).map_err(|e| {
            InvalidInputError::BaseUrl {
                value: self.config.base_url.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        TransportError::from_reqwest(err, self.config.timeout).into()
    }

    /// Turn a failure response into a [`ProtocolError`], consuming the body.
    async fn parse_error_response(response: reqwest::Response) -> ProtocolError {
        let status = response.status();
        let reason = status.canonical_reason().map(str::to_string);

        let message = match response.bytes().await {
            Ok(body) => serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(ErrorBody::into_text),
            Err(_) => None,
        };

        ProtocolError::new(status.as_u16(), reason, message)
    }
}
