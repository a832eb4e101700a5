use crate::config::ClientConfig;
use crate::error::{ApiClientError, Result};
use crate::http::{RequestBuilderImpl, ResponseConverterImpl};
use crate::traits::{HttpTransport, RequestBuilder, ResponseConverter};
use crate::types::{ApiRequest, HttpResponse};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// reqwest-backed transport
#[derive(Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Option<Duration>,
    request_builder: RequestBuilderImpl,
    response_converter: ResponseConverterImpl,
}

impl ReqwestTransport {
    /// Create a new transport from client configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let timeout = config.timeout();

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let request_builder = RequestBuilderImpl::new(
            client.clone(),
            config.backend_url.clone(),
            config.headers.clone().unwrap_or_default(),
        );

        Ok(Self {
            client,
            timeout,
            request_builder,
            response_converter: ResponseConverterImpl::new().with_timeout(timeout),
        })
    }

    /// Create a transport for a base URL with default settings
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Result<Self> {
        Self::new(&ClientConfig {
            backend_url: base_url.into(),
            ..ClientConfig::default()
        })
    }
}

impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<HttpResponse> {
        let http_request = self
            .request_builder
            .build_request(request)
            .map_err(|e| match e {
                ApiClientError::Http(err) => ApiClientError::from_transport(err, self.timeout),
                other => other,
            })?;

        debug!(method = %http_request.method(), url = %http_request.url(), "sending request");

        let response = self
            .client
            .execute(http_request)
            .await
            .map_err(|e| ApiClientError::from_transport(e, self.timeout))?;

        let response = self.response_converter.convert_response(response).await?;
        debug!(status = response.status, url = %response.url, "received response");

        Ok(response)
    }
}
