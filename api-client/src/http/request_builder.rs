use crate::error::{ApiClientError, Result};
use crate::traits::RequestBuilder;
use crate::types::ApiRequest;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Request};
use std::collections::HashMap;
use url::Url;

/// Implementation of RequestBuilder trait
#[derive(Clone)]
pub struct RequestBuilderImpl {
    client: Client,
    base_url: String,
    headers: HashMap<String, String>,
}

impl RequestBuilderImpl {
    /// Create a new request builder
    pub fn new(client: Client, base_url: String, headers: HashMap<String, String>) -> Self {
        Self {
            client,
            base_url,
            headers,
        }
    }

    /// Join the base URL and a request path with exactly one `/`
    pub fn resolve_url(&self, path: &str) -> Result<Url> {
        let url = join_url(&self.base_url, path);
        Ok(Url::parse(&url)?)
    }
}

/// Join a base URL and a path with exactly one `/` between them
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    match (base.is_empty(), path.is_empty()) {
        (true, _) => format!("/{}", path),
        (false, true) => base.to_string(),
        (false, false) => format!("{}/{}", base, path),
    }
}

/// Validate header names and values before they reach reqwest
fn header_map(headers: &HashMap<String, String>) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();
    for (key, value) in headers {
        let name = HeaderName::try_from(key.as_str())
            .map_err(|e| ApiClientError::invalid_config(format!("invalid header name '{}': {}", key, e)))?;
        let value = HeaderValue::try_from(value.as_str())
            .map_err(|e| ApiClientError::invalid_config(format!("invalid value for header '{}': {}", key, e)))?;
        map.insert(name, value);
    }
    Ok(map)
}

impl RequestBuilder for RequestBuilderImpl {
    fn build_request(&self, request: &ApiRequest) -> Result<Request> {
        let url = self.resolve_url(&request.path)?;

        let mut request_builder = self.client.request(request.method.clone(), url);

        if !request.query.is_empty() {
            request_builder = request_builder.query(&request.query);
        }

        // Configured headers first so per-request headers take precedence
        let mut headers = self.headers.clone();
        headers.extend(request.headers.clone());
        request_builder = request_builder.headers(header_map(&headers)?);

        if let Some(token) = &request.bearer_token {
            request_builder = request_builder.bearer_auth(token);
        }

        if let Some(body) = &request.body {
            request_builder = request_builder.json(body);
        }

        request_builder.build().map_err(Into::into)
    }
}
