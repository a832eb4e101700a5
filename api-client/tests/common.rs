//! Shared helpers for api-client integration tests

#![allow(dead_code)]

use api_client::{ApiClient, ClientConfig, MemoryNotifier, ReqwestTransport};
use std::time::Duration;
use wiremock::MockServer;

/// Client pointed at a mock server, recording notifications in memory
pub fn client_for(server: &MockServer) -> (ApiClient<ReqwestTransport, MemoryNotifier>, MemoryNotifier) {
    client_with_config(ClientConfig {
        backend_url: server.uri(),
        ..ClientConfig::default()
    })
}

pub fn client_with_config(config: ClientConfig) -> (ApiClient<ReqwestTransport, MemoryNotifier>, MemoryNotifier) {
    let notifier = MemoryNotifier::new();
    let client = ApiClient::from_config(&config)
        .expect("client should build")
        .with_notifier(notifier.clone());
    (client, notifier)
}

/// Address nothing listens on
pub fn unreachable_base_url() -> String {
    "http://127.0.0.1:9".to_string()
}

pub fn short_timeout() -> Duration {
    Duration::from_millis(100)
}
