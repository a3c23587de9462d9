//! The resolved client handle

use std::fmt;

use genai::Client;

use crate::types::ProviderKind;

use super::config::ClientConfig;
use super::genai_adapter::create_client;

/// A ready-to-use chat-completion client
///
/// Owns its `ClientConfig` and the `genai::Client` built from it. Every
/// resolution produces a fresh handle; clones share the underlying HTTP
/// client, which genai makes safe for concurrent requests.
///
/// Building a handle does no network I/O.
#[derive(Clone)]
pub struct ClientHandle {
    config: ClientConfig,
    client: Client,
}

impl ClientHandle {
    /// Build a handle from a config
    pub fn new(config: ClientConfig) -> Self {
        let client = create_client(&config);
        Self { config, client }
    }

    pub fn kind(&self) -> ProviderKind {
        self.config.kind()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying genai client
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Model name to send for `model`: the Azure deployment name for
    /// enterprise handles, the model itself otherwise
    pub fn model_name(&self, model: &str) -> String {
        self.config.deployment_for(model)
    }

    pub fn into_parts(self) -> (ClientConfig, Client) {
        (self.config, self.client)
    }
}

impl fmt::Debug for ClientHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHandle")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_from_standard_config() {
        let handle = ClientHandle::new(ClientConfig::standard("sk-test"));
        assert_eq!(handle.kind(), ProviderKind::Standard);
        assert_eq!(handle.config().api_version(), None);
        assert_eq!(handle.model_name("gpt-4.1"), "gpt-4.1");
    }

    #[test]
    fn test_handle_from_azure_config() {
        let handle = ClientHandle::new(
            ClientConfig::azure("sk-test", "https://x.openai.azure.com").with_api_version("2024-05-01"),
        );
        assert_eq!(handle.kind(), ProviderKind::Enterprise);
        assert_eq!(handle.config().api_version(), Some("2024-05-01"));
        assert_eq!(handle.model_name("gpt-4.1"), "gpt-41");
    }

    #[test]
    fn test_handle_debug_hides_key() {
        let handle = ClientHandle::new(ClientConfig::standard("sk-secret"));
        let debug = format!("{:?}", handle);
        assert!(debug.contains("ClientHandle"));
        assert!(!debug.contains("sk-secret"));
    }

    #[test]
    fn test_handle_into_parts() {
        let (config, _client) = ClientHandle::new(ClientConfig::standard("k")).into_parts();
        assert_eq!(config, ClientConfig::standard("k"));
    }

    #[test]
    fn test_handle_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientHandle>();
    }
}
