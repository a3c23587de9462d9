//! Client configuration with provider defaults
//!
//! `ClientConfig` is what a handle is built from. The two constructors seed
//! it with the defaults each backend expects; callers then override fields
//! with `with_*` methods.

use serde::Serialize;

use crate::types::{Credentials, ProviderKind};

/// Default base URL for api.openai.com
pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";

/// api-version used when an Azure config is built without overriding it
pub const AZURE_DEFAULT_API_VERSION: &str = "2023-05-15";

/// Configuration for one chat-completion backend
///
/// Serializes without the API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientConfig {
    #[serde(skip)]
    credentials: Credentials,
    kind: ProviderKind,
    base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_version: Option<String>,
}

impl ClientConfig {
    /// Config for api.openai.com
    pub fn standard(credentials: impl Into<Credentials>) -> Self {
        Self {
            credentials: credentials.into(),
            kind: ProviderKind::Standard,
            base_url: OPENAI_API_BASE.to_string(),
            api_version: None,
        }
    }

    /// Config for an Azure OpenAI resource at `endpoint`, using the
    /// default api-version
    pub fn azure(credentials: impl Into<Credentials>, endpoint: impl Into<String>) -> Self {
        Self {
            credentials: credentials.into(),
            kind: ProviderKind::Enterprise,
            base_url: endpoint.into(),
            api_version: Some(AZURE_DEFAULT_API_VERSION.to_string()),
        }
    }

    /// Override the api-version
    ///
    /// The value is stored as given, including the empty string.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    pub fn kind(&self) -> ProviderKind {
        self.kind
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `Some` only for Azure configs
    pub fn api_version(&self) -> Option<&str> {
        self.api_version.as_deref()
    }

    /// Azure deployment name for `model`
    ///
    /// Azure deployment names cannot contain `.` or `:`, so those are
    /// dropped (`gpt-3.5-turbo` becomes `gpt-35-turbo`). Standard configs
    /// return the model unchanged.
    pub fn deployment_for(&self, model: &str) -> String {
        match self.kind {
            ProviderKind::Standard => model.to_string(),
            ProviderKind::Enterprise => model.chars().filter(|c| *c != '.' && *c != ':').collect(),
        }
    }

    /// Full request URL for an API path such as `/chat/completions`
    ///
    /// Azure URLs address a deployment and carry `api-version`:
    /// `{endpoint}/openai/deployments/{deployment}{suffix}?api-version={v}`.
    /// With an empty model the deployment segment is left out.
    pub fn full_url(&self, suffix: &str, model: &str) -> String {
        match self.kind {
            ProviderKind::Standard => format!("{}{}", self.base_url, suffix),
            ProviderKind::Enterprise => {
                let base = self.base_url.trim_end_matches('/');
                let version = self.api_version.as_deref().unwrap_or_default();
                if model.is_empty() {
                    format!("{}/openai{}?api-version={}", base, suffix, version)
                } else {
                    format!(
                        "{}/openai/deployments/{}{}?api-version={}",
                        base,
                        self.deployment_for(model),
                        suffix,
                        version
                    )
                }
            }
        }
    }

    /// Header name and value that authenticate a request
    pub fn auth_header(&self) -> (&'static str, String) {
        match self.kind {
            ProviderKind::Standard => ("Authorization", format!("Bearer {}", self.credentials.expose())),
            ProviderKind::Enterprise => ("api-key", self.credentials.expose().to_string()),
        }
    }

    /// Base URL the OpenAI-compatible chat adapter is pointed at
    ///
    /// Always ends in `/`. For Azure this is the resource's `/openai/`
    /// root; chat requests themselves go to `full_url`, which adds the
    /// deployment and `api-version`.
    pub fn service_base_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        match self.kind {
            ProviderKind::Standard => format!("{}/", base),
            ProviderKind::Enterprise => format!("{}/openai/", base),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_defaults() {
        let config = ClientConfig::standard("sk-test");
        assert_eq!(config.kind(), ProviderKind::Standard);
        assert_eq!(config.base_url(), OPENAI_API_BASE);
        assert_eq!(config.api_version(), None);
        assert_eq!(config.credentials().expose(), "sk-test");
    }

    #[test]
    fn test_azure_defaults_then_override() {
        let config = ClientConfig::azure("k", "https://x.openai.azure.com");
        assert_eq!(config.kind(), ProviderKind::Enterprise);
        assert_eq!(config.base_url(), "https://x.openai.azure.com");
        assert_eq!(config.api_version(), Some(AZURE_DEFAULT_API_VERSION));

        let config = config.with_api_version("2024-05-01");
        assert_eq!(config.api_version(), Some("2024-05-01"));

        // Overrides are verbatim, no fallback to the default
        let config = config.with_api_version("");
        assert_eq!(config.api_version(), Some(""));
    }

    #[test]
    fn test_deployment_for() {
        let azure = ClientConfig::azure("k", "https://x.openai.azure.com");
        assert_eq!(azure.deployment_for("gpt-3.5-turbo"), "gpt-35-turbo");
        assert_eq!(azure.deployment_for("ft:gpt-4o"), "ftgpt-4o");

        let standard = ClientConfig::standard("k");
        assert_eq!(standard.deployment_for("gpt-3.5-turbo"), "gpt-3.5-turbo");
    }

    #[test]
    fn test_full_url_standard() {
        let config = ClientConfig::standard("k");
        assert_eq!(
            config.full_url("/chat/completions", "gpt-4o"),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_full_url_azure() {
        let config = ClientConfig::azure("k", "https://x.openai.azure.com/").with_api_version("2024-05-01");
        assert_eq!(
            config.full_url("/chat/completions", "gpt-3.5-turbo"),
            "https://x.openai.azure.com/openai/deployments/gpt-35-turbo/chat/completions?api-version=2024-05-01"
        );
        assert_eq!(
            config.full_url("/models", ""),
            "https://x.openai.azure.com/openai/models?api-version=2024-05-01"
        );
    }

    #[test]
    fn test_auth_header() {
        let (name, value) = ClientConfig::standard("sk-test").auth_header();
        assert_eq!(name, "Authorization");
        assert_eq!(value, "Bearer sk-test");

        let (name, value) = ClientConfig::azure("az-key", "https://x").auth_header();
        assert_eq!(name, "api-key");
        assert_eq!(value, "az-key");
    }

    #[test]
    fn test_service_base_url() {
        assert_eq!(ClientConfig::standard("k").service_base_url(), "https://api.openai.com/v1/");
        assert_eq!(
            ClientConfig::azure("k", "https://x.openai.azure.com/").service_base_url(),
            "https://x.openai.azure.com/openai/"
        );
    }

    #[test]
    fn test_serialize_omits_key() {
        let config = ClientConfig::azure("sk-secret", "https://x.openai.azure.com").with_api_version("2024-05-01");
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "kind": "azure",
                "base_url": "https://x.openai.azure.com",
                "api_version": "2024-05-01",
            })
        );
        assert!(!json.to_string().contains("sk-secret"));

        let json = serde_json::to_value(ClientConfig::standard("sk-secret")).unwrap();
        assert!(json.get("api_version").is_none());
    }

    #[test]
    fn test_debug_omits_key() {
        let config = ClientConfig::standard("sk-secret");
        assert!(!format!("{:?}", config).contains("sk-secret"));
    }
}
