//! Resolver input: raw environment values and their validated form

use serde::{Deserialize, Serialize};

use crate::client::ResolveError;
use crate::env::{EnvSource, OPENAI_API_KEY, OPENAI_API_VERSION, OPENAI_ENDPOINT, OPENAI_TYPE};

use super::credentials::Credentials;
use super::provider_kind::ProviderKind;

/// Attributes only the enterprise (Azure) backend needs
///
/// Values are carried verbatim. Neither field is checked for emptiness
/// here; a bad endpoint surfaces when the client is first used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnterpriseConfig {
    /// Resource base URL, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    /// `api-version` query value, e.g. `2024-05-01`
    pub api_version: String,
}

impl EnterpriseConfig {
    pub fn new(endpoint: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_version: api_version.into(),
        }
    }
}

/// Provider-specific half of [`ClientSettings`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderSettings {
    Standard,
    Enterprise(EnterpriseConfig),
}

impl ProviderSettings {
    pub fn kind(&self) -> ProviderKind {
        match self {
            ProviderSettings::Standard => ProviderKind::Standard,
            ProviderSettings::Enterprise(_) => ProviderKind::Enterprise,
        }
    }
}

/// Fully validated resolver input
///
/// An enterprise setting always carries its [`EnterpriseConfig`] and a
/// standard one never does, so a half-specified configuration cannot be
/// represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    credentials: Credentials,
    provider: ProviderSettings,
}

impl ClientSettings {
    /// Settings for api.openai.com
    pub fn standard(credentials: impl Into<Credentials>) -> Self {
        Self {
            credentials: credentials.into(),
            provider: ProviderSettings::Standard,
        }
    }

    /// Settings for an Azure OpenAI resource
    pub fn enterprise(credentials: impl Into<Credentials>, config: EnterpriseConfig) -> Self {
        Self {
            credentials: credentials.into(),
            provider: ProviderSettings::Enterprise(config),
        }
    }

    pub fn kind(&self) -> ProviderKind {
        self.provider.kind()
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Enterprise attributes, `None` for a standard setting
    pub fn enterprise_config(&self) -> Option<&EnterpriseConfig> {
        match &self.provider {
            ProviderSettings::Enterprise(config) => Some(config),
            ProviderSettings::Standard => None,
        }
    }

    pub fn into_parts(self) -> (Credentials, ProviderSettings) {
        (self.credentials, self.provider)
    }
}

/// The four raw configuration values, read once at the process boundary
///
/// Unset values read as empty strings. Nothing is parsed until
/// [`ClientSettings::try_from`].
#[derive(Clone, PartialEq, Eq, Default)]
pub struct EnvSettings {
    /// `OPENAI_TYPE`
    pub kind: String,
    /// `OPENAI_ENDPOINT`
    pub endpoint: String,
    /// `OPENAI_API_VERSION`
    pub api_version: String,
    /// `OPENAI_API_KEY`
    pub api_key: String,
}

impl EnvSettings {
    /// Read all four values from `source`
    pub fn from_source(source: &dyn EnvSource) -> Self {
        Self {
            kind: source.get_or_empty(OPENAI_TYPE),
            endpoint: source.get_or_empty(OPENAI_ENDPOINT),
            api_version: source.get_or_empty(OPENAI_API_VERSION),
            api_key: source.get_or_empty(OPENAI_API_KEY),
        }
    }

    /// Read all four values from the process environment
    pub fn from_env() -> Self {
        Self::from_source(&crate::env::ProcessEnv::new())
    }
}

impl std::fmt::Debug for EnvSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvSettings")
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("api_key", &Credentials::new(self.api_key.as_str()))
            .finish()
    }
}

impl TryFrom<EnvSettings> for ClientSettings {
    type Error = ResolveError;

    fn try_from(raw: EnvSettings) -> Result<Self, Self::Error> {
        let settings = match ProviderKind::parse(&raw.kind)? {
            ProviderKind::Standard => ClientSettings::standard(raw.api_key),
            ProviderKind::Enterprise => ClientSettings::enterprise(
                raw.api_key,
                EnterpriseConfig::new(raw.endpoint, raw.api_version),
            ),
        };
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MemoryEnv;

    fn raw(kind: &str) -> EnvSettings {
        EnvSettings {
            kind: kind.to_string(),
            endpoint: "https://x.openai.azure.com".to_string(),
            api_version: "2024-05-01".to_string(),
            api_key: "sk-test".to_string(),
        }
    }

    #[test]
    fn test_from_source_reads_all_four() {
        let env = MemoryEnv::with_values([
            (OPENAI_TYPE, "azure"),
            (OPENAI_ENDPOINT, "https://x.openai.azure.com"),
            (OPENAI_API_VERSION, "2024-05-01"),
            (OPENAI_API_KEY, "sk-test"),
        ]);

        assert_eq!(EnvSettings::from_source(&env), raw("azure"));
    }

    #[test]
    fn test_from_source_unset_is_empty() {
        let settings = EnvSettings::from_source(&MemoryEnv::new());
        assert_eq!(settings, EnvSettings::default());
    }

    #[test]
    fn test_debug_hides_key() {
        let debug = format!("{:?}", raw("openai"));
        assert!(debug.contains("2024-05-01"));
        assert!(!debug.contains("sk-test"));
    }

    #[test]
    fn test_standard_drops_enterprise_fields() {
        for kind in ["", "openai"] {
            let settings = ClientSettings::try_from(raw(kind)).unwrap();
            assert_eq!(settings.kind(), ProviderKind::Standard);
            assert_eq!(settings.enterprise_config(), None);
            assert_eq!(settings.credentials().expose(), "sk-test");
        }
    }

    #[test]
    fn test_enterprise_keeps_fields_verbatim() {
        let settings = ClientSettings::try_from(raw("azure")).unwrap();
        assert_eq!(settings.kind(), ProviderKind::Enterprise);
        assert_eq!(
            settings.enterprise_config(),
            Some(&EnterpriseConfig::new("https://x.openai.azure.com", "2024-05-01"))
        );
    }

    #[test]
    fn test_enterprise_does_not_require_fields() {
        let settings = ClientSettings::try_from(EnvSettings {
            kind: "azure".to_string(),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(settings.enterprise_config(), Some(&EnterpriseConfig::new("", "")));
        assert!(settings.credentials().is_empty());
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let err = ClientSettings::try_from(raw("bogus")).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownProviderKind(ref v) if v == "bogus"));
    }

    #[test]
    fn test_into_parts() {
        let (creds, provider) = ClientSettings::standard("k").into_parts();
        assert_eq!(creds.expose(), "k");
        assert_eq!(provider, ProviderSettings::Standard);
    }
}
