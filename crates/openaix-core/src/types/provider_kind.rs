//! Provider kind selection

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::client::ResolveError;

/// Which backend a client is configured for
///
/// Parsed from the `OPENAI_TYPE` selector. Matching is exact: no trimming,
/// no case folding.
///
/// | selector   | kind         |
/// |------------|--------------|
/// | `""`       | `Standard`   |
/// | `"openai"` | `Standard`   |
/// | `"azure"`  | `Enterprise` |
///
/// The empty selector meaning `Standard` is a deliberate default, so an
/// unset `OPENAI_TYPE` gives a plain OpenAI client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProviderKind {
    /// api.openai.com, bearer-token auth
    #[default]
    #[serde(rename = "openai")]
    Standard,
    /// Azure OpenAI, `api-key` header auth and an explicit api-version
    #[serde(rename = "azure")]
    Enterprise,
}

impl ProviderKind {
    /// Canonical selector token for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Standard => "openai",
            ProviderKind::Enterprise => "azure",
        }
    }

    /// Parse a selector value
    pub fn parse(selector: &str) -> Result<Self, ResolveError> {
        match selector {
            "" | "openai" => Ok(ProviderKind::Standard),
            "azure" => Ok(ProviderKind::Enterprise),
            other => Err(ResolveError::UnknownProviderKind(other.to_string())),
        }
    }
}

impl FromStr for ProviderKind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
