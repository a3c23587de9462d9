//! Resolve a `ClientHandle` from configuration
//!
//! The resolver itself holds no state beyond a logger. Configuration is
//! passed in explicitly; `client_from_env` is the thin adapter that reads
//! the process environment once and hands the values over.

use std::sync::Arc;

use crate::client::{ClientConfig, ClientHandle, ResolveResult};
use crate::env::EnvSource;
use crate::logging::{Logger, NoOpLogger, SharedLogger};
use crate::types::{ClientSettings, EnvSettings, ProviderSettings};
use crate::{log_debug, log_info, log_warn};

/// Maps configuration to exactly one client handle
///
/// `Send + Sync`; concurrent calls need no coordination.
///
/// # Example
///
/// ```
/// use openaix_core::env::MemoryEnv;
/// use openaix_core::{ClientResolver, ProviderKind};
///
/// let env = MemoryEnv::with_values([("OPENAI_API_KEY", "sk-test")]);
/// let handle = ClientResolver::default().from_source(&env).unwrap();
/// assert_eq!(handle.kind(), ProviderKind::Standard);
/// ```
#[derive(Clone)]
pub struct ClientResolver {
    logger: SharedLogger,
}

impl Default for ClientResolver {
    fn default() -> Self {
        Self::new(Arc::new(NoOpLogger::new()))
    }
}

impl ClientResolver {
    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }

    /// Read the four `OPENAI_*` values from `source` and resolve them
    pub fn from_source(&self, source: &dyn EnvSource) -> ResolveResult<ClientHandle> {
        log_debug!(self.logger, "reading client settings from {} source", source.name());
        self.from_env_settings(EnvSettings::from_source(source))
    }

    /// Validate raw values and resolve them
    pub fn from_env_settings(&self, raw: EnvSettings) -> ResolveResult<ClientHandle> {
        let settings = ClientSettings::try_from(raw).map_err(|e| {
            log_warn!(self.logger, "client resolution failed: {}", e);
            e
        })?;
        Ok(self.resolve(settings))
    }

    /// Build a handle from validated settings
    pub fn resolve(&self, settings: ClientSettings) -> ClientHandle {
        let (credentials, provider) = settings.into_parts();

        let config = match provider {
            ProviderSettings::Enterprise(enterprise) => {
                ClientConfig::azure(credentials, enterprise.endpoint).with_api_version(enterprise.api_version)
            }
            ProviderSettings::Standard => ClientConfig::standard(credentials),
        };

        log_info!(
            self.logger,
            "resolved {} client: base_url={}, api_version={}",
            config.kind(),
            config.base_url(),
            config.api_version().unwrap_or("-")
        );

        ClientHandle::new(config)
    }
}

/// Resolve a client from the process environment
///
/// Reads `OPENAI_TYPE`, `OPENAI_ENDPOINT`, `OPENAI_API_VERSION` and
/// `OPENAI_API_KEY`. An unset or empty `OPENAI_TYPE` selects the standard
/// OpenAI backend.
pub fn client_from_env() -> ResolveResult<ClientHandle> {
    ClientResolver::default().from_env_settings(EnvSettings::from_env())
}
