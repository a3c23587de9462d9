//! Builds the `genai` client behind a `ClientHandle`
//!
//! Auth never falls back to genai's own environment lookup: the key from
//! `ClientConfig` is the only credential the client will send. Every model
//! is routed to genai's OpenAI adapter; both backends speak its wire format.
//!
//! Azure requests replace genai's URL and headers with a request override:
//! the deployment URL carrying `api-version`, and an `api-key` header.

use genai::resolver::{AuthData, AuthResolver, Endpoint, ServiceTargetResolver};
use genai::{adapter::AdapterKind, Client, Headers, ModelIden, ServiceTarget};

use crate::types::ProviderKind;

use super::config::ClientConfig;

const ADAPTER_KIND: AdapterKind = AdapterKind::OpenAI;

/// Path of the chat-completions API, relative to the API root
const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// Auth data genai should send for `model` under `config`
///
/// Standard configs use a bearer key. Azure configs override the whole
/// request target: `full_url` for the model's deployment and an `api-key`
/// header.
pub fn auth_data_for(config: &ClientConfig, model: &str) -> AuthData {
    let (header, value) = config.auth_header();
    match config.kind() {
        ProviderKind::Standard => AuthData::from_single(config.credentials().expose()),
        ProviderKind::Enterprise => AuthData::RequestOverride {
            url: config.full_url(CHAT_COMPLETIONS_PATH, model),
            headers: Headers::from((header, value)),
        },
    }
}

/// Create a genai `Client` bound to `config`
///
/// No network I/O happens here.
pub fn create_client(config: &ClientConfig) -> Client {
    let auth_config = config.clone();
    let auth_resolver = AuthResolver::from_resolver_fn(
        move |model_iden: ModelIden| -> genai::resolver::Result<Option<AuthData>> {
            Ok(Some(auth_data_for(&auth_config, &model_iden.model_name)))
        },
    );

    let target_config = config.clone();
    let base_url = config.service_base_url();

    let target_resolver = ServiceTargetResolver::from_resolver_fn(
        move |target: ServiceTarget| -> Result<ServiceTarget, genai::resolver::Error> {
            let ServiceTarget { ref model, .. } = target;
            let model_name = target_config.deployment_for(&model.model_name);

            Ok(ServiceTarget {
                endpoint: Endpoint::from_owned(base_url.clone()),
                auth: target.auth, // supplied by the auth resolver
                model: ModelIden::new(ADAPTER_KIND, model_name),
            })
        },
    );

    Client::builder()
        .with_auth_resolver(auth_resolver)
        .with_service_target_resolver(target_resolver)
        .build()
}
