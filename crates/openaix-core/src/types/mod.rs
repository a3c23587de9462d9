//! Core types shared by the resolver and the client layer

mod provider_kind;
mod credentials;
mod settings;

pub use provider_kind::ProviderKind;
pub use credentials::Credentials;
pub use settings::{ClientSettings, EnterpriseConfig, EnvSettings, ProviderSettings};
