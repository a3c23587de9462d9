//! Chat-completion client construction
//!
//! The HTTP client, wire format, retries and streaming all belong to the
//! `genai` crate. This module only decides how that client is configured:
//! - `ClientConfig`: per-backend defaults (base URL, api-version, auth header)
//! - `ClientHandle`: a config plus the genai client built from it
//! - `ResolveError`: why resolution failed

mod error;
mod config;
mod genai_adapter;
mod handle;

pub use error::{ResolveError, ResolveResult};
pub use config::{ClientConfig, AZURE_DEFAULT_API_VERSION, OPENAI_API_BASE};
pub use genai_adapter::create_client;
pub use handle::ClientHandle;
