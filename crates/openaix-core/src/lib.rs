//! openaix Core
//!
//! Resolves a chat-completion client from configuration, choosing between
//! api.openai.com and an Azure OpenAI resource. The HTTP client itself is
//! `genai`; this crate decides how it is configured and authenticated.
//!
//! ## Configuration
//!
//! | Variable             | Meaning                                          |
//! |----------------------|--------------------------------------------------|
//! | `OPENAI_TYPE`        | `openai` (or unset/empty) or `azure`             |
//! | `OPENAI_API_KEY`     | API key for either backend                       |
//! | `OPENAI_ENDPOINT`    | Azure resource URL, Azure only                   |
//! | `OPENAI_API_VERSION` | Azure `api-version`, Azure only                  |
//!
//! ```rust,no_run
//! let handle = openaix_core::client_from_env()?;
//! println!("using {} at {}", handle.kind(), handle.config().base_url());
//! # Ok::<(), openaix_core::ResolveError>(())
//! ```
//!
//! To resolve without touching the process environment, pass values in
//! through any `EnvSource`:
//!
//! ```rust
//! use openaix_core::env::MemoryEnv;
//! use openaix_core::{ClientResolver, ProviderKind};
//!
//! let env = MemoryEnv::with_values([
//!     ("OPENAI_TYPE", "azure"),
//!     ("OPENAI_ENDPOINT", "https://x.openai.azure.com"),
//!     ("OPENAI_API_VERSION", "2024-05-01"),
//!     ("OPENAI_API_KEY", "sk-test"),
//! ]);
//! let handle = ClientResolver::default().from_source(&env)?;
//! assert_eq!(handle.kind(), ProviderKind::Enterprise);
//! assert_eq!(handle.config().api_version(), Some("2024-05-01"));
//! # Ok::<(), openaix_core::ResolveError>(())
//! ```

pub mod logging;
pub mod env;
pub mod types;
pub mod client;
pub mod resolver;

// Re-export commonly used types
pub use types::{ClientSettings, Credentials, EnterpriseConfig, EnvSettings, ProviderKind, ProviderSettings};

pub use env::{EnvSource, MemoryEnv, ProcessEnv};

pub use logging::{ConsoleLogger, Logger, NoOpLogger, RecordingLogger};

pub use client::{ClientConfig, ClientHandle, ResolveError, ResolveResult};

pub use resolver::{client_from_env, ClientResolver};
