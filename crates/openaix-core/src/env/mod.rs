//! Configuration sources
//!
//! The resolver never reads the process environment directly. It goes through
//! an `EnvSource`, so callers (and tests) can hand it any set of values:
//! - `ProcessEnv` reads the real process environment
//! - `MemoryEnv` holds values in memory

mod traits;
mod process_env;
mod memory_env;

pub use traits::EnvSource;
pub use process_env::ProcessEnv;
pub use memory_env::MemoryEnv;

/// Selects the provider kind (`openai`, `azure`, or empty for the default)
pub const OPENAI_TYPE: &str = "OPENAI_TYPE";

/// Base URL of the Azure OpenAI resource
pub const OPENAI_ENDPOINT: &str = "OPENAI_ENDPOINT";

/// Azure OpenAI `api-version` value
pub const OPENAI_API_VERSION: &str = "OPENAI_API_VERSION";

/// API key for either provider
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
