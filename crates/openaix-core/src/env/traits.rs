//! Core trait for configuration lookup

/// Read-only source of named configuration values
///
/// # Example
///
/// ```
/// use openaix_core::env::{EnvSource, MemoryEnv};
///
/// let env = MemoryEnv::new();
/// env.set("OPENAI_TYPE", "azure");
/// assert_eq!(env.get("OPENAI_TYPE"), Some("azure".to_string()));
/// assert_eq!(env.get_or_empty("OPENAI_ENDPOINT"), "");
/// ```
pub trait EnvSource: Send + Sync {
    /// Human-readable name of this source
    fn name(&self) -> &str;

    /// Look up a value by its exact name
    ///
    /// Returns `None` when the value is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Look up a value, treating "not set" as the empty string
    fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }

    /// Check if a value is set
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}
