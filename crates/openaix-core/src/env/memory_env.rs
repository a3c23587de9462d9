//! In-memory configuration source

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::traits::EnvSource;

/// In-memory source for tests and for hosts that carry their own settings
///
/// Uses `RwLock` internally and is safe to share between threads.
///
/// # Example
///
/// ```
/// use openaix_core::env::{EnvSource, MemoryEnv};
///
/// let env = MemoryEnv::new();
/// env.set("OPENAI_API_KEY", "sk-test");
/// assert!(env.has("OPENAI_API_KEY"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryEnv {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryEnv {
    /// Create a new empty source
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Create a source with initial values
    pub fn with_values<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: RwLock::new(
                values
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Set a value, replacing any previous one
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.into(), value.into());
    }

    /// Remove a value
    pub fn remove(&self, key: &str) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.remove(key);
    }

    /// Remove all values
    pub fn clear(&self) {
        let mut values = self.values.write().unwrap_or_else(PoisonError::into_inner);
        values.clear();
    }

    /// Number of values held
    pub fn len(&self) -> usize {
        self.values.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Check if the source is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EnvSource for MemoryEnv {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        values.get(key).cloned()
    }
}

impl Clone for MemoryEnv {
    fn clone(&self) -> Self {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        Self {
            values: RwLock::new(values.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_env_name() {
        assert_eq!(MemoryEnv::new().name(), "memory");
    }

    #[test]
    fn test_memory_env_set_remove() {
        let env = MemoryEnv::new();
        assert!(env.is_empty());
        assert_eq!(env.get("OPENAI_TYPE"), None);

        env.set("OPENAI_TYPE", "azure");
        assert_eq!(env.len(), 1);
        assert_eq!(env.get("OPENAI_TYPE"), Some("azure".to_string()));

        env.set("OPENAI_TYPE", "openai");
        assert_eq!(env.get("OPENAI_TYPE"), Some("openai".to_string()));

        env.remove("OPENAI_TYPE");
        assert!(!env.has("OPENAI_TYPE"));
        assert!(env.is_empty());
    }

    #[test]
    fn test_memory_env_with_values() {
        let env = MemoryEnv::with_values([
            ("OPENAI_TYPE", "azure"),
            ("OPENAI_API_VERSION", "2024-05-01"),
        ]);

        assert_eq!(env.len(), 2);
        assert_eq!(env.get_or_empty("OPENAI_API_VERSION"), "2024-05-01");
        assert_eq!(env.get_or_empty("OPENAI_ENDPOINT"), "");

        env.clear();
        assert!(env.is_empty());
    }

    #[test]
    fn test_memory_env_clone_is_independent() {
        let env = MemoryEnv::with_values([("OPENAI_API_KEY", "sk-a")]);
        let cloned = env.clone();

        cloned.set("OPENAI_API_KEY", "sk-b");
        assert_eq!(env.get("OPENAI_API_KEY"), Some("sk-a".to_string()));
        assert_eq!(cloned.get("OPENAI_API_KEY"), Some("sk-b".to_string()));
    }

    #[test]
    fn test_memory_env_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let env = Arc::new(MemoryEnv::new());
        let mut handles = vec![];

        for i in 0..8 {
            let env = Arc::clone(&env);
            handles.push(thread::spawn(move || {
                let key = format!("KEY_{}", i);
                env.set(key.clone(), format!("value_{}", i));
                assert_eq!(env.get(&key), Some(format!("value_{}", i)));
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(env.len(), 8);
    }
}
