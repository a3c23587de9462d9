//! Process environment source

use std::env;

use super::traits::EnvSource;

/// Source that reads from the process environment
///
/// Read-only. Names are used verbatim: there is no provider-name mapping
/// and no case folding. A variable holding non-unicode data is treated as
/// unset.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv {
    _private: (), // use new()
}

impl ProcessEnv {
    /// Create a new process environment source
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl EnvSource for ProcessEnv {
    fn name(&self) -> &str {
        "process"
    }

    fn get(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }
}
