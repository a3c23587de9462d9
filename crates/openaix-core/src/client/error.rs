//! Resolver error types

use thiserror::Error;

/// Errors that can occur while resolving a client
///
/// Resolution either fully succeeds or fails with one of these; nothing is
/// retried. Failures inside the wrapped HTTP client happen at request time
/// and are reported by that library, not translated here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// `OPENAI_TYPE` held something other than `""`, `openai` or `azure`
    #[error("unknown OPENAI_TYPE: {0}")]
    UnknownProviderKind(String),
}

impl ResolveError {
    /// Create an unknown provider kind error
    pub fn unknown_provider_kind(value: impl Into<String>) -> Self {
        Self::UnknownProviderKind(value.into())
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
