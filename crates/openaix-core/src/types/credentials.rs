//! API key wrapper

use std::fmt;

const REDACTED: &str = "[REDACTED]";

/// An API key
///
/// Opaque by construction: `Debug` and `Display` print `[REDACTED]`, and
/// the value is only reachable through [`Credentials::expose`].
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials(String);

impl Credentials {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self(api_key.into())
    }

    /// The raw key, for handing to the HTTP layer
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credentials").field(&REDACTED).finish()
    }
}

impl fmt::Display for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl From<String> for Credentials {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Credentials {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
