//! Client resolution
//!
//! Turns `OPENAI_*` configuration into a `ClientHandle`.

mod client_resolver;

pub use client_resolver::{client_from_env, ClientResolver};
