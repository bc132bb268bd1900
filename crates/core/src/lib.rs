//! # Blogforge Core
//!
//! Domain types, traits, and error definitions for the Blogforge blog-post
//! generator. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! The pipeline, provider, and gateway crates all depend inward on this one,
//! which keeps the completion backend and the HTTP surface swappable and
//! makes every seam testable with stub implementations.

pub mod config;
pub mod error;
pub mod message;
pub mod provider;

// Re-export key types at crate root for ergonomics
pub use config::{BlogConfig, Link};
pub use error::{Error, FetchError, ProviderError, Result};
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
