//! bindmap-common — Shared error type and sandboxed HTTP client used across all Bindmap crates.

pub mod error;
pub mod sandbox;

pub use error::{BindmapError, Result};
