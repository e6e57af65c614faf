//! Shared building blocks: configuration and deterministic randomness.

pub mod config;
pub mod rng;

pub use config::{EngineConfig, DEFAULT_MAX_QUESTIONS};
pub use rng::SessionRng;
