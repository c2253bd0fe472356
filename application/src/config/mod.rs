//! Application-level configuration.
//!
//! - [`RoundConfig`]: round loop control (cycles, retries, registry capacity)

pub mod round_config;

pub use round_config::RoundConfig;
