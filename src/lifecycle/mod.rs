//! Runtime orchestration and lifecycle management.
//!
//! # Main Components
//!
//! - [`DeliverySystem`] - Starts, wires and stops the store actor and the dispatcher
//! - [`DeliveryConfig`] - TOML configuration
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod config;
pub mod system;
pub mod tracing;

pub use config::{ConfigError, DeliveryConfig};
pub use system::DeliverySystem;
pub use self::tracing::setup_tracing;
