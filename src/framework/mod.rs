//! Generic unidirectional dataflow framework.
//!
//! # Main Components
//!
//! - [`Reducer`] - Pure state transition producing effect descriptions
//! - [`EffectHandler`] - Asynchronous executor of effect descriptions
//! - [`Commit`] - Weak handle used by effects to send messages back
//! - [`Dispatcher`] / [`DispatchClient`] - The state-owning loop and its handle
//! - [`TaskScope`] - Cancellable group of tasks
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test effect handlers without a running dispatcher.

pub mod core;
pub mod dispatcher;
pub mod error;
pub mod mock;
pub mod scope;

pub use core::{Commit, EffectHandler, Reducer};
pub use dispatcher::{DispatchClient, Dispatcher};
pub use error::FrameworkError;
pub use scope::{ScopedTask, TaskScope};
