//! # Delivery Flow
//!
//! > **The state-management core of a food-ordering client.**
//!
//! Screens for the catalog, a dish's details and the cart are driven by one unidirectional
//! loop: a message is reduced into a new state plus effect descriptions, the effects run
//! asynchronously against the repositories, and their results come back as messages.
//!
//! ## Design
//!
//! ### 1. Pure Reducers
//! Every transition is a synchronous function of `(state, message)`. Reducers never perform
//! I/O; they describe the work they need as effects.
//!
//! ### 2. One State Owner
//! The [`Dispatcher`](framework::Dispatcher) task owns the state and reduces one message at a
//! time, so no lock guards view state. Effects run concurrently in their own tasks.
//!
//! ### 3. Local Cache First
//! Repositories read from the [`LocalStore`](store::LocalStore). The
//! [`RemoteService`](remote::RemoteService) is only used to sync the catalog, page through
//! reviews and submit reviews and orders. Cart read-modify-write sequences are serialized by
//! the [`CartLedger`](repository::CartLedger).
//!
//! ### 4. Observability
//! `tracing` everywhere with structured fields. See [`lifecycle::tracing`].
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic [`Reducer`](framework::Reducer), [`EffectHandler`](framework::EffectHandler),
//! [`Dispatcher`](framework::Dispatcher) and [`TaskScope`](framework::TaskScope).
//!
//! ### 2. The Screens ([`dishes_feature`], [`dish_feature`], [`cart_feature`], [`root`])
//! State, messages, effects, reducer and effect handler per screen. [`root`] ties them
//! together and adds navigation and notifications.
//!
//! ### 3. The Data ([`repository`], [`store`], [`remote`], [`model`])
//! Repositories over the two external collaborators, with in-memory implementations of both.
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`DeliverySystem`](lifecycle::DeliverySystem) starts and stops everything;
//! [`DeliveryConfig`](lifecycle::DeliveryConfig) holds the tunables.
//!
//! ## Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run -- --config delivery.toml
//! ```

pub mod cart_feature;
pub mod dish_feature;
pub mod dishes_feature;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod remote;
pub mod repository;
pub mod root;
pub mod store;
