//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter. Module paths are
//! hidden (`with_target(false)`); structured fields such as `dish_id` or `reducer` carry the
//! context instead.
//!
//! `RUST_LOG` takes precedence over the configured filter:
//!
//! ```bash
//! # Reduced messages and spawned effects
//! RUST_LOG=debug cargo run
//!
//! # Repository spans only
//! RUST_LOG=delivery_flow::repository=debug cargo run
//! ```
//!
//! With `debug`, each reduce step logs the full message once:
//!
//! ```text
//! DEBUG Reduce reducer="RootReducer" msg=Dishes(AddToCart { id: DishId("d1"), title: "Borscht" })
//! DEBUG Spawn effect effect=Dishes(AddToCart { id: DishId("d1"), title: "Borscht" })
//! DEBUG add_dish_to_cart{id=DishId("d1")}: Cart quantity added dish_id=d1 current=0 updated=1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Calling it a second time is a no-op.
pub fn setup_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
