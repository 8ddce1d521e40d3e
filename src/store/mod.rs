//! # Local Store
//!
//! Key-addressed cache of catalog dishes and cart lines.
//!
//! The rest of the crate only sees the [`LocalStore`] trait. The bundled implementation is an
//! in-memory actor: [`MemoryStore`] owns the tables and processes [`StoreRequest`]s one at a
//! time, and [`StoreClient`] is the cloneable handle that implements [`LocalStore`].
//!
//! ```rust,ignore
//! let (store, client) = store::new(32);
//! tokio::spawn(store.run());
//! client.bulk_insert_dishes(dishes).await?;
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;

pub use actor::MemoryStore;
pub use client::StoreClient;
pub use error::StoreError;
pub use message::{Response, StoreRequest};

use crate::model::{CartLine, DishId, DishPersist};
use async_trait::async_trait;

/// Persistence operations consumed by the repositories.
///
/// Each call is individually atomic. Read-then-write sequences spanning several calls are
/// serialized by [`CartLedger`](crate::repository::CartLedger).
#[async_trait]
pub trait LocalStore: Send + Sync {
    /// Quantity of a dish in the cart, `None` when there is no row.
    async fn cart_quantity(&self, id: &DishId) -> Result<Option<u32>, StoreError>;

    /// Upserts the cart row for a dish.
    async fn set_cart_quantity(&self, id: &DishId, count: u32) -> Result<(), StoreError>;

    /// Deletes the cart row for a dish. Deleting a missing row is not an error.
    async fn remove_cart_item(&self, id: &DishId) -> Result<(), StoreError>;

    /// Sum of every cart row quantity.
    async fn total_cart_quantity(&self) -> Result<u32, StoreError>;

    /// Every cart row, ordered by dish id.
    async fn cart_lines(&self) -> Result<Vec<CartLine>, StoreError>;

    /// Deletes every cart row.
    async fn clear_cart(&self) -> Result<(), StoreError>;

    async fn find_dish(&self, id: &DishId) -> Result<DishPersist, StoreError>;

    /// Dishes whose title contains `query`, ignoring case.
    async fn search_dishes_by_title(&self, query: &str) -> Result<Vec<DishPersist>, StoreError>;

    /// Every cached dish, in insertion order.
    async fn all_dishes(&self) -> Result<Vec<DishPersist>, StoreError>;

    async fn dish_count(&self) -> Result<usize, StoreError>;

    /// Inserts dishes, replacing rows that already exist.
    async fn bulk_insert_dishes(&self, dishes: Vec<DishPersist>) -> Result<(), StoreError>;
}

/// Creates a new in-memory store actor and its client.
pub fn new(buffer_size: usize) -> (MemoryStore, StoreClient) {
    MemoryStore::new(buffer_size)
}
