//! # Repositories
//!
//! Screen-facing data access over a [`LocalStore`](crate::store::LocalStore) and a
//! [`RemoteService`](crate::remote::RemoteService). The store is the read source of truth;
//! the remote is only consulted by sync, reviews and submissions.
//!
//! All three repositories share one [`CartLedger`].

pub mod cart;
pub mod catalog;
pub mod dish;
pub mod error;
pub mod ledger;
pub mod pagination;
pub mod suggestions;

pub use cart::CartRepository;
pub use catalog::CatalogRepository;
pub use dish::DishRepository;
pub use error::RepositoryError;
pub use ledger::CartLedger;
pub use pagination::{collect_pages, MAX_PAGES, PAGE_SIZE};
pub use suggestions::{to_suggestions, MAX_SUGGESTIONS};

use crate::remote::RemoteService;
use crate::store::LocalStore;
use std::sync::Arc;

/// The three repositories, wired to the same store, remote and ledger.
#[derive(Clone)]
pub struct Repositories {
    pub catalog: CatalogRepository,
    pub dish: DishRepository,
    pub cart: CartRepository,
}

impl Repositories {
    pub fn new(store: Arc<dyn LocalStore>, remote: Arc<dyn RemoteService>) -> Self {
        let ledger = CartLedger::new(store.clone());
        Self {
            catalog: CatalogRepository::new(store.clone(), remote.clone(), ledger.clone()),
            dish: DishRepository::new(store.clone(), remote.clone(), ledger.clone()),
            cart: CartRepository::new(store, remote, ledger),
        }
    }
}
