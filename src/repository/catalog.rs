//! Catalog screen repository.

use super::pagination::collect_pages;
use super::suggestions::to_suggestions;
use super::{CartLedger, RepositoryError};
use crate::model::{DishId, DishItem, DishPersist, Suggestion};
use crate::remote::RemoteService;
use crate::store::LocalStore;
use std::sync::Arc;
use tracing::{debug, info, instrument};

#[derive(Clone)]
pub struct CatalogRepository {
    store: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteService>,
    ledger: CartLedger,
}

impl CatalogRepository {
    pub fn new(
        store: Arc<dyn LocalStore>,
        remote: Arc<dyn RemoteService>,
        ledger: CartLedger,
    ) -> Self {
        Self {
            store,
            remote,
            ledger,
        }
    }

    /// An empty query returns the whole catalog.
    #[instrument(skip(self))]
    pub async fn search_dishes(&self, query: &str) -> Result<Vec<DishItem>, RepositoryError> {
        if query.is_empty() {
            return self.find_dishes().await;
        }
        let dishes = self.store.search_dishes_by_title(query).await?;
        debug!(found = dishes.len(), "Search completed");
        Ok(dishes.iter().map(DishItem::from).collect())
    }

    pub async fn is_empty_dishes(&self) -> Result<bool, RepositoryError> {
        Ok(self.store.dish_count().await? == 0)
    }

    /// Pulls the whole remote catalog and stores it with a single bulk insert.
    /// Returns the number of dishes received.
    #[instrument(skip(self))]
    pub async fn sync_dishes(&self) -> Result<usize, RepositoryError> {
        let remote = &self.remote;
        let dishes = collect_pages("dishes", move |offset, limit| {
            remote.fetch_dishes_page(offset, limit)
        })
        .await;
        let received = dishes.len();
        self.store
            .bulk_insert_dishes(dishes.into_iter().map(DishPersist::from).collect())
            .await?;
        info!(received, "Catalog synced");
        Ok(received)
    }

    /// Syncs only when nothing is cached yet. Returns whether a sync ran.
    pub async fn sync_if_empty(&self) -> Result<bool, RepositoryError> {
        if !self.is_empty_dishes().await? {
            return Ok(false);
        }
        self.sync_dishes().await?;
        Ok(true)
    }

    pub async fn find_dishes(&self) -> Result<Vec<DishItem>, RepositoryError> {
        let dishes = self.store.all_dishes().await?;
        Ok(dishes.iter().map(DishItem::from).collect())
    }

    /// An empty query yields no suggestions without touching the store.
    #[instrument(skip(self))]
    pub async fn find_suggestions(&self, query: &str) -> Result<Vec<Suggestion>, RepositoryError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let dishes = self.search_dishes(query).await?;
        Ok(to_suggestions(
            dishes.iter().map(|dish| dish.title.as_str()),
            query,
        ))
    }

    #[instrument(skip(self))]
    pub async fn add_dish_to_cart(&self, id: &DishId) -> Result<u32, RepositoryError> {
        Ok(self.ledger.add(id, 1).await?)
    }

    #[instrument(skip(self))]
    pub async fn remove_dish_from_cart(&self, id: &DishId) -> Result<u32, RepositoryError> {
        Ok(self.ledger.remove_dish_from_cart(id).await?)
    }

    pub async fn cart_count(&self) -> Result<u32, RepositoryError> {
        Ok(self.ledger.total().await?)
    }
}
