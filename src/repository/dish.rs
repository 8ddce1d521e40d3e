//! Dish detail repository.

use super::pagination::collect_pages;
use super::{CartLedger, RepositoryError};
use crate::model::{DishContent, DishId, ReviewRes};
use crate::remote::RemoteService;
use crate::store::LocalStore;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct DishRepository {
    store: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteService>,
    ledger: CartLedger,
}

impl DishRepository {
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

    pub async fn find_dish(&self, id: &DishId) -> Result<DishContent, RepositoryError> {
        Ok(self.store.find_dish(id).await?.into())
    }

    /// Adds `count` units and returns the dish's new quantity.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, id: &DishId, count: u32) -> Result<u32, RepositoryError> {
        Ok(self.ledger.add(id, count).await?)
    }

    pub async fn cart_count(&self) -> Result<u32, RepositoryError> {
        Ok(self.ledger.total().await?)
    }

    /// Every review page for a dish, in server order.
    #[instrument(skip(self))]
    pub async fn load_reviews(&self, dish_id: &DishId) -> Vec<ReviewRes> {
        let remote = &self.remote;
        collect_pages("reviews", move |offset, limit| {
            remote.fetch_reviews_page(dish_id, offset, limit)
        })
        .await
    }

    #[instrument(skip(self, text))]
    pub async fn send_review(
        &self,
        dish_id: &DishId,
        rating: u8,
        text: &str,
    ) -> Result<ReviewRes, RepositoryError> {
        let review = self.remote.submit_review(dish_id, rating, text).await?;
        info!(rating, "Review submitted");
        Ok(review)
    }
}
