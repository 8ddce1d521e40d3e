//! # Store Client
//!
//! Cloneable handle to a running [`MemoryStore`](super::MemoryStore).

use super::message::StoreRequest;
use super::{LocalStore, StoreError};
use crate::model::{CartLine, DishId, DishPersist};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};

/// Forwards [`LocalStore`] calls to the store actor over an mpsc channel and waits for the
/// reply on a oneshot channel. Cloning only clones the sender.
#[derive(Clone)]
pub struct StoreClient {
    sender: mpsc::Sender<StoreRequest>,
}

impl StoreClient {
    pub fn new(sender: mpsc::Sender<StoreRequest>) -> Self {
        Self { sender }
    }

    async fn request<T: Send>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<T, StoreError>>) -> StoreRequest + Send,
    ) -> Result<T, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::Closed)?;
        response.await.map_err(|_| StoreError::Dropped)?
    }
}

#[async_trait]
impl LocalStore for StoreClient {
    async fn cart_quantity(&self, id: &DishId) -> Result<Option<u32>, StoreError> {
        let id = id.clone();
        self.request(|respond_to| StoreRequest::CartQuantity { id, respond_to })
            .await
    }

    async fn set_cart_quantity(&self, id: &DishId, count: u32) -> Result<(), StoreError> {
        let id = id.clone();
        self.request(|respond_to| StoreRequest::SetCartQuantity {
            id,
            count,
            respond_to,
        })
        .await
    }

    async fn remove_cart_item(&self, id: &DishId) -> Result<(), StoreError> {
        let id = id.clone();
        self.request(|respond_to| StoreRequest::RemoveCartItem { id, respond_to })
            .await
    }

    async fn total_cart_quantity(&self) -> Result<u32, StoreError> {
        self.request(|respond_to| StoreRequest::TotalCartQuantity { respond_to })
            .await
    }

    async fn cart_lines(&self) -> Result<Vec<CartLine>, StoreError> {
        self.request(|respond_to| StoreRequest::CartLines { respond_to })
            .await
    }

    async fn clear_cart(&self) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::ClearCart { respond_to })
            .await
    }

    async fn find_dish(&self, id: &DishId) -> Result<DishPersist, StoreError> {
        let id = id.clone();
        self.request(|respond_to| StoreRequest::FindDish { id, respond_to })
            .await
    }

    async fn search_dishes_by_title(&self, query: &str) -> Result<Vec<DishPersist>, StoreError> {
        let query = query.to_string();
        self.request(|respond_to| StoreRequest::SearchByTitle { query, respond_to })
            .await
    }

    async fn all_dishes(&self) -> Result<Vec<DishPersist>, StoreError> {
        self.request(|respond_to| StoreRequest::AllDishes { respond_to })
            .await
    }

    async fn dish_count(&self) -> Result<usize, StoreError> {
        self.request(|respond_to| StoreRequest::DishCount { respond_to })
            .await
    }

    async fn bulk_insert_dishes(&self, dishes: Vec<DishPersist>) -> Result<(), StoreError> {
        self.request(|respond_to| StoreRequest::BulkInsert { dishes, respond_to })
            .await
    }
}
