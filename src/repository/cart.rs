//! Cart screen repository.

use super::{CartLedger, RepositoryError};
use crate::model::{CartItem, DishId, OrderRes};
use crate::remote::RemoteService;
use crate::store::{LocalStore, StoreError};
use std::sync::Arc;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct CartRepository {
    store: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteService>,
    ledger: CartLedger,
}

impl CartRepository {
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

    /// Cart lines joined with their cached dishes. Lines without a cached dish are skipped.
    #[instrument(skip(self))]
    pub async fn load_cart(&self) -> Result<Vec<CartItem>, RepositoryError> {
        let lines = self.ledger.lines().await?;
        let mut items = Vec::with_capacity(lines.len());
        for line in lines {
            match self.store.find_dish(&line.dish_id).await {
                Ok(dish) => items.push(CartItem {
                    id: dish.id,
                    title: dish.name,
                    image: dish.image,
                    price: dish.price,
                    count: line.count,
                }),
                Err(StoreError::DishNotFound(id)) => {
                    warn!(dish_id = %id, "Cart line without cached dish");
                }
                Err(e) => return Err(e.into()),
            }
        }
        Ok(items)
    }

    pub async fn increment_item(&self, id: &DishId) -> Result<u32, RepositoryError> {
        Ok(self.ledger.increment(id).await?)
    }

    pub async fn decrement_item(&self, id: &DishId) -> Result<u32, RepositoryError> {
        Ok(self.ledger.decrement_item(id).await?)
    }

    pub async fn remove_item(&self, id: &DishId) -> Result<(), RepositoryError> {
        Ok(self.ledger.remove(id).await?)
    }

    /// Submits the cart as an order. Once the server accepts, the ordered quantities leave the
    /// cart; anything added while the order was in flight stays.
    #[instrument(skip(self))]
    pub async fn send_order(&self) -> Result<OrderRes, RepositoryError> {
        let lines = self.ledger.lines().await?;
        if lines.is_empty() {
            return Err(RepositoryError::EmptyCart);
        }
        let order = self.remote.submit_order(&lines).await?;
        self.ledger.settle(&lines).await?;
        info!(order_id = %order.id, total = order.total, "Order placed");
        Ok(order)
    }

    pub async fn cart_count(&self) -> Result<u32, RepositoryError> {
        Ok(self.ledger.total().await?)
    }
}
