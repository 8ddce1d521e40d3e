//! # Store Messages
//!
//! Requests sent from [`StoreClient`](super::StoreClient) to [`MemoryStore`](super::MemoryStore).
//! Every variant carries a one-shot `respond_to` channel for the reply.

use super::StoreError;
use crate::model::{CartLine, DishId, DishPersist};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store actor.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

#[derive(Debug)]
pub enum StoreRequest {
    CartQuantity {
        id: DishId,
        respond_to: Response<Option<u32>>,
    },
    SetCartQuantity {
        id: DishId,
        count: u32,
        respond_to: Response<()>,
    },
    RemoveCartItem {
        id: DishId,
        respond_to: Response<()>,
    },
    TotalCartQuantity {
        respond_to: Response<u32>,
    },
    CartLines {
        respond_to: Response<Vec<CartLine>>,
    },
    ClearCart {
        respond_to: Response<()>,
    },
    FindDish {
        id: DishId,
        respond_to: Response<DishPersist>,
    },
    SearchByTitle {
        query: String,
        respond_to: Response<Vec<DishPersist>>,
    },
    AllDishes {
        respond_to: Response<Vec<DishPersist>>,
    },
    DishCount {
        respond_to: Response<usize>,
    },
    BulkInsert {
        dishes: Vec<DishPersist>,
        respond_to: Response<()>,
    },
}
