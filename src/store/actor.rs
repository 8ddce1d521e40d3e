//! # In-Memory Store Actor
//!
//! [`MemoryStore`] owns the dish and cart tables and processes requests sequentially,
//! so each request is atomic without any lock around the tables.

use super::client::StoreClient;
use super::message::StoreRequest;
use super::StoreError;
use crate::model::{CartLine, DishId, DishPersist};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The server half of the in-memory store.
///
/// Dishes keep insertion order (`dishes` plus an id index). Cart rows are kept in a
/// `BTreeMap` so listings come back ordered by dish id.
pub struct MemoryStore {
    receiver: mpsc::Receiver<StoreRequest>,
    dishes: Vec<DishPersist>,
    index: HashMap<DishId, usize>,
    cart: BTreeMap<DishId, u32>,
}

impl MemoryStore {
    /// Creates a new `MemoryStore` and its associated [`StoreClient`].
    ///
    /// `buffer_size` is the capacity of the request channel; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, StoreClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let store = Self {
            receiver,
            dishes: Vec::new(),
            index: HashMap::new(),
            cart: BTreeMap::new(),
        };
        (store, StoreClient::new(sender))
    }

    /// Runs the request loop until every client is dropped.
    pub async fn run(mut self) {
        info!("Store started");

        while let Some(request) = self.receiver.recv().await {
            self.handle(request);
        }

        info!(
            dishes = self.dishes.len(),
            cart_rows = self.cart.len(),
            "Store shutdown"
        );
    }

    fn handle(&mut self, request: StoreRequest) {
        match request {
            StoreRequest::CartQuantity { id, respond_to } => {
                let _ = respond_to.send(Ok(self.cart.get(&id).copied()));
            }
            StoreRequest::SetCartQuantity {
                id,
                count,
                respond_to,
            } => {
                if count == 0 {
                    // A zero-quantity row is never persisted.
                    self.cart.remove(&id);
                    debug!(dish_id = %id, "Cart row removed on zero quantity");
                } else {
                    self.cart.insert(id.clone(), count);
                    debug!(dish_id = %id, count, "Cart row set");
                }
                let _ = respond_to.send(Ok(()));
            }
            StoreRequest::RemoveCartItem { id, respond_to } => {
                let existed = self.cart.remove(&id).is_some();
                debug!(dish_id = %id, existed, "Cart row removed");
                let _ = respond_to.send(Ok(()));
            }
            StoreRequest::TotalCartQuantity { respond_to } => {
                let total = self.cart.values().fold(0u32, |acc, c| acc.saturating_add(*c));
                let _ = respond_to.send(Ok(total));
            }
            StoreRequest::CartLines { respond_to } => {
                let lines = self
                    .cart
                    .iter()
                    .map(|(dish_id, count)| CartLine {
                        dish_id: dish_id.clone(),
                        count: *count,
                    })
                    .collect();
                let _ = respond_to.send(Ok(lines));
            }
            StoreRequest::ClearCart { respond_to } => {
                let rows = self.cart.len();
                self.cart.clear();
                debug!(rows, "Cart cleared");
                let _ = respond_to.send(Ok(()));
            }
            StoreRequest::FindDish { id, respond_to } => {
                let result = self
                    .index
                    .get(&id)
                    .map(|&pos| self.dishes[pos].clone())
                    .ok_or_else(|| StoreError::DishNotFound(id.to_string()));
                let _ = respond_to.send(result);
            }
            StoreRequest::SearchByTitle { query, respond_to } => {
                let needle = query.to_lowercase();
                let found = self
                    .dishes
                    .iter()
                    .filter(|dish| dish.name.to_lowercase().contains(&needle))
                    .cloned()
                    .collect();
                let _ = respond_to.send(Ok(found));
            }
            StoreRequest::AllDishes { respond_to } => {
                let _ = respond_to.send(Ok(self.dishes.clone()));
            }
            StoreRequest::DishCount { respond_to } => {
                let _ = respond_to.send(Ok(self.dishes.len()));
            }
            StoreRequest::BulkInsert { dishes, respond_to } => {
                let incoming = dishes.len();
                for dish in dishes {
                    match self.index.get(&dish.id) {
                        Some(&pos) => self.dishes[pos] = dish,
                        None => {
                            self.index.insert(dish.id.clone(), self.dishes.len());
                            self.dishes.push(dish);
                        }
                    }
                }
                info!(incoming, size = self.dishes.len(), "Dishes inserted");
                let _ = respond_to.send(Ok(()));
            }
        }
    }
}
