//! # Cart Ledger
//!
//! Every read-then-write cart mutation goes through [`CartLedger`]. Clones share one async
//! mutex, so two concurrent mutations on the same or different dishes never interleave
//! between the read and the write.

use crate::model::{CartLine, DishId};
use crate::store::{LocalStore, StoreError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

#[derive(Clone)]
pub struct CartLedger {
    store: Arc<dyn LocalStore>,
    lock: Arc<Mutex<()>>,
}

impl CartLedger {
    pub fn new(store: Arc<dyn LocalStore>) -> Self {
        Self {
            store,
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Adds `count` units of a dish and returns its new quantity.
    pub async fn add(&self, id: &DishId, count: u32) -> Result<u32, StoreError> {
        let _guard = self.lock.lock().await;
        let current = self.store.cart_quantity(id).await?.unwrap_or(0);
        let updated = current.saturating_add(count);
        self.store.set_cart_quantity(id, updated).await?;
        debug!(dish_id = %id, current, updated, "Cart quantity added");
        Ok(updated)
    }

    pub async fn increment(&self, id: &DishId) -> Result<u32, StoreError> {
        self.add(id, 1).await
    }

    /// Cart screen decrement: a missing row is left alone, a row at one or below is removed,
    /// any other row loses one unit. Returns the remaining quantity.
    pub async fn decrement_item(&self, id: &DishId) -> Result<u32, StoreError> {
        let _guard = self.lock.lock().await;
        match self.store.cart_quantity(id).await? {
            None => Ok(0),
            Some(current) if current <= 1 => {
                self.store.remove_cart_item(id).await?;
                debug!(dish_id = %id, "Cart row removed");
                Ok(0)
            }
            Some(current) => {
                let updated = current - 1;
                self.store.set_cart_quantity(id, updated).await?;
                debug!(dish_id = %id, updated, "Cart quantity decremented");
                Ok(updated)
            }
        }
    }

    /// Catalog undo: a positive quantity loses one unit (the row goes at zero), anything else
    /// deletes the row outright. Returns the remaining quantity.
    pub async fn remove_dish_from_cart(&self, id: &DishId) -> Result<u32, StoreError> {
        let _guard = self.lock.lock().await;
        match self.store.cart_quantity(id).await? {
            Some(current) if current > 0 => {
                let updated = current - 1;
                if updated == 0 {
                    self.store.remove_cart_item(id).await?;
                } else {
                    self.store.set_cart_quantity(id, updated).await?;
                }
                debug!(dish_id = %id, updated, "Cart quantity undone");
                Ok(updated)
            }
            _ => {
                self.store.remove_cart_item(id).await?;
                Ok(0)
            }
        }
    }

    pub async fn remove(&self, id: &DishId) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        self.store.remove_cart_item(id).await
    }

    /// Sum of every persisted quantity, read from the store on each call.
    pub async fn total(&self) -> Result<u32, StoreError> {
        self.store.total_cart_quantity().await
    }

    pub async fn lines(&self) -> Result<Vec<CartLine>, StoreError> {
        let _guard = self.lock.lock().await;
        self.store.cart_lines().await
    }

    /// Removes the quantities of an accepted order. Units added after `ordered` was read stay
    /// in the cart.
    pub async fn settle(&self, ordered: &[CartLine]) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        for line in ordered {
            let current = self.store.cart_quantity(&line.dish_id).await?.unwrap_or(0);
            let remaining = current.saturating_sub(line.count);
            if remaining == 0 {
                self.store.remove_cart_item(&line.dish_id).await?;
            } else {
                self.store.set_cart_quantity(&line.dish_id, remaining).await?;
            }
            debug!(dish_id = %line.dish_id, ordered = line.count, remaining, "Cart line settled");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;

    fn ledger() -> CartLedger {
        let (actor, client) = store::new(64);
        tokio::spawn(actor.run());
        CartLedger::new(Arc::new(client))
    }

    #[tokio::test]
    async fn test_concurrent_adds_are_not_lost() {
        let ledger = ledger();
        let id = DishId::from("d1");

        let mut handles = Vec::new();
        for _ in 0..40 {
            let ledger = ledger.clone();
            let id = id.clone();
            handles.push(tokio::spawn(async move { ledger.add(&id, 1).await }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(ledger.total().await.unwrap(), 40);
    }

    #[tokio::test]
    async fn test_decrement_item_policy() {
        let ledger = ledger();
        let id = DishId::from("d1");

        assert_eq!(ledger.decrement_item(&id).await.unwrap(), 0);
        assert!(ledger.lines().await.unwrap().is_empty());

        ledger.add(&id, 2).await.unwrap();
        assert_eq!(ledger.decrement_item(&id).await.unwrap(), 1);
        assert_eq!(ledger.decrement_item(&id).await.unwrap(), 0);
        assert!(ledger.lines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_undo_policy_removes_row_at_zero() {
        let ledger = ledger();
        let id = DishId::from("d1");

        ledger.add(&id, 1).await.unwrap();
        assert_eq!(ledger.remove_dish_from_cart(&id).await.unwrap(), 0);
        assert!(ledger.lines().await.unwrap().is_empty());

        // Undo on a missing row is a plain delete.
        assert_eq!(ledger.remove_dish_from_cart(&id).await.unwrap(), 0);
        assert_eq!(ledger.total().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_settle_keeps_units_added_after_the_order() {
        let ledger = ledger();
        let soup = DishId::from("d1");
        let tea = DishId::from("d2");

        ledger.add(&soup, 2).await.unwrap();
        let ordered = ledger.lines().await.unwrap();
        ledger.add(&soup, 1).await.unwrap();
        ledger.add(&tea, 4).await.unwrap();

        ledger.settle(&ordered).await.unwrap();

        let mut remaining = ledger.lines().await.unwrap();
        remaining.sort_by(|a, b| a.dish_id.cmp(&b.dish_id));
        assert_eq!(
            remaining,
            vec![
                CartLine {
                    dish_id: soup,
                    count: 1
                },
                CartLine {
                    dish_id: tea,
                    count: 4
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_settle_after_removal_leaves_no_row() {
        let ledger = ledger();
        let id = DishId::from("d1");

        ledger.add(&id, 3).await.unwrap();
        let ordered = ledger.lines().await.unwrap();
        ledger.decrement_item(&id).await.unwrap();

        ledger.settle(&ordered).await.unwrap();
        assert!(ledger.lines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_saturates() {
        let ledger = ledger();
        let id = DishId::from("d1");

        ledger.add(&id, u32::MAX).await.unwrap();
        assert_eq!(ledger.add(&id, 5).await.unwrap(), u32::MAX);
    }
}
