use crate::model::DishId;
use serde::{Deserialize, Serialize};

/// A persisted cart row. A dish has at most one row and a row never holds a zero count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub dish_id: DishId,
    pub count: u32,
}

/// Cart row joined with the cached dish, as the cart screen renders it.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: DishId,
    pub title: String,
    pub image: String,
    pub price: u32,
    pub count: u32,
}

impl CartItem {
    pub fn subtotal(&self) -> u32 {
        self.price.saturating_mul(self.count)
    }
}

/// Confirmation returned by the order endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRes {
    pub id: String,
    pub total: u32,
}
