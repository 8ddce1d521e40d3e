/// Dish records as they travel through the system.
///
/// - [`DishRes`] is the remote payload.
/// - [`DishPersist`] is the cached row in the local store.
/// - [`DishItem`] and [`DishContent`] are the projections the catalog and detail screens render.
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Dishes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DishId(pub String);

impl DishId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DishId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for DishId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for DishId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Dish as returned by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishRes {
    pub id: DishId,
    pub name: String,
    pub description: String,
    pub image: String,
    #[serde(rename = "oldPrice")]
    pub old_price: Option<u32>,
    pub price: u32,
    pub rating: f32,
    pub likes: u32,
    pub category: String,
}

/// Dish row cached in the local store.
#[derive(Debug, Clone, PartialEq)]
pub struct DishPersist {
    pub id: DishId,
    pub name: String,
    pub description: String,
    pub image: String,
    pub old_price: Option<u32>,
    pub price: u32,
    pub rating: f32,
    pub likes: u32,
    pub category: String,
}

impl From<DishRes> for DishPersist {
    fn from(res: DishRes) -> Self {
        Self {
            id: res.id,
            name: res.name,
            description: res.description,
            image: res.image,
            old_price: res.old_price,
            price: res.price,
            rating: res.rating,
            likes: res.likes,
            category: res.category,
        }
    }
}

/// Catalog entry rendered by the dishes screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DishItem {
    pub id: DishId,
    pub title: String,
    pub image: String,
    pub price: u32,
    pub old_price: Option<u32>,
    pub rating: f32,
}

impl DishItem {
    /// A dish is on sale when its previous price was higher than the current one.
    pub fn is_sale(&self) -> bool {
        self.old_price.is_some_and(|old| old > self.price)
    }
}

impl From<&DishPersist> for DishItem {
    fn from(dish: &DishPersist) -> Self {
        Self {
            id: dish.id.clone(),
            title: dish.name.clone(),
            image: dish.image.clone(),
            price: dish.price,
            old_price: dish.old_price,
            rating: dish.rating,
        }
    }
}

/// Full dish rendered by the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct DishContent {
    pub id: DishId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub price: u32,
    pub old_price: Option<u32>,
    pub rating: f32,
}

impl From<DishPersist> for DishContent {
    fn from(dish: DishPersist) -> Self {
        Self {
            id: dish.id,
            title: dish.name,
            description: dish.description,
            image: dish.image,
            price: dish.price,
            old_price: dish.old_price,
            rating: dish.rating,
        }
    }
}
