//! # Catalog Screen
//!
//! Dish list with search mode, suggestions and add-to-cart with undo.

pub mod handler;
pub mod msg;
pub mod reducer;
pub mod state;

pub use handler::DishesEffectHandler;
pub use msg::{DishesEff, DishesMsg};
pub use reducer::DishesReducer;
pub use state::{DishesState, DishesUiState};
