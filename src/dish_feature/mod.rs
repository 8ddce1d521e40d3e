//! # Dish Detail Screen
//!
//! Dish content, reviews with a submission dialog, and a quantity counter for adding to the
//! cart. Loads are cancelled by [`DishEff::Terminate`] when the screen goes away.

pub mod handler;
pub mod msg;
pub mod reducer;
pub mod state;

pub use handler::DishEffectHandler;
pub use msg::{DishEff, DishMsg};
pub use reducer::DishReducer;
pub use state::{DishState, DishUiState, ReviewUiState};
