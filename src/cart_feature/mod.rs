//! # Cart Screen

pub mod handler;
pub mod msg;
pub mod reducer;
pub mod state;

pub use handler::CartEffectHandler;
pub use msg::{CartEff, CartMsg};
pub use reducer::CartReducer;
pub use state::{CartState, CartUiState, ConfirmDialog};
