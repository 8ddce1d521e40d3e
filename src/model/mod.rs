//! Pure data structures shared by the store, the remote service and the screens.

pub mod cart;
pub mod dish;
pub mod review;
pub mod suggestion;

pub use cart::*;
pub use dish::*;
pub use review::*;
pub use suggestion::*;
