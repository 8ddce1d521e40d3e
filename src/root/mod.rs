//! # Root
//!
//! The state tree of the whole flow: the current screen, the backstack and the cart badge.
//! [`RootReducer`] routes screen messages and handles navigation; [`RootEffectHandler`]
//! dispatches effects to the screen handlers and reports failures as notifications.

pub mod error;
pub mod handler;
pub mod msg;
pub mod navigation;
pub mod notification;
pub mod reducer;
pub mod state;

pub use error::EffectError;
pub use handler::RootEffectHandler;
pub use msg::{Eff, Msg};
pub use navigation::NavigateCommand;
pub use notification::{Notification, Notifier};
pub use reducer::RootReducer;
pub use state::{RootState, ScreenState};
