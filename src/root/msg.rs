use super::NavigateCommand;
use crate::cart_feature::{CartEff, CartMsg};
use crate::dish_feature::{DishEff, DishMsg};
use crate::dishes_feature::{DishesEff, DishesMsg};

/// Every message the dispatcher accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Dishes(DishesMsg),
    Dish(DishMsg),
    Cart(CartMsg),
    /// Authoritative cart total, re-read from the store.
    UpdateCartCount(u32),
    Navigate(NavigateCommand),
}

/// Every effect a reducer can request.
#[derive(Debug, Clone, PartialEq)]
pub enum Eff {
    Dishes(DishesEff),
    Dish(DishEff),
    Cart(CartEff),
    Navigate(NavigateCommand),
}
