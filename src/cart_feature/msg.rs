use crate::model::{CartItem, DishId};

#[derive(Debug, Clone, PartialEq)]
pub enum CartMsg {
    ClickOnDish { id: DishId, title: String },
    IncrementCount(DishId),
    DecrementCount(DishId),
    ShowConfirm { id: DishId, title: String },
    HideConfirm,
    RemoveFromCart { id: DishId, title: String },
    SendOrder,
    ShowCart(Vec<CartItem>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CartEff {
    LoadCart,
    IncrementItem(DishId),
    DecrementItem(DishId),
    RemoveItem { id: DishId, title: String },
    SendOrder,
}
