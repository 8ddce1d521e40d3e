use crate::model::{CartItem, DishId};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CartUiState {
    #[default]
    Loading,
    Empty,
    Value(Vec<CartItem>),
}

impl CartUiState {
    pub fn from_items(items: Vec<CartItem>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Value(items)
        }
    }

    pub fn total(&self) -> u32 {
        match self {
            Self::Value(items) => items
                .iter()
                .map(CartItem::subtotal)
                .fold(0, u32::saturating_add),
            Self::Loading | Self::Empty => 0,
        }
    }
}

/// Removal confirmation for a single cart row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmDialog {
    #[default]
    Hidden,
    Shown { id: DishId, title: String },
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartState {
    pub list: CartUiState,
    pub confirm: ConfirmDialog,
}
