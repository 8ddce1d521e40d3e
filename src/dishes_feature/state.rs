use crate::model::{DishItem, Suggestion};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DishesUiState {
    #[default]
    Loading,
    Empty,
    Value(Vec<DishItem>),
}

impl DishesUiState {
    pub fn from_list(dishes: Vec<DishItem>) -> Self {
        if dishes.is_empty() {
            Self::Empty
        } else {
            Self::Value(dishes)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DishesState {
    pub list: DishesUiState,
    pub input: String,
    pub is_search: bool,
    pub suggestions: Vec<Suggestion>,
    /// Sequence number of the newest search. Results carrying any other number are stale.
    pub search_seq: u64,
}
