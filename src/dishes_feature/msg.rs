use crate::model::{DishId, DishItem, Suggestion};

#[derive(Debug, Clone, PartialEq)]
pub enum DishesMsg {
    SearchInput(String),
    SearchSubmit(String),
    SearchToggle,
    SuggestionSelect(String),
    ShowLoading,
    ShowDishes(Vec<DishItem>),
    ShowSearchLoading { seq: u64 },
    ShowSearchResults { seq: u64, dishes: Vec<DishItem> },
    ShowSuggestions { seq: u64, suggestions: Vec<Suggestion> },
    AddToCart { id: DishId, title: String },
    RemoveFromCart { id: DishId, title: String },
    ClickDish { id: DishId, title: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DishesEff {
    /// Debounced; a search with a higher `seq` supersedes a pending one.
    SearchDishes { query: String, seq: u64 },
    FindSuggestions { query: String, seq: u64 },
    FindAllDishes,
    /// Bootstraps the catalog from the remote when the cache is empty.
    SyncDishes,
    AddToCart { id: DishId, title: String },
    RemoveFromCart { id: DishId, title: String },
}
