use crate::model::{DishContent, DishId, ReviewRes};

#[derive(Debug, Clone, PartialEq)]
pub enum DishMsg {
    IncrementCount,
    DecrementCount,
    AddToCart { id: DishId, count: u32 },
    ShowDish(DishContent),
    ShowReviews { dish_id: DishId, reviews: Vec<ReviewRes> },
    ShowReviewDialog,
    HideReviewDialog,
    SendReview { id: DishId, rating: u8, text: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DishEff {
    LoadDish(DishId),
    LoadReviews(DishId),
    AddToCart { id: DishId, count: u32 },
    SendReview { id: DishId, rating: u8, text: String },
    /// Aborts loads still in flight for the screen being left.
    Terminate,
}
