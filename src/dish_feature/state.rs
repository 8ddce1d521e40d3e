use crate::model::{DishContent, DishId, ReviewRes};

#[derive(Debug, Clone, PartialEq)]
pub enum DishUiState {
    Loading,
    Value(DishContent),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ReviewUiState {
    Loading,
    Empty,
    Value(Vec<ReviewRes>),
    /// Current reviews shown while a submission is in flight.
    ValueWithLoading(Vec<ReviewRes>),
}

impl ReviewUiState {
    pub fn from_list(reviews: Vec<ReviewRes>) -> Self {
        if reviews.is_empty() {
            Self::Empty
        } else {
            Self::Value(reviews)
        }
    }

    /// Whether the list still waits for a server response.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading | Self::ValueWithLoading(_))
    }

    fn into_reviews(self) -> Vec<ReviewRes> {
        match self {
            Self::Value(reviews) | Self::ValueWithLoading(reviews) => reviews,
            Self::Loading | Self::Empty => Vec::new(),
        }
    }

    pub(crate) fn with_loading(self) -> Self {
        Self::ValueWithLoading(self.into_reviews())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DishState {
    pub id: DishId,
    pub title: String,
    pub content: DishUiState,
    pub reviews: ReviewUiState,
    /// Units added by the next add-to-cart; never below one.
    pub count: u32,
    pub is_review_dialog: bool,
}

impl DishState {
    pub fn new(id: DishId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: DishUiState::Loading,
            reviews: ReviewUiState::Loading,
            count: 1,
            is_review_dialog: false,
        }
    }
}
