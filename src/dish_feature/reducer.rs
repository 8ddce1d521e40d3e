use super::{DishEff, DishMsg, DishState, DishUiState, ReviewUiState};
use crate::framework::Reducer;
use crate::root::Eff;

/// Accepted review ratings.
pub const RATING_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

pub struct DishReducer;

impl Reducer for DishReducer {
    type State = DishState;
    type Msg = DishMsg;
    type Effect = Eff;

    fn reduce(state: DishState, msg: DishMsg) -> (DishState, Vec<Eff>) {
        match msg {
            DishMsg::IncrementCount => {
                let count = state.count.saturating_add(1);
                (DishState { count, ..state }, Vec::new())
            }
            DishMsg::DecrementCount => {
                let count = state.count.saturating_sub(1).max(1);
                (DishState { count, ..state }, Vec::new())
            }
            DishMsg::AddToCart { id, count } if count > 0 => {
                (state, vec![Eff::Dish(DishEff::AddToCart { id, count })])
            }
            DishMsg::ShowDish(content) if content.id == state.id => (
                DishState {
                    content: DishUiState::Value(content),
                    ..state
                },
                Vec::new(),
            ),
            DishMsg::ShowReviews { dish_id, reviews } if dish_id == state.id => (
                DishState {
                    reviews: ReviewUiState::from_list(reviews),
                    ..state
                },
                Vec::new(),
            ),
            DishMsg::ShowReviewDialog => (
                DishState {
                    is_review_dialog: true,
                    ..state
                },
                Vec::new(),
            ),
            DishMsg::HideReviewDialog => (
                DishState {
                    is_review_dialog: false,
                    ..state
                },
                Vec::new(),
            ),
            DishMsg::SendReview { id, rating, text }
                if id == state.id && RATING_RANGE.contains(&rating) =>
            {
                let reviews = state.reviews.with_loading();
                (
                    DishState {
                        reviews,
                        is_review_dialog: false,
                        ..state
                    },
                    vec![Eff::Dish(DishEff::SendReview { id, rating, text })],
                )
            }
            // Stale results for another dish, a zero count or an out-of-range rating.
            _ => (state, Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DishContent, DishId, ReviewRes};

    fn opened() -> DishState {
        DishState::new(DishId::from("d1"), "Borscht")
    }

    fn content(id: &str) -> DishContent {
        DishContent {
            id: DishId::from(id),
            title: "Borscht".into(),
            description: "Beet soup".into(),
            image: String::new(),
            price: 300,
            old_price: Some(350),
            rating: 4.8,
        }
    }

    fn review(text: &str) -> ReviewRes {
        ReviewRes {
            name: "Ann".into(),
            date: 1_700_000_000_000,
            rating: 5,
            text: text.into(),
        }
    }

    #[test]
    fn test_counter_never_drops_below_one() {
        let (state, _) = DishReducer::reduce(opened(), DishMsg::DecrementCount);
        assert_eq!(state.count, 1);

        let (state, _) = DishReducer::reduce(state, DishMsg::IncrementCount);
        let (state, _) = DishReducer::reduce(state, DishMsg::IncrementCount);
        assert_eq!(state.count, 3);

        let (state, _) = DishReducer::reduce(state, DishMsg::DecrementCount);
        assert_eq!(state.count, 2);
    }

    #[test]
    fn test_show_dish_for_other_dish_is_ignored() {
        let (state, effects) = DishReducer::reduce(opened(), DishMsg::ShowDish(content("d2")));
        assert_eq!(state, opened());
        assert!(effects.is_empty());

        let (state, _) = DishReducer::reduce(opened(), DishMsg::ShowDish(content("d1")));
        assert_eq!(state.content, DishUiState::Value(content("d1")));
    }

    #[test]
    fn test_show_reviews_empty_and_value() {
        let show = |reviews| DishMsg::ShowReviews {
            dish_id: DishId::from("d1"),
            reviews,
        };

        let (state, _) = DishReducer::reduce(opened(), show(vec![]));
        assert_eq!(state.reviews, ReviewUiState::Empty);

        let (state, _) = DishReducer::reduce(state, show(vec![review("Great")]));
        assert_eq!(state.reviews, ReviewUiState::Value(vec![review("Great")]));
    }

    #[test]
    fn test_send_review_closes_dialog_and_keeps_current_reviews() {
        let state = DishState {
            reviews: ReviewUiState::Value(vec![review("Great")]),
            is_review_dialog: true,
            ..opened()
        };
        let msg = DishMsg::SendReview {
            id: DishId::from("d1"),
            rating: 4,
            text: "Tasty".into(),
        };

        let (state, effects) = DishReducer::reduce(state, msg);
        assert!(!state.is_review_dialog);
        assert_eq!(
            state.reviews,
            ReviewUiState::ValueWithLoading(vec![review("Great")])
        );
        assert_eq!(
            effects,
            vec![Eff::Dish(DishEff::SendReview {
                id: DishId::from("d1"),
                rating: 4,
                text: "Tasty".into(),
            })]
        );
    }

    #[test]
    fn test_send_review_rejects_invalid_rating() {
        for rating in [0, 6] {
            let msg = DishMsg::SendReview {
                id: DishId::from("d1"),
                rating,
                text: "?".into(),
            };
            let (state, effects) = DishReducer::reduce(opened(), msg);
            assert_eq!(state, opened());
            assert!(effects.is_empty());
        }
    }

    #[test]
    fn test_add_to_cart_is_an_effect_request() {
        let msg = DishMsg::AddToCart {
            id: DishId::from("d1"),
            count: 3,
        };
        let (state, effects) = DishReducer::reduce(opened(), msg);
        assert_eq!(state, opened());
        assert_eq!(
            effects,
            vec![Eff::Dish(DishEff::AddToCart {
                id: DishId::from("d1"),
                count: 3,
            })]
        );
    }
}
