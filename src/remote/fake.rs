//! # Fake Remote
//!
//! In-memory [`RemoteService`] that serves pages out of seeded data.
//!
//! - A page whose offset is past the end of the data fails with status 404, so every
//!   pagination loop ends with exactly one failed request.
//! - [`FakeRemote::fail_dishes_from_page`] and [`FakeRemote::fail_reviews_from_page`] inject
//!   a 503 from a given page index on.
//! - [`FakeRemote::set_offline`] turns every call into a transport error.
//! - Every call is recorded; see [`FakeRemote::calls`].

use super::{RemoteError, RemoteService};
use crate::model::{CartLine, DishId, DishRes, OrderRes, ReviewRes};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// A call observed by [`FakeRemote`].
#[derive(Debug, Clone, PartialEq)]
pub enum RemoteCall {
    DishesPage { offset: usize, limit: usize },
    ReviewsPage { dish_id: DishId, offset: usize, limit: usize },
    SubmitReview { dish_id: DishId, rating: u8 },
    SubmitOrder { lines: Vec<CartLine> },
}

#[derive(Default)]
struct FakeState {
    dishes: Vec<DishRes>,
    reviews: HashMap<DishId, Vec<ReviewRes>>,
    dish_failure_page: Option<usize>,
    review_failure_page: Option<usize>,
    offline: bool,
    calls: Vec<RemoteCall>,
    orders: u32,
}

#[derive(Default)]
pub struct FakeRemote {
    state: Mutex<FakeState>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dishes(self, dishes: Vec<DishRes>) -> Self {
        self.lock().dishes = dishes;
        self
    }

    pub fn with_reviews(self, dish_id: DishId, reviews: Vec<ReviewRes>) -> Self {
        self.lock().reviews.insert(dish_id, reviews);
        self
    }

    /// Dish pages with index `page` and above answer 503.
    pub fn fail_dishes_from_page(self, page: usize) -> Self {
        self.lock().dish_failure_page = Some(page);
        self
    }

    /// Review pages with index `page` and above answer 503.
    pub fn fail_reviews_from_page(self, page: usize) -> Self {
        self.lock().review_failure_page = Some(page);
        self
    }

    pub fn set_offline(&self, offline: bool) {
        self.lock().offline = offline;
    }

    pub fn calls(&self) -> Vec<RemoteCall> {
        self.lock().calls.clone()
    }

    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    pub fn clear_calls(&self) {
        self.lock().calls.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, FakeState> {
        // A poisoned lock only means a test panicked mid-call; the data is still usable.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn page_of<T: Clone>(
    items: &[T],
    offset: usize,
    limit: usize,
    failure_page: Option<usize>,
) -> Result<Vec<T>, RemoteError> {
    let page = if limit == 0 { 0 } else { offset / limit };
    if failure_page.is_some_and(|failing| page >= failing) {
        return Err(RemoteError::Status { code: 503 });
    }
    if offset >= items.len() {
        return Err(RemoteError::Status { code: 404 });
    }
    let end = (offset + limit).min(items.len());
    Ok(items[offset..end].to_vec())
}

fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as i64)
        .unwrap_or_default()
}

#[async_trait]
impl RemoteService for FakeRemote {
    async fn fetch_dishes_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<DishRes>, RemoteError> {
        let mut state = self.lock();
        state.calls.push(RemoteCall::DishesPage { offset, limit });
        if state.offline {
            return Err(RemoteError::Transport("network unreachable".into()));
        }
        let result = page_of(&state.dishes, offset, limit, state.dish_failure_page);
        debug!(offset, limit, ok = result.is_ok(), "Fake dishes page");
        result
    }

    async fn fetch_reviews_page(
        &self,
        dish_id: &DishId,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<ReviewRes>, RemoteError> {
        let mut state = self.lock();
        state.calls.push(RemoteCall::ReviewsPage {
            dish_id: dish_id.clone(),
            offset,
            limit,
        });
        if state.offline {
            return Err(RemoteError::Transport("network unreachable".into()));
        }
        let failure_page = state.review_failure_page;
        let reviews = state.reviews.get(dish_id).map(Vec::as_slice).unwrap_or(&[]);
        page_of(reviews, offset, limit, failure_page)
    }

    async fn submit_review(
        &self,
        dish_id: &DishId,
        rating: u8,
        text: &str,
    ) -> Result<ReviewRes, RemoteError> {
        let mut state = self.lock();
        state.calls.push(RemoteCall::SubmitReview {
            dish_id: dish_id.clone(),
            rating,
        });
        if state.offline {
            return Err(RemoteError::Transport("network unreachable".into()));
        }
        let review = ReviewRes {
            name: "Guest".to_string(),
            date: now_millis(),
            rating,
            text: text.to_string(),
        };
        state
            .reviews
            .entry(dish_id.clone())
            .or_default()
            .push(review.clone());
        Ok(review)
    }

    async fn submit_order(&self, lines: &[CartLine]) -> Result<OrderRes, RemoteError> {
        let mut state = self.lock();
        state.calls.push(RemoteCall::SubmitOrder {
            lines: lines.to_vec(),
        });
        if state.offline {
            return Err(RemoteError::Transport("network unreachable".into()));
        }
        if lines.is_empty() {
            return Err(RemoteError::Status { code: 422 });
        }
        let total = lines
            .iter()
            .filter_map(|line| {
                state
                    .dishes
                    .iter()
                    .find(|dish| dish.id == line.dish_id)
                    .map(|dish| dish.price.saturating_mul(line.count))
            })
            .fold(0u32, u32::saturating_add);
        state.orders += 1;
        Ok(OrderRes {
            id: format!("order_{}", state.orders),
            total,
        })
    }
}
