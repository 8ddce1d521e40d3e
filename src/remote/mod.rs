//! # Remote Service
//!
//! Network boundary for the catalog, reviews and orders. The crate depends only on the
//! [`RemoteService`] trait; [`FakeRemote`] is an in-memory implementation with failure
//! injection for tests and demos.

pub mod error;
pub mod fake;

pub use error::RemoteError;
pub use fake::{FakeRemote, RemoteCall};

use crate::model::{CartLine, DishId, DishRes, OrderRes, ReviewRes};
use async_trait::async_trait;

/// Remote operations consumed by the repositories.
///
/// An `Err` from a page fetch is the only end-of-data signal the pagination loops rely on:
/// a transport failure and a server-reported failure both count as "unsuccessful". A source
/// that never fails is still cut off after [`MAX_PAGES`](crate::repository::MAX_PAGES) pages.
#[async_trait]
pub trait RemoteService: Send + Sync {
    async fn fetch_dishes_page(
        &self,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<DishRes>, RemoteError>;

    async fn fetch_reviews_page(
        &self,
        dish_id: &DishId,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<ReviewRes>, RemoteError>;

    async fn submit_review(
        &self,
        dish_id: &DishId,
        rating: u8,
        text: &str,
    ) -> Result<ReviewRes, RemoteError>;

    async fn submit_order(&self, lines: &[CartLine]) -> Result<OrderRes, RemoteError>;
}
