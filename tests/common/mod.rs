#![allow(dead_code)]

use async_trait::async_trait;
use delivery_flow::model::{CartLine, DishId, DishPersist, DishRes, ReviewRes};
use delivery_flow::remote::{FakeRemote, RemoteError, RemoteService};
use delivery_flow::model::OrderRes;
use delivery_flow::repository::CartLedger;
use delivery_flow::store::{self, LocalStore, StoreClient, StoreError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

pub fn dish(id: &str, name: &str) -> DishRes {
    DishRes {
        id: DishId::from(id),
        name: name.to_string(),
        description: format!("{name} description"),
        image: format!("{id}.png"),
        old_price: None,
        price: 100,
        rating: 4.0,
        likes: 3,
        category: "main".to_string(),
    }
}

pub fn numbered_dishes(count: usize) -> Vec<DishRes> {
    (1..=count)
        .map(|n| dish(&format!("d{n}"), &format!("Dish {n}")))
        .collect()
}

pub fn review(text: &str) -> ReviewRes {
    ReviewRes {
        name: "Taster".to_string(),
        date: 1_700_000_000_000,
        rating: 4,
        text: text.to_string(),
    }
}

pub fn memory_store() -> StoreClient {
    let (actor, client) = store::new(64);
    tokio::spawn(actor.run());
    client
}

/// Delegates to a [`StoreClient`] and counts bulk inserts and title searches.
pub struct CountingStore {
    inner: StoreClient,
    pub bulk_inserts: AtomicUsize,
    pub searches: AtomicUsize,
}

impl CountingStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            inner: memory_store(),
            bulk_inserts: AtomicUsize::new(0),
            searches: AtomicUsize::new(0),
        })
    }

    pub fn bulk_insert_count(&self) -> usize {
        self.bulk_inserts.load(Ordering::SeqCst)
    }

    pub fn search_count(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocalStore for CountingStore {
    async fn cart_quantity(&self, id: &DishId) -> Result<Option<u32>, StoreError> {
        self.inner.cart_quantity(id).await
    }

    async fn set_cart_quantity(&self, id: &DishId, count: u32) -> Result<(), StoreError> {
        self.inner.set_cart_quantity(id, count).await
    }

    async fn remove_cart_item(&self, id: &DishId) -> Result<(), StoreError> {
        self.inner.remove_cart_item(id).await
    }

    async fn total_cart_quantity(&self) -> Result<u32, StoreError> {
        self.inner.total_cart_quantity().await
    }

    async fn cart_lines(&self) -> Result<Vec<CartLine>, StoreError> {
        self.inner.cart_lines().await
    }

    async fn clear_cart(&self) -> Result<(), StoreError> {
        self.inner.clear_cart().await
    }

    async fn find_dish(&self, id: &DishId) -> Result<DishPersist, StoreError> {
        self.inner.find_dish(id).await
    }

    async fn search_dishes_by_title(&self, query: &str) -> Result<Vec<DishPersist>, StoreError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.inner.search_dishes_by_title(query).await
    }

    async fn all_dishes(&self) -> Result<Vec<DishPersist>, StoreError> {
        self.inner.all_dishes().await
    }

    async fn dish_count(&self) -> Result<usize, StoreError> {
        self.inner.dish_count().await
    }

    async fn bulk_insert_dishes(&self, dishes: Vec<DishPersist>) -> Result<(), StoreError> {
        self.bulk_inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.bulk_insert_dishes(dishes).await
    }
}

/// A [`FakeRemote`] whose review pages take `delay` to arrive.
pub struct SlowReviews {
    pub inner: FakeRemote,
    pub delay: Duration,
}

#[async_trait]
impl RemoteService for SlowReviews {
    async fn fetch_dishes_page(&self, offset: usize, limit: usize) -> Result<Vec<DishRes>, RemoteError> {
        self.inner.fetch_dishes_page(offset, limit).await
    }

    async fn fetch_reviews_page(
        &self,
        dish_id: &DishId,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<ReviewRes>, RemoteError> {
        tokio::time::sleep(self.delay).await;
        self.inner.fetch_reviews_page(dish_id, offset, limit).await
    }

    async fn submit_review(&self, dish_id: &DishId, rating: u8, text: &str) -> Result<ReviewRes, RemoteError> {
        self.inner.submit_review(dish_id, rating, text).await
    }

    async fn submit_order(&self, lines: &[CartLine]) -> Result<OrderRes, RemoteError> {
        self.inner.submit_order(lines).await
    }
}

/// A [`FakeRemote`] that adds one unit of `dish_id` to the cart while an order is in flight.
pub struct AddsDuringOrder {
    pub inner: FakeRemote,
    pub ledger: CartLedger,
    pub dish_id: DishId,
}

#[async_trait]
impl RemoteService for AddsDuringOrder {
    async fn fetch_dishes_page(&self, offset: usize, limit: usize) -> Result<Vec<DishRes>, RemoteError> {
        self.inner.fetch_dishes_page(offset, limit).await
    }

    async fn fetch_reviews_page(
        &self,
        dish_id: &DishId,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<ReviewRes>, RemoteError> {
        self.inner.fetch_reviews_page(dish_id, offset, limit).await
    }

    async fn submit_review(&self, dish_id: &DishId, rating: u8, text: &str) -> Result<ReviewRes, RemoteError> {
        self.inner.submit_review(dish_id, rating, text).await
    }

    async fn submit_order(&self, lines: &[CartLine]) -> Result<OrderRes, RemoteError> {
        self.ledger
            .add(&self.dish_id, 1)
            .await
            .map_err(|e| RemoteError::Transport(e.to_string()))?;
        self.inner.submit_order(lines).await
    }
}
