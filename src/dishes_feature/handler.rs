use super::{DishesEff, DishesMsg};
use crate::framework::{Commit, EffectHandler, TaskScope};
use crate::repository::CatalogRepository;
use crate::root::{EffectError, Msg, Notifier};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

pub struct DishesEffectHandler {
    repository: CatalogRepository,
    notifier: Notifier,
    search_debounce: Duration,
    pending_search: TaskScope,
    /// Highest search sequence number started so far.
    latest_search: Mutex<u64>,
}

impl DishesEffectHandler {
    pub fn new(repository: CatalogRepository, notifier: Notifier, search_debounce: Duration) -> Self {
        Self {
            repository,
            notifier,
            search_debounce,
            pending_search: TaskScope::new(),
            latest_search: Mutex::new(0),
        }
    }

    async fn show_list(&self, commit: &Commit<Msg>) -> Result<(), EffectError> {
        let dishes = self.repository.find_dishes().await?;
        commit.send(Msg::Dishes(DishesMsg::ShowDishes(dishes))).await;
        Ok(())
    }

    /// Waits out the debounce delay, then searches. A search only starts if no higher `seq`
    /// has started, and it aborts whatever is pending. Results carry `seq` so the reducer can
    /// drop stale ones.
    async fn debounced_search(
        &self,
        query: String,
        seq: u64,
        commit: &Commit<Msg>,
    ) -> Result<(), EffectError> {
        let search = {
            let mut latest = self
                .latest_search
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            if seq <= *latest {
                debug!(seq, latest = *latest, "Search already superseded");
                return Ok(());
            }
            *latest = seq;
            self.pending_search.cancel();

            let repository = self.repository.clone();
            let commit = commit.clone();
            let delay = self.search_debounce;
            self.pending_search.spawn(async move {
                tokio::time::sleep(delay).await;
                commit.send(Msg::Dishes(DishesMsg::ShowSearchLoading { seq })).await;
                let dishes = repository.search_dishes(&query).await?;
                commit
                    .send(Msg::Dishes(DishesMsg::ShowSearchResults { seq, dishes }))
                    .await;
                Ok::<_, EffectError>(())
            })
        };

        match search.join().await {
            Some(result) => result,
            None => {
                debug!(seq, "Search superseded");
                Ok(())
            }
        }
    }
}

#[async_trait]
impl EffectHandler for DishesEffectHandler {
    type Effect = DishesEff;
    type Msg = Msg;
    type Error = EffectError;

    async fn handle(&self, effect: DishesEff, commit: &Commit<Msg>) -> Result<(), EffectError> {
        match effect {
            DishesEff::AddToCart { id, title } => {
                self.repository.add_dish_to_cart(&id).await?;
                let count = self.repository.cart_count().await?;
                commit.send(Msg::UpdateCartCount(count)).await;
                self.notifier.action(
                    format!("{title} added to cart"),
                    "Undo",
                    Msg::Dishes(DishesMsg::RemoveFromCart { id, title }),
                );
            }
            DishesEff::RemoveFromCart { id, title } => {
                self.repository.remove_dish_from_cart(&id).await?;
                let count = self.repository.cart_count().await?;
                commit.send(Msg::UpdateCartCount(count)).await;
                self.notifier.text(format!("{title} removed from cart"));
            }
            DishesEff::FindAllDishes => {
                commit.send(Msg::Dishes(DishesMsg::ShowLoading)).await;
                self.show_list(commit).await?;
            }
            DishesEff::FindSuggestions { query, seq } => {
                let suggestions = self.repository.find_suggestions(&query).await?;
                commit
                    .send(Msg::Dishes(DishesMsg::ShowSuggestions { seq, suggestions }))
                    .await;
            }
            DishesEff::SearchDishes { query, seq } => {
                self.debounced_search(query, seq, commit).await?
            }
            DishesEff::SyncDishes => {
                commit.send(Msg::Dishes(DishesMsg::ShowLoading)).await;
                self.repository.sync_if_empty().await?;
                self.show_list(commit).await?;
            }
        }
        Ok(())
    }
}
