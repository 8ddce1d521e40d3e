use super::{DishEff, DishMsg};
use crate::framework::{Commit, EffectHandler, TaskScope};
use crate::repository::DishRepository;
use crate::root::{EffectError, Msg, Notifier};
use async_trait::async_trait;
use tracing::debug;

pub struct DishEffectHandler {
    repository: DishRepository,
    notifier: Notifier,
    loads: TaskScope,
}

impl DishEffectHandler {
    pub fn new(repository: DishRepository, notifier: Notifier) -> Self {
        Self {
            repository,
            notifier,
            loads: TaskScope::new(),
        }
    }
}

fn items_added(count: u32) -> String {
    match count {
        1 => "1 item added to cart".to_string(),
        n => format!("{n} items added to cart"),
    }
}

#[async_trait]
impl EffectHandler for DishEffectHandler {
    type Effect = DishEff;
    type Msg = Msg;
    type Error = EffectError;

    async fn handle(&self, effect: DishEff, commit: &Commit<Msg>) -> Result<(), EffectError> {
        match effect {
            DishEff::LoadDish(id) => {
                let repository = self.repository.clone();
                let commit = commit.clone();
                let loaded = self.loads.run(async move {
                    let content = repository.find_dish(&id).await?;
                    commit.send(Msg::Dish(DishMsg::ShowDish(content))).await;
                    Ok::<_, EffectError>(())
                });
                loaded.await.unwrap_or(Ok(()))?;
            }
            DishEff::LoadReviews(id) => {
                let repository = self.repository.clone();
                let commit = commit.clone();
                let loaded = self.loads.run(async move {
                    let reviews = repository.load_reviews(&id).await;
                    commit
                        .send(Msg::Dish(DishMsg::ShowReviews { dish_id: id, reviews }))
                        .await;
                });
                if loaded.await.is_none() {
                    debug!("Review load cancelled");
                }
            }
            DishEff::AddToCart { id, count } => {
                self.repository.add_to_cart(&id, count).await?;
                let total = self.repository.cart_count().await?;
                commit.send(Msg::UpdateCartCount(total)).await;
                self.notifier.text(items_added(count));
            }
            DishEff::SendReview { id, rating, text } => {
                let submitted = self.repository.send_review(&id, rating, &text).await;
                // Reload either way so the list leaves its loading state.
                let reviews = self.repository.load_reviews(&id).await;
                commit
                    .send(Msg::Dish(DishMsg::ShowReviews { dish_id: id, reviews }))
                    .await;
                submitted?;
                self.notifier.text("Review sent");
            }
            DishEff::Terminate => {
                self.loads.cancel();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_added_message() {
        assert_eq!(items_added(1), "1 item added to cart");
        assert_eq!(items_added(4), "4 items added to cart");
    }
}
