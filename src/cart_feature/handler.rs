use super::{CartEff, CartMsg};
use crate::framework::{Commit, EffectHandler};
use crate::repository::CartRepository;
use crate::root::{EffectError, Msg, Notifier};
use async_trait::async_trait;

pub struct CartEffectHandler {
    repository: CartRepository,
    notifier: Notifier,
}

impl CartEffectHandler {
    pub fn new(repository: CartRepository, notifier: Notifier) -> Self {
        Self {
            repository,
            notifier,
        }
    }

    /// Commits the current cart rows and the authoritative total.
    async fn refresh(&self, commit: &Commit<Msg>) -> Result<(), EffectError> {
        let items = self.repository.load_cart().await?;
        commit.send(Msg::Cart(CartMsg::ShowCart(items))).await;
        let count = self.repository.cart_count().await?;
        commit.send(Msg::UpdateCartCount(count)).await;
        Ok(())
    }
}

#[async_trait]
impl EffectHandler for CartEffectHandler {
    type Effect = CartEff;
    type Msg = Msg;
    type Error = EffectError;

    async fn handle(&self, effect: CartEff, commit: &Commit<Msg>) -> Result<(), EffectError> {
        match effect {
            CartEff::LoadCart => self.refresh(commit).await?,
            CartEff::IncrementItem(id) => {
                self.repository.increment_item(&id).await?;
                self.refresh(commit).await?;
            }
            CartEff::DecrementItem(id) => {
                self.repository.decrement_item(&id).await?;
                self.refresh(commit).await?;
            }
            CartEff::RemoveItem { id, title } => {
                self.repository.remove_item(&id).await?;
                self.refresh(commit).await?;
                self.notifier.text(format!("{title} removed from cart"));
            }
            CartEff::SendOrder => {
                let order = self.repository.send_order().await?;
                self.refresh(commit).await?;
                self.notifier
                    .text(format!("Order {} placed, total {}", order.id, order.total));
            }
        }
        Ok(())
    }
}
