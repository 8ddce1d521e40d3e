use super::{EffectError, Eff, Msg, NavigateCommand, Notifier};
use crate::cart_feature::CartEffectHandler;
use crate::dish_feature::DishEffectHandler;
use crate::dishes_feature::DishesEffectHandler;
use crate::framework::{Commit, EffectHandler};
use crate::repository::Repositories;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

/// Delegates each effect to its screen's handler and turns failures into error
/// notifications.
pub struct RootEffectHandler {
    dishes: DishesEffectHandler,
    dish: DishEffectHandler,
    cart: CartEffectHandler,
    navigation: mpsc::Sender<NavigateCommand>,
    notifier: Notifier,
}

impl RootEffectHandler {
    pub fn new(
        repositories: Repositories,
        notifier: Notifier,
        navigation: mpsc::Sender<NavigateCommand>,
        search_debounce: Duration,
    ) -> Self {
        Self {
            dishes: DishesEffectHandler::new(
                repositories.catalog,
                notifier.clone(),
                search_debounce,
            ),
            dish: DishEffectHandler::new(repositories.dish, notifier.clone()),
            cart: CartEffectHandler::new(repositories.cart, notifier.clone()),
            navigation,
            notifier,
        }
    }

    fn publish_navigation(&self, command: NavigateCommand) {
        match self.navigation.try_send(command) {
            Ok(()) => {}
            Err(TrySendError::Full(command)) => warn!(?command, "Navigation channel full, dropped"),
            Err(TrySendError::Closed(command)) => debug!(?command, "Navigation receiver gone"),
        }
    }
}

#[async_trait]
impl EffectHandler for RootEffectHandler {
    type Effect = Eff;
    type Msg = Msg;
    type Error = EffectError;

    async fn handle(&self, effect: Eff, commit: &Commit<Msg>) -> Result<(), EffectError> {
        match effect {
            Eff::Dishes(effect) => self.dishes.handle(effect, commit).await,
            Eff::Dish(effect) => self.dish.handle(effect, commit).await,
            Eff::Cart(effect) => self.cart.handle(effect, commit).await,
            Eff::Navigate(command) => {
                self.publish_navigation(command.clone());
                commit.send(Msg::Navigate(command)).await;
                Ok(())
            }
        }
    }

    async fn on_error(&self, error: EffectError) {
        self.notifier.error(error.user_message());
    }
}
