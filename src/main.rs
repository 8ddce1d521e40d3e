//! Demo: browses a seeded catalog, adds a dish, reviews it and places an order.

use anyhow::{Context, Result};
use clap::Parser;
use delivery_flow::cart_feature::{CartMsg, CartUiState};
use delivery_flow::dish_feature::DishMsg;
use delivery_flow::dishes_feature::{DishesMsg, DishesUiState};
use delivery_flow::framework::DispatchClient;
use delivery_flow::lifecycle::{setup_tracing, DeliveryConfig, DeliverySystem};
use delivery_flow::model::{DishId, DishRes, ReviewRes};
use delivery_flow::remote::FakeRemote;
use delivery_flow::root::{Msg, NavigateCommand, RootState, ScreenState};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, Instrument};

#[derive(Parser, Debug)]
#[command(about = "Runs the delivery flow against an in-memory backend")]
struct Args {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn dish(id: &str, name: &str, price: u32, old_price: Option<u32>) -> DishRes {
    DishRes {
        id: DishId::from(id),
        name: name.to_string(),
        description: format!("House {}", name.to_lowercase()),
        image: format!("https://img.example/{id}.jpg"),
        old_price,
        price,
        rating: 4.5,
        likes: 12,
        category: "kitchen".to_string(),
    }
}

fn sample_remote() -> FakeRemote {
    let menu = vec![
        dish("d1", "Borscht", 320, None),
        dish("d2", "Spicy Tofu Bowl", 410, Some(450)),
        dish("d3", "Tofu Soup", 280, None),
        dish("d4", "Chicken Kiev", 520, None),
        dish("d5", "Cherry Vareniki", 300, Some(340)),
    ];
    FakeRemote::new().with_dishes(menu).with_reviews(
        DishId::from("d1"),
        vec![ReviewRes {
            name: "Olena".to_string(),
            date: 1_700_000_000_000,
            rating: 5,
            text: "Just like home".to_string(),
        }],
    )
}

async fn wait_until(
    client: &DispatchClient<Msg, RootState>,
    what: &str,
    predicate: impl FnMut(&RootState) -> bool,
) -> Result<RootState> {
    tokio::time::timeout(Duration::from_secs(5), client.wait_for(predicate))
        .await
        .with_context(|| format!("timed out waiting for {what}"))?
        .with_context(|| format!("dispatcher stopped while waiting for {what}"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => DeliveryConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DeliveryConfig::default(),
    };
    setup_tracing(&config.log_filter);

    let mut system = DeliverySystem::new(&config, Arc::new(sample_remote()));
    let client = system.client.clone();

    let state = wait_until(&client, "catalog", |state| {
        matches!(&state.current, ScreenState::Dishes(d) if matches!(d.list, DishesUiState::Value(_)))
    })
    .await?;
    if let ScreenState::Dishes(dishes) = &state.current {
        if let DishesUiState::Value(list) = &dishes.list {
            for item in list {
                info!(id = %item.id, title = %item.title, price = item.price, sale = item.is_sale(), "Dish");
            }
        }
    }

    async {
        client
            .send(Msg::Dishes(DishesMsg::AddToCart {
                id: DishId::from("d2"),
                title: "Spicy Tofu Bowl".to_string(),
            }))
            .await?;
        wait_until(&client, "cart badge", |state| state.cart_count == 1).await?;
        Ok::<_, anyhow::Error>(())
    }
    .instrument(tracing::info_span!("add_to_cart"))
    .await?;

    async {
        client
            .send(Msg::Dishes(DishesMsg::ClickDish {
                id: DishId::from("d1"),
                title: "Borscht".to_string(),
            }))
            .await?;
        wait_until(&client, "dish reviews", |state| {
            matches!(&state.current, ScreenState::Dish(d) if !d.reviews.is_loading())
        })
        .await?;
        client.send(Msg::Dish(DishMsg::IncrementCount)).await?;
        client
            .send(Msg::Dish(DishMsg::AddToCart {
                id: DishId::from("d1"),
                count: 2,
            }))
            .await?;
        client
            .send(Msg::Dish(DishMsg::SendReview {
                id: DishId::from("d1"),
                rating: 4,
                text: "Great beets".to_string(),
            }))
            .await?;
        wait_until(&client, "review round trip", |state| {
            state.cart_count == 3
                && matches!(&state.current, ScreenState::Dish(d) if !d.reviews.is_loading())
        })
        .await?;
        Ok::<_, anyhow::Error>(())
    }
    .instrument(tracing::info_span!("dish_detail"))
    .await?;

    async {
        client.send(Msg::Navigate(NavigateCommand::ToCart)).await?;
        let state = wait_until(&client, "cart", |state| {
            matches!(&state.current, ScreenState::Cart(c) if matches!(c.list, CartUiState::Value(_)))
        })
        .await?;
        if let ScreenState::Cart(cart) = &state.current {
            info!(total = cart.list.total(), "Cart loaded");
        }
        client.send(Msg::Cart(CartMsg::SendOrder)).await?;
        wait_until(&client, "order", |state| state.cart_count == 0).await?;
        Ok::<_, anyhow::Error>(())
    }
    .instrument(tracing::info_span!("checkout"))
    .await?;

    drop(client);
    while let Ok(notification) = system.notifications.try_recv() {
        info!(?notification, "Notification");
    }
    while let Ok(command) = system.navigation.try_recv() {
        info!(?command, "Navigation");
    }

    system.shutdown().await?;
    Ok(())
}
