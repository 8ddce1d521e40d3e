mod common;

use common::{numbered_dishes, review};
use delivery_flow::cart_feature::{CartMsg, CartUiState};
use delivery_flow::dish_feature::{DishMsg, ReviewUiState};
use delivery_flow::dishes_feature::{DishesMsg, DishesUiState};
use delivery_flow::framework::mock::expect_recv;
use delivery_flow::framework::DispatchClient;
use delivery_flow::lifecycle::{DeliveryConfig, DeliverySystem};
use delivery_flow::model::DishId;
use delivery_flow::remote::FakeRemote;
use delivery_flow::root::{Msg, NavigateCommand, Notification, RootState, ScreenState};
use std::sync::Arc;
use std::time::Duration;

fn config() -> DeliveryConfig {
    DeliveryConfig {
        search_debounce_ms: 10,
        ..DeliveryConfig::default()
    }
}

async fn wait(
    client: &DispatchClient<Msg, RootState>,
    predicate: impl FnMut(&RootState) -> bool,
) -> RootState {
    tokio::time::timeout(Duration::from_secs(5), client.wait_for(predicate))
        .await
        .expect("state never matched")
        .expect("dispatcher stopped")
}

fn catalog_loaded(state: &RootState) -> bool {
    matches!(&state.current, ScreenState::Dishes(d) if matches!(d.list, DishesUiState::Value(_)))
}

#[tokio::test]
async fn test_startup_bootstraps_catalog() {
    let remote = Arc::new(FakeRemote::new().with_dishes(numbered_dishes(12)));
    let system = DeliverySystem::new(&config(), remote.clone());

    let state = wait(&system.client, catalog_loaded).await;
    match &state.current {
        ScreenState::Dishes(dishes) => {
            assert!(matches!(&dishes.list, DishesUiState::Value(list) if list.len() == 12));
        }
        other => panic!("Unexpected screen: {other:?}"),
    }
    assert_eq!(remote.call_count(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_add_then_undo_through_notification_action() {
    let remote = Arc::new(FakeRemote::new().with_dishes(numbered_dishes(3)));
    let mut system = DeliverySystem::new(&config(), remote);
    wait(&system.client, catalog_loaded).await;

    system
        .client
        .send(Msg::Dishes(DishesMsg::AddToCart {
            id: DishId::from("d1"),
            title: "Dish 1".into(),
        }))
        .await
        .unwrap();
    wait(&system.client, |state| state.cart_count == 1).await;

    let undo = match expect_recv(&mut system.notifications).await {
        Notification::Action { action, label, .. } => {
            assert_eq!(label, "Undo");
            action
        }
        other => panic!("Unexpected notification: {other:?}"),
    };
    system.client.send(undo).await.unwrap();
    wait(&system.client, |state| state.cart_count == 0).await;

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dish_detail_round_trip() {
    let id = DishId::from("d2");
    let remote = Arc::new(
        FakeRemote::new()
            .with_dishes(numbered_dishes(3))
            .with_reviews(id.clone(), vec![review("Solid")]),
    );
    let mut system = DeliverySystem::new(&config(), remote);
    wait(&system.client, catalog_loaded).await;

    system
        .client
        .send(Msg::Dishes(DishesMsg::ClickDish {
            id: id.clone(),
            title: "Dish 2".into(),
        }))
        .await
        .unwrap();
    assert_eq!(
        expect_recv(&mut system.navigation).await,
        NavigateCommand::ToDishItem {
            id: id.clone(),
            title: "Dish 2".into(),
        }
    );
    wait(&system.client, |state| {
        matches!(&state.current, ScreenState::Dish(d) if matches!(d.reviews, ReviewUiState::Value(_)))
    })
    .await;

    system
        .client
        .send(Msg::Dish(DishMsg::SendReview {
            id: id.clone(),
            rating: 5,
            text: "Outstanding".into(),
        }))
        .await
        .unwrap();
    let state = wait(&system.client, |state| {
        matches!(&state.current, ScreenState::Dish(d) if matches!(&d.reviews, ReviewUiState::Value(r) if r.len() == 2))
    })
    .await;
    if let ScreenState::Dish(dish) = &state.current {
        if let ReviewUiState::Value(reviews) = &dish.reviews {
            assert_eq!(reviews[1].text, "Outstanding");
        }
    }

    system.client.send(Msg::Navigate(NavigateCommand::Back)).await.unwrap();
    let state = wait(&system.client, |state| matches!(state.current, ScreenState::Dishes(_))).await;
    assert!(state.backstack.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_checkout_flow() {
    let remote = Arc::new(FakeRemote::new().with_dishes(numbered_dishes(3)));
    let system = DeliverySystem::new(&config(), remote);
    wait(&system.client, catalog_loaded).await;

    for (added, id) in ["d1", "d1", "d3"].into_iter().enumerate() {
        system
            .client
            .send(Msg::Dishes(DishesMsg::AddToCart {
                id: DishId::from(id),
                title: id.into(),
            }))
            .await
            .unwrap();
        let expected = added as u32 + 1;
        wait(&system.client, move |state| state.cart_count == expected).await;
    }

    system.client.send(Msg::Navigate(NavigateCommand::ToCart)).await.unwrap();
    let state = wait(&system.client, |state| {
        matches!(&state.current, ScreenState::Cart(c) if matches!(c.list, CartUiState::Value(_)))
    })
    .await;
    if let ScreenState::Cart(cart) = &state.current {
        assert_eq!(cart.list.total(), 300);
    }

    system.client.send(Msg::Cart(CartMsg::SendOrder)).await.unwrap();
    wait(&system.client, |state| {
        state.cart_count == 0
            && matches!(&state.current, ScreenState::Cart(c) if c.list == CartUiState::Empty)
    })
    .await;

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_search_shows_matching_dishes() {
    let remote = Arc::new(FakeRemote::new().with_dishes(numbered_dishes(12)));
    let system = DeliverySystem::new(&config(), remote);
    wait(&system.client, catalog_loaded).await;

    system.client.send(Msg::Dishes(DishesMsg::SearchToggle)).await.unwrap();
    system
        .client
        .send(Msg::Dishes(DishesMsg::SearchInput("1".into())))
        .await
        .unwrap();

    let state = wait(&system.client, |state| {
        matches!(&state.current, ScreenState::Dishes(d)
            if matches!(&d.list, DishesUiState::Value(list) if list.len() == 4)
            && !d.suggestions.is_empty())
    })
    .await;
    if let ScreenState::Dishes(dishes) = &state.current {
        assert!(dishes.is_search);
        assert_eq!(dishes.input, "1");
    }

    system.shutdown().await.unwrap();
}

fn shows_only(state: &RootState, query: &str, title: &str) -> bool {
    matches!(&state.current, ScreenState::Dishes(d)
        if d.input == query
        && matches!(&d.list, DishesUiState::Value(list) if list.len() == 1 && list[0].title == title))
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_back_to_back_inputs_show_the_last_query() {
    let remote = Arc::new(FakeRemote::new().with_dishes(numbered_dishes(3)));
    let config = DeliveryConfig {
        search_debounce_ms: 50,
        ..DeliveryConfig::default()
    };
    let system = DeliverySystem::new(&config, remote);
    wait(&system.client, catalog_loaded).await;
    system.client.send(Msg::Dishes(DishesMsg::SearchToggle)).await.unwrap();

    for round in 0..10 {
        let (older, newer) = if round % 2 == 0 {
            ("Dish 1", "Dish 2")
        } else {
            ("Dish 2", "Dish 1")
        };
        for query in [older, newer] {
            system
                .client
                .send(Msg::Dishes(DishesMsg::SearchInput(query.into())))
                .await
                .unwrap();
        }

        wait(&system.client, |state| shows_only(state, newer, newer)).await;
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(
            shows_only(&system.client.state(), newer, newer),
            "round {round}: stale results replaced {newer:?}"
        );
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remote_failure_becomes_error_notification() {
    let id = DishId::from("d1");
    let remote = Arc::new(FakeRemote::new().with_dishes(numbered_dishes(2)));
    let mut system = DeliverySystem::new(&config(), remote.clone());
    wait(&system.client, catalog_loaded).await;

    system
        .client
        .send(Msg::Navigate(NavigateCommand::ToDishItem {
            id: id.clone(),
            title: "Dish 1".into(),
        }))
        .await
        .unwrap();
    wait(&system.client, |state| {
        matches!(&state.current, ScreenState::Dish(d) if !d.reviews.is_loading())
    })
    .await;

    remote.set_offline(true);
    system
        .client
        .send(Msg::Dish(DishMsg::SendReview {
            id,
            rating: 2,
            text: "Cold".into(),
        }))
        .await
        .unwrap();

    assert_eq!(
        expect_recv(&mut system.notifications).await,
        Notification::Error("No connection, please try again".into())
    );
    let state = system.client.state();
    assert!(state.current.is_dish());

    system.shutdown().await.unwrap();
}
