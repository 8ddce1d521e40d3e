//! Root reducer: routes screen messages and owns navigation.

use super::{Eff, Msg, NavigateCommand, RootState, ScreenState};
use crate::cart_feature::{CartEff, CartReducer, CartState};
use crate::dish_feature::{DishEff, DishReducer, DishState, DishUiState};
use crate::dishes_feature::{DishesEff, DishesReducer, DishesState};
use crate::framework::Reducer;

pub struct RootReducer;

impl RootReducer {
    /// Starting state and the catalog bootstrap.
    pub fn init() -> (RootState, Vec<Eff>) {
        (RootState::default(), vec![Eff::Dishes(DishesEff::SyncDishes)])
    }
}

impl Reducer for RootReducer {
    type State = RootState;
    type Msg = Msg;
    type Effect = Eff;

    fn reduce(state: RootState, msg: Msg) -> (RootState, Vec<Eff>) {
        match msg {
            Msg::UpdateCartCount(cart_count) => (RootState { cart_count, ..state }, Vec::new()),
            Msg::Navigate(command) => navigate(state, command),
            screen_msg => route(state, screen_msg),
        }
    }
}

/// A screen message reaches its reducer only while that screen is current.
fn route(mut state: RootState, msg: Msg) -> (RootState, Vec<Eff>) {
    let (current, effects) = match (std::mem::take(&mut state.current), msg) {
        (ScreenState::Dishes(screen), Msg::Dishes(msg)) => {
            let (screen, effects) = DishesReducer::reduce(screen, msg);
            (ScreenState::Dishes(screen), effects)
        }
        (ScreenState::Dish(screen), Msg::Dish(msg)) => {
            let (screen, effects) = DishReducer::reduce(screen, msg);
            (ScreenState::Dish(screen), effects)
        }
        (ScreenState::Cart(screen), Msg::Cart(msg)) => {
            let (screen, effects) = CartReducer::reduce(screen, msg);
            (ScreenState::Cart(screen), effects)
        }
        (current, _) => (current, Vec::new()),
    };
    state.current = current;
    (state, effects)
}

fn navigate(mut state: RootState, command: NavigateCommand) -> (RootState, Vec<Eff>) {
    let mut effects = Vec::new();
    match command {
        NavigateCommand::ToDishItem { id, title } => {
            if state.current.is_dish() {
                effects.push(Eff::Dish(DishEff::Terminate));
            }
            let opened = ScreenState::Dish(DishState::new(id.clone(), title));
            state.backstack.push(std::mem::replace(&mut state.current, opened));
            effects.push(Eff::Dish(DishEff::LoadDish(id.clone())));
            effects.push(Eff::Dish(DishEff::LoadReviews(id)));
        }
        NavigateCommand::ToCart => {
            if state.current.is_dish() {
                effects.push(Eff::Dish(DishEff::Terminate));
            }
            if !matches!(state.current, ScreenState::Cart(_)) {
                let opened = ScreenState::Cart(CartState::default());
                state.backstack.push(std::mem::replace(&mut state.current, opened));
            }
            effects.push(Eff::Cart(CartEff::LoadCart));
        }
        NavigateCommand::ToDishes => {
            if state.current.is_dish() || state.backstack.iter().any(ScreenState::is_dish) {
                effects.push(Eff::Dish(DishEff::Terminate));
            }
            // The fresh catalog keeps counting so older searches stay stale.
            let search_seq = state.search_seq() + 1;
            state.backstack.clear();
            state.current = ScreenState::Dishes(DishesState {
                search_seq,
                ..DishesState::default()
            });
            effects.push(Eff::Dishes(DishesEff::SyncDishes));
        }
        NavigateCommand::Back => {
            let Some(previous) = state.backstack.pop() else {
                return (state, effects);
            };
            if state.current.is_dish() {
                effects.push(Eff::Dish(DishEff::Terminate));
            }
            effects.extend(resume_effects(&previous));
            state.current = previous;
        }
    }
    (state, effects)
}

/// Reloads a restored screen needs.
fn resume_effects(screen: &ScreenState) -> Vec<Eff> {
    match screen {
        ScreenState::Dishes(_) => Vec::new(),
        ScreenState::Cart(_) => vec![Eff::Cart(CartEff::LoadCart)],
        ScreenState::Dish(dish) => {
            let mut effects = Vec::new();
            if dish.content == DishUiState::Loading {
                effects.push(Eff::Dish(DishEff::LoadDish(dish.id.clone())));
            }
            if dish.reviews.is_loading() {
                effects.push(Eff::Dish(DishEff::LoadReviews(dish.id.clone())));
            }
            effects
        }
    }
}
