use super::{DishesEff, DishesMsg, DishesState, DishesUiState};
use crate::framework::Reducer;
use crate::root::{Eff, NavigateCommand};

pub struct DishesReducer;

fn search(query: String, seq: u64) -> Eff {
    Eff::Dishes(DishesEff::SearchDishes { query, seq })
}

impl Reducer for DishesReducer {
    type State = DishesState;
    type Msg = DishesMsg;
    type Effect = Eff;

    fn reduce(state: DishesState, msg: DishesMsg) -> (DishesState, Vec<Eff>) {
        match msg {
            DishesMsg::SearchInput(query) => {
                let seq = state.search_seq + 1;
                (
                    DishesState {
                        input: query.clone(),
                        search_seq: seq,
                        ..state
                    },
                    vec![
                        Eff::Dishes(DishesEff::FindSuggestions {
                            query: query.clone(),
                            seq,
                        }),
                        search(query, seq),
                    ],
                )
            }
            DishesMsg::SearchSubmit(query) | DishesMsg::SuggestionSelect(query) => {
                let seq = state.search_seq + 1;
                (
                    DishesState {
                        input: query.clone(),
                        suggestions: Vec::new(),
                        search_seq: seq,
                        ..state
                    },
                    vec![search(query, seq)],
                )
            }
            DishesMsg::SearchToggle => {
                let leaving = state.is_search;
                let effects = if leaving {
                    vec![Eff::Dishes(DishesEff::FindAllDishes)]
                } else {
                    Vec::new()
                };
                (
                    DishesState {
                        is_search: !leaving,
                        input: String::new(),
                        suggestions: Vec::new(),
                        // Invalidates any search still in flight.
                        search_seq: state.search_seq + 1,
                        ..state
                    },
                    effects,
                )
            }
            DishesMsg::ShowLoading => (
                DishesState {
                    list: DishesUiState::Loading,
                    ..state
                },
                Vec::new(),
            ),
            DishesMsg::ShowDishes(dishes) => (
                DishesState {
                    list: DishesUiState::from_list(dishes),
                    ..state
                },
                Vec::new(),
            ),
            DishesMsg::ShowSearchLoading { seq } if seq == state.search_seq => (
                DishesState {
                    list: DishesUiState::Loading,
                    ..state
                },
                Vec::new(),
            ),
            DishesMsg::ShowSearchResults { seq, dishes } if seq == state.search_seq => (
                DishesState {
                    list: DishesUiState::from_list(dishes),
                    ..state
                },
                Vec::new(),
            ),
            DishesMsg::ShowSuggestions { seq, suggestions } if seq == state.search_seq => (
                DishesState {
                    suggestions,
                    ..state
                },
                Vec::new(),
            ),
            DishesMsg::ShowSearchLoading { .. }
            | DishesMsg::ShowSearchResults { .. }
            | DishesMsg::ShowSuggestions { .. } => (state, Vec::new()),
            DishesMsg::AddToCart { id, title } => {
                (state, vec![Eff::Dishes(DishesEff::AddToCart { id, title })])
            }
            DishesMsg::RemoveFromCart { id, title } => (
                state,
                vec![Eff::Dishes(DishesEff::RemoveFromCart { id, title })],
            ),
            DishesMsg::ClickDish { id, title } => (
                state,
                vec![Eff::Navigate(NavigateCommand::ToDishItem { id, title })],
            ),
        }
    }
}
