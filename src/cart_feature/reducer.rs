use super::{CartEff, CartMsg, CartState, CartUiState, ConfirmDialog};
use crate::framework::Reducer;
use crate::root::{Eff, NavigateCommand};

pub struct CartReducer;

impl Reducer for CartReducer {
    type State = CartState;
    type Msg = CartMsg;
    type Effect = Eff;

    fn reduce(state: CartState, msg: CartMsg) -> (CartState, Vec<Eff>) {
        match msg {
            CartMsg::ClickOnDish { id, title } => (
                state,
                vec![Eff::Navigate(NavigateCommand::ToDishItem { id, title })],
            ),
            CartMsg::IncrementCount(id) => (state, vec![Eff::Cart(CartEff::IncrementItem(id))]),
            CartMsg::DecrementCount(id) => (state, vec![Eff::Cart(CartEff::DecrementItem(id))]),
            CartMsg::ShowConfirm { id, title } => (
                CartState {
                    confirm: ConfirmDialog::Shown { id, title },
                    ..state
                },
                Vec::new(),
            ),
            CartMsg::HideConfirm => (
                CartState {
                    confirm: ConfirmDialog::Hidden,
                    ..state
                },
                Vec::new(),
            ),
            CartMsg::RemoveFromCart { id, title } => (
                CartState {
                    confirm: ConfirmDialog::Hidden,
                    ..state
                },
                vec![Eff::Cart(CartEff::RemoveItem { id, title })],
            ),
            CartMsg::SendOrder => {
                let effects = match state.list {
                    CartUiState::Value(_) => vec![Eff::Cart(CartEff::SendOrder)],
                    CartUiState::Loading | CartUiState::Empty => Vec::new(),
                };
                (state, effects)
            }
            CartMsg::ShowCart(items) => (
                CartState {
                    list: CartUiState::from_items(items),
                    ..state
                },
                Vec::new(),
            ),
        }
    }
}
