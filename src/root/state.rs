use crate::cart_feature::CartState;
use crate::dish_feature::DishState;
use crate::dishes_feature::DishesState;

/// The screen currently shown, with its state.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenState {
    Dishes(DishesState),
    Dish(DishState),
    Cart(CartState),
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::Dishes(DishesState::default())
    }
}

impl ScreenState {
    pub fn is_dish(&self) -> bool {
        matches!(self, Self::Dish(_))
    }

    fn search_seq(&self) -> u64 {
        match self {
            Self::Dishes(dishes) => dishes.search_seq,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RootState {
    pub current: ScreenState,
    /// Screens below the current one, most recent last.
    pub backstack: Vec<ScreenState>,
    pub cart_count: u32,
}

impl RootState {
    /// Highest search sequence number held by any catalog screen on the stack.
    pub fn search_seq(&self) -> u64 {
        self.backstack
            .iter()
            .chain(std::iter::once(&self.current))
            .map(ScreenState::search_seq)
            .max()
            .unwrap_or(0)
    }
}
