use crate::model::DishId;

/// Screen transitions requested by effects and published to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigateCommand {
    ToDishItem { id: DishId, title: String },
    ToCart,
    /// Back to the catalog, discarding the backstack.
    ToDishes,
    Back,
}
