use crate::remote::RemoteError;
use crate::repository::RepositoryError;
use crate::store::StoreError;
use thiserror::Error;

/// Failure of an effect. Logged in full, shown to the user as [`EffectError::user_message`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EffectError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<StoreError> for EffectError {
    fn from(error: StoreError) -> Self {
        Self::Repository(error.into())
    }
}

impl From<RemoteError> for EffectError {
    fn from(error: RemoteError) -> Self {
        Self::Repository(error.into())
    }
}

impl EffectError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Repository(RepositoryError::Store(StoreError::DishNotFound(_))) => {
                "This dish is no longer available"
            }
            Self::Repository(RepositoryError::Store(_)) => "Could not access saved data",
            Self::Repository(RepositoryError::Remote(RemoteError::Transport(_))) => {
                "No connection, please try again"
            }
            Self::Repository(RepositoryError::Remote(_)) => "The server could not handle the request",
            Self::Repository(RepositoryError::EmptyCart) => "Your cart is empty",
        }
    }
}
