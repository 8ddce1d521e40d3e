use crate::remote::RemoteError;
use crate::store::StoreError;
use thiserror::Error;

/// Errors surfaced by the repositories.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RepositoryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Remote(#[from] RemoteError),

    #[error("Cannot submit an empty cart")]
    EmptyCart,
}
