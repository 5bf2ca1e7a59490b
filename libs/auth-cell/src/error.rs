use thiserror::Error;

use shared_models::error::ApiError;
use shared_utils::storage::StorageError;
use shared_utils::validation::ValidationError;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Session storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Not logged in")]
    NotLoggedIn,
}
