use thiserror::Error;

use crate::domain::error::AppError;

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("{0} was not returned after insert")]
    NotCreated(&'static str),
    #[error("{0} violates a unique index")]
    Duplicate(&'static str),
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        AppError::InternalError().trace(&error.to_string())
    }
}
