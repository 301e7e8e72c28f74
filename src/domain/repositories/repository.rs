use thiserror::Error;

pub type RepositoryResult<T> = core::result::Result<T, RepositoryError>;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("storage failure: {0}")]
    Storage(String),
    #[error("record `{0}` was not returned by the store")]
    MissingRecord(String),
    #[error("record has no identifier")]
    Unidentified,
}
