use async_trait::async_trait;

use crate::domain::models::account::Account;

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts the account under a fresh identifier when `id` is `None`,
    /// otherwise overwrites the record stored under that identifier.
    async fn save(&self, account: Account) -> RepositoryResult<Account>;
    async fn find_all(&self) -> RepositoryResult<Vec<Account>>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Account>>;
    async fn delete(&self, account: &Account) -> RepositoryResult<()>;
}
