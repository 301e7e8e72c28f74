use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::Account;

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn create(&self, account: Account) -> AppResult<Account>;
    async fn get_all(&self) -> AppResult<Vec<Account>>;
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Account>>;
    async fn update(&self, id: &str, account: Account) -> AppResult<Option<Account>>;
    async fn delete(&self, id: &str) -> AppResult<Option<Account>>;
}
