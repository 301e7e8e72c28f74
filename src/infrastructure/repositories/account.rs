use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;
use uuid::Uuid;

use crate::domain::models::account::Account;
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountContent};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

impl From<surrealdb::Error> for RepositoryError {
    fn from(error: surrealdb::Error) -> Self {
        RepositoryError::Storage(error.to_string())
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn save(&self, account: Account) -> RepositoryResult<Account> {
        let saved: Option<SurrealAccount> = match account.id.clone() {
            Some(id) => {
                self.db
                    .upsert((ACCOUNT, id))
                    .content(SurrealAccountContent::from(account))
                    .await?
            }
            None => {
                self.db
                    .create((ACCOUNT, Uuid::new_v4().to_string()))
                    .content(SurrealAccountContent::from(account))
                    .await?
            }
        };

        saved
            .map(Into::into)
            .ok_or_else(|| RepositoryError::MissingRecord(ACCOUNT.to_string()))
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Account>> {
        let accounts: Vec<SurrealAccount> = self.db.select(ACCOUNT).await?;

        Ok(accounts.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self.db.select((ACCOUNT, id)).await?;

        Ok(account.map(Into::into))
    }

    async fn delete(&self, account: &Account) -> RepositoryResult<()> {
        let id = account.id.as_deref().ok_or(RepositoryError::Unidentified)?;

        let _: Option<SurrealAccount> = self.db.delete((ACCOUNT, id)).await?;

        Ok(())
    }
}
