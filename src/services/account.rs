use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::account::Account,
    repositories::account::AccountRepository,
    services::account::AccountService,
    validation::validate_account,
};

use async_trait::async_trait;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    #[tracing::instrument(skip_all)]
    async fn create(&self, account: Account) -> AppResult<Account> {
        validate_account(&account)?;

        // The identifier is always assigned by the store.
        let created = self
            .repository
            .save(Account {
                id: None,
                ..account
            })
            .await?;

        tracing::info!(id = created.id.as_deref(), "account created");

        Ok(created)
    }

    #[tracing::instrument(skip_all)]
    async fn get_all(&self) -> AppResult<Vec<Account>> {
        Ok(self.repository.find_all().await?)
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: &str) -> AppResult<Option<Account>> {
        Ok(self.repository.find_by_id(id).await?)
    }

    #[tracing::instrument(skip(self, account))]
    async fn update(&self, id: &str, account: Account) -> AppResult<Option<Account>> {
        validate_account(&account)?;

        let Some(existing) = self.repository.find_by_id(id).await? else {
            tracing::debug!("account not found");
            return Ok(None);
        };

        let updated = self.repository.save(existing.apply(account)).await?;

        tracing::info!("account updated");

        Ok(Some(updated))
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: &str) -> AppResult<Option<Account>> {
        let Some(existing) = self.repository.find_by_id(id).await? else {
            tracing::debug!("account not found");
            return Ok(None);
        };

        self.repository.delete(&existing).await?;

        tracing::info!("account deleted");

        Ok(Some(existing))
    }
}
