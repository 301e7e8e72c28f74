use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(conn: Surreal<Client>) -> Self {
        Container {
            account_service: account_service(Arc::new(conn)),
        }
    }
}

fn account_service(db: Arc<Surreal<Client>>) -> Arc<dyn AccountService> {
    let account_repository: Arc<dyn AccountRepository> = Arc::new(AccountRepositoryImpl::new(db));

    Arc::new(AccountServiceImpl::new(account_repository))
}
