use serde::{Deserialize, Serialize};
use surrealdb::sql::{Id, Thing};

use crate::domain::models::account::Account;

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    name: String,
    document: String,
    phone: String,
}

/// Record content without the id; the key travels in the resource tuple.
#[derive(Serialize)]
pub struct SurrealAccountContent {
    name: String,
    document: String,
    phone: String,
}

impl From<Account> for SurrealAccountContent {
    fn from(acc: Account) -> Self {
        SurrealAccountContent {
            name: acc.name,
            document: acc.document,
            phone: acc.phone,
        }
    }
}

impl From<SurrealAccount> for Account {
    fn from(acc: SurrealAccount) -> Self {
        Account {
            id: Some(record_key(acc.id)),
            name: acc.name,
            document: acc.document,
            phone: acc.phone,
        }
    }
}

// `Id`'s Display escapes non-alphanumeric keys, so string keys are unwrapped as is.
fn record_key(thing: Thing) -> String {
    match thing.id {
        Id::String(key) => key,
        other => other.to_string(),
    }
}
