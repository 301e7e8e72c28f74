use crate::domain::models::account::Account;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples("0b9a4a1c-7d8e-4f3a-9c6b-2f1e0d9c8b7a"))]
    id: Option<String>,
    name: String,
    document: String,
    phone: String,
}

/// Body of create and update requests. An `id` sent by the client is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AccountPayloadDTO {
    #[schema(examples("Pedro Vieira"), min_length = 5)]
    pub name: String,

    #[schema(examples("493.166.368-09"), min_length = 11)]
    pub document: String,

    #[schema(examples("(11)98822-0443"), min_length = 9)]
    pub phone: String,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            document: val.document,
            phone: val.phone,
        }
    }
}

impl From<AccountPayloadDTO> for Account {
    fn from(payload: AccountPayloadDTO) -> Self {
        Account::new(payload.name, payload.document, payload.phone)
    }
}
