use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::middlewares::validate::Json;
use crate::domain::error::AppError;
use crate::domain::models::account::Account;
use crate::domain::services::account::AccountService;

use crate::api::dto::account::{AccountDTO, AccountPayloadDTO};

use actix_web::{
    HttpResponse, delete, get, post, put,
    web::{Data as State, Path},
};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(create)
        .service(get_all)
        .service(get_by_id)
        .service(update)
        .service(delete);
}

/// 200 with the account, or 404 with an empty body.
fn found(account: Option<Account>) -> HttpResponse {
    match account {
        Some(account) => HttpResponse::Ok().json(AccountDTO::from(account)),
        None => HttpResponse::NotFound().finish(),
    }
}

#[utoipa::path(
    responses(
        (status = 201, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[post("/accounts")]
pub async fn create(
    payload: Json<AccountPayloadDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let created = account_service
        .create(payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Created().json(AccountDTO::from(created)))
}

#[utoipa::path(
    responses(
        (status = 200, body = Vec<AccountDTO>),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts")]
pub async fn get_all(account_service: State<Arc<dyn AccountService>>) -> ApiResult {
    let accounts = account_service.get_all().await?;

    Ok(HttpResponse::Ok().json(
        accounts
            .into_iter()
            .map(AccountDTO::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Account identifier")),
    responses(
        (status = 200, body = AccountDTO),
        (status = 404, description = "Account not found"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[get("/accounts/{id}")]
pub async fn get_by_id(
    id: Path<String>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    Ok(found(account_service.get_by_id(&id).await?))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Account identifier")),
    responses(
        (status = 200, body = AccountDTO, description = "Account Updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 404, description = "Account not found"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = AccountPayloadDTO,
    tag = "Account",
)]
#[put("/accounts/{id}")]
pub async fn update(
    id: Path<String>,
    payload: Json<AccountPayloadDTO>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    let updated = account_service
        .update(&id, payload.into_inner().into())
        .await?;

    Ok(found(updated))
}

#[utoipa::path(
    params(("id" = String, Path, description = "Account identifier")),
    responses(
        (status = 200, description = "Account Deleted"),
        (status = 404, description = "Account not found"),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    tag = "Account",
)]
#[delete("/accounts/{id}")]
pub async fn delete(
    id: Path<String>,
    account_service: State<Arc<dyn AccountService>>,
) -> ApiResult {
    Ok(match account_service.delete(&id).await? {
        Some(_) => HttpResponse::Ok().finish(),
        None => HttpResponse::NotFound().finish(),
    })
}
