use std::sync::Arc;

use actix_web::http::StatusCode;
use rstest::*;
use serde::Deserialize;
use serde_json::json;

use crate::domain::models::account::Account;
use crate::domain::repositories::account::AccountRepository;
use crate::infrastructure::repositories::account::AccountRepositoryImpl;
use crate::tests::{Error, TestContext, context};

use crate::app;
use actix_web::test;
use actix_web::test::TestRequest;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountBody {
    id: Option<String>,
    name: String,
    document: String,
    phone: String,
}

async fn seed_account(context: &TestContext) -> Account {
    AccountRepositoryImpl::new(Arc::new(context.db.connection.clone()))
        .save(Account::new("Pedro Vieira", "493.166.368-09", "(11)98822-0443"))
        .await
        .unwrap()
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_create_account(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container.clone(), vec![])).await;

    let res = TestRequest::post()
        .uri("/accounts")
        .set_json(json!({
            "name": "Pedro Vieira",
            "document": "493.166.368-09",
            "phone": "(11)98822-0443",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers().contains_key("x-request-id"));

    let acc: AccountBody = test::read_body_json(res).await;

    assert_eq!(acc.name, "Pedro Vieira");
    assert_eq!(acc.document, "493.166.368-09");
    assert_eq!(acc.phone, "(11)98822-0443");

    let id = acc.id.unwrap();
    assert!(!id.is_empty());

    let res = TestRequest::get()
        .uri(&format!("/accounts/{id}"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let found: AccountBody = test::read_body_json(res).await;
    assert_eq!(found.id.as_deref(), Some(id.as_str()));

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_create_account_validation(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container.clone(), vec![])).await;

    let res = TestRequest::post()
        .uri("/accounts")
        .set_json(json!({
            "name": "",
            "document": "493.166.368-09",
            "phone": "(11)98822-0443",
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let err: Error = test::read_body_json(res).await;

    assert_eq!(
        err,
        Error {
            code: 400,
            message: "[name] nao pode estar em branco!".to_string(),
        }
    );

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_find_all(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container.clone(), vec![])).await;

    let account = seed_account(&context).await;

    let res = TestRequest::get().uri("/accounts").send_request(&app).await;

    assert_eq!(res.status(), StatusCode::OK);

    let accounts: Vec<AccountBody> = test::read_body_json(res).await;

    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, account.id);
    assert_eq!(accounts[0].name, account.name);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_update_account(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container.clone(), vec![])).await;

    let account = seed_account(&context).await;
    let id = account.id.clone().unwrap();

    let res = TestRequest::put()
        .uri(&format!("/accounts/{id}"))
        .set_json(json!({
            "name": "Pedro Henrique Vieira",
            "document": account.document,
            "phone": account.phone,
        }))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let acc: AccountBody = test::read_body_json(res).await;

    assert_eq!(acc.id.as_deref(), Some(id.as_str()));
    assert_eq!(acc.name, "Pedro Henrique Vieira");

    let stored = context
        .container
        .account_service
        .get_by_id(&id)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(stored.name, "Pedro Henrique Vieira");

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_delete_account(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container.clone(), vec![])).await;

    let account = seed_account(&context).await;
    let id = account.id.unwrap();

    let res = TestRequest::delete()
        .uri(&format!("/accounts/{id}"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let res = TestRequest::get()
        .uri(&format!("/accounts/{id}"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(test::read_body(res).await.is_empty());

    let res = TestRequest::delete()
        .uri(&format!("/accounts/{id}"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_unknown_route(#[future] context: TestContext) {
    let app = test::init_service(app::create(context.container.clone(), vec![])).await;

    let res = TestRequest::get().uri("/unknown").send_request(&app).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, 404);

    let _ = context.db.container.stop().await;
}

#[rstest]
#[awt]
#[actix_web::test]
async fn test_schema_rejects_short_fields(#[future] context: TestContext) {
    let result = AccountRepositoryImpl::new(Arc::new(context.db.connection.clone()))
        .save(Account::new("abc", "493.166.368-09", "(11)98822-0443"))
        .await;

    assert!(result.is_err());

    let _ = context.db.container.stop().await;
}
