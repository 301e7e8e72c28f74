use actix_web::{
    App, HttpMessage, HttpResponse,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::header,
    middleware::{Next, from_fn},
    web,
};

use tracing_actix_web::{RequestId, TracingLogger};

use actix_cors::Cors;

use utoipa::openapi::{OpenApi, Server};
use utoipa_actix_web::AppExt;
use utoipa_swagger_ui::SwaggerUi;

use crate::api;
use crate::container::Container;
use crate::domain::error::AppError;

use std::sync::Arc;

pub fn create(
    container: Arc<Container>,
    allowed_origins: Vec<String>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<impl MessageBody>,
        Config = (),
        InitError = (),
        Error = actix_web::Error,
    >,
> {
    App::new()
        .into_utoipa_app()
        .openapi(docs())
        .configure(api::routes)
        .openapi_service(|api| {
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", api)
        })
        .into_app()
        .default_service(web::to(not_found))
        .wrap(TracingLogger::default())
        .wrap(cors(&allowed_origins))
        .wrap(from_fn(request_headers))
        .app_data(web::Data::new(container.account_service.clone()))
}

fn cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(&[header::ACCEPT, header::CONTENT_TYPE])
        .block_on_origin_mismatch(false)
        .max_age(3600)
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound())
}

async fn request_headers(
    req: ServiceRequest,
    svc: Next<impl MessageBody>,
) -> Result<ServiceResponse<impl MessageBody>, actix_web::Error> {
    let request_id = req.extensions().get::<RequestId>().copied();
    let mut res = svc.call(req).await?;

    if let Some(value) =
        request_id.and_then(|id| header::HeaderValue::from_str(&id.to_string()).ok())
    {
        res.headers_mut()
            .insert(header::HeaderName::from_static("x-request-id"), value);
    }
    Ok(res)
}

pub fn docs() -> OpenApi {
    let mut openapi = OpenApi::default();

    openapi.info.title = String::from("Accounts API");
    openapi.info.description = Some(String::from(
        "Create, list, read, update and delete bank accounts",
    ));
    openapi.info.version = String::from(env!("CARGO_PKG_VERSION"));

    openapi.servers = Some(vec![server("http://localhost:8080", "Localhost")]);

    openapi
}

fn server(url: &str, description: &str) -> Server {
    Server::builder()
        .description(Some(description.to_owned()))
        .url(url.to_owned())
        .build()
}
