use axum::{middleware, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::quote::{
        __path_create_quote, __path_delete_quote, __path_get_quotes, __path_get_random_quote,
        create_quote, delete_quote, get_quotes, get_random_quote,
    },
    middleware::request_context::assign_request_context,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Quotebook", description = "Store, list, sample and delete quotes"),
    tags(
        (name = "quote", description = "Quote management")
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every quote route runs inside the request context middleware, which assigns the
/// correlation id and request span before the handler is invoked. The generated OpenAPI
/// document is served at `/api/docs/openapi.json` with a Swagger UI at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (routes, api) = api_router().split_for_parts();

    routes
        .layer(middleware::from_fn(assign_request_context))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(get_quotes, create_quote))
        .routes(routes!(get_random_quote))
        .routes(routes!(delete_quote))
}
