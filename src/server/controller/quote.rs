use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::quote::{CreateQuoteDto, QuoteDto},
    server::{
        error::AppError, middleware::request_context::RequestContext,
        model::quote::CreateQuoteParams, state::AppState,
    },
};

/// Tag for grouping quote endpoints in OpenAPI documentation
pub static QUOTE_TAG: &str = "quote";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuoteFilterParams {
    /// Only return quotes by this exact author
    pub author: Option<String>,
}

/// Create a new quote.
///
/// Decodes the JSON payload and hands it to the service, which rejects an empty
/// author. A body that is not valid JSON never reaches the service.
///
/// # Returns
/// - `201 Created` - Body is the new quote id
/// - `400 Bad Request` - Malformed JSON or empty author
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    post,
    path = "/quotes",
    tag = QUOTE_TAG,
    request_body = CreateQuoteDto,
    responses(
        (status = 201, description = "Quote created, body is its id", body = i32),
        (status = 400, description = "Malformed JSON or empty author", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn create_quote(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    payload: Result<Json<CreateQuoteDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let id = state
        .quote_service
        .create(&ctx, CreateQuoteParams::from_dto(payload))
        .await?;

    tracing::info!(id, "Quote created");

    Ok((StatusCode::CREATED, Json(id)))
}

/// List quotes, optionally filtered by author.
///
/// Without an `author` query parameter every stored quote is returned; with one, only
/// quotes whose author matches exactly. No match yields an empty array.
///
/// # Returns
/// - `200 OK` - Array of quotes, possibly empty
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/quotes",
    tag = QUOTE_TAG,
    params(QuoteFilterParams),
    responses(
        (status = 200, description = "Matching quotes", body = Vec<QuoteDto>),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_quotes(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    filter: Result<Query<QuoteFilterParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(filter) = filter.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let quotes = match filter.author {
        Some(author) => {
            let quotes = state.quote_service.list_by_author(&ctx, &author).await?;
            tracing::info!(author, returned = quotes.len(), "Listed quotes by author");
            quotes
        }
        None => {
            let quotes = state.quote_service.list_all(&ctx).await?;
            tracing::info!(returned = quotes.len(), "Listed quotes");
            quotes
        }
    };

    let quotes: Vec<QuoteDto> = quotes.into_iter().map(|q| q.into_dto()).collect();

    Ok((StatusCode::OK, Json(quotes)))
}

/// Get one quote chosen at random.
///
/// # Returns
/// - `200 OK` - A single quote
/// - `404 Not Found` - No quotes stored
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    get,
    path = "/quotes/random",
    tag = QUOTE_TAG,
    responses(
        (status = 200, description = "A random quote", body = QuoteDto),
        (status = 404, description = "No quotes stored", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn get_random_quote(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
) -> Result<impl IntoResponse, AppError> {
    let quote = state.quote_service.random_one(&ctx).await?;

    tracing::info!(id = quote.id, "Returned random quote");

    Ok((StatusCode::OK, Json(quote.into_dto())))
}

/// Delete a quote by id.
///
/// A non-integer id is rejected as invalid input before the service is called.
///
/// # Returns
/// - `204 No Content` - Quote deleted
/// - `400 Bad Request` - Id is not an integer
/// - `404 Not Found` - No quote with that id
/// - `500 Internal Server Error` - Storage error
#[utoipa::path(
    delete,
    path = "/quotes/{id}",
    tag = QUOTE_TAG,
    params(
        ("id" = i32, Path, description = "Quote ID")
    ),
    responses(
        (status = 204, description = "Quote deleted"),
        (status = 400, description = "Id is not an integer", body = String, content_type = "text/plain"),
        (status = 404, description = "Quote not found", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error", body = String, content_type = "text/plain")
    ),
)]
pub async fn delete_quote(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) =
        id.map_err(|_| AppError::InvalidInput("quote id must be an integer".to_string()))?;

    state.quote_service.delete_by_id(&ctx, id).await?;

    tracing::info!(id, "Quote deleted");

    Ok(StatusCode::NO_CONTENT)
}
