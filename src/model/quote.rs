use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored quote as returned by the API.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct QuoteDto {
    pub id: i32,
    pub author: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /quotes`.
///
/// `id` and `created_at` are assigned by storage; if a client sends them they are ignored.
/// Missing fields default to empty strings so that an absent author is reported as
/// invalid input rather than a malformed body.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateQuoteDto {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub text: String,
}
