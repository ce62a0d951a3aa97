//! Per-request correlation context.
//!
//! Every request routed by the server is assigned a `RequestContext` before it reaches a
//! handler. The context carries a freshly generated correlation id and a `tracing` span
//! tagged with it. Handlers extract the context and pass it explicitly to the service and
//! repository layers, which log under the same span. The id exists only for log
//! correlation; it plays no part in idempotency or deduplication.

use axum::{
    extract::Request,
    http::Method,
    middleware::Next,
    response::Response,
};
use tracing::{Instrument, Span};
use uuid::Uuid;

/// Request-scoped correlation data threaded through every layer of a request.
///
/// Cheap to clone: the span is reference counted by the subscriber.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Uuid,
    span: Span,
}

impl RequestContext {
    /// Creates a context with a new random correlation id.
    ///
    /// # Arguments
    /// - `method` - HTTP method of the request, recorded on the span
    /// - `path` - Request path, recorded on the span
    pub fn new(method: &Method, path: &str) -> Self {
        let request_id = Uuid::new_v4();
        let span = tracing::info_span!(
            "request",
            request_id = %request_id,
            method = %method,
            path = %path,
        );

        Self { request_id, span }
    }

    /// Correlation id recorded on the span as `request_id`.
    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    /// Span every log line for this request should be emitted under.
    pub fn span(&self) -> &Span {
        &self.span
    }
}

/// Assigns a `RequestContext` to the request and runs the rest of the stack inside its span.
///
/// The error-to-response conversion happens inside `next.run`, so failures logged while
/// rendering a 500 also carry the correlation id.
pub async fn assign_request_context(mut request: Request, next: Next) -> Response {
    let ctx = RequestContext::new(request.method(), request.uri().path());
    let span = ctx.span().clone();

    request.extensions_mut().insert(ctx);

    async move {
        tracing::info!("incoming request");

        let response = next.run(request).await;

        tracing::info!(status = response.status().as_u16(), "request completed");

        response
    }
    .instrument(span)
    .await
}
