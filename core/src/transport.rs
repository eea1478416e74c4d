//! The host-does-IO seam.

use async_trait::async_trait;

use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip on behalf of the engine.
///
/// The engine builds requests and parses responses; the host decides how the
/// bytes move. Implementations must return non-2xx responses as data rather
/// than `Err` — status interpretation belongs to the `parse_*` methods of
/// [`TaskApi`](crate::TaskApi). `Err` is reserved for failures that happened
/// before any status existed: connect, I/O, executor errors.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}
