use tracing::debug;

use crate::error::GenerationError;
use crate::models::{GenerationRequest, GenerationResponse};

pub const HELLO_ENDPOINT: &str = "/api/hello";

/// Raw HTTP access to the generation service. Implementations resolve `path`
/// against their configured base URL and report any non-2xx status as
/// [`GenerationError::Status`].
///
/// Futures are not required to be `Send` so the browser transport can
/// implement this too.
#[allow(async_fn_in_trait)]
pub trait GenerationBackend {
    async fn get(&self, path: &str) -> Result<(), GenerationError>;

    /// POSTs a JSON body and returns the response body text.
    async fn post_json(&self, path: &str, body: String) -> Result<String, GenerationError>;
}

/// Sends one generation request and decodes the reply with the shape that
/// belongs to the request's mode.
pub async fn generate<B: GenerationBackend>(
    backend: &B,
    request: &GenerationRequest,
) -> Result<GenerationResponse, GenerationError> {
    let body = serde_json::to_string(request).map_err(|e| GenerationError::Encode(e.to_string()))?;
    debug!(mode = %request.mode(), endpoint = request.endpoint(), "Sending generation request");
    let text = backend.post_json(request.endpoint(), body).await?;
    GenerationResponse::decode(request.mode(), &text)
}

/// Best-effort probe so the backend is awake before the first real request.
/// Whatever happens is ignored.
pub async fn warm_up<B: GenerationBackend>(backend: &B) {
    let _ = backend.get(HELLO_ENDPOINT).await;
}
