use crate::core::{redact_auth, strip_url};
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use std::time::Instant;

/// Logs every exchange going through the client: method, URL (auth redacted),
/// status and elapsed time.
#[derive(Clone, Debug, Default)]
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let url = redact_auth(req.url().as_str());
        let started = Instant::now();

        tracing::debug!(%method, %url, "sending request");

        let result = next.run(req, extensions).await.map_err(strip_url);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => {
                tracing::debug!(%method, %url, status = response.status().as_u16(), elapsed_ms, "received response");
            }
            Err(e) => {
                tracing::warn!(%method, %url, elapsed_ms, error = %e, "request failed");
            }
        }

        result
    }
}
