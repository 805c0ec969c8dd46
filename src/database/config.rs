use super::{DatabaseError, FirebaseDatabase};
use crate::core::middleware::LoggingMiddleware;
use reqwest::header::HeaderValue;
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use std::fmt;

/// Suffix the Realtime Database REST API expects on every resource URL.
pub const FIREBASE_API_JSON_EXTENSION: &str = ".json";

/// Immutable settings of a [`FirebaseDatabase`].
///
/// To rotate the auth token, build a new client.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub(crate) base_url: String,
    pub(crate) auth: Option<String>,
    pub(crate) json_suffix: bool,
    pub(crate) content_type: Option<HeaderValue>,
}

impl DatabaseConfig {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_auth(&self) -> bool {
        self.auth.is_some()
    }

    pub fn json_suffix(&self) -> bool {
        self.json_suffix
    }

    pub fn content_type(&self) -> Option<&HeaderValue> {
        self.content_type.as_ref()
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("base_url", &self.base_url)
            .field("auth", &self.auth.as_ref().map(|_| "<redacted>"))
            .field("json_suffix", &self.json_suffix)
            .field("content_type", &self.content_type)
            .finish()
    }
}

/// Builder for [`FirebaseDatabase`], obtained from [`FirebaseDatabase::builder`].
pub struct DatabaseConfigBuilder {
    base_url: String,
    auth: Option<String>,
    json_suffix: bool,
    content_type: Option<String>,
    client: Option<ClientWithMiddleware>,
}

impl DatabaseConfigBuilder {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            auth: None,
            json_suffix: true,
            content_type: None,
            client: None,
        }
    }

    /// Token appended to every URL as `auth=<token>` (a database secret or an ID token).
    /// A blank token is ignored.
    pub fn auth(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        let token = token.trim();
        self.auth = (!token.is_empty()).then(|| token.to_string());
        self
    }

    /// Whether `.json` is appended to built URLs. Enabled by default; disable it to
    /// target Firebase REST endpoints that are not database locations.
    pub fn json_suffix(mut self, enabled: bool) -> Self {
        self.json_suffix = enabled;
        self
    }

    /// `Content-Type` sent on requests that carry a body. Unset by default.
    pub fn content_type(mut self, value: impl Into<String>) -> Self {
        self.content_type = Some(value.into());
        self
    }

    /// Uses a preconfigured client (timeouts, proxies, extra middleware) instead of
    /// the default one.
    pub fn client(mut self, client: ClientWithMiddleware) -> Self {
        self.client = Some(client);
        self
    }

    pub fn build(self) -> Result<FirebaseDatabase, DatabaseError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            let msg = format!("baseUrl cannot be empty; was: '{}'", self.base_url);
            tracing::error!("{}", msg);
            return Err(DatabaseError::Configuration(msg));
        }

        let content_type = self
            .content_type
            .map(|value| {
                HeaderValue::from_str(&value).map_err(|e| {
                    DatabaseError::Configuration(format!(
                        "invalid content type '{}': {}",
                        value, e
                    ))
                })
            })
            .transpose()?;

        let config = DatabaseConfig {
            base_url: base_url.to_string(),
            auth: self.auth,
            json_suffix: self.json_suffix,
            content_type,
        };

        let client = self.client.unwrap_or_else(|| {
            ClientBuilder::new(Client::new())
                .with(LoggingMiddleware::new())
                .build()
        });

        tracing::info!(base_url = %config.base_url, "initialized with base url");

        Ok(FirebaseDatabase::new_with_client(client, config))
    }
}
