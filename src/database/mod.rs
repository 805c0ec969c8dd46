//! Firebase Realtime Database module.
//!
//! Thin client over the Realtime Database REST API. Every location is addressed
//! by a path relative to the database URL, and every call maps to one HTTP
//! request:
//!
//! | Call     | HTTP   | Effect                                        |
//! |----------|--------|-----------------------------------------------|
//! | `get`    | GET    | read the data at the path                     |
//! | `put`    | PUT    | write (replace) the data at the path          |
//! | `post`   | POST   | push a new child with a server-generated key  |
//! | `patch`  | PATCH  | update some children at the path              |
//! | `delete` | DELETE | remove the data at the path                   |
//!
//! Calls resolve to a [`FirebaseResponse`]. An API-level failure (bad auth, rules
//! denial, ...) is reported through `success`/`code`, not as an `Err`; `Err` is
//! reserved for transport, read and JSON failures.
//!
//! # Examples
//!
//! ```rust,no_run
//! # use firebase_rtdb_rest::database::FirebaseDatabase;
//! # async fn run() -> Result<(), firebase_rtdb_rest::database::DatabaseError> {
//! let db = FirebaseDatabase::builder("https://my-project.firebaseio.com")
//!     .auth("database-secret")
//!     .build()?;
//!
//! let response = db.put("users/alan", serde_json::json!({ "name": "Alan" })).await?;
//! assert!(response.success);
//!
//! let users = db.reference("users").order_by("$key").limit_to_first(10).get().await?;
//! println!("{}", users);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod location;
pub mod models;
pub mod reference;


use self::config::{DatabaseConfig, DatabaseConfigBuilder};
use self::models::{Body, FirebaseResponse, QueryParams};
use self::reference::DatabaseReference;
use crate::core::{redact_auth, strip_url};
use crate::json::{self, CodecError};
use reqwest::{header, Method};
use reqwest_middleware::ClientWithMiddleware;
use thiserror::Error;

/// Errors that can occur during Realtime Database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The client could not be built from the given settings.
    #[error("Configuration error: {0}")]
    Configuration(String),
    /// The request could not be sent or no response arrived.
    #[error("unable to perform {method}-request({url}): {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest_middleware::Error,
    },
    /// The response body could not be read to the end.
    #[error("unable to read response of {method}-request({url}): {source}")]
    BodyRead {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The response body was not valid UTF-8.
    #[error("response of {method}-request({url}) is not valid UTF-8: {source}")]
    InvalidUtf8 {
        method: Method,
        url: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
    /// A body could not be encoded, or the response was not valid JSON.
    #[error("Serialization error: {0}")]
    Codec(#[from] CodecError),
}

/// Client for one Realtime Database (or other Firebase REST) base URL.
#[derive(Clone)]
pub struct FirebaseDatabase {
    client: ClientWithMiddleware,
    config: DatabaseConfig,
}

impl FirebaseDatabase {
    /// Creates a client with default settings: `.json` suffix on, no auth.
    pub fn new(base_url: &str) -> Result<Self, DatabaseError> {
        Self::builder(base_url).build()
    }

    pub fn builder(base_url: impl Into<String>) -> DatabaseConfigBuilder {
        DatabaseConfigBuilder::new(base_url)
    }

    pub(crate) fn new_with_client(client: ClientWithMiddleware, config: DatabaseConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &DatabaseConfig {
        &self.config
    }

    /// Reference to the base URL itself.
    pub fn root(&self) -> DatabaseReference<'_> {
        DatabaseReference::new(self, "")
    }

    /// Reference to `path` (e.g. `"users/alan"`). An empty path is the root.
    pub fn reference(&self, path: &str) -> DatabaseReference<'_> {
        DatabaseReference::new(self, path)
    }

    /// Full URL for `path` with `query`, including the auth token if configured.
    pub fn url(&self, path: &str, query: &QueryParams) -> String {
        location::build_url(&self.config, path, query)
    }

    pub async fn get(&self, path: &str) -> Result<FirebaseResponse, DatabaseError> {
        self.reference(path).get().await
    }

    pub async fn put(
        &self,
        path: &str,
        body: impl Into<Body>,
    ) -> Result<FirebaseResponse, DatabaseError> {
        self.reference(path).put(body).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: impl Into<Body>,
    ) -> Result<FirebaseResponse, DatabaseError> {
        self.reference(path).post(body).await
    }

    pub async fn patch(
        &self,
        path: &str,
        body: impl Into<Body>,
    ) -> Result<FirebaseResponse, DatabaseError> {
        self.reference(path).patch(body).await
    }

    pub async fn delete(&self, path: &str) -> Result<FirebaseResponse, DatabaseError> {
        self.reference(path).delete().await
    }

    /// Sends one request and normalizes the response.
    ///
    /// `body` is attached for PUT, POST and PATCH only; it is sent even when empty.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &QueryParams,
        body: Body,
    ) -> Result<FirebaseResponse, DatabaseError> {
        let url = self.url(path, query);
        let logged_url = redact_auth(&url);

        let mut request = self.client.request(method.clone(), url.as_str());
        if carries_body(&method) {
            let text = body.into_text()?;
            if let Some(content_type) = &self.config.content_type {
                request = request.header(header::CONTENT_TYPE, content_type.clone());
            }
            request = request.body(text);
        }

        let response = request.send().await.map_err(|source| {
            tracing::error!(%method, url = %logged_url, "unable to perform request");
            DatabaseError::Transport {
                method: method.clone(),
                url: logged_url.clone(),
                source: strip_url(source),
            }
        })?;

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default();
        let success = is_success(&method, status.as_u16(), reason);

        // A failed read leaves nothing to decode.
        let bytes = response.bytes().await.map_err(|source| {
            tracing::error!(%method, url = %logged_url, "unable to read response");
            DatabaseError::BodyRead {
                method: method.clone(),
                url: logged_url.clone(),
                source: source.without_url(),
            }
        })?;
        let raw_body = String::from_utf8(bytes.to_vec()).map_err(|source| {
            tracing::error!(%method, url = %logged_url, "response is not valid UTF-8");
            DatabaseError::InvalidUtf8 {
                method: method.clone(),
                url: logged_url.clone(),
                source,
            }
        })?;

        tracing::debug!(
            %method,
            url = %logged_url,
            code = status.as_u16(),
            success,
            body = %raw_body,
            "response-data"
        );

        let body = json::decode(&raw_body)?;
        Ok(FirebaseResponse::new(
            success,
            status.as_u16(),
            Some(body),
            Some(raw_body),
        ))
    }
}

fn carries_body(method: &Method) -> bool {
    *method == Method::PUT || *method == Method::POST || *method == Method::PATCH
}

/// GET, PUT, POST and PATCH succeed on `200 OK`, DELETE on `204 No Content`.
/// The reason phrase is compared case-insensitively.
pub(crate) fn is_success(method: &Method, code: u16, reason: &str) -> bool {
    if *method == Method::DELETE {
        code == 204 && reason.eq_ignore_ascii_case("No Content")
    } else if *method == Method::GET || carries_body(method) {
        code == 200 && reason.eq_ignore_ascii_case("OK")
    } else {
        false
    }
}
