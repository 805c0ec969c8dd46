use super::models::{Body, FirebaseResponse, QueryParams};
use super::{DatabaseError, FirebaseDatabase};
use reqwest::Method;
use serde_json::Value;

/// A location in the database, plus the query parameters of the next request
/// made through it.
///
/// Query parameters belong to this value only. Two references obtained from the
/// same [`FirebaseDatabase`] never see each other's parameters.
#[derive(Clone)]
pub struct DatabaseReference<'a> {
    pub(crate) database: &'a FirebaseDatabase,
    pub(crate) path: String,
    pub(crate) query: QueryParams,
}

impl<'a> DatabaseReference<'a> {
    pub(crate) fn new(database: &'a FirebaseDatabase, path: &str) -> Self {
        Self {
            database,
            path: path.trim().to_string(),
            query: QueryParams::new(),
        }
    }

    /// Path relative to the base URL; empty for the root.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.query
    }

    /// Reference to `segment` below this location, without query parameters.
    pub fn child(&self, segment: &str) -> DatabaseReference<'a> {
        let segment = segment.trim().trim_start_matches('/');
        let path = if self.path.is_empty() {
            segment.to_string()
        } else {
            format!("{}/{}", self.path.trim_end_matches('/'), segment)
        };
        DatabaseReference::new(self.database, &path)
    }

    /// Adds `name=value` to the URL of requests made through this reference.
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push(name, value);
        self
    }

    /// `shallow=true`: keys are returned with `true` instead of their subtrees.
    pub fn shallow(self) -> Self {
        self.query("shallow", "true")
    }

    /// `orderBy="<key>"`. Use `$key`, `$value`, `$priority` or a child key.
    pub fn order_by(self, key: &str) -> Self {
        let quoted = Value::String(key.to_string()).to_string();
        self.query("orderBy", quoted)
    }

    pub fn limit_to_first(self, limit: u32) -> Self {
        self.query("limitToFirst", limit.to_string())
    }

    pub fn limit_to_last(self, limit: u32) -> Self {
        self.query("limitToLast", limit.to_string())
    }

    /// `print=silent`: the database answers writes with an empty `204 No Content`,
    /// which reports `success == false` for PUT, POST and PATCH; check `code` instead.
    pub fn print_silent(self) -> Self {
        self.query("print", "silent")
    }

    /// URL requests through this reference are sent to.
    pub fn url(&self) -> String {
        self.database.url(&self.path, &self.query)
    }

    pub async fn get(&self) -> Result<FirebaseResponse, DatabaseError> {
        self.database
            .execute(Method::GET, &self.path, &self.query, Body::Empty)
            .await
    }

    /// Writes `body` at this location, replacing what was there. An empty body
    /// deletes the location.
    pub async fn put(&self, body: impl Into<Body>) -> Result<FirebaseResponse, DatabaseError> {
        self.database
            .execute(Method::PUT, &self.path, &self.query, body.into())
            .await
    }

    /// Pushes `body` as a new child with a server-generated key; see
    /// [`FirebaseResponse::pushed_key`].
    pub async fn post(&self, body: impl Into<Body>) -> Result<FirebaseResponse, DatabaseError> {
        self.database
            .execute(Method::POST, &self.path, &self.query, body.into())
            .await
    }

    /// Updates only the children named in `body`.
    pub async fn patch(&self, body: impl Into<Body>) -> Result<FirebaseResponse, DatabaseError> {
        self.database
            .execute(Method::PATCH, &self.path, &self.query, body.into())
            .await
    }

    pub async fn delete(&self) -> Result<FirebaseResponse, DatabaseError> {
        self.database
            .execute(Method::DELETE, &self.path, &self.query, Body::Empty)
            .await
    }
}
