use crate::core::parse_error_response;
use crate::json::{self, CodecError, JsonMap};
use serde::de::DeserializeOwned;
use serde::ser::Error as SerError;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Ordered query parameters for a single request. Names may repeat.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Chaining form of [`QueryParams::push`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// Request body for PUT, POST and PATCH.
///
/// `Body::Empty` (and an empty map) is still sent, as an empty entity. On PUT the
/// database treats that as a delete of the addressed location.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Body {
    #[default]
    Empty,
    /// Already serialized JSON, sent verbatim.
    Text(String),
    /// Serialized through [`json::encode`].
    Map(JsonMap),
}

impl Body {
    /// Serializes any value whose JSON form is an object (or `null`, which maps to
    /// [`Body::Empty`]).
    pub fn from_serialize<T: Serialize>(value: &T) -> Result<Self, CodecError> {
        let encode_error = |source| CodecError::Encode {
            map: std::any::type_name::<T>().to_string(),
            source,
        };

        match serde_json::to_value(value).map_err(encode_error)? {
            Value::Object(map) => Ok(Body::Map(map)),
            Value::Null => Ok(Body::Empty),
            other => Err(encode_error(serde_json::Error::custom(format!(
                "expected a JSON object, got {}",
                other
            )))),
        }
    }

    pub(crate) fn into_text(self) -> Result<String, CodecError> {
        match self {
            Body::Empty => Ok(String::new()),
            Body::Text(text) => Ok(text),
            Body::Map(map) => json::encode(&map),
        }
    }
}

impl From<JsonMap> for Body {
    fn from(map: JsonMap) -> Self {
        Body::Map(map)
    }
}

impl From<Option<JsonMap>> for Body {
    fn from(map: Option<JsonMap>) -> Self {
        map.map_or(Body::Empty, Body::Map)
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<Value> for Body {
    /// Objects become [`Body::Map`], `null` becomes [`Body::Empty`]; any other value
    /// (the database stores scalars and arrays too) is sent as its JSON text.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Body::Map(map),
            Value::Null => Body::Empty,
            other => Body::Text(other.to_string()),
        }
    }
}

/// Normalized outcome of one exchange with the database.
///
/// A non-successful status is not an error: check `success` and `code`.
#[derive(Clone, Debug, PartialEq)]
pub struct FirebaseResponse {
    pub success: bool,
    pub code: u16,
    /// Decoded body; empty when the response carried no JSON object.
    pub body: JsonMap,
    /// Response text as received, trimmed.
    pub raw_body: String,
}

impl FirebaseResponse {
    pub fn new(success: bool, code: u16, body: Option<JsonMap>, raw_body: Option<String>) -> Self {
        let body = body.unwrap_or_else(|| {
            tracing::debug!("body was absent; replacing with empty map");
            JsonMap::new()
        });
        let raw_body = raw_body.map(|raw| raw.trim().to_string()).unwrap_or_default();

        Self {
            success,
            code,
            body,
            raw_body,
        }
    }

    /// Key generated by the database for a POST (push), e.g. `-Nx1q9...`.
    pub fn pushed_key(&self) -> Option<&str> {
        self.body.get("name").and_then(Value::as_str)
    }

    /// Message from the database's error envelope, e.g. `Permission denied (code: 401)`.
    pub fn error_message(&self) -> Option<String> {
        parse_error_response(&self.raw_body).map(|e| e.display_message(self.code))
    }

    /// Deserializes the raw body into `T`. Unlike `body`, this also covers locations
    /// holding a scalar or an array.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, CodecError> {
        serde_json::from_str(&self.raw_body).map_err(|source| CodecError::Decode {
            text: self.raw_body.clone(),
            source,
        })
    }
}

impl fmt::Display for FirebaseResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FirebaseResponse[ (Success:{}) (Code:{}) (Body:{}) (Raw-body:{}) ]",
            self.success,
            self.code,
            Value::Object(self.body.clone()),
            self.raw_body
        )
    }
}
