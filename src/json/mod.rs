//! JSON codec used for request and response bodies.
//!
//! The Realtime Database speaks plain JSON documents. Bodies are handled as a
//! string-keyed map of [`serde_json::Value`]s, with two conventions:
//!
//! * an empty map encodes to an empty string (which the database treats as
//!   "delete at this path" on PUT), and
//! * anything that is not a JSON object at the top level (`null`, arrays,
//!   scalars) decodes to an empty map.

use serde_json::{Map, Value};
use thiserror::Error;


/// A JSON object with insertion order preserved.
pub type JsonMap = Map<String, Value>;

/// Errors raised while converting between [`JsonMap`] and JSON text.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("unable to convert map into json: {map}")]
    Encode {
        map: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("unable to map json response: {text}")]
    Decode {
        text: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Serializes `map` into compact JSON text. An empty map yields `""`.
pub fn encode(map: &JsonMap) -> Result<String, CodecError> {
    if map.is_empty() {
        tracing::debug!("empty map encodes to an empty body");
        return Ok(String::new());
    }

    serde_json::to_string(map).map_err(|source| {
        let map = format!("{:?}", map);
        tracing::warn!(%map, "unable to convert map into json");
        CodecError::Encode { map, source }
    })
}

/// Parses `text` into a map.
///
/// Blank input and non-object JSON both produce an empty map. Only text that
/// fails to parse is an error.
pub fn decode(text: &str) -> Result<JsonMap, CodecError> {
    let text = text.trim();
    if text.is_empty() {
        tracing::debug!("empty json response, returning empty map");
        return Ok(JsonMap::new());
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => {
            tracing::debug!(value = %other, "json response is not an object, returning empty map");
            Ok(JsonMap::new())
        }
        Err(source) => {
            tracing::warn!(%text, "unable to map json response");
            Err(CodecError::Decode {
                text: text.to_string(),
                source,
            })
        }
    }
}
