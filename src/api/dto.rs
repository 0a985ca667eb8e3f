use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;
use serde_json::Value;

use crate::models::ApiError;

/// Standard response envelope from the Adservice publisher API.
///
/// All fields are defaulted so a partial body still decodes and gets handled
/// through the envelope failure path instead of aborting the decode.
#[derive(Debug, Default, Deserialize, Getters, new)]
#[serde(default)]
pub struct Envelope {
    success: bool,
    data: Option<Value>,
    message: String,
}

impl Envelope {
    /// Extracts the payload, surfacing the API message when `success` is
    /// falsy or `data` is empty.
    pub fn into_data(self) -> Result<Value, ApiError> {
        match self.data {
            Some(data) if self.success && !is_empty(&data) => Ok(data),
            _ => Err(ApiError::Envelope(self.message)),
        }
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(text) => text.is_empty(),
        _ => false,
    }
}

/// Payload shape of `account/medias`: the media records sit under a `medias`
/// key, possibly next to other account fields.
#[derive(Debug, Deserialize, Getters, new)]
pub struct MediaListDto {
    medias: Vec<Value>,
}
