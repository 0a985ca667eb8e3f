use reqwest::StatusCode;
use serde_json::Value;

use crate::api::dto::{Envelope, MediaListDto};
use crate::models::{ApiError, Endpoint};

/// A table row: the id used for the `<tr>` class plus the record to render.
pub type Row = (String, Value);

/// Only 200-399 codes carry data we can use.
pub fn check_status(status: StatusCode) -> Result<(), ApiError> {
    let code = status.as_u16();
    if (200..400).contains(&code) {
        return Ok(());
    }

    Err(ApiError::Status {
        code,
        message: status.canonical_reason().unwrap_or("").to_string(),
    })
}

/// Decodes the response body into the envelope and extracts its payload.
pub fn decode_envelope(body: &str) -> Result<Value, ApiError> {
    serde_json::from_str::<Envelope>(body)
        .map_err(|err| ApiError::Envelope(err.to_string()))?
        .into_data()
}

/// Maps an endpoint to the rows it tabulates, failing closed when the payload
/// does not match the endpoint's contract.
pub fn extract_rows(endpoint: Endpoint, data: &Value) -> Result<Vec<Row>, ApiError> {
    match endpoint {
        Endpoint::CampaignFeeds | Endpoint::CampaignActive => record_list(endpoint, data),
        Endpoint::AccountApiKeys => match data {
            // apikeys may arrive keyed by name, one row per entry
            Value::Object(map) => Ok(map
                .iter()
                .map(|(key, record)| (key.clone(), record.clone()))
                .collect()),
            _ => record_list(endpoint, data),
        },
        Endpoint::AccountMedias => {
            let list: MediaListDto = serde_json::from_value(data.clone())
                .map_err(|err| ApiError::Envelope(err.to_string()))?;
            Ok(enumerate(list.medias()))
        }
    }
}

fn record_list(endpoint: Endpoint, data: &Value) -> Result<Vec<Row>, ApiError> {
    match data.as_array() {
        Some(records) => Ok(enumerate(records)),
        None => Err(ApiError::Envelope(format!(
            "data for {} is not a list of records",
            endpoint
        ))),
    }
}

fn enumerate(records: &[Value]) -> Vec<Row> {
    records
        .iter()
        .enumerate()
        .map(|(id, record)| (id.to_string(), record.clone()))
        .collect()
}
