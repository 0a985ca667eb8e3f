use thiserror::Error;

/// Everything that can go wrong between the allow-list check and the rendered
/// table. Each variant's display form is what the caller sees inline in the
/// output fragment; nothing escapes past [`crate::api::AdserviceApi::fetch`].
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Adservice Plugin ERROR: endpoint is not in allowed list")]
    Disallowed,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error(
        "Adservice Plugin ERROR: could not receive data from API. <br />response code:{code}<br />{message}"
    )]
    Status { code: u16, message: String },

    #[error("Feed list was empty or without success returned data.\nMessage from API:{0}")]
    Envelope(String),

    #[error("{0}")]
    Render(String),
}
