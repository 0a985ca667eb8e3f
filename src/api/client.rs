use std::str::FromStr;
use std::time::Duration;

use anyhow::Result;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::api::utils::{check_status, decode_envelope, extract_rows};
use crate::html;
use crate::models::{ApiError, Endpoint};

const BASE_URL: &str = "https://api.adservice.com/v2/publisher/";

// 30 seconds for larger data
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug)]
pub struct AdserviceApi {
    client: Client,
    api_key: String,
    base_url: String,
    allowed_endpoints: Vec<String>,
}

impl AdserviceApi {
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_key,
            base_url: BASE_URL.to_string(),
            allowed_endpoints: Endpoint::default_allow_list(),
        })
    }

    pub fn with_allowed_endpoints(mut self, endpoints: Vec<String>) -> Self {
        self.allowed_endpoints = endpoints;
        self
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fetches an endpoint and renders it as an HTML fragment.
    ///
    /// Every failure is folded into the returned string; this never errors
    /// past its own boundary.
    pub async fn fetch(&self, endpoint: &str) -> String {
        let mut display = String::from("<p>DATA from API</p>");

        match self.get_data(endpoint).await {
            Ok(fragment) => display.push_str(&fragment),
            Err(err) => display.push_str(&err.to_string()),
        }

        display
    }

    async fn get_data(&self, endpoint: &str) -> Result<String, ApiError> {
        if !self.allowed_endpoints.iter().any(|name| name == endpoint) {
            return Err(ApiError::Disallowed);
        }

        let url = format!("{}{}", self.base_url, endpoint);
        debug!(%url, "requesting endpoint");

        let response = self
            .client
            .get(&url)
            .basic_auth("api", Some(&self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        debug!(code = status.as_u16(), "received response");
        check_status(status)?;

        let body = response.text().await?;
        let data = decode_envelope(&body)?;

        match Endpoint::from_str(endpoint) {
            Ok(known) => {
                let rows = extract_rows(known, &data)?;
                Ok(html::render_table(&rows, endpoint))
            }
            // allow-list was extended past the known endpoints
            Err(_) => html::render_pretty(&data),
        }
    }
}
