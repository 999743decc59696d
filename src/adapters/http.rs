use reqwest::blocking::Client;

use crate::domain::ports::PageSource;
use crate::utils::error::Result;

/// Fetches pages over HTTP with a blocking client. Transport failures, error
/// statuses and non-UTF-8 bodies all surface as source-format errors.
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpPageSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSource for HttpPageSource {
    fn fetch_text(&self, url: &str) -> Result<String> {
        tracing::debug!("requesting {}", url);
        let response = self.client.get(url).send()?.error_for_status()?;
        tracing::debug!("{} answered {}", url, response.status());
        let body = response.bytes()?;
        Ok(String::from_utf8(body.to_vec())?)
    }
}
