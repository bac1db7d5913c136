//! HTTP provider for the ticket service.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use reqwest::header;

use crate::config::Config;
use crate::error::{Result, TrellisError};
use crate::types::Snapshot;

use super::{TicketSource, parse_snapshot_str};

/// Fetches the board with a single `GET` returning JSON.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Create a provider from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(&config.api_url(), config.timeout())
    }

    /// The connect timeout is the smaller of `timeout` and 10 seconds.
    pub fn new(url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)))
            .build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl TicketSource for HttpSource {
    fn fetch(&self) -> impl Future<Output = Result<Snapshot>> + Send {
        async move {
            tracing::debug!(url = %self.url, "fetching board data");
            let response = self
                .client
                .get(&self.url)
                .header(
                    header::ACCEPT,
                    header::HeaderValue::from_static("application/json"),
                )
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(TrellisError::Api(format!(
                    "{} returned HTTP {}",
                    self.url, status
                )));
            }

            let body = response.text().await?;
            parse_snapshot_str(&body)
        }
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
