//! reqwest-backed implementation of [`MarketplaceApi`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response, Url};
use serde::Deserialize;

use super::MarketplaceApi;
use crate::config::HttpConfig;
use crate::error::ApiError;
use crate::model::{Bid, Job};
use crate::summary::truncate;

/// Maximum length of an error body echoed into logs.
const MAX_ERROR_BODY_LENGTH: usize = 200;

/// Conventional error body: `{ "message": "..." }`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

pub struct HttpMarketplaceApi {
    client: Client,
    base: Url,
}

impl HttpMarketplaceApi {
    pub fn new(api_base: &str, http: &HttpConfig) -> Result<Self, ApiError> {
        let base = Url::parse(api_base)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", api_base, e)))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl(format!(
                "{}: not a base URL",
                api_base
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(http.connect_timeout_secs))
            .timeout(Duration::from_secs(http.request_timeout_secs))
            .build()
            .map_err(|e| ApiError::ClientBuild(e.to_string()))?;

        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn check_status(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            "Backend returned {}: {}",
            status.as_u16(),
            truncate(&body, MAX_ERROR_BODY_LENGTH)
        );
        Err(ApiError::Status {
            status: status.as_u16(),
            message: extract_message(&body),
        })
    }
}

#[async_trait]
impl MarketplaceApi for HttpMarketplaceApi {
    async fn fetch_job(&self, id: &str) -> Result<Job, ApiError> {
        let url = self.endpoint(&["job", id])?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let response = Self::check_status(response).await?;

        response
            .json::<Job>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_bid(&self, bid: &Bid) -> Result<(), ApiError> {
        let url = self.endpoint(&["addBid"])?;
        debug!("POST {} for job {}", url, bid.job_id);

        let response = self
            .client
            .post(url)
            .json(bid)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::check_status(response).await?;

        Ok(())
    }
}
