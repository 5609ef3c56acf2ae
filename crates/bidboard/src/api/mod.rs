//! Marketplace backend API.

pub mod http;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::model::{Bid, Job};

pub use http::HttpMarketplaceApi;

/// Backend collaborator: job storage and bid storage.
#[async_trait]
pub trait MarketplaceApi: Send + Sync {
    /// `GET /job/{id}`
    async fn fetch_job(&self, id: &str) -> Result<Job, ApiError>;

    /// `POST /addBid`. Any 2xx response counts as success.
    async fn create_bid(&self, bid: &Bid) -> Result<(), ApiError>;
}
