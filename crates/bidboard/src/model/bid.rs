//! Bids posted against a job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::job::Category;
use super::wire;

/// Lifecycle status of a bid. New bids always start as `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BidStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Rejected,
    Complete,
}

impl std::fmt::Display for BidStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BidStatus::Pending => write!(f, "Pending"),
            BidStatus::InProgress => write!(f, "In Progress"),
            BidStatus::Rejected => write!(f, "Rejected"),
            BidStatus::Complete => write!(f, "Complete"),
        }
    }
}

/// Body of `POST /addBid`.
///
/// Job title, category and buyer email are denormalized copies of the job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bid {
    pub job_title: String,
    /// Delivery date proposed by the bidder.
    #[serde(with = "wire::date")]
    pub bidding_date: DateTime<Utc>,
    /// Price exactly as typed into the form.
    pub bid_price: String,
    pub job_category: Category,
    pub status: BidStatus,
    pub bidder_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidder_name: Option<String>,
    pub buyer_email: String,
    #[serde(default)]
    pub bidder_comment: String,
    pub job_id: String,
}
