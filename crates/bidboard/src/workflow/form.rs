//! The "Place A Bid" form.

use chrono::{DateTime, Utc};

use crate::model::{AuthenticatedUser, Bid, BidStatus, Job};

#[derive(Debug, Clone, PartialEq)]
pub struct BidForm {
    price: String,
    /// Pre-filled from the identity provider; not editable.
    email: String,
    comment: String,
    bidding_date: DateTime<Utc>,
}

impl BidForm {
    pub fn new(email: Option<&str>, bidding_date: DateTime<Utc>) -> Self {
        Self {
            price: String::new(),
            email: email.unwrap_or_default().to_string(),
            comment: String::new(),
            bidding_date,
        }
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn bidding_date(&self) -> DateTime<Utc> {
        self.bidding_date
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    pub fn set_bidding_date(&mut self, date: DateTime<Utc>) {
        self.bidding_date = date;
    }

    /// Clears the typed inputs. The email and the picked date survive.
    pub fn reset(&mut self) {
        self.price.clear();
        self.comment.clear();
    }

    /// Builds the `POST /addBid` body.
    pub fn to_bid(&self, job: &Job, user: &AuthenticatedUser) -> Bid {
        Bid {
            job_title: job.title.clone(),
            bidding_date: self.bidding_date,
            bid_price: self.price.clone(),
            job_category: job.category.clone(),
            status: BidStatus::Pending,
            bidder_email: self.email.clone(),
            bidder_name: user.display_name.clone(),
            buyer_email: job.buyer.email.clone(),
            bidder_comment: self.comment.clone(),
            job_id: job.id.clone(),
        }
    }
}
