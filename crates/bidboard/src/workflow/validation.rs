//! Client-side gates that run before a bid is posted.
//!
//! The gates are advisory: the backend does not repeat them.

use chrono::{DateTime, Utc};

use crate::model::{AuthenticatedUser, Job};
use crate::workflow::form::BidForm;

/// Why a bid was not sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidRejection {
    /// Submit pressed before the job fetch resolved.
    JobNotLoaded,
    NotSignedIn,
    DeadlinePassed,
    OwnJob,
    DateAfterDeadline,
    InvalidPrice,
    PriceAboveMaximum,
}

impl BidRejection {
    pub fn message(&self) -> &'static str {
        match self {
            BidRejection::JobNotLoaded => "Job details are still loading",
            BidRejection::NotSignedIn => "Please sign in to place a bid",
            BidRejection::DeadlinePassed => "Deadline crossed, Bidding forbiden",
            BidRejection::OwnJob => "Publisher can't bid for his published job!!!",
            BidRejection::DateAfterDeadline => "Offer within deadline!!!",
            BidRejection::InvalidPrice => "Enter a valid bid price",
            BidRejection::PriceAboveMaximum => "Bid for less or equal price of the job!!!",
        }
    }
}

impl std::fmt::Display for BidRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Parses a typed price. Surrounding whitespace is ignored.
pub fn parse_price(input: &str) -> Option<f64> {
    let value = input.trim().parse::<f64>().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Runs the gates in order and reports the first one that fails.
///
/// Order: deadline passed, own job, proposed date after deadline, price.
pub fn validate_bid(
    now: DateTime<Utc>,
    job: &Job,
    user: &AuthenticatedUser,
    form: &BidForm,
) -> Result<f64, BidRejection> {
    if job.is_past_deadline(now) {
        return Err(BidRejection::DeadlinePassed);
    }

    if job.is_posted_by(&user.email) {
        return Err(BidRejection::OwnJob);
    }

    if job.is_past_deadline(form.bidding_date()) {
        return Err(BidRejection::DateAfterDeadline);
    }

    let price = parse_price(form.price()).ok_or(BidRejection::InvalidPrice)?;
    if price > job.max_price {
        return Err(BidRejection::PriceAboveMaximum);
    }

    Ok(price)
}
