//! Builder patterns for creating test data programmatically.

#![allow(dead_code)]

use bidboard::{AuthenticatedUser, Buyer, Category, Job};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// The instant every workflow test treats as "now".
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

pub fn tomorrow() -> DateTime<Utc> {
    test_now() + Duration::days(1)
}

pub fn yesterday() -> DateTime<Utc> {
    test_now() - Duration::days(1)
}

pub const BUYER_EMAIL: &str = "b@x.com";
pub const BIDDER_EMAIL: &str = "c@x.com";

/// Builder for creating `Job` instances.
pub struct JobBuilder {
    job: Job,
}

impl JobBuilder {
    /// min 100, max 500, deadline tomorrow, posted by `b@x.com`.
    pub fn new(id: &str) -> Self {
        Self {
            job: Job {
                id: id.to_string(),
                title: "Build a portfolio site".to_string(),
                description: "Static site with a blog and contact form.".to_string(),
                category: Category::WebDevelopment,
                min_price: 100.0,
                max_price: 500.0,
                deadline: tomorrow(),
                buyer: Buyer {
                    name: "Rafi".to_string(),
                    email: BUYER_EMAIL.to_string(),
                    photo: Some("https://example.com/rafi.png".to_string()),
                },
                bid_count: 0,
            },
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.job.title = title.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.job.description = description.to_string();
        self
    }

    pub fn category(mut self, label: &str) -> Self {
        self.job.category = Category::from_label(label);
        self
    }

    pub fn prices(mut self, min: f64, max: f64) -> Self {
        self.job.min_price = min;
        self.job.max_price = max;
        self
    }

    pub fn deadline(mut self, deadline: DateTime<Utc>) -> Self {
        self.job.deadline = deadline;
        self
    }

    pub fn buyer_email(mut self, email: &str) -> Self {
        self.job.buyer.email = email.to_string();
        self
    }

    pub fn bid_count(mut self, count: u64) -> Self {
        self.job.bid_count = count;
        self
    }

    pub fn build(self) -> Job {
        self.job
    }
}

pub fn bidder() -> AuthenticatedUser {
    AuthenticatedUser::new(BIDDER_EMAIL, Some("Chris".to_string()))
}

pub fn user(email: &str) -> AuthenticatedUser {
    AuthenticatedUser::new(email, None)
}
