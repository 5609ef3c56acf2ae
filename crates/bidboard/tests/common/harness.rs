//! A job detail page wired to recording fakes.

#![allow(dead_code)]

use std::sync::Arc;

use bidboard::{
    AuthenticatedUser, Collaborators, FixedClock, JobDetailPage, StaticIdentity,
};
use chrono::{DateTime, Utc};

use super::builders::{bidder, test_now};
use super::fakes::{FakeApi, RecordingNavigator, RecordingNotifier};

pub struct TestPage {
    pub api: Arc<FakeApi>,
    pub notifier: Arc<RecordingNotifier>,
    pub navigator: Arc<RecordingNavigator>,
    pub page: Arc<JobDetailPage>,
}

impl TestPage {
    /// Page for `job_id`, signed in as the default bidder, clock at `test_now()`.
    pub fn new(job_id: &str, api: FakeApi) -> Self {
        Self::build(job_id, api, Some(bidder()), test_now())
    }

    pub fn build(
        job_id: &str,
        api: FakeApi,
        user: Option<AuthenticatedUser>,
        now: DateTime<Utc>,
    ) -> Self {
        let api = Arc::new(api);
        let notifier = Arc::new(RecordingNotifier::default());
        let navigator = Arc::new(RecordingNavigator::default());
        let identity = match user {
            Some(user) => StaticIdentity::signed_in(user),
            None => StaticIdentity::anonymous(),
        };

        let ctx = Collaborators::new(
            api.clone(),
            Arc::new(identity),
            notifier.clone(),
            navigator.clone(),
        )
        .with_clock(Arc::new(FixedClock(now)));

        Self {
            api,
            notifier,
            navigator,
            page: Arc::new(JobDetailPage::new(job_id, ctx)),
        }
    }

    /// Activates the page and fills in a price and comment.
    pub async fn loaded_with_price(self, price: &str) -> Self {
        self.page.activate().await;
        self.page.set_price(price).await;
        self.page.set_comment("I can deliver this quickly").await;
        self
    }
}
