//! Job detail page: fetch-on-activate plus the bid submission state machine.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, error, info, info_span, warn, Instrument};

use crate::api::MarketplaceApi;
use crate::detail::JobDetailView;
use crate::identity::{Clock, IdentityProvider, SystemClock};
use crate::model::{Bid, Job};
use crate::navigate::{Navigator, Route};
use crate::notify::Notifier;
use crate::workflow::form::BidForm;
use crate::workflow::validation::{validate_bid, BidRejection};

pub const SUCCESS_MESSAGE: &str = "Successfully bid for the Job!";
pub const GENERIC_FAILURE_MESSAGE: &str = "An unexpected error occurred. Please try again.";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to load job details";

/// External collaborators a page talks to.
#[derive(Clone)]
pub struct Collaborators {
    pub api: Arc<dyn MarketplaceApi>,
    pub identity: Arc<dyn IdentityProvider>,
    pub notifier: Arc<dyn Notifier>,
    pub navigator: Arc<dyn Navigator>,
    pub clock: Arc<dyn Clock>,
}

impl Collaborators {
    pub fn new(
        api: Arc<dyn MarketplaceApi>,
        identity: Arc<dyn IdentityProvider>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            api,
            identity,
            notifier,
            navigator,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}

/// Where the job record stands.
#[derive(Debug, Clone, PartialEq)]
pub enum JobLoad {
    Loading,
    Loaded(Job),
    Failed(String),
}

impl JobLoad {
    pub fn job(&self) -> Option<&Job> {
        match self {
            JobLoad::Loaded(job) => Some(job),
            _ => None,
        }
    }
}

/// Resting and in-flight phases of the form.
///
/// `Rejected` and `Failed` are reported through [`SubmitOutcome`] and fall
/// straight back to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Navigated,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// A gate failed; nothing was sent.
    Rejected(BidRejection),
    /// The backend accepted the bid.
    Submitted(Bid),
    /// The backend or the network failed. Carries the message shown.
    Failed(String),
    /// Another submission from this page is still in flight.
    AlreadySubmitting,
}

struct PageState {
    load: JobLoad,
    form: BidForm,
}

/// Runs `undo` on drop unless disarmed. Covers futures dropped mid-await.
struct Rollback<F: FnOnce()> {
    undo: Option<F>,
}

impl<F: FnOnce()> Rollback<F> {
    fn new(undo: F) -> Self {
        Self { undo: Some(undo) }
    }

    fn disarm(mut self) {
        self.undo = None;
    }
}

impl<F: FnOnce()> Drop for Rollback<F> {
    fn drop(&mut self) {
        if let Some(undo) = self.undo.take() {
            undo();
        }
    }
}

pub struct JobDetailPage {
    job_id: String,
    ctx: Collaborators,
    state: RwLock<PageState>,
    /// Kept outside `state` so a dropped submission can release it without awaiting.
    phase: Mutex<FormPhase>,
    fetch_started: AtomicBool,
    active: AtomicBool,
}

impl JobDetailPage {
    pub fn new(job_id: impl Into<String>, ctx: Collaborators) -> Self {
        let user = ctx.identity.current_user();
        let form = BidForm::new(user.as_ref().map(|u| u.email.as_str()), ctx.clock.now());

        Self {
            job_id: job_id.into(),
            ctx,
            state: RwLock::new(PageState {
                load: JobLoad::Loading,
                form,
            }),
            phase: Mutex::new(FormPhase::Idle),
            fetch_started: AtomicBool::new(false),
            active: AtomicBool::new(false),
        }
    }

    /// Builds a page for a `/job/{id}` route.
    pub fn for_route(route: &Route, ctx: Collaborators) -> Option<Self> {
        match route {
            Route::JobDetail(id) => Some(Self::new(id.clone(), ctx)),
            Route::MyBids => None,
        }
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Marks the page active and fetches the job the first time only.
    ///
    /// A fetch whose future is dropped before it finishes does not count, so
    /// the next activation tries again.
    pub async fn activate(&self) {
        self.active.store(true, Ordering::SeqCst);

        if self.fetch_started.swap(true, Ordering::SeqCst) {
            debug!(job_id = %self.job_id, "Job already fetched for this page");
            return;
        }

        let rollback = Rollback::new(|| {
            warn!(job_id = %self.job_id, "Job fetch not applied, next activation retries");
            self.fetch_started.store(false, Ordering::SeqCst);
        });
        if self.fetch_job().await {
            rollback.disarm();
        }
    }

    /// Responses that arrive after this are not applied to the page.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Returns whether the result was applied to the page.
    async fn fetch_job(&self) -> bool {
        let span = info_span!("job_detail.fetch", job_id = %self.job_id);
        let result = self.ctx.api.fetch_job(&self.job_id).instrument(span).await;

        if !self.is_active() {
            debug!(job_id = %self.job_id, "Page deactivated, dropping fetch result");
            return false;
        }

        let mut state = self.state.write().await;
        match result {
            Ok(job) => {
                info!(job_id = %self.job_id, "Loaded job '{}'", job.title);
                state.load = JobLoad::Loaded(job);
            }
            Err(e) => {
                error!(job_id = %self.job_id, "Failed to fetch job: {}", e);
                state.load = JobLoad::Failed(e.to_string());
                drop(state);
                self.ctx.notifier.error(FETCH_FAILED_MESSAGE);
            }
        }
        true
    }

    pub async fn load_state(&self) -> JobLoad {
        self.state.read().await.load.clone()
    }

    pub async fn job(&self) -> Option<Job> {
        self.state.read().await.load.job().cloned()
    }

    pub async fn view(&self) -> Option<JobDetailView> {
        self.state.read().await.load.job().map(JobDetailView::from_job)
    }

    pub async fn form(&self) -> BidForm {
        self.state.read().await.form.clone()
    }

    pub fn phase(&self) -> FormPhase {
        *self.lock_phase()
    }

    fn lock_phase(&self) -> MutexGuard<'_, FormPhase> {
        self.phase.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_phase(&self, phase: FormPhase) {
        *self.lock_phase() = phase;
    }

    pub async fn set_price(&self, price: impl Into<String>) {
        self.state.write().await.form.set_price(price);
    }

    pub async fn set_comment(&self, comment: impl Into<String>) {
        self.state.write().await.form.set_comment(comment);
    }

    pub async fn set_bidding_date(&self, date: DateTime<Utc>) {
        self.state.write().await.form.set_bidding_date(date);
    }

    /// Validates the form and, when every gate passes, posts the bid.
    ///
    /// Dropping the returned future while it is validating or in flight puts
    /// the form back to `Idle`.
    pub async fn submit(&self) -> SubmitOutcome {
        {
            let mut phase = self.lock_phase();
            if matches!(*phase, FormPhase::Validating | FormPhase::Submitting) {
                warn!(job_id = %self.job_id, "Submit ignored, a bid is already in flight");
                return SubmitOutcome::AlreadySubmitting;
            }
            *phase = FormPhase::Validating;
        }

        let _release = Rollback::new(|| {
            let mut phase = self.lock_phase();
            if matches!(*phase, FormPhase::Validating | FormPhase::Submitting) {
                warn!(job_id = %self.job_id, "Submission abandoned before it finished");
                *phase = FormPhase::Idle;
            }
        });

        let prepared = {
            let state = self.state.read().await;
            self.prepare_bid(&state)
        };
        let bid = match prepared {
            Ok(bid) => {
                self.set_phase(FormPhase::Submitting);
                bid
            }
            Err(rejection) => {
                self.set_phase(FormPhase::Idle);
                info!(job_id = %self.job_id, "Bid rejected: {:?}", rejection);
                self.ctx.notifier.error(rejection.message());
                return SubmitOutcome::Rejected(rejection);
            }
        };

        let span = info_span!("job_detail.submit", job_id = %self.job_id);
        let result = self.ctx.api.create_bid(&bid).instrument(span).await;

        match result {
            Ok(()) => {
                info!(job_id = %self.job_id, "Bid submitted at {}", bid.bid_price);
                let active = self.is_active();
                if active {
                    self.state.write().await.form.reset();
                    self.set_phase(FormPhase::Succeeded);
                } else {
                    self.set_phase(FormPhase::Idle);
                }

                self.ctx.notifier.success(SUCCESS_MESSAGE);

                if active {
                    self.ctx.navigator.navigate(Route::MyBids);
                    self.set_phase(FormPhase::Navigated);
                } else {
                    debug!(job_id = %self.job_id, "Page deactivated, skipping navigation");
                }

                SubmitOutcome::Submitted(bid)
            }
            Err(e) => {
                warn!(job_id = %self.job_id, "Bid submission failed: {}", e);
                let message = e
                    .server_message()
                    .unwrap_or(GENERIC_FAILURE_MESSAGE)
                    .to_string();
                self.set_phase(FormPhase::Idle);
                self.ctx.notifier.error(&message);
                SubmitOutcome::Failed(message)
            }
        }
    }

    fn prepare_bid(&self, state: &PageState) -> Result<Bid, BidRejection> {
        let job = state.load.job().ok_or(BidRejection::JobNotLoaded)?;
        let user = self
            .ctx
            .identity
            .current_user()
            .ok_or(BidRejection::NotSignedIn)?;

        validate_bid(self.ctx.clock.now(), job, &user, &state.form)?;

        Ok(state.form.to_bid(job, &user))
    }
}
