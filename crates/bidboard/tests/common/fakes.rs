//! Recording fakes for the page collaborators.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bidboard::{ApiError, Bid, Job, MarketplaceApi, Navigator, Notifier, Route, Severity};
use tokio::sync::Notify;

/// What `fetch_job` answers with.
#[derive(Clone)]
pub enum FetchReply {
    Job(Job),
    NotFound,
    Unreachable,
}

/// What `create_bid` answers with.
#[derive(Clone)]
pub enum CreateReply {
    Accepted,
    Rejected { status: u16, message: Option<String> },
    Unreachable,
}

/// Holds a call open until the test releases it.
#[derive(Default)]
pub struct Gate {
    pub entered: Notify,
    pub release: Notify,
}

impl Gate {
    async fn pass(&self) {
        self.entered.notify_one();
        self.release.notified().await;
    }
}

pub struct FakeApi {
    fetch_reply: FetchReply,
    create_reply: CreateReply,
    pub fetch_calls: AtomicUsize,
    pub bids: Mutex<Vec<Bid>>,
    pub fetch_gate: Option<Arc<Gate>>,
    pub create_gate: Option<Arc<Gate>>,
}

impl FakeApi {
    pub fn new(fetch_reply: FetchReply) -> Self {
        Self {
            fetch_reply,
            create_reply: CreateReply::Accepted,
            fetch_calls: AtomicUsize::new(0),
            bids: Mutex::new(Vec::new()),
            fetch_gate: None,
            create_gate: None,
        }
    }

    pub fn serving(job: Job) -> Self {
        Self::new(FetchReply::Job(job))
    }

    pub fn create_reply(mut self, reply: CreateReply) -> Self {
        self.create_reply = reply;
        self
    }

    pub fn gate_fetch(mut self, gate: Arc<Gate>) -> Self {
        self.fetch_gate = Some(gate);
        self
    }

    pub fn gate_create(mut self, gate: Arc<Gate>) -> Self {
        self.create_gate = Some(gate);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn posted_bids(&self) -> Vec<Bid> {
        self.bids.lock().unwrap().clone()
    }
}

#[async_trait]
impl MarketplaceApi for FakeApi {
    async fn fetch_job(&self, id: &str) -> Result<Job, ApiError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.fetch_gate {
            gate.pass().await;
        }

        match &self.fetch_reply {
            FetchReply::Job(job) if job.id == id => Ok(job.clone()),
            FetchReply::Job(_) | FetchReply::NotFound => Err(ApiError::Status {
                status: 404,
                message: Some("Job not found".to_string()),
            }),
            FetchReply::Unreachable => Err(ApiError::Transport("connection refused".to_string())),
        }
    }

    async fn create_bid(&self, bid: &Bid) -> Result<(), ApiError> {
        self.bids.lock().unwrap().push(bid.clone());
        if let Some(gate) = &self.create_gate {
            gate.pass().await;
        }

        match &self.create_reply {
            CreateReply::Accepted => Ok(()),
            CreateReply::Rejected { status, message } => Err(ApiError::Status {
                status: *status,
                message: message.clone(),
            }),
            CreateReply::Unreachable => Err(ApiError::Transport("connection reset".to_string())),
        }
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub toasts: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn all(&self) -> Vec<(Severity, String)> {
        self.toasts.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.of(Severity::Error)
    }

    pub fn successes(&self) -> Vec<String> {
        self.of(Severity::Success)
    }

    fn of(&self, severity: Severity) -> Vec<String> {
        self.all()
            .into_iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.toasts
            .lock()
            .unwrap()
            .push((severity, message.to_string()));
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}
