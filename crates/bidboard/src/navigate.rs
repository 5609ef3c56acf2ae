//! Routes the client can navigate to, and the router seam.

use serde::{Deserialize, Serialize};

const JOB_PREFIX: &str = "/job/";
const MY_BIDS: &str = "/my-bids";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "route", content = "id", rename_all = "snake_case")]
pub enum Route {
    /// Detail page of one job.
    JobDetail(String),
    /// Bids placed by the current user.
    MyBids,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::JobDetail(id) => format!("{}{}", JOB_PREFIX, id),
            Route::MyBids => MY_BIDS.to_string(),
        }
    }

    /// Parses a path produced by [`Route::path`].
    pub fn parse(path: &str) -> Option<Self> {
        if path == MY_BIDS {
            return Some(Route::MyBids);
        }
        let id = path.strip_prefix(JOB_PREFIX)?;
        if id.is_empty() || id.contains('/') {
            return None;
        }
        Some(Route::JobDetail(id.to_string()))
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

/// Router collaborator.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}
