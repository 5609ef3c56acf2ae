//! Current-user lookup and the clock used for deadline checks.

use chrono::{DateTime, Utc};

use crate::model::AuthenticatedUser;

/// Identity collaborator. Read-only.
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, or `None` for an anonymous session.
    fn current_user(&self) -> Option<AuthenticatedUser>;
}

/// Identity fixed at construction, e.g. from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    user: Option<AuthenticatedUser>,
}

impl StaticIdentity {
    pub fn signed_in(user: AuthenticatedUser) -> Self {
        Self { user: Some(user) }
    }

    pub fn anonymous() -> Self {
        Self { user: None }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<AuthenticatedUser> {
        self.user.clone()
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that never moves.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
