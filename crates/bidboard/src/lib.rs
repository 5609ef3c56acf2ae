pub mod api;
pub mod broadcast;
pub mod config;
pub mod detail;
pub mod error;
pub mod identity;
pub mod logging;
pub mod model;
pub mod navigate;
pub mod notify;
pub mod summary;
pub mod workflow;

pub use api::{HttpMarketplaceApi, MarketplaceApi};
pub use broadcast::{NavigationBroadcaster, NotificationBroadcaster};
pub use config::{load_config, Config};
pub use detail::JobDetailView;
pub use error::{ApiError, BidboardError, ConfigError, LoggingError, Result};
pub use identity::{Clock, FixedClock, IdentityProvider, StaticIdentity, SystemClock};
pub use logging::init_logging;
pub use model::{AuthenticatedUser, Bid, BidStatus, Buyer, Category, Job};
pub use navigate::{Navigator, Route};
pub use notify::{Notification, Notifier, Severity};
pub use summary::{CategoryStyle, JobSummary};
pub use workflow::{
    BidForm, BidRejection, Collaborators, FormPhase, JobDetailPage, JobLoad, SubmitOutcome,
};
