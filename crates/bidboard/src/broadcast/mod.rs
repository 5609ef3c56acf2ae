//! Broadcasting collaborators for real-time UI updates.
//!
//! These implement the notifier and router seams on top of tokio broadcast
//! channels so any front-end can subscribe.

pub mod navigation;
pub mod notifications;

pub use navigation::NavigationBroadcaster;
pub use notifications::NotificationBroadcaster;
