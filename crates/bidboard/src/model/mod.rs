//! Marketplace records exchanged with the backend.

pub mod bid;
pub mod job;
pub mod user;
pub mod wire;

pub use bid::{Bid, BidStatus};
pub use job::{Buyer, Category, Job};
pub use user::AuthenticatedUser;
