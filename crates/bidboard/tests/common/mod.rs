//! Shared test utilities for bidboard integration tests.
//!
//! This module provides:
//! - Builders for jobs and users with sensible defaults
//! - Recording fakes for the backend, notifier and router
//! - `TestPage` wiring a `JobDetailPage` to those fakes

pub mod builders;
pub mod fakes;
pub mod harness;

pub use builders::*;
pub use fakes::*;
pub use harness::TestPage;
