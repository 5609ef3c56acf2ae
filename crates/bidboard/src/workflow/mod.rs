//! Job detail page and the bid submission workflow.
//!
//! ```text
//! Idle -> Validating -> Rejected(reason) -> Idle
//!                    -> Submitting -> Succeeded -> Navigated
//!                                  -> Failed(message) -> Idle
//! ```

pub mod form;
pub mod page;
pub mod validation;

pub use form::BidForm;
pub use page::{
    Collaborators, FormPhase, JobDetailPage, JobLoad, SubmitOutcome, FETCH_FAILED_MESSAGE,
    GENERIC_FAILURE_MESSAGE, SUCCESS_MESSAGE,
};
pub use validation::{parse_price, validate_bid, BidRejection};
