//! Domain models for a draw

pub mod assignment;
pub mod event;
pub mod forbidden;
pub mod participant;

// Re-exports
pub use assignment::Assignment;
pub use event::{DrawEvent, DrawObserver, EventLog, NoopObserver, RejectionReason};
pub use forbidden::ForbiddenPairs;
pub use participant::Participant;
