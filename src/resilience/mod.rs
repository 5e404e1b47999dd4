//! Resilience subsystem.
//!
//! The dev proxy deliberately does one thing here: every upstream call has a
//! deadline. There are no retries and no circuit breaker; a failed call is
//! reported to the client as-is.

pub mod timeouts;

pub use timeouts::with_deadline;
