//! Release-readiness checks for Maven POMs.
//!
//! Each check produces a [`CheckRecord`]; failures are values, never errors.
//! [`ComplianceChecker`] runs the sequence for every POM and collects the
//! records into a [`ComplianceReport`], whose `error_count` decides the exit
//! status.

pub mod artifacts;
mod checker;
pub mod forbidden;
mod listener;
pub mod metadata;
mod result;
pub mod sections;
pub mod signatures;

pub use checker::ComplianceChecker;
pub use listener::{CheckListener, NullListener};
pub use result::{CheckCategory, CheckOutcome, CheckRecord, ComplianceReport, FailurePolicy};
