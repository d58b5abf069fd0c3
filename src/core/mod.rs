//! Business logic: session rules, identifiers, admin capability, summaries.

pub mod admin;
pub mod ids;
pub mod ledger;
pub mod log;
pub mod settings;
pub mod summary;
pub mod timeclock;
pub mod users;

pub use admin::AdminToken;
pub use ledger::{RawNote, SessionLedger, SessionPatch, SessionSelector};
pub use summary::Timesheet;
