//! File-backed persistence: generic record store plus typed helpers.

pub mod audit;
pub mod record_store;
pub mod settings;
pub mod users;

pub use record_store::RecordStore;
pub use users::{USERS, UserStore};
