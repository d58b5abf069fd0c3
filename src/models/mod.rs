pub mod level;
pub mod serde_helpers;
pub mod session;
pub mod settings;
pub mod user;

pub use level::Level;
pub use session::{Note, WorkSession};
pub use settings::Settings;
pub use user::{SessionFlag, UserRecord};
