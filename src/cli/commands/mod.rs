//! One module per subcommand; each exposes `handle`.

pub mod clock;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod session;
pub mod settings;
pub mod status;
pub mod user;

use crate::config::Config;
use crate::core::AdminToken;
use crate::errors::AppResult;
use crate::store::{RecordStore, UserStore, settings as settings_store};

/// Open the record store configured in `cfg`.
pub(crate) fn open_store(cfg: &Config) -> AppResult<RecordStore> {
    RecordStore::open(cfg.data_path())
}

/// Resolve `--admin` into a capability according to settings.json.
pub(crate) fn admin_token(store: &RecordStore, admin: Option<u32>) -> AppResult<AdminToken> {
    let settings = settings_store::load(store)?;
    AdminToken::authorize(&UserStore::new(store), &settings, admin)
}
