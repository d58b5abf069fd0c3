use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit::ttlog_quiet;
use crate::store::{RecordStore, USERS, settings};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the data directory and the `users` collection
///  - `settings.json` with defaults, unless already present
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;
    let data_dir = cfg.data_path();

    println!("⚙️  Initializing rTimeclock…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data dir    : {}", data_dir.display());

    let store = RecordStore::open(&data_dir)?;
    store.ensure_collection(USERS)?;

    if settings::init(&store)? {
        println!("✅ settings.json created");
    } else {
        println!("ℹ️  settings.json already present, left untouched");
    }

    ttlog_quiet(
        &store,
        "init",
        "",
        &format!("Data directory initialized at {}", data_dir.display()),
    );

    println!("🎉 rTimeclock initialization completed!");
    Ok(())
}
