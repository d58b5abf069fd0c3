use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::errors::AppResult;
use crate::models::Settings;
use crate::store::settings;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        save_path,
        restrict,
        admin,
    } = cmd
    {
        let store = super::open_store(cfg)?;

        if save_path.is_some() || restrict.is_some() {
            let token = super::admin_token(&store, *admin)?;
            let updated = SettingsLogic::update(&store, &token, save_path.as_deref(), *restrict)?;
            success("settings.json updated");
            print_settings(&store, &updated);
        } else if *print {
            print_settings(&store, &settings::load(&store)?);
        } else {
            info("Nothing to do. Use --print, --save-path or --restrict.");
        }
    }
    Ok(())
}

fn print_settings(store: &crate::store::RecordStore, s: &Settings) {
    println!("saveDataPath        : {}", display_or_default(&s.save_data_path));
    println!("restrictAdminAccess : {}", s.restrict_admin_access);
    println!("export directory    : {}", settings::export_dir(store, s).display());
}

fn display_or_default(v: &str) -> &str {
    if v.is_empty() { "(default)" } else { v }
}
