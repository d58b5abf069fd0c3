use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, ExportLogic};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        id,
        format,
        file,
        range,
        force,
        admin,
    } = cmd
    {
        let store = super::open_store(cfg)?;
        let token = super::admin_token(&store, *admin)?;
        let format = format.unwrap_or_else(|| ExportFormat::from_config(&cfg.default_export_format));

        ExportLogic::export(
            &store,
            &token,
            *id,
            format,
            file.as_deref(),
            range.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
