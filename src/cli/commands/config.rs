use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    else {
        return Ok(());
    };

    let path = Config::config_file();

    if *print_config {
        println!("📄 {}\n", path.display());
        println!("{}", cfg.to_yaml()?);
    }

    if *edit_config {
        if !path.exists() {
            return Err(AppError::Config(format!(
                "{} does not exist, run `rtimeclock init` first",
                path.display()
            )));
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        if run_editor(&editor_to_use, &path) {
            success(format!("Configuration file edited using '{editor_to_use}'"));
            return Ok(());
        }

        warning(format!(
            "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
        ));
        if run_editor(&default_editor, &path) {
            success(format!("Configuration file edited using fallback '{default_editor}'"));
        } else {
            return Err(AppError::Config(format!(
                "failed to edit {} with '{default_editor}'",
                path.display()
            )));
        }
    }

    Ok(())
}

fn run_editor(editor: &str, path: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}
