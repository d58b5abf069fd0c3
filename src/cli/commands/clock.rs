use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timeclock::TimeclockLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::format_date;
use crate::utils::time::{format_timestamp, now_stamp};

/// Handle `in`, `out` and `note`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let store = super::open_store(cfg)?;
    let (today, now) = now_stamp();

    match cmd {
        Commands::In { id } => {
            let user = TimeclockLogic::clock_in(&store, *id, today, now)?;
            success(format!(
                "{} clocked in at {} on {}",
                user.display_name(),
                format_timestamp(now),
                format_date(today)
            ));
        }
        Commands::Out { id } => {
            let user = TimeclockLogic::clock_out(&store, *id, today, now)?;
            let hours = user
                .data
                .iter()
                .rev()
                .find(|s| s.out_date == Some(today) && s.clock_out == Some(now))
                .map(|s| s.hours_label())
                .unwrap_or_default();
            success(format!(
                "{} clocked out at {} ({} worked)",
                user.display_name(),
                format_timestamp(now),
                hours
            ));
        }
        Commands::Note { id, text } => {
            let user = TimeclockLogic::add_note(&store, *id, text, now)?;
            success(format!("Note added for {} at {}", user.display_name(), format_timestamp(now)));
        }
        _ => {}
    }

    Ok(())
}
