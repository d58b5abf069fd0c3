use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::UserStore;
use crate::utils::colors::colorize_status;
use crate::utils::date::format_date;
use crate::utils::time::{format_hhmm, minutes_between, now_stamp};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { id } = cmd {
        let store = super::open_store(cfg)?;
        let user = UserStore::new(&store).load(*id)?;

        println!("{} ({}): {}", user.title(), user.level, colorize_status(user.is_clocked_in()));

        if let Some(open) = user.open_session() {
            let (today, now) = now_stamp();
            let running = minutes_between(open.started_at(), today.and_time(now))
                .map(format_hhmm)
                .unwrap_or_else(|_| "--:--".to_string());

            println!(
                "Since {} {} ({} so far, {} notes)",
                format_date(open.in_date),
                open.clock_in_label(),
                running,
                open.notes.len()
            );
        }
    }
    Ok(())
}
