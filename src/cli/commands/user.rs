use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::summary::Timesheet;
use crate::core::users::UserLogic;
use crate::errors::AppResult;
use crate::export::range::parse_period;
use crate::models::Level;
use crate::store::{RecordStore, UserStore};
use crate::ui::messages::{confirm, header, info, success, warning};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date::format_date;
use crate::utils::formatting::bold;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::User { action } = cmd else {
        return Ok(());
    };
    let store = super::open_store(cfg)?;

    match action {
        UserAction::Add {
            first,
            last,
            level,
            admin,
        } => add(&store, first, last, level, *admin),
        UserAction::List => list(&store),
        UserAction::Show { id, period } => show(&store, *id, period.as_deref(), &cfg.separator_char),
        UserAction::Del { id, admin, yes } => del(&store, *id, *admin, *yes),
    }
}

fn add(store: &RecordStore, first: &str, last: &str, level: &str, admin: Option<u32>) -> AppResult<()> {
    let users = UserStore::new(store);

    // no token on an empty store: the bootstrap rule applies
    let token = if users.is_empty()? && admin.is_none() {
        None
    } else {
        Some(super::admin_token(store, admin)?)
    };

    let user = UserLogic::create(store, token.as_ref(), first, last, Level::from_code(level))?;
    success(format!("Created {} ({}) with id {}", user.display_name(), user.level, user.id));
    Ok(())
}

fn list(store: &RecordStore) -> AppResult<()> {
    let users = UserStore::new(store).all()?;
    if users.is_empty() {
        info("No users yet. Create the first admin with `rtimeclock user add --level admin`.");
        return Ok(());
    }

    let mut table = Table::new(["Id", "Name", "Level", "Status", "Sessions"]);
    for u in &users {
        table.add_row(vec![
            u.id.to_string(),
            u.display_name(),
            u.level.to_string(),
            colorize_status(u.is_clocked_in()),
            u.data.len().to_string(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}

fn show(store: &RecordStore, id: u32, period: Option<&str>, separator: &str) -> AppResult<()> {
    let bounds = parse_period(period)?;
    let user = UserStore::new(store).load(id)?;
    let sheet = Timesheet::build(&user, bounds);

    header(user.title());

    if sheet.rows.is_empty() {
        warning("There is no data to be displayed for this user.");
        return Ok(());
    }

    let mut table = Table::new([
        "#", "Session", "In Date", "Clock In", "Out Date", "Clock Out", "Hours", "Notes",
    ]);
    for row in &sheet.rows {
        let s = row.session;
        let short_id = s.id.simple().to_string();
        table.add_row(vec![
            row.index.to_string(),
            short_id[..8].to_string(),
            format_date(s.in_date),
            s.clock_in_label(),
            colorize_optional(&s.out_date.map(format_date).unwrap_or_default()),
            colorize_optional(&s.clock_out_label()),
            colorize_optional(&row.hours_label()),
            colorize_optional(&s.notes_joined()),
        ]);
    }

    println!("{}", table.render());
    println!("{}", separator.repeat(40));
    println!("{} {}", bold("Total Hours Worked:"), sheet.total_label());
    Ok(())
}

fn del(store: &RecordStore, id: u32, admin: Option<u32>, yes: bool) -> AppResult<()> {
    let token = super::admin_token(store, admin)?;
    let user = UserStore::new(store).load(id)?;

    if !yes
        && !confirm(format!(
            "Delete {} and all of their sessions? This action is irreversible.",
            user.title()
        ))
    {
        info("Operation cancelled.");
        return Ok(());
    }

    let removed = UserLogic::delete(store, &token, id)?;
    success(format!("{} has been deleted.", removed.title()));
    Ok(())
}
