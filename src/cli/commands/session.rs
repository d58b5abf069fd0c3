use crate::cli::parser::{Commands, SessionAction};
use crate::config::Config;
use crate::core::users::UserLogic;
use crate::core::{RawNote, SessionPatch, SessionSelector};
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::messages::{confirm, info, success};
use uuid::Uuid;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Session { action } = cmd else {
        return Ok(());
    };
    let store = super::open_store(cfg)?;

    match action {
        SessionAction::Edit {
            id,
            index,
            session,
            in_date,
            clock_in,
            out_date,
            clock_out,
            note,
            clear_notes,
            admin,
        } => {
            let notes = if *clear_notes {
                Some(Vec::new())
            } else if note.is_empty() {
                None
            } else {
                Some(note.iter().map(String::as_str).map(parse_note_arg).collect::<AppResult<Vec<_>>>()?)
            };

            let patch = SessionPatch {
                in_date: in_date.clone(),
                clock_in: clock_in.clone(),
                out_date: out_date.clone(),
                clock_out: clock_out.clone(),
                notes,
            };
            if patch.is_empty() {
                info("Nothing to change.");
                return Ok(());
            }

            edit(&store, *id, selector(*index, *session)?, &patch, *admin)
        }
        SessionAction::Del {
            id,
            index,
            session,
            admin,
            yes,
        } => {
            let token = super::admin_token(&store, *admin)?;
            let sel = selector(*index, *session)?;

            if !yes && !confirm(format!("Delete {} of user {id}? This action is irreversible.", describe(sel))) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = UserLogic::delete_session(&store, &token, *id, sel)?;
            success(format!(
                "Session {} ({} {}) has been deleted.",
                removed.id,
                removed.in_date,
                removed.clock_in_label()
            ));
            Ok(())
        }
    }
}

fn edit(store: &RecordStore, id: u32, sel: SessionSelector, patch: &SessionPatch, admin: Option<u32>) -> AppResult<()> {
    let token = super::admin_token(store, admin)?;
    let user = UserLogic::edit_session(store, &token, id, sel, patch)?;

    let edited = match sel {
        SessionSelector::Index(i) => user.data.get(i),
        SessionSelector::Id(sid) => user.data.iter().find(|s| s.id == sid),
    };
    if let Some(s) = edited {
        success(format!(
            "Session {} updated: {} {} → {} ({})",
            s.id,
            s.in_date,
            s.clock_in_label(),
            if s.is_closed() { s.clock_out_label() } else { "open".to_string() },
            s.hours_label()
        ));
    }
    Ok(())
}

fn selector(index: Option<usize>, session: Option<Uuid>) -> AppResult<SessionSelector> {
    match (index, session) {
        (_, Some(sid)) => Ok(SessionSelector::Id(sid)),
        (Some(i), None) => Ok(SessionSelector::Index(i)),
        (None, None) => Err(AppError::InvalidState("either --index or --session is required".into())),
    }
}

fn describe(sel: SessionSelector) -> String {
    match sel {
        SessionSelector::Index(i) => format!("session #{i}"),
        SessionSelector::Id(sid) => format!("session {sid}"),
    }
}

/// `"4:05:30 pm|Lunch"` → time + text.
fn parse_note_arg(s: &str) -> AppResult<RawNote> {
    let (time, note) = s
        .split_once('|')
        .ok_or_else(|| AppError::InvalidTime(format!("expected 'h:mm:ss am|text', got '{s}'")))?;
    Ok(RawNote {
        time: time.trim().to_string(),
        note: note.trim().to_string(),
    })
}
