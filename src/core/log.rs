use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::audit::{AuditEntry, read_all};
use crate::utils::colors::{BLUE, CYAN, GREEN, MAGENTA, RED, RESET, WHITE, YELLOW};

const MAX_OP_WIDTH: usize = 40;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "in" | "user_add" => GREEN,
        "out" => BLUE,
        "del" | "user_del" => RED,
        "edit" => YELLOW,
        "note" => CYAN,
        "settings" | "init" => MAGENTA,
        _ => WHITE,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(store: &RecordStore) -> AppResult<()> {
        let entries = read_all(store)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::render(&entries) {
            println!("{line}");
        }
        Ok(())
    }

    /// One line per entry: `n: date | op (target) => message`.
    pub fn render(entries: &[AuditEntry]) -> Vec<String> {
        let id_w = entries.len().to_string().len();
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(0);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_OP_WIDTH);

        entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let visible = truncate(&op_target(e), MAX_OP_WIDTH);
                let padding = " ".repeat(op_w.saturating_sub(visible.chars().count()));

                // solo l'operazione è colorata
                let colored = match visible.split_once(' ') {
                    Some((op, rest)) => format!("{}{op}{RESET} {rest}", color_for_operation(&e.operation)),
                    None => format!("{}{visible}{RESET}", color_for_operation(&e.operation)),
                };

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    i + 1,
                    e.date,
                    colored,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }
}

fn op_target(e: &AuditEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}
