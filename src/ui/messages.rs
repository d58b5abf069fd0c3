//! User-facing console messages (icon + color), mirrored to tracing.

use std::fmt;
use std::io::{self, Write};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Debug, Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Info => ("\x1b[34m", "ℹ️"),
            Tone::Success => ("\x1b[32m", "✅"),
            Tone::Warning => ("\x1b[33m", "⚠️"),
            Tone::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn emit(tone: Tone, msg: &dyn fmt::Display) {
    let (color, icon) = tone.style();
    let line = format!("{color}{BOLD}{icon} {RESET}{msg}");

    match tone {
        Tone::Error => {
            tracing::debug!(target: "rtimeclock::ui", "error: {msg}");
            eprintln!("{line}");
        }
        Tone::Warning => {
            tracing::debug!(target: "rtimeclock::ui", "warning: {msg}");
            println!("{line}");
        }
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Tone::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Tone::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Tone::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Tone::Error, &msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}====================== {}{}\n", Tone::Info.style().0, BOLD, msg, RESET);
}

/// Yes/no prompt on stdin. Anything but `y`/`yes` (or a closed stdin) is a no.
pub fn confirm<T: fmt::Display>(prompt: T) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    match io::stdin().read_line(&mut answer) {
        Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        Err(_) => false,
    }
}
