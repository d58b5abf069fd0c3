use serde::{Deserialize, Serialize};
use std::fmt;

/// User role. Stored as a free string: unknown tags are preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    Admin,
    Employee,
    Other(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Admin => "admin",
            Level::Employee => "employee",
            Level::Other(s) => s,
        }
    }

    /// Only `admin` is privileged.
    pub fn is_admin(&self) -> bool {
        matches!(self, Level::Admin)
    }

    /// Helper: convert input from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Self {
        Level::from(code.trim().to_string())
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Level::Admin,
            "employee" => Level::Employee,
            _ => Level::Other(s),
        }
    }
}

impl From<Level> for String {
    fn from(l: Level) -> Self {
        l.as_str().to_string()
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
