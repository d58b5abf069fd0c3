use super::serde_helpers::bool_string;
use serde::{Deserialize, Serialize};

/// `settings.json` at the root of the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Where exports are written. Empty → `<data>/exports`.
    #[serde(default)]
    pub save_data_path: String,
    #[serde(with = "bool_string", default = "default_restrict")]
    pub restrict_admin_access: bool,
}

fn default_restrict() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            save_data_path: String::new(),
            restrict_admin_access: default_restrict(),
        }
    }
}
