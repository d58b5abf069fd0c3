#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rtimeclock::core::AdminToken;
use rtimeclock::core::users::UserLogic;
use rtimeclock::models::{Level, UserRecord};
use rtimeclock::store::RecordStore;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub fn rti() -> Command {
    cargo_bin_cmd!("rtimeclock")
}

/// Binary pointed at `dir` for data, with HOME isolated so no real config
/// file is read.
pub fn rti_at(dir: &Path) -> Command {
    let mut cmd = rti();
    cmd.env("HOME", dir)
        .env_remove("RUST_LOG")
        .args(["--data", &dir.to_string_lossy()]);
    cmd
}

/// Fresh data directory, removed when the returned guard drops.
pub fn temp_data() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

/// `rtimeclock --data <dir> --test init`
pub fn init_data(dir: &Path) {
    rti_at(dir).args(["--test", "init"]).assert().success();
}

/// Store with one admin (bootstrap) and one employee.
pub fn store_with_users(dir: &Path) -> (RecordStore, UserRecord, UserRecord) {
    let store = RecordStore::open(dir).expect("open store");
    let admin = UserLogic::create(&store, None, "Ada", "Lovelace", Level::Admin).expect("bootstrap admin");
    let token = AdminToken::for_admin(&admin).expect("admin token");
    let employee =
        UserLogic::create(&store, Some(&token), "Bob", "Builder", Level::Employee).expect("create employee");
    (store, admin, employee)
}

/// Write a raw user file as another tool (or a hand edit) would.
pub fn write_user_json(dir: &Path, id: u32, json: &str) {
    let users = dir.join("users");
    fs::create_dir_all(&users).expect("users dir");
    fs::write(users.join(format!("{id}.json")), json).expect("write user");
}

/// An employee with two closed sessions in September 2025 and one open one.
pub fn sample_employee_json(id: u32) -> String {
    format!(
        r#"{{
  "id": {id},
  "level": "employee",
  "firstName": "Carla",
  "lastName": "Rossi",
  "created": "2025-09-01T08:00:00+02:00",
  "session": {{ "status": true }},
  "data": [
    {{
      "inDate": "2025-09-01",
      "outDate": "2025-09-01",
      "clockIn": "9:00:00 am",
      "clockOut": "5:30:00 pm",
      "notes": [ {{ "time": "12:00:00 pm", "note": "Lunch" }} ]
    }},
    {{
      "inDate": "2025-09-02",
      "outDate": "2025-09-03",
      "clockIn": "11:50:00 pm",
      "clockOut": "12:10:00 am",
      "notes": []
    }},
    {{
      "inDate": "2025-10-01",
      "outDate": "",
      "clockIn": "8:00:00 am",
      "clockOut": "",
      "notes": []
    }}
  ],
  "revision": 0
}}"#
    )
}

/// Unrestricted settings so CLI tests need no `--admin`.
pub fn write_open_settings(dir: &Path) {
    fs::write(
        dir.join("settings.json"),
        r#"{ "saveDataPath": "", "restrictAdminAccess": "false" }"#,
    )
    .expect("write settings");
}
