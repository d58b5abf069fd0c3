use rtimeclock::errors::AppError;
use rtimeclock::models::{Level, Settings, UserRecord};
use rtimeclock::store::{RecordStore, USERS, UserStore, audit, settings};
use serde::{Deserialize, Serialize};
use std::fs;

mod common;
use common::{sample_employee_json, temp_data, write_user_json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Item {
    name: String,
    qty: u32,
}

fn item(name: &str, qty: u32) -> Item {
    Item {
        name: name.to_string(),
        qty,
    }
}

#[test]
fn test_create_then_read_returns_same_value() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    store.create("items", "a", &item("apple", 3)).unwrap();
    let back: Item = store.read("items", "a").unwrap();
    assert_eq!(back, item("apple", 3));
    assert_eq!(store.list("items").unwrap(), vec!["a".to_string()]);
}

#[test]
fn test_create_twice_keeps_first_content() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    store.create("items", "a", &item("apple", 3)).unwrap();
    let err = store.create("items", "a", &item("pear", 9)).unwrap_err();
    assert!(matches!(err, AppError::AlreadyExists(_)), "got {err:?}");

    let back: Item = store.read("items", "a").unwrap();
    assert_eq!(back, item("apple", 3));
}

#[test]
fn test_missing_records_report_not_found() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();
    store.ensure_collection("items").unwrap();

    assert!(matches!(store.read::<Item>("items", "x"), Err(AppError::NotFound(_))));
    assert!(matches!(store.update("items", "x", &item("x", 1)), Err(AppError::NotFound(_))));
    assert!(matches!(store.delete("items", "x"), Err(AppError::NotFound(_))));
    assert!(!store.exists("items", "x"));
}

#[test]
fn test_update_replaces_whole_content() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    store.create("items", "a", &item("a much longer name than later", 1)).unwrap();
    store.update("items", "a", &item("short", 2)).unwrap();

    let back: Item = store.read("items", "a").unwrap();
    assert_eq!(back, item("short", 2));
}

#[test]
fn test_delete_then_list() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    store.create("items", "b", &item("b", 1)).unwrap();
    store.create("items", "a", &item("a", 1)).unwrap();
    fs::write(dir.path().join("items").join("notes.txt"), "ignored").unwrap();

    assert_eq!(store.list("items").unwrap(), vec!["a".to_string(), "b".to_string()]);
    store.delete("items", "a").unwrap();
    assert_eq!(store.list("items").unwrap(), vec!["b".to_string()]);
}

#[test]
fn test_list_missing_collection_is_not_found() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    let err = store.list("items").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)), "got {err:?}");
}

#[test]
fn test_list_empty_collection_is_empty() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();
    store.ensure_collection("items").unwrap();

    assert!(store.list("items").unwrap().is_empty());
}

#[test]
fn test_update_leaves_no_temporary_file() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    store.create("items", "a", &item("apple", 1)).unwrap();
    store.update("items", "a", &item("apple", 2)).unwrap();

    let names: Vec<String> = fs::read_dir(dir.path().join("items"))
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.json".to_string()]);
    assert_eq!(store.list("items").unwrap(), vec!["a".to_string()]);
}

#[test]
fn test_invalid_keys_are_rejected() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    for key in ["", "..", "a/b", "a\\b", " a"] {
        let err = store.create("items", key, &item("x", 1)).unwrap_err();
        assert!(matches!(err, AppError::InvalidKey(_)), "key {key:?} gave {err:?}");
    }
}

#[test]
fn test_malformed_and_empty_files() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();
    store.ensure_collection("items").unwrap();

    fs::write(dir.path().join("items").join("bad.json"), "{ not json").unwrap();
    fs::write(dir.path().join("items").join("empty.json"), "").unwrap();

    let err = store.read::<Item>("items", "bad").unwrap_err();
    assert!(matches!(err, AppError::Malformed { .. }), "got {err:?}");
    assert!(matches!(store.read::<Item>("items", "empty"), Err(AppError::NotFound(_))));
}

#[test]
fn test_user_file_shape_round_trips() {
    let dir = temp_data();
    write_user_json(dir.path(), 4321, &sample_employee_json(4321));
    let store = RecordStore::open(dir.path()).unwrap();
    let users = UserStore::new(&store);

    let mut user = users.load(4321).unwrap();
    assert_eq!(user.level, Level::Employee);
    assert_eq!(user.data.len(), 3);
    assert!(user.is_clocked_in());
    assert_eq!(user.data[0].notes[0].note, "Lunch");

    users.save(&mut user).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(USERS).join("4321.json")).unwrap()).unwrap();
    assert_eq!(raw["data"][0]["clockIn"], "9:00:00 am");
    assert_eq!(raw["data"][2]["outDate"], "");
    assert_eq!(raw["data"][2]["clockOut"], "");
    assert_eq!(raw["session"]["status"], true);
    assert_eq!(raw["revision"], 1);
}

#[test]
fn test_status_flag_is_resynced_on_load() {
    let dir = temp_data();
    let json = sample_employee_json(7).replace(r#""status": true"#, r#""status": false"#);
    write_user_json(dir.path(), 7, &json);

    let store = RecordStore::open(dir.path()).unwrap();
    let user = UserStore::new(&store).load(7).unwrap();
    assert!(user.session.status);
}

#[test]
fn test_stale_save_is_a_conflict() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();
    let users = UserStore::new(&store);
    users.insert(&UserRecord::new(10, "Eve", "", Level::Employee)).unwrap();

    let mut first = users.load(10).unwrap();
    let mut second = users.load(10).unwrap();

    first.first_name = "Evelyn".into();
    users.save(&mut first).unwrap();

    second.last_name = "Late".into();
    let err = users.save(&mut second).unwrap_err();
    assert!(matches!(err, AppError::Conflict { expected: 0, found: 1, .. }), "got {err:?}");

    assert_eq!(users.load(10).unwrap().first_name, "Evelyn");
}

#[test]
fn test_mismatched_id_in_file_is_malformed() {
    let dir = temp_data();
    write_user_json(dir.path(), 5, &sample_employee_json(6));
    let store = RecordStore::open(dir.path()).unwrap();
    assert!(matches!(UserStore::new(&store).load(5), Err(AppError::Malformed { .. })));
}

#[test]
fn test_settings_defaults_and_string_booleans() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    assert_eq!(settings::load(&store).unwrap(), Settings::default());
    assert!(settings::init(&store).unwrap());
    assert!(!settings::init(&store).unwrap());

    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("settings.json")).unwrap()).unwrap();
    assert_eq!(raw["restrictAdminAccess"], "true");
    assert_eq!(raw["saveDataPath"], "");

    fs::write(
        dir.path().join("settings.json"),
        r#"{ "saveDataPath": "/srv/exports", "restrictAdminAccess": false }"#,
    )
    .unwrap();
    let s = settings::load(&store).unwrap();
    assert!(!s.restrict_admin_access);
    assert_eq!(settings::export_dir(&store, &s), std::path::PathBuf::from("/srv/exports"));
}

#[test]
fn test_audit_log_appends_entries() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    audit::ttlog(&store, "in", "12", "clocked in").unwrap();
    audit::ttlog(&store, "out", "12", "clocked out").unwrap();

    let entries = audit::read_all(&store).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, "in");
    assert_eq!(entries[1].target, "12");
}
