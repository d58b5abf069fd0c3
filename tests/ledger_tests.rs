use chrono::{NaiveDate, NaiveTime};
use rtimeclock::core::summary::Timesheet;
use rtimeclock::core::timeclock::TimeclockLogic;
use rtimeclock::core::users::UserLogic;
use rtimeclock::core::{AdminToken, RawNote, SessionLedger, SessionPatch, SessionSelector};
use rtimeclock::errors::AppError;
use rtimeclock::export::range::parse_period;
use rtimeclock::models::{Level, UserRecord};
use rtimeclock::store::{RecordStore, UserStore};

mod common;
use common::{sample_employee_json, store_with_users, temp_data, write_user_json};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn admin() -> AdminToken {
    AdminToken::for_admin(&UserRecord::new(1, "Root", "", Level::Admin)).unwrap()
}

fn employee() -> UserRecord {
    UserRecord::new(2, "Bob", "Builder", Level::Employee)
}

#[test]
fn test_clock_in_then_out() {
    let mut u = employee();

    SessionLedger::clock_in(&mut u, d(2025, 9, 1), t(9, 0)).unwrap();
    assert!(u.is_clocked_in());
    assert_eq!(u.open_count(), 1);

    let closed = SessionLedger::clock_out(&mut u, d(2025, 9, 1), t(17, 30)).unwrap();
    assert_eq!(closed, 1);
    assert!(!u.is_clocked_in());
    assert!(u.status_consistent());
    assert_eq!(u.data[0].hours_label(), "08:30");
}

#[test]
fn test_sub_second_clock_times_survive_a_store_round_trip() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();
    let mut u = employee();

    let morning = NaiveTime::from_hms_milli_opt(9, 0, 0, 123).unwrap();
    let noon = NaiveTime::from_hms_milli_opt(12, 0, 5, 999).unwrap();
    let evening = NaiveTime::from_hms_milli_opt(17, 30, 0, 456).unwrap();
    SessionLedger::clock_in(&mut u, d(2024, 1, 1), morning).unwrap();
    SessionLedger::add_note(&mut u, "Lunch", noon).unwrap();
    SessionLedger::clock_out(&mut u, d(2024, 1, 1), evening).unwrap();

    assert_eq!(u.data[0].clock_in, t(9, 0));
    assert_eq!(u.data[0].notes[0].time, NaiveTime::from_hms_opt(12, 0, 5).unwrap());
    assert_eq!(u.data[0].clock_out, Some(t(17, 30)));

    store.create("users", &u.key(), &u).unwrap();
    let back: UserRecord = store.read("users", &u.key()).unwrap();
    assert_eq!(back, u);
}

#[test]
fn test_double_clock_in_is_rejected_and_changes_nothing() {
    let mut u = employee();
    SessionLedger::clock_in(&mut u, d(2025, 9, 1), t(9, 0)).unwrap();
    let before = u.clone();

    let err = SessionLedger::clock_in(&mut u, d(2025, 9, 1), t(10, 0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(u, before);
}

#[test]
fn test_clock_out_without_open_session_is_rejected() {
    let mut u = employee();
    let err = SessionLedger::clock_out(&mut u, d(2025, 9, 1), t(17, 0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
    assert!(u.data.is_empty());
}

#[test]
fn test_clock_out_before_clock_in_is_rejected() {
    let mut u = employee();
    SessionLedger::clock_in(&mut u, d(2025, 9, 1), t(9, 0)).unwrap();
    let before = u.clone();

    let err = SessionLedger::clock_out(&mut u, d(2025, 9, 1), t(8, 0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidState(_)));
    assert_eq!(u, before);
}

#[test]
fn test_notes_need_an_open_session_and_text() {
    let mut u = employee();
    assert!(matches!(
        SessionLedger::add_note(&mut u, "hello", t(9, 0)),
        Err(AppError::InvalidState(_))
    ));

    SessionLedger::clock_in(&mut u, d(2025, 9, 1), t(9, 0)).unwrap();
    assert!(matches!(
        SessionLedger::add_note(&mut u, "   ", t(9, 5)),
        Err(AppError::InvalidState(_))
    ));

    SessionLedger::add_note(&mut u, "Standup", t(9, 15)).unwrap();
    SessionLedger::add_note(&mut u, "Review", t(16, 5)).unwrap();
    assert_eq!(u.data[0].notes_joined(), "9:15:00 am - Standup || 4:05:00 pm - Review");
}

#[test]
fn test_several_open_sessions_are_all_closed() {
    let dir = temp_data();
    let json = sample_employee_json(3).replace(
        r#""inDate": "2025-09-02",
      "outDate": "2025-09-03""#,
        r#""inDate": "2025-09-02",
      "outDate": """#,
    );
    let json = json.replace(r#""clockOut": "12:10:00 am""#, r#""clockOut": """#);
    write_user_json(dir.path(), 3, &json);

    let store = RecordStore::open(dir.path()).unwrap();
    let mut u = UserStore::new(&store).load(3).unwrap();
    assert_eq!(u.open_count(), 2);
    assert!(u.is_clocked_in());

    assert_eq!(SessionLedger::clock_out(&mut u, d(2025, 10, 1), t(17, 0)).unwrap(), 2);
    assert_eq!(u.open_count(), 0);
    assert!(!u.is_clocked_in());
}

#[test]
fn test_edit_session_fields() {
    let mut u = employee();
    SessionLedger::clock_in(&mut u, d(2025, 9, 1), t(9, 0)).unwrap();
    SessionLedger::clock_out(&mut u, d(2025, 9, 1), t(17, 0)).unwrap();

    let patch = SessionPatch {
        clock_in: Some("8:30:00 am".into()),
        notes: Some(vec![RawNote {
            time: "12:00:00 pm".into(),
            note: "Lunch".into(),
        }]),
        ..SessionPatch::default()
    };
    let edited = SessionLedger::edit_session(&mut u, &admin(), 0, &patch).unwrap();
    assert_eq!(edited.hours_label(), "08:30");
    assert_eq!(edited.notes_joined(), "12:00:00 pm - Lunch");
}

#[test]
fn test_edit_can_close_an_open_session() {
    let mut u = employee();
    SessionLedger::clock_in(&mut u, d(2025, 9, 1), t(9, 0)).unwrap();

    let patch = SessionPatch {
        out_date: Some("9-1-2025".into()),
        clock_out: Some("1:00:00 pm".into()),
        ..SessionPatch::default()
    };
    SessionLedger::edit_session(&mut u, &admin(), 0, &patch).unwrap();
    assert!(!u.is_clocked_in());
    assert_eq!(u.data[0].hours_label(), "04:00");
}

#[test]
fn test_invalid_edits_leave_the_session_untouched() {
    let mut u = employee();
    SessionLedger::clock_in(&mut u, d(2025, 9, 1), t(9, 0)).unwrap();
    SessionLedger::clock_out(&mut u, d(2025, 9, 1), t(17, 0)).unwrap();
    let before = u.clone();
    let token = admin();

    let cases = [
        SessionPatch {
            clock_in: Some("25:00:00 am".into()),
            ..SessionPatch::default()
        },
        SessionPatch {
            in_date: Some("2025-02-30".into()),
            ..SessionPatch::default()
        },
        SessionPatch {
            clock_out: Some("8:00:00 am".into()),
            ..SessionPatch::default()
        },
        SessionPatch {
            out_date: Some(String::new()),
            clock_out: Some(String::new()),
            ..SessionPatch::default()
        },
        SessionPatch {
            clock_out: Some(String::new()),
            ..SessionPatch::default()
        },
        SessionPatch {
            clock_in: Some("10:00:00 am".into()),
            notes: Some(vec![RawNote {
                time: "noon".into(),
                note: "x".into(),
            }]),
            ..SessionPatch::default()
        },
    ];

    for patch in &cases {
        assert!(
            SessionLedger::edit_session(&mut u, &token, 0, patch).is_err(),
            "patch {patch:?} should fail"
        );
        assert_eq!(u, before, "patch {patch:?} changed the record");
    }
}

#[test]
fn test_stale_index_after_delete() {
    let mut u = employee();
    for day in 1..=2 {
        SessionLedger::clock_in(&mut u, d(2025, 9, day), t(9, 0)).unwrap();
        SessionLedger::clock_out(&mut u, d(2025, 9, day), t(17, 0)).unwrap();
    }
    let token = admin();
    let second = u.data[1].id;

    let removed = SessionLedger::delete_session(&mut u, &token, 0).unwrap();
    assert_eq!(removed.in_date, d(2025, 9, 1));

    // index 1 no longer exists, the stable id still resolves
    let before = u.clone();
    let patch = SessionPatch {
        clock_in: Some("10:00:00 am".into()),
        ..SessionPatch::default()
    };
    let err = SessionLedger::edit_session(&mut u, &token, 1, &patch).unwrap_err();
    assert!(matches!(err, AppError::SessionNotFound(_)));
    let err = SessionLedger::delete_session(&mut u, &token, 1).unwrap_err();
    assert!(matches!(err, AppError::SessionNotFound(_)));
    assert_eq!(u, before);
    assert_eq!(SessionLedger::delete_session_by_id(&mut u, &token, second).unwrap().id, second);
    assert!(u.data.is_empty());
}

#[test]
fn test_deleting_the_open_session_clears_status() {
    let mut u = employee();
    SessionLedger::clock_in(&mut u, d(2025, 9, 1), t(9, 0)).unwrap();
    SessionLedger::delete_session(&mut u, &admin(), 0).unwrap();
    assert!(!u.is_clocked_in());
}

#[test]
fn test_timesheet_totals_and_range() {
    let dir = temp_data();
    write_user_json(dir.path(), 9, &sample_employee_json(9));
    let store = RecordStore::open(dir.path()).unwrap();
    let u = UserStore::new(&store).load(9).unwrap();

    let all = Timesheet::build(&u, None);
    assert_eq!(all.rows.len(), 3);
    assert_eq!(all.closed_rows().count(), 2);
    assert_eq!(all.total_minutes, 8 * 60 + 30 + 20);
    assert_eq!(all.total_label(), "8hrs 50min");
    assert_eq!(all.total_hhmm(), "08:50");

    let sept2 = Timesheet::build(&u, parse_period(Some("2025-09-02")).unwrap());
    assert_eq!(sept2.rows.len(), 1);
    assert_eq!(sept2.total_label(), "0hrs 20min");

    let october = Timesheet::build(&u, parse_period(Some("2025-10")).unwrap());
    assert_eq!(october.closed_rows().count(), 0);
    assert_eq!(october.total_minutes, 0);
}

#[test]
fn test_backwards_session_does_not_hide_the_rest_of_the_history() {
    let dir = temp_data();
    write_user_json(
        dir.path(),
        7,
        r#"{
  "id": 7,
  "level": "employee",
  "firstName": "Dana",
  "lastName": "",
  "session": { "status": false },
  "data": [
    { "inDate": "2024-01-02", "outDate": "2024-01-01", "clockIn": "9:00:00 am", "clockOut": "5:00:00 pm", "notes": [] },
    { "inDate": "2024-01-03", "outDate": "2024-01-03", "clockIn": "9:00:00 am", "clockOut": "5:00:00 pm", "notes": [] }
  ]
}"#,
    );
    let store = RecordStore::open(dir.path()).unwrap();
    let u = UserStore::new(&store).load(7).unwrap();

    let sheet = Timesheet::build(&u, None);
    assert_eq!(sheet.rows.len(), 2);
    assert_eq!(sheet.rows[0].minutes, None);
    assert_eq!(sheet.rows[0].hours_label(), "");
    assert_eq!(sheet.rows[1].hours_label(), "08:00");
    assert_eq!(sheet.total_label(), "8hrs 0min");
    // both closed sessions are still listed for export
    assert_eq!(sheet.closed_rows().count(), 2);
}

#[test]
fn test_period_expressions() {
    assert_eq!(parse_period(None).unwrap(), None);
    assert_eq!(parse_period(Some("all")).unwrap(), None);
    assert_eq!(parse_period(Some("2024-02")).unwrap(), Some((d(2024, 2, 1), d(2024, 2, 29))));
    assert_eq!(
        parse_period(Some("2025-03:2025-04-10")).unwrap(),
        Some((d(2025, 3, 1), d(2025, 4, 10)))
    );
    assert!(parse_period(Some("2025-05:2025-04")).is_err());
    assert!(parse_period(Some("2025-13")).is_err());
}

#[test]
fn test_first_user_must_be_admin() {
    let dir = temp_data();
    let store = RecordStore::open(dir.path()).unwrap();

    let err = UserLogic::create(&store, None, "Bob", "", Level::Employee).unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));

    let root = UserLogic::create(&store, None, "Ada", "", Level::Admin).unwrap();
    assert!(root.is_admin());

    // the bootstrap is gone once a user exists
    let err = UserLogic::create(&store, None, "Eve", "", Level::Admin).unwrap_err();
    assert!(matches!(err, AppError::PermissionDenied(_)));
}

#[test]
fn test_employee_cannot_act_as_admin() {
    let dir = temp_data();
    let (_store, _admin, employee) = store_with_users(dir.path());
    assert!(matches!(AdminToken::for_admin(&employee), Err(AppError::PermissionDenied(_))));
}

#[test]
fn test_admin_cannot_delete_self() {
    let dir = temp_data();
    let (store, admin, employee) = store_with_users(dir.path());
    let token = AdminToken::for_admin(&admin).unwrap();

    assert!(matches!(
        UserLogic::delete(&store, &token, admin.id),
        Err(AppError::InvalidState(_))
    ));
    UserLogic::delete(&store, &token, employee.id).unwrap();
    assert!(matches!(UserStore::new(&store).load(employee.id), Err(AppError::NotFound(_))));
}

#[test]
fn test_persisted_clock_cycle_and_session_edit() {
    let dir = temp_data();
    let (store, admin, employee) = store_with_users(dir.path());
    let token = AdminToken::for_admin(&admin).unwrap();

    TimeclockLogic::clock_in(&store, employee.id, d(2025, 9, 1), t(9, 0)).unwrap();
    TimeclockLogic::add_note(&store, employee.id, "Coffee", t(10, 0)).unwrap();
    TimeclockLogic::clock_out(&store, employee.id, d(2025, 9, 1), t(17, 0)).unwrap();

    let saved = UserStore::new(&store).load(employee.id).unwrap();
    assert_eq!(saved.revision, 3);
    assert!(!saved.is_clocked_in());
    let session_id = saved.data[0].id;

    let patch = SessionPatch {
        clock_out: Some("6:00:00 pm".into()),
        ..SessionPatch::default()
    };
    let edited = UserLogic::edit_session(&store, &token, employee.id, SessionSelector::Id(session_id), &patch).unwrap();
    assert_eq!(edited.data[0].hours_label(), "09:00");
    assert_eq!(edited.data[0].id, session_id);

    let bad = SessionPatch {
        clock_out: Some("6:00 pm".into()),
        ..SessionPatch::default()
    };
    assert!(UserLogic::edit_session(&store, &token, employee.id, SessionSelector::Index(0), &bad).is_err());
    assert_eq!(UserStore::new(&store).load(employee.id).unwrap().data[0].hours_label(), "09:00");

    assert!(matches!(
        UserLogic::delete_session(&store, &token, employee.id, SessionSelector::Index(5)),
        Err(AppError::SessionNotFound(_))
    ));
}
