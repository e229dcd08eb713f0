#![forbid(unsafe_code)]
use shift_roster::{
    io, ExportOptions, JsonStorage, RosterError, Session, ShiftCode, Storage, YearMonth,
};
use std::fs;
use tempfile::tempdir;

fn january() -> YearMonth {
    YearMonth::new(2025, 1).unwrap()
}

#[test]
fn members_can_be_added_and_removed_without_losing_edits() {
    let mut session = Session::new(january());
    session.add_member("alice").unwrap();
    session.apply_default("alice", "WFH", "Sun-Mon").unwrap();
    session.add_member("bob").unwrap();

    assert_eq!(session.grid().cell("alice", 1), Some(ShiftCode::Wfh));
    assert_eq!(session.grid().cell("bob", 5), Some(ShiftCode::Sa));

    session.remove_member("bob").unwrap();
    assert_eq!(session.members().len(), 1);
    assert_eq!(session.grid().cell("alice", 5), Some(ShiftCode::Wo));
}

#[test]
fn failed_operations_leave_the_session_untouched() {
    let mut session = Session::new(january());
    session.add_member("alice").unwrap();
    session.set_cell("alice", "2-Jan", "SC").unwrap();
    let before = session.clone();

    assert!(matches!(
        session.add_member("alice"),
        Err(RosterError::DuplicateMember(_))
    ));
    assert!(matches!(
        session.remove_member("zoe"),
        Err(RosterError::UnknownMember(_))
    ));
    assert!(session.apply_default("alice", "Leave", "Sat-Sun").is_err());
    assert!(session.set_cell("alice", "2-Jan", "??").is_err());
    assert_eq!(session, before);
}

#[test]
fn blank_member_names_are_rejected() {
    let mut session = Session::new(january());
    assert!(matches!(session.add_member(""), Err(RosterError::EmptyMemberName)));
    assert!(matches!(session.add_member("   "), Err(RosterError::EmptyMemberName)));
    assert!(session.members().is_empty());

    session.add_member("  alice ").unwrap();
    assert_eq!(session.members()[0].as_str(), "alice");
    assert!(matches!(
        session.add_member("alice"),
        Err(RosterError::DuplicateMember(_))
    ));
}

#[test]
fn changing_month_resets_cells() {
    let mut session = Session::new(january());
    session.add_member("alice").unwrap();
    session.set_cell("alice", "3-Jan", "Leave").unwrap();
    session.select_month(YearMonth::new(2025, 2).unwrap()).unwrap();

    assert_eq!(session.grid().days().len(), 28);
    assert_eq!(session.grid().cell("alice", 3), Some(ShiftCode::Sa));
}

#[test]
fn export_requires_members() {
    let mut session = Session::new(january());
    assert!(matches!(
        session.export(&ExportOptions::default()),
        Err(RosterError::EmptyGrid)
    ));
    session.add_member("alice").unwrap();
    let export = session.export(&ExportOptions::default()).unwrap();
    assert_eq!(export.file_name, "SRE_Shift_Roster_January_2025.xlsx");
    assert!(export.bytes.starts_with(b"PK"));
}

#[test]
fn json_storage_roundtrip() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path().join("roster.json")).unwrap();
    assert!(!storage.exists());

    let mut session = Session::new(january());
    session.add_member("alice").unwrap();
    session.set_cell("alice", "31-Jan", "-").unwrap();
    storage.save(&session).unwrap();

    let loaded = storage.load().unwrap();
    assert_eq!(loaded, session);
}

#[test]
fn members_import_and_grid_csv_export() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("members.csv");
    fs::write(&input, "name\nalice\n bob \n").unwrap();

    let members = io::import_members_csv(&input).unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[1].as_str(), "bob");

    fs::write(&input, "name\nalice\n\"\"\n").unwrap();
    assert!(io::import_members_csv(&input).is_err());

    let mut session = Session::new(YearMonth::new(2023, 2).unwrap());
    for m in &members {
        session.add_member(m.as_str()).unwrap();
    }
    session.set_cell("bob", "1-Feb", "WO").unwrap();

    let out = dir.path().join("roster.csv");
    io::export_grid_csv(&out, session.grid()).unwrap();
    let csv = fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Team Member,1-Feb,2-Feb,"));
    assert!(lines[1].starts_with("Day,Wed,Thu,Fri,Sat"));
    assert!(lines[3].starts_with("bob,WO,SA"));

    let json_out = dir.path().join("roster-grid.json");
    io::export_grid_json(&json_out, session.grid()).unwrap();
    let json = fs::read_to_string(&json_out).unwrap();
    assert!(json.contains("\"2023-02\""));
}
