#![forbid(unsafe_code)]
use chrono::Weekday;
use shift_roster::{
    apply_default, apply_pattern, CalendarGrid, DefaultShift, MemberId, RosterError, ShiftCode,
    WeekendPattern, YearMonth,
};

fn january_2025(names: &[&str]) -> CalendarGrid {
    let members: Vec<MemberId> = names.iter().map(MemberId::new).collect();
    CalendarGrid::create(YearMonth::new(2025, 1).unwrap(), &members).unwrap()
}

fn off_days(grid: &CalendarGrid, member: &str) -> Vec<u32> {
    grid.days()
        .iter()
        .zip(grid.row(member).unwrap())
        .filter(|(_, c)| **c == ShiftCode::Wo)
        .map(|(d, _)| d.day_of_month())
        .collect()
}

#[test]
fn sat_sun_marks_exactly_weekends() {
    let grid = apply_default(&january_2025(&["alice"]), "alice", "SB", "Sat-Sun").unwrap();

    for (day, code) in grid.days().iter().zip(grid.row("alice").unwrap()) {
        match day.weekday() {
            Weekday::Sat | Weekday::Sun => assert_eq!(*code, ShiftCode::Wo, "{}", day.label()),
            _ => assert_eq!(*code, ShiftCode::Sb, "{}", day.label()),
        }
    }
    assert_eq!(off_days(&grid, "alice"), vec![4, 5, 11, 12, 18, 19, 25, 26]);
}

#[test]
fn applying_twice_is_idempotent() {
    let once = apply_default(&january_2025(&["alice"]), "alice", "SB", "Sat-Sun").unwrap();
    let twice = apply_default(&once, "alice", "SB", "Sat-Sun").unwrap();
    assert_eq!(once, twice);
}

#[test]
fn other_patterns_are_opaque_pairs() {
    let grid = january_2025(&["alice", "bob"]);
    let grid = apply_default(&grid, "alice", "WFH", "Sun-Mon").unwrap();
    let grid = apply_default(&grid, "bob", "SC", "Fri-Sat").unwrap();

    assert_eq!(off_days(&grid, "alice"), vec![5, 6, 12, 13, 19, 20, 26, 27]);
    assert_eq!(off_days(&grid, "bob"), vec![3, 4, 10, 11, 17, 18, 24, 25, 31]);
    assert_eq!(grid.cell("alice", 4), Some(ShiftCode::Wfh));
    assert_eq!(grid.cell("bob", 5), Some(ShiftCode::Sc));
}

#[test]
fn pattern_overwrites_manual_edits_of_that_member_only() {
    let grid = january_2025(&["alice", "bob"])
        .set_cell("alice", "7-Jan", "Leave")
        .unwrap()
        .set_cell("bob", "7-Jan", "Leave")
        .unwrap();

    let applied = apply_pattern(&grid, "alice", DefaultShift::Sa, WeekendPattern::SatSun).unwrap();
    assert_eq!(applied.cell("alice", 7), Some(ShiftCode::Sa));
    assert_eq!(applied.cell("bob", 7), Some(ShiftCode::Leave));
    assert_eq!(applied.row("bob"), grid.row("bob"));
    // la grille d'origine n'a pas bougé
    assert_eq!(grid.cell("alice", 7), Some(ShiftCode::Leave));
}

#[test]
fn reserved_codes_are_not_valid_defaults() {
    let grid = january_2025(&["alice"]);
    for code in ["Leave", "WO", "-", "XX"] {
        let err = apply_default(&grid, "alice", code, "Sat-Sun").unwrap_err();
        assert!(
            matches!(err, RosterError::InvalidShiftCode(ref c) if c == code),
            "{code}: {err}"
        );
    }
}

#[test]
fn unknown_member_and_pattern_are_rejected() {
    let grid = january_2025(&["alice"]);
    assert!(matches!(
        apply_default(&grid, "bob", "SA", "Sat-Sun"),
        Err(RosterError::UnknownMember(_))
    ));
    assert!(matches!(
        apply_default(&grid, "alice", "SA", "Mon-Tue"),
        Err(RosterError::InvalidWeekendPattern(_))
    ));
    assert!(matches!(
        apply_default(&grid, "alice", "SA", "sat-sun"),
        Err(RosterError::InvalidWeekendPattern(_))
    ));
}

#[test]
fn weekend_patterns_map_to_weekday_pairs() {
    assert_eq!(WeekendPattern::SatSun.days(), [Weekday::Sat, Weekday::Sun]);
    assert_eq!(WeekendPattern::SunMon.days(), [Weekday::Sun, Weekday::Mon]);
    assert_eq!(WeekendPattern::FriSat.days(), [Weekday::Fri, Weekday::Sat]);
    for pattern in WeekendPattern::ALL {
        assert_eq!(pattern.as_str().parse::<WeekendPattern>().unwrap(), pattern);
    }
}
