use super::RosterError;
use crate::model::{CalendarDay, MemberId, YearMonth};
use chrono::Duration;
use std::collections::HashSet;

/// Jours du mois, dans l'ordre, à partir du 1er.
pub(super) fn build_days(month: YearMonth) -> Vec<CalendarDay> {
    let first = month.first_day();
    (0..month.days_in_month())
        .map(|offset| CalendarDay::new(first + Duration::days(i64::from(offset))))
        .collect()
}

pub(super) fn ensure_unique(members: &[MemberId]) -> Result<(), RosterError> {
    let mut seen = HashSet::with_capacity(members.len());
    for member in members {
        if !seen.insert(member.as_str()) {
            return Err(RosterError::DuplicateMember(member.as_str().to_string()));
        }
    }
    Ok(())
}

pub(super) fn find_member_index(members: &[MemberId], member: &str) -> Option<usize> {
    members.iter().position(|m| m.as_str() == member)
}

pub(super) fn find_day_index(days: &[CalendarDay], label: &str) -> Option<usize> {
    let label = label.trim();
    days.iter().position(|d| d.label() == label)
}
