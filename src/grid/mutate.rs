use super::{CalendarGrid, RosterError};
use crate::model::{MemberId, ShiftCode, YearMonth};
use std::collections::HashMap;

/// Reconstruit une grille neuve puis recopie les cellules dont la clé
/// (membre, jour, mois abrégé) existe dans les deux grilles.
pub(super) fn merge(
    old: &CalendarGrid,
    members: &[MemberId],
    month: YearMonth,
) -> Result<CalendarGrid, RosterError> {
    let mut fresh = CalendarGrid::create(month, members)?;

    let mut previous: HashMap<(&str, (u32, String)), ShiftCode> =
        HashMap::with_capacity(old.members.len() * old.days.len());
    for (member, row) in old.members.iter().zip(&old.cells) {
        for (day, code) in old.days.iter().zip(row) {
            previous.insert((member.as_str(), day.label_key()), *code);
        }
    }

    let mut carried = 0usize;
    for (member, row) in fresh.members.iter().zip(fresh.cells.iter_mut()) {
        for (day, cell) in fresh.days.iter().zip(row.iter_mut()) {
            if let Some(code) = previous.get(&(member.as_str(), day.label_key())) {
                *cell = *code;
                carried += 1;
            }
        }
    }

    tracing::debug!(
        from = %old.month,
        to = %month,
        members = fresh.members.len(),
        carried,
        "merged roster grid"
    );
    Ok(fresh)
}

pub(super) fn set_cell(
    grid: &CalendarGrid,
    row: usize,
    day_index: usize,
    code: ShiftCode,
) -> CalendarGrid {
    let mut next = grid.clone();
    next.cells[row][day_index] = code;
    next
}

/// Remplace toute la ligne d'un membre ; les autres lignes sont copiées telles quelles.
pub(super) fn replace_row(grid: &CalendarGrid, row: usize, codes: Vec<ShiftCode>) -> CalendarGrid {
    let mut next = grid.clone();
    next.cells[row] = codes;
    next
}
