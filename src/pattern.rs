//! Application d'un motif par défaut sur la ligne d'un membre.

use crate::grid::{CalendarGrid, RosterError};
use crate::model::ShiftCode;
use chrono::Weekday;
use std::fmt;
use std::str::FromStr;

/// Poste utilisable comme valeur par défaut (`Leave`, `WO` et `-` sont réservés
/// à la saisie manuelle ou au marquage automatique des repos).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultShift {
    Sa,
    Sb,
    Sc,
    Wfh,
}

impl DefaultShift {
    pub fn code(&self) -> ShiftCode {
        match self {
            DefaultShift::Sa => ShiftCode::Sa,
            DefaultShift::Sb => ShiftCode::Sb,
            DefaultShift::Sc => ShiftCode::Sc,
            DefaultShift::Wfh => ShiftCode::Wfh,
        }
    }
}

impl TryFrom<ShiftCode> for DefaultShift {
    type Error = RosterError;

    fn try_from(code: ShiftCode) -> Result<Self, Self::Error> {
        match code {
            ShiftCode::Sa => Ok(DefaultShift::Sa),
            ShiftCode::Sb => Ok(DefaultShift::Sb),
            ShiftCode::Sc => Ok(DefaultShift::Sc),
            ShiftCode::Wfh => Ok(DefaultShift::Wfh),
            other => Err(RosterError::InvalidShiftCode(other.as_str().to_string())),
        }
    }
}

impl FromStr for DefaultShift {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<ShiftCode>()?.try_into()
    }
}

/// Paire de jours de repos (`WO`). Les trois paires sont opaques : aucune
/// n'est traitée comme « le » week-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeekendPattern {
    SatSun,
    SunMon,
    FriSat,
}

impl WeekendPattern {
    pub const ALL: [WeekendPattern; 3] = [
        WeekendPattern::SatSun,
        WeekendPattern::SunMon,
        WeekendPattern::FriSat,
    ];

    pub fn days(&self) -> [Weekday; 2] {
        match self {
            WeekendPattern::SatSun => [Weekday::Sat, Weekday::Sun],
            WeekendPattern::SunMon => [Weekday::Sun, Weekday::Mon],
            WeekendPattern::FriSat => [Weekday::Fri, Weekday::Sat],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeekendPattern::SatSun => "Sat-Sun",
            WeekendPattern::SunMon => "Sun-Mon",
            WeekendPattern::FriSat => "Fri-Sat",
        }
    }

    pub fn is_off(&self, weekday: Weekday) -> bool {
        self.days().contains(&weekday)
    }
}

impl fmt::Display for WeekendPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeekendPattern {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeekendPattern::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| RosterError::InvalidWeekendPattern(s.to_string()))
    }
}

/// Réécrit toute la ligne de `member` : `WO` les jours du motif, `default_shift`
/// ailleurs. Ne tient pas compte des saisies précédentes.
pub fn apply_default(
    grid: &CalendarGrid,
    member: &str,
    default_shift: &str,
    weekend_pattern: &str,
) -> Result<CalendarGrid, RosterError> {
    // membre d'abord : un membre inconnu prime sur un paramètre invalide
    grid.member_index(member)?;
    let shift: DefaultShift = default_shift.parse()?;
    let pattern: WeekendPattern = weekend_pattern.parse()?;
    apply_pattern(grid, member, shift, pattern)
}

/// Variante typée de [`apply_default`].
pub fn apply_pattern(
    grid: &CalendarGrid,
    member: &str,
    shift: DefaultShift,
    pattern: WeekendPattern,
) -> Result<CalendarGrid, RosterError> {
    let row = grid.member_index(member)?;
    let codes: Vec<ShiftCode> = grid
        .days()
        .iter()
        .map(|day| {
            if pattern.is_off(day.weekday()) {
                ShiftCode::Wo
            } else {
                shift.code()
            }
        })
        .collect();

    let off = codes.iter().filter(|c| **c == ShiftCode::Wo).count();
    tracing::debug!(member, shift = %shift.code(), %pattern, off, "applied default pattern");
    Ok(grid.with_row(row, codes))
}
