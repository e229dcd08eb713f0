mod mutate;
mod types;
mod util;

pub use types::RosterError;

use crate::model::{CalendarDay, MemberId, ShiftCode, YearMonth};
use serde::{Deserialize, Serialize};

/// Grille membres × jours d'un mois.
///
/// C'est une valeur : chaque opération de modification renvoie une nouvelle
/// grille et laisse l'ancienne intacte. `cells` est totale sur
/// `members × days` par construction (une ligne par membre, une colonne par jour).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GridRecord", into = "GridRecord")]
pub struct CalendarGrid {
    month: YearMonth,
    members: Vec<MemberId>,
    days: Vec<CalendarDay>,
    cells: Vec<Vec<ShiftCode>>,
}

impl CalendarGrid {
    /// Crée la grille du mois, toutes les cellules à `SA`.
    pub fn create(month: YearMonth, members: &[MemberId]) -> Result<Self, RosterError> {
        util::ensure_unique(members)?;
        let days = util::build_days(month);
        let cells = vec![vec![ShiftCode::default(); days.len()]; members.len()];
        tracing::debug!(%month, members = members.len(), days = days.len(), "created roster grid");
        Ok(Self {
            month,
            members: members.to_vec(),
            days,
            cells,
        })
    }

    /// Grille sans membre (en attente du premier ajout).
    pub fn empty(month: YearMonth) -> Self {
        Self {
            month,
            members: Vec::new(),
            days: util::build_days(month),
            cells: Vec::new(),
        }
    }

    /// Régénère une grille pour `members`/`month` en reprenant les valeurs de
    /// `old` par libellé (membre + `jour-mois`), jamais par position.
    ///
    /// Un changement de mois change tous les libellés : rien n'est repris.
    pub fn merge(
        old: &CalendarGrid,
        members: &[MemberId],
        month: YearMonth,
    ) -> Result<Self, RosterError> {
        mutate::merge(old, members, month)
    }

    /// Modifie une cellule, le jour étant désigné par son libellé (`4-Jan`).
    pub fn set_cell(&self, member: &str, day: &str, code: &str) -> Result<Self, RosterError> {
        let row = self.member_index(member)?;
        let day_index = util::find_day_index(&self.days, day)
            .ok_or_else(|| RosterError::UnknownDay(day.to_string()))?;
        let code: ShiftCode = code.parse()?;
        Ok(mutate::set_cell(self, row, day_index, code))
    }

    /// Variante typée de [`CalendarGrid::set_cell`] : jour du mois (1-based).
    pub fn with_cell(
        &self,
        member: &str,
        day_of_month: u32,
        code: ShiftCode,
    ) -> Result<Self, RosterError> {
        let row = self.member_index(member)?;
        let day_index = self
            .day_index(day_of_month)
            .ok_or_else(|| RosterError::UnknownDay(day_of_month.to_string()))?;
        Ok(mutate::set_cell(self, row, day_index, code))
    }

    pub(crate) fn with_row(&self, row: usize, codes: Vec<ShiftCode>) -> Self {
        mutate::replace_row(self, row, codes)
    }

    pub(crate) fn member_index(&self, member: &str) -> Result<usize, RosterError> {
        util::find_member_index(&self.members, member)
            .ok_or_else(|| RosterError::UnknownMember(member.to_string()))
    }

    fn day_index(&self, day_of_month: u32) -> Option<usize> {
        self.days.iter().position(|d| d.day_of_month() == day_of_month)
    }

    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn members(&self) -> &[MemberId] {
        &self.members
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn contains_member(&self, member: &str) -> bool {
        util::find_member_index(&self.members, member).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty() || self.days.is_empty()
    }

    pub fn cell(&self, member: &str, day_of_month: u32) -> Option<ShiftCode> {
        let row = util::find_member_index(&self.members, member)?;
        let col = self.day_index(day_of_month)?;
        Some(self.cells[row][col])
    }

    /// Ligne complète d'un membre, dans l'ordre des jours.
    pub fn row(&self, member: &str) -> Option<&[ShiftCode]> {
        util::find_member_index(&self.members, member).map(|idx| self.cells[idx].as_slice())
    }

    /// Lignes dans l'ordre d'affichage des membres.
    pub fn rows(&self) -> impl Iterator<Item = (&MemberId, &[ShiftCode])> {
        self.members
            .iter()
            .zip(self.cells.iter().map(Vec::as_slice))
    }
}

/// Forme sérialisée d'une grille : les jours sont recalculés depuis le mois.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridRecord {
    month: YearMonth,
    members: Vec<MemberId>,
    rows: Vec<Vec<ShiftCode>>,
}

impl TryFrom<GridRecord> for CalendarGrid {
    type Error = RosterError;

    fn try_from(record: GridRecord) -> Result<Self, Self::Error> {
        let mut grid = CalendarGrid::create(record.month, &record.members)?;
        if record.rows.len() != grid.members.len() {
            return Err(RosterError::MalformedGrid("row count differs from member count"));
        }
        if record.rows.iter().any(|row| row.len() != grid.days.len()) {
            return Err(RosterError::MalformedGrid("row length differs from days in month"));
        }
        grid.cells = record.rows;
        Ok(grid)
    }
}

impl From<CalendarGrid> for GridRecord {
    fn from(grid: CalendarGrid) -> Self {
        Self {
            month: grid.month,
            members: grid.members,
            rows: grid.cells,
        }
    }
}
