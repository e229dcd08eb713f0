use super::style::{fill_for_value, CellStyle};
use super::ExportOptions;
use crate::grid::{CalendarGrid, RosterError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCell {
    pub text: String,
    pub style: CellStyle,
}

impl PlannedCell {
    fn header<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            style: CellStyle::Header,
        }
    }

    fn data(text: &str) -> Self {
        Self {
            text: text.to_string(),
            style: CellStyle::Data(fill_for_value(text)),
        }
    }
}

/// Plan complet de la feuille, indépendant du format de fichier.
///
/// Ligne 0 : libellés `jour-mois` ; ligne 1 : jours de semaine ; puis une
/// ligne par membre. Colonne 0 : libellés de ligne.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub sheet_name: String,
    pub rows: Vec<Vec<PlannedCell>>,
    pub column_widths: Vec<f64>,
}

impl SheetPlan {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&PlannedCell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Colonne dont l'en-tête (ligne 0) vaut `label`.
    pub fn column_of(&self, label: &str) -> Option<usize> {
        self.rows
            .first()
            .and_then(|header| header.iter().skip(1).position(|c| c.text == label))
            .map(|idx| idx + 1)
    }

    /// Rendu texte (une ligne par rangée, cellules séparées par `|`).
    pub fn to_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|c| c.text.as_str())
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn plan_sheet(grid: &CalendarGrid, opts: &ExportOptions) -> Result<SheetPlan, RosterError> {
    if grid.is_empty() {
        return Err(RosterError::EmptyGrid);
    }

    let days = grid.days();
    let labels: Vec<String> = days.iter().map(|d| d.label()).collect();

    let mut rows = Vec::with_capacity(grid.members().len() + 2);

    let mut date_row = Vec::with_capacity(days.len() + 1);
    date_row.push(PlannedCell::header(opts.member_header.as_str()));
    date_row.extend(labels.iter().map(|l| PlannedCell::header(l.as_str())));
    rows.push(date_row);

    let mut weekday_row = Vec::with_capacity(days.len() + 1);
    weekday_row.push(PlannedCell::header(opts.day_header.as_str()));
    weekday_row.extend(days.iter().map(|d| PlannedCell::header(d.weekday_abbrev())));
    rows.push(weekday_row);

    for (member, codes) in grid.rows() {
        let mut row = Vec::with_capacity(codes.len() + 1);
        row.push(PlannedCell::header(member.as_str()));
        row.extend(codes.iter().map(|code| PlannedCell::data(code.as_str())));
        rows.push(row);
    }

    let longest_member = grid
        .members()
        .iter()
        .map(|m| m.as_str().chars().count())
        .max()
        .unwrap_or(0);
    let mut column_widths = Vec::with_capacity(labels.len() + 1);
    column_widths.push((longest_member + 2).max(opts.member_column_min_width) as f64);
    column_widths.extend(
        labels
            .iter()
            .map(|l| (l.chars().count() + 2).max(opts.day_column_min_width) as f64),
    );

    Ok(SheetPlan {
        sheet_name: opts.sheet_name.clone(),
        rows,
        column_widths,
    })
}
