//! Export de la grille en classeur OpenXML (`.xlsx`), une feuille `Roster`.

mod layout;
mod style;

pub use layout::{plan_sheet, PlannedCell, SheetPlan};
pub use style::{fill_for_value, CellStyle, Fill};

use crate::grid::{CalendarGrid, RosterError};
use crate::model::YearMonth;
use rust_xlsxwriter::Workbook;

pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Options de mise en page de l'export.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub sheet_name: String,
    /// Cellule (0, 0)
    pub member_header: String,
    /// Cellule (1, 0)
    pub day_header: String,
    pub member_column_min_width: usize,
    pub day_column_min_width: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Roster".to_string(),
            member_header: "Team Member".to_string(),
            day_header: "Day".to_string(),
            member_column_min_width: 15,
            day_column_min_width: 10,
        }
    }
}

/// Fichier prêt à être téléchargé/écrit.
#[derive(Debug, Clone)]
pub struct RosterExport {
    pub file_name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// `SRE_Shift_Roster_{Mois}_{Année}.xlsx`
pub fn suggested_file_name(month: YearMonth) -> String {
    format!("SRE_Shift_Roster_{}_{}.xlsx", month.full_name(), month.year())
}

/// Export avec les options par défaut.
pub fn export(grid: &CalendarGrid) -> Result<Vec<u8>, RosterError> {
    export_with(grid, &ExportOptions::default())
}

pub fn export_with(grid: &CalendarGrid, opts: &ExportOptions) -> Result<Vec<u8>, RosterError> {
    let plan = plan_sheet(grid, opts)?;
    render_xlsx(&plan)
}

/// Export complet : octets, nom de fichier suggéré et type MIME.
pub fn export_file(grid: &CalendarGrid, opts: &ExportOptions) -> Result<RosterExport, RosterError> {
    let bytes = export_with(grid, opts)?;
    Ok(RosterExport {
        file_name: suggested_file_name(grid.month()),
        mime: XLSX_MIME,
        bytes,
    })
}

/// Écrit un plan de feuille dans un classeur et renvoie les octets.
pub fn render_xlsx(plan: &SheetPlan) -> Result<Vec<u8>, RosterError> {
    let formats = style::Formats::new();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&plan.sheet_name)?;

    for (row_idx, row) in plan.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            worksheet.write_string_with_format(
                row_idx as u32,
                col_idx as u16,
                &cell.text,
                formats.get(cell.style),
            )?;
        }
    }

    for (col_idx, width) in plan.column_widths.iter().enumerate() {
        worksheet.set_column_width(col_idx as u16, *width)?;
    }

    let bytes = workbook.save_to_buffer()?;
    tracing::debug!(
        rows = plan.row_count(),
        columns = plan.column_count(),
        bytes = bytes.len(),
        "rendered roster workbook"
    );
    Ok(bytes)
}
