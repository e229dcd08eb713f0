#![forbid(unsafe_code)]
//! Shift roster : moteur de planning mensuel d'équipe (sans BD).
//!
//! - Grille membres × jours d'un mois, une valeur immuable.
//! - Motifs par défaut (poste + paire de jours de repos) par membre.
//! - Export XLSX stylé (une feuille `Roster`), CSV/JSON en annexe.
//! - Session locale persistée en JSON pour la CLI.

pub mod export;
pub mod grid;
pub mod io;
pub mod model;
pub mod pattern;
pub mod storage;

pub use export::{
    export, export_file, export_with, fill_for_value, plan_sheet, suggested_file_name, CellStyle,
    ExportOptions, Fill, RosterExport, SheetPlan, XLSX_MIME,
};
pub use grid::{CalendarGrid, RosterError};
pub use model::{CalendarDay, MemberId, ShiftCode, YearMonth};
pub use pattern::{apply_default, apply_pattern, DefaultShift, WeekendPattern};
pub use storage::{JsonStorage, Session, Storage};
