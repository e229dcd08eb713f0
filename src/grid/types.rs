use thiserror::Error;

/// Erreurs de validation du moteur de planning.
///
/// Toutes sont locales et synchrones : un appel en échec laisse la grille
/// précédente intacte.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("invalid month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid month {0:?}: expected YYYY-MM")]
    MonthFormat(String),
    #[error("team member name cannot be empty")]
    EmptyMemberName,
    #[error("duplicate team member: {0}")]
    DuplicateMember(String),
    #[error("unknown team member: {0}")]
    UnknownMember(String),
    #[error("unknown day: {0}")]
    UnknownDay(String),
    #[error("invalid shift code: {0}")]
    InvalidShiftCode(String),
    #[error("invalid weekend pattern: {0}")]
    InvalidWeekendPattern(String),
    #[error("cannot export an empty roster (no members or no days)")]
    EmptyGrid,
    #[error("malformed grid: {0}")]
    MalformedGrid(&'static str),
    #[error(transparent)]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
