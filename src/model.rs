use crate::grid::RosterError;
use chrono::{Datelike, Month, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Code de poste d'une cellule (ensemble fermé).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftCode {
    #[default]
    #[serde(rename = "SA")]
    Sa,
    #[serde(rename = "SB")]
    Sb,
    #[serde(rename = "SC")]
    Sc,
    #[serde(rename = "WFH")]
    Wfh,
    Leave,
    /// Week off
    #[serde(rename = "WO")]
    Wo,
    /// Non planifié
    #[serde(rename = "-")]
    Unscheduled,
}

impl ShiftCode {
    pub const ALL: [ShiftCode; 7] = [
        ShiftCode::Sa,
        ShiftCode::Sb,
        ShiftCode::Sc,
        ShiftCode::Wfh,
        ShiftCode::Leave,
        ShiftCode::Wo,
        ShiftCode::Unscheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftCode::Sa => "SA",
            ShiftCode::Sb => "SB",
            ShiftCode::Sc => "SC",
            ShiftCode::Wfh => "WFH",
            ShiftCode::Leave => "Leave",
            ShiftCode::Wo => "WO",
            ShiftCode::Unscheduled => "-",
        }
    }
}

impl fmt::Display for ShiftCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShiftCode {
    type Err = RosterError;

    /// Sensible à la casse : `wo` n'est pas `WO`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShiftCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| RosterError::InvalidShiftCode(s.to_string()))
    }
}

/// Identifiant fort pour un membre d'équipe (son nom affiché).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MemberId(String);

impl MemberId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Mois calendaire (grégorien proleptique), sérialisé en `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    pub fn new(year: i32, month: u32) -> Result<Self, RosterError> {
        if !(1..=12).contains(&month) || !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(RosterError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // bornes validées dans `new`
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        match NaiveDate::from_ymd_opt(next_year, next_month, 1) {
            Some(next) => next.signed_duration_since(self.first_day()).num_days() as u32,
            None => 31,
        }
    }

    /// Nom complet anglais (`January`), indépendant de la locale.
    pub fn full_name(&self) -> &'static str {
        Month::try_from(self.month as u8)
            .map(|m| m.name())
            .unwrap_or("Unknown")
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = RosterError;

    /// Format attendu : `YYYY-MM` (ex. `2025-01`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RosterError::MonthFormat(s.to_string());
        let (y, m) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = y.parse().map_err(|_| invalid())?;
        let month: u32 = m.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = RosterError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Jour du calendrier, dérivé uniquement de sa date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    date: NaiveDate,
}

impl CalendarDay {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day_of_month(&self) -> u32 {
        self.date.day()
    }

    /// `Jan`..`Dec` (chrono, sans locale).
    pub fn month_abbrev(&self) -> String {
        self.date.format("%b").to_string()
    }

    pub fn weekday(&self) -> Weekday {
        self.date.weekday()
    }

    pub fn weekday_abbrev(&self) -> String {
        self.date.weekday().to_string()
    }

    /// Libellé de colonne `{jour}-{mois}` sans zéro initial (`4-Jan`).
    pub fn label(&self) -> String {
        let mut buf = itoa::Buffer::new();
        let day = buf.format(self.date.day());
        let mut out = String::with_capacity(day.len() + 4);
        out.push_str(day);
        out.push('-');
        out.push_str(&self.month_abbrev());
        out
    }

    /// Clé de fusion : (jour du mois, abréviation du mois).
    pub(crate) fn label_key(&self) -> (u32, String) {
        (self.day_of_month(), self.month_abbrev())
    }
}
