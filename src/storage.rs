use crate::export::{self, ExportOptions, RosterExport};
use crate::grid::{CalendarGrid, RosterError};
use crate::model::{MemberId, YearMonth};
use crate::pattern;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// État courant d'un planning : le mois et la grille (qui porte la liste des
/// membres). Chaque opération remplace la grille ; en cas d'erreur la session
/// reste inchangée.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    grid: CalendarGrid,
}

impl Session {
    pub fn new(month: YearMonth) -> Self {
        Self {
            grid: CalendarGrid::empty(month),
        }
    }

    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    pub fn month(&self) -> YearMonth {
        self.grid.month()
    }

    pub fn members(&self) -> &[MemberId] {
        self.grid.members()
    }

    pub fn select_month(&mut self, month: YearMonth) -> Result<(), RosterError> {
        self.grid = CalendarGrid::merge(&self.grid, self.grid.members(), month)?;
        Ok(())
    }

    /// Ajoute un membre en fin de liste ; le nom est épuré des blancs.
    pub fn add_member(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyMemberName);
        }
        let mut members = self.grid.members().to_vec();
        members.push(MemberId::new(name));
        self.grid = CalendarGrid::merge(&self.grid, &members, self.grid.month())?;
        Ok(())
    }

    pub fn remove_member(&mut self, name: &str) -> Result<(), RosterError> {
        if !self.grid.contains_member(name) {
            return Err(RosterError::UnknownMember(name.to_string()));
        }
        let members: Vec<MemberId> = self
            .grid
            .members()
            .iter()
            .filter(|m| m.as_str() != name)
            .cloned()
            .collect();
        self.grid = CalendarGrid::merge(&self.grid, &members, self.grid.month())?;
        Ok(())
    }

    pub fn set_cell(&mut self, member: &str, day: &str, code: &str) -> Result<(), RosterError> {
        self.grid = self.grid.set_cell(member, day, code)?;
        Ok(())
    }

    pub fn apply_default(
        &mut self,
        member: &str,
        default_shift: &str,
        weekend_pattern: &str,
    ) -> Result<(), RosterError> {
        self.grid = pattern::apply_default(&self.grid, member, default_shift, weekend_pattern)?;
        Ok(())
    }

    pub fn export(&self, opts: &ExportOptions) -> Result<RosterExport, RosterError> {
        export::export_file(&self.grid, opts)
    }
}

pub trait Storage {
    /// Charge une session depuis un support.
    fn load(&self) -> anyhow::Result<Session>;
    /// Sauvegarde de manière atomique.
    fn save(&self, session: &Session) -> anyhow::Result<()>;
}

pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        Ok(Self { path: path.as_ref().to_path_buf() })
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> anyhow::Result<Session> {
        let data = fs::read(&self.path).with_context(|| format!("reading {}", self.path.display()))?;
        let session: Session = serde_json::from_slice(&data)
            .with_context(|| format!("parsing {}", self.path.display()))?;
        Ok(session)
    }

    fn save(&self, session: &Session) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(session)?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
        tmp.write_all(&json)?;
        tmp.flush()?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).with_context(|| "atomic rename")?;
        Ok(())
    }
}
