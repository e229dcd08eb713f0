use crate::grid::CalendarGrid;
use crate::model::MemberId;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import de membres depuis CSV : header `name`, une ligne par membre.
///
/// Les doublons sont laissés à [`CalendarGrid::create`] qui les refuse.
pub fn import_members_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<MemberId>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid member row {} (empty name)", line + 2);
        }
        out.push(MemberId::new(name));
    }
    Ok(out)
}

/// Export CSV de la grille, même disposition que la feuille XLSX :
/// `Team Member,1-Jan,...` puis `Day,Wed,...` puis une ligne par membre.
pub fn export_grid_csv<P: AsRef<Path>>(path: P, grid: &CalendarGrid) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_path(path)?;

    let mut header = vec!["Team Member".to_string()];
    header.extend(grid.days().iter().map(|d| d.label()));
    w.write_record(&header)?;

    let mut weekdays = vec!["Day".to_string()];
    weekdays.extend(grid.days().iter().map(|d| d.weekday_abbrev()));
    w.write_record(&weekdays)?;

    for (member, codes) in grid.rows() {
        let mut record = vec![member.as_str()];
        record.extend(codes.iter().map(|c| c.as_str()));
        w.write_record(&record)?;
    }
    w.flush()?;
    Ok(())
}

/// Export JSON de la grille (jolie mise en forme)
pub fn export_grid_json<P: AsRef<Path>>(path: P, grid: &CalendarGrid) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(grid)?;
    fs::write(path, s)?;
    Ok(())
}
