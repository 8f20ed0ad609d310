use super::model::VisitExport;
use crate::errors::AppResult;
use std::path::Path;

pub(crate) fn write_json(path: &Path, rows: &[VisitExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
