use super::model::{VisitExport, get_headers};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

pub(crate) fn write_csv(path: &Path, rows: &[VisitExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for r in rows {
        let month = r.month.to_string();
        wtr.write_record([&r.user, &r.gym, &month, &r.date, &r.weekday])?;
    }

    wtr.flush()?;
    Ok(())
}
