use crate::errors::AppResult;
use chrono::Local;
use rusqlite::Connection;
use rusqlite::params;

/// Write an audit line into the `log` table.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Same as `audit`, but a failure only produces a warning.
pub fn audit_or_warn(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = audit(conn, operation, target, message) {
        crate::ui::messages::warning(format!("Failed to write internal log: {}", e));
    }
}

#[derive(Debug, Clone)]
pub struct LogRow {
    pub id: i64,
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

pub fn load_log(conn: &Connection) -> AppResult<Vec<LogRow>> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(LogRow {
            id: row.get(0)?,
            date: row.get(1)?,
            operation: row.get(2)?,
            target: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            message: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
