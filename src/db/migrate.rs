use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};
use tracing::debug;

/// Ensure that the `log` table exists; applied migrations are recorded there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240301_0001_create_documents",
        description: "Created documents table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS documents (
            collection  TEXT NOT NULL,
            key         TEXT NOT NULL,
            body        TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            PRIMARY KEY (collection, key)
        );
        "#,
    },
    Migration {
        version: "20240315_0002_index_documents_updated",
        description: "Indexed documents by update time",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_documents_updated ON documents(collection, updated_at);
        "#,
    },
];

/// Run all pending migrations. Safe to call on every start.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            debug!(version = m.version, "migration already applied");
            continue;
        }

        conn.execute_batch(m.sql)?;
        mark_applied(conn, m.version, m.description)?;
        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}

/// Versions recorded as applied, oldest first.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}
