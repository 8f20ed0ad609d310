use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
    println!(
        "{}• Documents:{} {}{}{}",
        CYAN, RESET, GREEN, count, RESET
    );

    let mut stmt = pool.conn.prepare(
        "SELECT collection, COUNT(*) FROM documents GROUP BY collection ORDER BY collection",
    )?;
    let per_collection = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
    })?;
    for entry in per_collection {
        let (collection, n) = entry?;
        println!("    {:<12} {}", collection, n);
    }

    let last_update: Option<String> = pool
        .conn
        .query_row(
            "SELECT updated_at FROM documents ORDER BY updated_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!(
        "{}• Last update:{} {}",
        CYAN,
        RESET,
        last_update.unwrap_or_else(|| format!("{GREY}--{RESET}"))
    );

    println!();
    Ok(())
}
