use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::success;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing gymcheck…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    log::audit_or_warn(
        &conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    );

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
