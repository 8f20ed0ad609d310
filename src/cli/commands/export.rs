use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::{document_key, load_attendance};
use crate::db::documents::SqliteDocumentStore;
use crate::db::log;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::month_key::MonthKey;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        user,
        gym,
        format,
        file,
        month,
        force,
    } = cmd
    {
        let username = cfg.resolve_user(user)?;
        let gym = super::validate_gym(gym)?;
        let month: Option<MonthKey> = month.as_deref().map(str::parse::<MonthKey>).transpose()?;

        let pool = super::open_db(cfg)?;
        let store = SqliteDocumentStore::new(&pool.conn);
        let data = load_attendance(&store, &username, gym);

        let rows = ExportLogic::rows(&data, &username, gym, month);
        let path = expand_tilde(file);
        let written = ExportLogic::export(&rows, *format, &path, *force)?;

        if written > 0 {
            log::audit_or_warn(
                &pool.conn,
                "export",
                &document_key(&username, gym),
                &format!(
                    "Exported {} visits as {} to {}",
                    written,
                    format.as_str(),
                    path.display()
                ),
            );
        }
    }

    Ok(())
}
