use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::{document_key, record_visit};
use crate::db::documents::SqliteDocumentStore;
use crate::db::log;
use crate::errors::{AppError, AppResult};
use crate::models::month_key::MonthKey;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Visit {
        user,
        gym,
        date: raw_date,
    } = cmd
    {
        let username = cfg.resolve_user(user)?;
        let gym = super::validate_gym(gym)?;
        let day =
            date::parse_date(raw_date).ok_or_else(|| AppError::InvalidDate(raw_date.clone()))?;

        if day > date::today() {
            return Err(AppError::InvalidDate(format!(
                "{} is in the future",
                raw_date
            )));
        }

        let pool = super::open_db(cfg)?;
        let store = SqliteDocumentStore::new(&pool.conn);
        let data = record_visit(&store, &username, gym, day)?;

        let month = MonthKey::from_date(day);
        log::audit_or_warn(
            &pool.conn,
            "visit",
            &document_key(&username, gym),
            &format!("Visit recorded on {}", day),
        );

        success(format!(
            "Visit on {} recorded for {} at {} ({} this month).",
            day,
            username,
            gym,
            data.days_in(&month).len()
        ));
    }

    Ok(())
}
