use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::{Heatmap, QuickStats, load_attendance};
use crate::db::documents::SqliteDocumentStore;
use crate::errors::AppResult;
use crate::models::month_key::MonthKey;
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::formatting::bold;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analytics {
        user,
        gym,
        month,
        no_color,
    } = cmd
    {
        let username = cfg.resolve_user(user)?;
        let gym = super::validate_gym(gym)?;
        let month: MonthKey = match month {
            Some(m) => m.parse()?,
            None => MonthKey::current(),
        };

        let pool = super::open_db(cfg)?;
        let store = SqliteDocumentStore::new(&pool.conn);
        let data = load_attendance(&store, &username, gym);

        let days = data.days_in(&month);
        let stats = QuickStats::compute(days, date::today(), cfg.session_minutes);

        header(format!("Attendance Analytics: {} at {}", username, gym));
        println!(
            "{}  {}    {}  {}    {}  {}",
            bold("Weekly Visits"),
            stats.weekly_visits,
            bold("Total Minutes"),
            stats.total_minutes,
            bold("Active Days"),
            stats.active_days
        );
        println!();

        print!("{}", Heatmap::build(month, days).render(!no_color));
        println!();
        println!("< Prev: {}    Next: {} >", month.prev(), month.next());
    }

    Ok(())
}
