use std::io::{self, BufRead, Write};

use chrono::Duration;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::quotes::random_quote;
use crate::core::session::{AttendanceSession, MAX_MIN_INTERVAL_SECS, ScanOutcome};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, quote, warning_line};
use crate::utils::colors::colorize_kind;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Scan {
        user,
        gym,
        count,
        min_interval,
    } = cmd
    {
        let username = cfg.resolve_user(user)?;
        let gym = super::validate_gym(gym)?;
        let interval = min_interval.unwrap_or(cfg.min_scan_interval_secs);

        let mut session =
            AttendanceSession::new(username, gym).with_min_interval(scan_interval(interval)?);

        header(format!(
            "Check-in at {} as {}",
            session.gym_id(),
            session.username()
        ));
        quote(random_quote());
        println!();

        let mut out = io::stdout().lock();
        match count {
            Some(n) => {
                for _ in 0..*n {
                    let outcome = session.submit_scan();
                    print_outcome(&mut out, &outcome)?;
                }
            }
            None => {
                writeln!(out, "[Enter]/s = scan, l = show log, q = quit")?;
                run_session(&mut session, io::stdin().lock(), &mut out)?;
            }
        }

        print_summary(&mut out, &session)?;
        drop(out);

        println!();
        quote(random_quote());
    }

    Ok(())
}

/// Guard interval from seconds, rejecting values outside `0..=MAX_MIN_INTERVAL_SECS`.
pub fn scan_interval(secs: i64) -> AppResult<Duration> {
    if !(0..=MAX_MIN_INTERVAL_SECS).contains(&secs) {
        return Err(AppError::InvalidInterval(secs, MAX_MIN_INTERVAL_SECS));
    }
    Duration::try_seconds(secs).ok_or(AppError::InvalidInterval(secs, MAX_MIN_INTERVAL_SECS))
}

/// Drive a session from line-based input until `q` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut AttendanceSession,
    input: R,
    out: &mut W,
) -> AppResult<()> {
    for line in input.lines() {
        let line = line?;
        match line.trim().to_lowercase().as_str() {
            "" | "s" | "scan" => {
                let outcome = session.submit_scan();
                print_outcome(out, &outcome)?;
            }
            "l" | "log" => print_log(out, session)?,
            "q" | "quit" | "back" => break,
            other => writeln!(out, "Unknown command '{}'", other)?,
        }
    }
    Ok(())
}

pub fn print_outcome<W: Write>(out: &mut W, outcome: &ScanOutcome) -> AppResult<()> {
    match outcome {
        ScanOutcome::Recorded(ev) => {
            let label = colorize_kind(ev.kind.label(), ev.kind.is_entry());
            writeln!(out, "{} logged at {}", label, ev.get_date_time())?;
        }
        ScanOutcome::Debounced { last, retry_after } => {
            writeln!(
                out,
                "{}",
                warning_line(format!(
                    "Scan ignored: last {} was at {}, retry in {}s",
                    last.kind.as_str(),
                    last.time_str(),
                    retry_after.num_seconds().max(1)
                ))
            )?;
        }
    }
    Ok(())
}

fn print_log<W: Write>(out: &mut W, session: &AttendanceSession) -> AppResult<()> {
    if session.log().is_empty() {
        writeln!(out, "No scans yet.")?;
        return Ok(());
    }
    for (i, ev) in session.log().iter().enumerate() {
        writeln!(
            out,
            "{:>3}. {} {}",
            i + 1,
            ev.get_date_time(),
            colorize_kind(ev.kind.as_str(), ev.kind.is_entry())
        )?;
    }
    Ok(())
}

fn print_summary<W: Write>(out: &mut W, session: &AttendanceSession) -> AppResult<()> {
    writeln!(out)?;
    writeln!(out, "Events logged: {}", session.log().len())?;

    let visits = session.visits();
    if visits.is_empty() {
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("#", 3),
        Column::new("ENTRY", 19),
        Column::new("EXIT", 19),
        Column::new("DURATION", 9),
    ]);

    for (i, v) in visits.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            v.entry.get_date_time(),
            v.exit
                .map(|e| e.get_date_time())
                .unwrap_or_else(|| "--".to_string()),
            v.duration_minutes()
                .map(mins2readable)
                .unwrap_or_else(|| "open".to_string()),
        ]);
    }

    write!(out, "{}", table.render())?;
    writeln!(
        out,
        "Status: {}",
        if session.is_checked_in() {
            "checked in"
        } else {
            "checked out"
        }
    )?;
    Ok(())
}
