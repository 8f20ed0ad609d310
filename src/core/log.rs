use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

const MAX_OP_WIDTH: usize = 60;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

fn color_for_operation(op: &str) -> Colour {
    match op {
        "visit" => Colour::Green,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        "config" => Colour::Yellow,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| op_target(&e.operation, &e.target).len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for e in &entries {
            let color = color_for_operation(&e.operation);

            let mut colored = color.paint(e.operation.as_str()).to_string();
            if !e.target.is_empty() {
                colored.push_str(&format!(" ({})", e.target));
            }

            let visible = strip_ansi(&colored);
            let shown = if visible.chars().count() > MAX_OP_WIDTH {
                let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
                s.push_str("...");
                match s.split_once(' ') {
                    Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                    None => color.paint(s).to_string(),
                }
            } else {
                colored
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&shown).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                e.id,
                e.date,
                shown,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

fn op_target(operation: &str, target: &str) -> String {
    if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    }
}
