use std::io::{self, BufRead, Write};

use crate::cli::parser::Commands;
use crate::core::calendar::{CalendarPicker, CalendarView, DayCell, PickerOutcome};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{colorize_enabled, highlight};

const YEARS_PER_ROW: usize = 10;
const MONTHS_PER_ROW: usize = 3;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Calendar = cmd {
        let mut picker = CalendarPicker::new();
        let mut out = io::stdout().lock();

        writeln!(out, "number = select, b = back, q = cancel")?;
        let outcome = run_picker(&mut picker, io::stdin().lock(), &mut out)?;
        drop(out);

        match outcome {
            PickerOutcome::Selected(date) => success(format!("Selected date: {}", date.formatted())),
            PickerOutcome::Dismissed | PickerOutcome::Open => info("No date selected."),
        }
    }

    Ok(())
}

/// Drive the picker from line-based input. End of input dismisses it.
pub fn run_picker<R: BufRead, W: Write>(
    picker: &mut CalendarPicker,
    input: R,
    out: &mut W,
) -> AppResult<PickerOutcome> {
    render(picker, out)?;

    for line in input.lines() {
        let line = line?;
        let cmd = line.trim().to_lowercase();

        match cmd.as_str() {
            "b" | "back" => picker.back(),
            "q" | "cancel" => picker.dismiss(),
            other => match other.parse::<i64>() {
                Ok(n) => apply_number(picker, n),
                Err(_) => writeln!(out, "Unknown command '{}'", other)?,
            },
        }

        if !picker.is_open() {
            return Ok(picker.outcome());
        }
        render(picker, out)?;
    }

    picker.dismiss();
    Ok(picker.outcome())
}

/// Numbers are years, 1-based months or days depending on the view.
fn apply_number(picker: &mut CalendarPicker, n: i64) {
    match picker.view() {
        CalendarView::Year => {
            if let Ok(year) = i32::try_from(n) {
                picker.select_year(year);
            }
        }
        CalendarView::Month => {
            if (1..=12).contains(&n) {
                picker.select_month((n - 1) as u32);
            }
        }
        CalendarView::Day => {
            if let Ok(day) = u32::try_from(n) {
                picker.select_day(day);
            }
        }
    }
}

pub fn render<W: Write>(picker: &CalendarPicker, out: &mut W) -> AppResult<()> {
    writeln!(out, "\n< {}", picker.title())?;

    match picker.view() {
        CalendarView::Year => {
            for row in picker.year_cells().chunks(YEARS_PER_ROW) {
                let line: Vec<String> = row
                    .iter()
                    .map(|y| {
                        if *y == picker.year() {
                            highlight(&y.to_string())
                        } else {
                            format!(" {} ", y)
                        }
                    })
                    .collect();
                writeln!(out, "{}", line.join(" "))?;
            }
        }
        CalendarView::Month => {
            // future months are not offered
            let enabled: Vec<_> = picker.month_cells().into_iter().filter(|c| c.enabled).collect();
            for row in enabled.chunks(MONTHS_PER_ROW) {
                let line: Vec<String> = row
                    .iter()
                    .map(|c| {
                        let label = format!("{:>2} {}", c.index + 1, c.name);
                        if c.index == picker.month() {
                            highlight(&label)
                        } else {
                            format!(" {} ", label)
                        }
                    })
                    .collect();
                writeln!(out, "{}", line.join("  "))?;
            }
        }
        CalendarView::Day => {
            let head: Vec<String> = picker
                .weekday_header()
                .iter()
                .map(|d| format!("{:>4}", d))
                .collect();
            writeln!(out, "{}", head.concat())?;

            let mut line = String::new();
            for (i, cell) in picker.day_cells().iter().enumerate() {
                match cell {
                    DayCell::Blank => line.push_str("    "),
                    DayCell::Day { day, enabled } => {
                        line.push_str("  ");
                        line.push_str(&colorize_enabled(&format!("{:>2}", day), *enabled));
                    }
                }
                if i % 7 == 6 {
                    writeln!(out, "{}", line)?;
                    line.clear();
                }
            }
            if !line.is_empty() {
                writeln!(out, "{}", line)?;
            }
        }
    }

    Ok(())
}
