use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::cli::Format;
use crate::clock::ClockTime;
use crate::model::*;

const BAR_WIDTH: usize = 20;

fn colorize_period(label: &PeriodLabel) -> ColoredString {
    match label {
        PeriodLabel::Tahajjud => label.as_str().magenta(),
        PeriodLabel::Fajr => label.as_str().cyan(),
        PeriodLabel::Sunrise => label.as_str().yellow(),
        PeriodLabel::Dhuhr | PeriodLabel::Asr => label.as_str().green(),
        PeriodLabel::Maghrib => label.as_str().red(),
        PeriodLabel::Isha => label.as_str().blue(),
    }
}

fn clock(t: ClockTime, twelve_hour: bool) -> String {
    if twelve_hour {
        t.to_twelve_hour()
    } else {
        t.to_string()
    }
}

fn bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!(
        "{}{}",
        "\u{2588}".repeat(filled),
        "\u{2591}".repeat(width - filled)
    )
}

/// `Dhaka · Friday, 16 Oct 2026 · 4 Jumada al-awwal 1448 Hijri`, skipping missing parts.
fn context_line(location: Option<&str>, calendar: &CalendarInfo) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();
    if let Some(name) = location {
        parts.push(name.to_string());
    }
    if let Some(ref readable) = calendar.readable {
        match calendar.weekday() {
            Some(day) => parts.push(format!("{}, {}", day, readable)),
            None => parts.push(readable.clone()),
        }
    }
    if let Some(ref hijri) = calendar.hijri {
        let text = hijri.display();
        if !text.is_empty() {
            parts.push(format!("{} Hijri", text));
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" \u{00b7} "))
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_status(report: &StatusReport, format: &Format, twelve_hour: bool) -> Result<()> {
    match format {
        Format::Text => {
            let status = &report.status;
            println!(
                "{} {}",
                colorize_period(&status.period).bold(),
                "(current period)".dimmed()
            );
            println!(
                "  {} - {}",
                clock(status.start, twelve_hour),
                clock(status.end, twelve_hour)
            );
            println!("  Remaining  {}", status.countdown.bold());
            println!(
                "  Progress   {} {:.0}%",
                bar(status.progress, BAR_WIDTH).green(),
                status.progress
            );
            if let Some(line) = context_line(report.location, report.calendar) {
                println!("  {}", line.dimmed());
            }
            Ok(())
        }
        Format::Json => print_json(report),
    }
}

pub fn print_times(table: &DayTable, format: &Format, twelve_hour: bool) -> Result<()> {
    match format {
        Format::Text => {
            println!("{}", "Prayer times".bold().underline());
            if let Some(line) = context_line(table.location, table.calendar) {
                println!("{}", line.dimmed());
            }
            for row in &table.rows {
                let range = format!(
                    "{} - {}",
                    clock(row.start, twelve_hour),
                    clock(row.end, twelve_hour)
                );
                if row.label == table.current {
                    println!(
                        "{} {:9} {}",
                        ">".green().bold(),
                        colorize_period(&row.label).bold(),
                        range.bold()
                    );
                } else {
                    println!("  {:9} {}", row.label.as_str(), range);
                }
            }
            Ok(())
        }
        Format::Json => print_json(table),
    }
}

pub fn print_vigil(window: &VigilWindow, format: &Format, twelve_hour: bool) -> Result<()> {
    match format {
        Format::Text => {
            println!(
                "{} {} - {}",
                colorize_period(&PeriodLabel::Tahajjud).bold(),
                clock(window.start, twelve_hour),
                clock(window.end, twelve_hour)
            );
            Ok(())
        }
        Format::Json => print_json(window),
    }
}

pub fn print_nearest(result: &NearestLocation, format: &Format) -> Result<()> {
    match format {
        Format::Text => {
            println!(
                "{} ({:.1} km)",
                result.location.name.bold(),
                result.distance_km
            );
            Ok(())
        }
        Format::Json => print_json(result),
    }
}
