use std::io::IsTerminal;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use time::PrimitiveDateTime;

use crate::cli::{Format, ScheduleArgs};
use crate::cmd::{load_schedule, parse_instant, resolve_now, twelve_hour};
use crate::config::Config;
use crate::model::{PeriodLabel, StatusReport};
use crate::output::print_status;
use crate::period::status_at;

const TICK: Duration = Duration::from_secs(1);
const POLL: Duration = Duration::from_millis(200);

/// Source of "now" for each refresh.
///
/// A fixed start instant advances by one second per tick so a replay is
/// reproducible; otherwise the local wall clock is read every tick.
enum Clock {
    Replay(PrimitiveDateTime),
    Wall,
}

impl Clock {
    fn instant(&self, tick: u64) -> Result<PrimitiveDateTime> {
        match self {
            Clock::Replay(start) => Ok(start.saturating_add(time::Duration::seconds(tick as i64))),
            Clock::Wall => resolve_now(None),
        }
    }
}

/// Remembers the last period seen so transitions can be reported once.
#[derive(Default)]
struct Transitions {
    last: Option<PeriodLabel>,
}

impl Transitions {
    fn observe(&mut self, period: PeriodLabel) -> Option<(PeriodLabel, PeriodLabel)> {
        let previous = self.last.replace(period)?;
        (previous != period).then_some((previous, period))
    }
}

/// Sleep for one tick, waking early if `running` is cleared.
fn wait_tick(running: &AtomicBool) {
    let mut waited = Duration::ZERO;
    while waited < TICK && running.load(Ordering::SeqCst) {
        std::thread::sleep(POLL);
        waited += POLL;
    }
}

/// Main watch command entry point.
pub fn cmd_watch(
    config: &Config,
    format: &Format,
    args: &ScheduleArgs,
    count: Option<u64>,
) -> Result<()> {
    let schedule = load_schedule(args, config)?;
    let clock = match args.at.as_deref() {
        Some(s) => Clock::Replay(parse_instant(s)?),
        None => Clock::Wall,
    };
    let twelve = twelve_hour(args, config);
    let location = config.selected_location().map(|l| l.name.as_str());
    let redraw = matches!(format, Format::Text) && std::io::stdout().is_terminal();

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .context("failed to set Ctrl+C handler")?;

    eprintln!("Watching prayer periods... (Ctrl+C to stop)");

    let mut transitions = Transitions::default();
    let mut tick: u64 = 0;

    while running.load(Ordering::SeqCst) {
        let now = clock.instant(tick)?;
        let status = status_at(&schedule, now);

        if let Some((from, to)) = transitions.observe(status.period) {
            tracing::info!(%from, %to, at = %status.now, "period changed");
        }

        if redraw {
            print!("\x1b[2J\x1b[H");
        } else if tick > 0 && matches!(format, Format::Text) {
            println!();
        }

        let report = StatusReport {
            location,
            calendar: &schedule.calendar,
            status,
        };
        print_status(&report, format, twelve)?;

        tick += 1;
        if count.is_some_and(|n| tick >= n) {
            break;
        }
        wait_tick(&running);
    }

    eprintln!("Watching stopped.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::helpers::at;

    #[test]
    fn replay_clock_advances_one_second_per_tick() {
        let clock = Clock::Replay(at("2026-10-16 18:01:58"));
        assert_eq!(clock.instant(0).unwrap(), at("2026-10-16 18:01:58"));
        assert_eq!(clock.instant(3).unwrap(), at("2026-10-16 18:02:01"));
    }

    #[test]
    fn replay_clock_crosses_midnight() {
        let clock = Clock::Replay(at("2026-10-16 23:59:59"));
        assert_eq!(clock.instant(1).unwrap(), at("2026-10-17 00:00:00"));
    }

    #[test]
    fn transitions_reported_once() {
        let mut t = Transitions::default();
        assert_eq!(t.observe(PeriodLabel::Asr), None);
        assert_eq!(t.observe(PeriodLabel::Asr), None);
        assert_eq!(
            t.observe(PeriodLabel::Maghrib),
            Some((PeriodLabel::Asr, PeriodLabel::Maghrib))
        );
        assert_eq!(t.observe(PeriodLabel::Maghrib), None);
    }

    #[test]
    fn replay_reaches_next_period_at_boundary() {
        let schedule = crate::test_helpers::helpers::sample_schedule();
        let clock = Clock::Replay(at("2026-10-16 18:01:59"));
        let mut t = Transitions::default();
        let first = status_at(&schedule, clock.instant(0).unwrap());
        assert_eq!(t.observe(first.period), None);
        let second = status_at(&schedule, clock.instant(1).unwrap());
        assert_eq!(
            t.observe(second.period),
            Some((PeriodLabel::Asr, PeriodLabel::Maghrib))
        );
    }

    #[test]
    fn wait_tick_returns_immediately_when_stopped() {
        let running = AtomicBool::new(false);
        let started = std::time::Instant::now();
        wait_tick(&running);
        assert!(started.elapsed() < TICK);
    }
}
