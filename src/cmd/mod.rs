mod nearest;
mod schema;
mod status;
mod times;
mod vigil;

pub use self::nearest::{cmd_nearest, NearestOptions};
pub use self::schema::cmd_schema;
pub use self::status::cmd_status;
pub use self::times::cmd_times;
pub use self::vigil::cmd_vigil;

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

use crate::cli::{Cli, ScheduleArgs};
use crate::config::Config;
use crate::model::PrayerSchedule;
use crate::schedule;

/// Load the schedule named on the command line, or the one the config points at.
pub(crate) fn load_schedule(args: &ScheduleArgs, config: &Config) -> Result<PrayerSchedule> {
    let path = match args.schedule.clone().or_else(|| config.schedule_path()) {
        Some(p) => p,
        None => bail!("no schedule given; pass --schedule or set `schedule` in .salat.toml"),
    };
    schedule::load(&path)
}

/// The instant to evaluate: `--at` when given, otherwise the local wall clock.
pub(crate) fn resolve_now(at: Option<&str>) -> Result<PrimitiveDateTime> {
    match at {
        Some(s) => parse_instant(s),
        None => {
            let now = OffsetDateTime::now_local().unwrap_or_else(|_| {
                tracing::warn!("local UTC offset unavailable, using UTC");
                OffsetDateTime::now_utc()
            });
            Ok(PrimitiveDateTime::new(now.date(), now.time()))
        }
    }
}

/// Parse `YYYY-MM-DD HH:MM:SS` or `YYYY-MM-DD HH:MM`.
pub(crate) fn parse_instant(s: &str) -> Result<PrimitiveDateTime> {
    let s = s.trim();
    let with_seconds = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    let without_seconds = format_description!("[year]-[month]-[day] [hour]:[minute]");

    PrimitiveDateTime::parse(s, with_seconds)
        .or_else(|_| PrimitiveDateTime::parse(s, without_seconds))
        .with_context(|| format!("invalid --at value '{s}': expected \"YYYY-MM-DD HH:MM[:SS]\""))
}

pub(crate) fn twelve_hour(args: &ScheduleArgs, config: &Config) -> bool {
    args.twelve_hour || config.twelve_hour
}

pub fn cmd_completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(schedule: Option<&str>) -> ScheduleArgs {
        ScheduleArgs {
            schedule: schedule.map(Into::into),
            at: None,
            twelve_hour: false,
        }
    }

    #[test]
    fn parse_instant_with_and_without_seconds() {
        let a = parse_instant("2026-10-16 16:00:30").unwrap();
        assert_eq!((a.hour(), a.minute(), a.second()), (16, 0, 30));
        let b = parse_instant(" 2026-10-16 04:05 ").unwrap();
        assert_eq!((b.hour(), b.minute(), b.second()), (4, 5, 0));
    }

    #[test]
    fn parse_instant_rejects_garbage() {
        let err = parse_instant("16:00").unwrap_err();
        assert!(err.to_string().contains("invalid --at value"));
        assert!(parse_instant("2026-13-01 10:00").is_err());
    }

    #[test]
    fn resolve_now_prefers_explicit_instant() {
        let now = resolve_now(Some("2026-10-16 16:00")).unwrap();
        assert_eq!(now.hour(), 16);
    }

    #[test]
    fn load_schedule_without_source_fails() {
        let err = load_schedule(&args(None), &Config::default()).unwrap_err();
        assert!(err.to_string().contains("no schedule given"));
    }

    #[test]
    fn twelve_hour_from_flag_or_config() {
        let config = Config::default();
        assert!(!twelve_hour(&args(None), &config));
        let mut flagged = args(None);
        flagged.twelve_hour = true;
        assert!(twelve_hour(&flagged, &config));
    }
}
