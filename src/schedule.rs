//! Loading a day's prayer schedule from a timings payload.
//!
//! The payload mirrors a timings API day record: a `timings` map of `HH:MM`
//! strings keyed by prayer name and a `date` block with Gregorian and Hijri
//! metadata. The same record wrapped in a `{"code": .., "data": {..}}`
//! envelope is accepted too. Keys other than the six boundaries are ignored.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use crate::clock::ClockTime;
use crate::model::{CalendarInfo, PrayerSchedule};

/// Either a bare day record or one wrapped in a `data` envelope. `data` wins
/// when both are present.
#[derive(Debug, Deserialize)]
struct Payload {
    data: Option<DayRecord>,
    timings: Option<RawTimings>,
    #[serde(default)]
    date: CalendarInfo,
}

#[derive(Debug, Deserialize)]
struct DayRecord {
    timings: RawTimings,
    #[serde(default)]
    date: CalendarInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawTimings {
    fajr: String,
    sunrise: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
}

impl Payload {
    fn into_record(self) -> Result<DayRecord> {
        match (self.data, self.timings) {
            (Some(data), _) => Ok(data),
            (None, Some(timings)) => Ok(DayRecord {
                timings,
                date: self.date,
            }),
            (None, None) => bail!("schedule has no `timings` table (bare or under `data`)"),
        }
    }
}

impl DayRecord {
    fn into_schedule(self) -> Result<PrayerSchedule> {
        let t = &self.timings;
        let schedule = PrayerSchedule {
            fajr: parse_field("Fajr", &t.fajr)?,
            sunrise: parse_field("Sunrise", &t.sunrise)?,
            dhuhr: parse_field("Dhuhr", &t.dhuhr)?,
            asr: parse_field("Asr", &t.asr)?,
            maghrib: parse_field("Maghrib", &t.maghrib)?,
            isha: parse_field("Isha", &t.isha)?,
            calendar: self.date,
        };

        if !schedule.is_ordered() {
            tracing::warn!(
                fajr = %schedule.fajr,
                sunrise = %schedule.sunrise,
                dhuhr = %schedule.dhuhr,
                asr = %schedule.asr,
                maghrib = %schedule.maghrib,
                isha = %schedule.isha,
                "schedule times are not strictly increasing; periods may be wrong"
            );
        }
        Ok(schedule)
    }
}

fn parse_field(name: &str, value: &str) -> Result<ClockTime> {
    value
        .parse::<ClockTime>()
        .with_context(|| format!("invalid {name} time"))
}

/// Parse a JSON schedule payload.
pub fn parse_json(content: &str) -> Result<PrayerSchedule> {
    let payload: Payload =
        serde_json::from_str(content).context("schedule is not a valid timings payload")?;
    payload.into_record()?.into_schedule()
}

/// Parse a TOML schedule with `[timings]` and optional `[date]` tables.
pub fn parse_toml(content: &str) -> Result<PrayerSchedule> {
    let payload: Payload =
        toml::from_str(content).context("schedule is not a valid timings payload")?;
    payload.into_record()?.into_schedule()
}

/// Load a schedule from `path`; `-` reads JSON from stdin.
pub fn load(path: &Path) -> Result<PrayerSchedule> {
    if path == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("failed to read schedule from stdin")?;
        return parse_json(&content);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read schedule: {}", path.display()))?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

    let schedule = if is_toml {
        parse_toml(&content)
    } else {
        parse_json(&content)
    };
    schedule.with_context(|| format!("failed to load schedule: {}", path.display()))
}
