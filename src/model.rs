use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use time::macros::format_description;

use crate::clock::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PeriodLabel {
    Fajr,
    Sunrise,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
    Tahajjud,
}

impl PeriodLabel {
    /// Schedule boundaries in the order they occur within one day.
    pub const CANONICAL: [PeriodLabel; 6] = [
        PeriodLabel::Fajr,
        PeriodLabel::Sunrise,
        PeriodLabel::Dhuhr,
        PeriodLabel::Asr,
        PeriodLabel::Maghrib,
        PeriodLabel::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodLabel::Fajr => "Fajr",
            PeriodLabel::Sunrise => "Sunrise",
            PeriodLabel::Dhuhr => "Dhuhr",
            PeriodLabel::Asr => "Asr",
            PeriodLabel::Maghrib => "Maghrib",
            PeriodLabel::Isha => "Isha",
            PeriodLabel::Tahajjud => "Tahajjud",
        }
    }

    /// Sunrise only marks the end of Fajr; it is not a prayer.
    pub fn is_prayer(&self) -> bool {
        !matches!(self, PeriodLabel::Sunrise)
    }
}

impl fmt::Display for PeriodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Calendar metadata carried alongside a schedule. Never interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarInfo {
    pub readable: Option<String>,
    pub hijri: Option<HijriDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HijriDate {
    pub date: String,
    pub day: String,
    pub month: HijriMonth,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HijriMonth {
    pub en: String,
    pub number: Option<u8>,
}

impl CalendarInfo {
    /// Weekday of the Gregorian `readable` date (`16 Oct 2026`), if it parses.
    pub fn weekday(&self) -> Option<time::Weekday> {
        let readable = self.readable.as_deref()?.trim();
        let padded = format_description!("[day] [month repr:short] [year]");
        let unpadded = format_description!("[day padding:none] [month repr:short] [year]");
        time::Date::parse(readable, padded)
            .or_else(|_| time::Date::parse(readable, unpadded))
            .ok()
            .map(|d| d.weekday())
    }
}

impl HijriDate {
    /// `day month year`, falling back to the numeric date when no day is given.
    pub fn display(&self) -> String {
        let day = if self.day.is_empty() {
            self.date.as_str()
        } else {
            self.day.as_str()
        };
        [day, self.month.en.as_str(), self.year.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Start times for one day plus pass-through calendar metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrayerSchedule {
    pub fajr: ClockTime,
    pub sunrise: ClockTime,
    pub dhuhr: ClockTime,
    pub asr: ClockTime,
    pub maghrib: ClockTime,
    pub isha: ClockTime,
    pub calendar: CalendarInfo,
}

impl PrayerSchedule {
    /// Canonical boundaries paired with their start times.
    pub fn boundaries(&self) -> [(PeriodLabel, ClockTime); 6] {
        [
            (PeriodLabel::Fajr, self.fajr),
            (PeriodLabel::Sunrise, self.sunrise),
            (PeriodLabel::Dhuhr, self.dhuhr),
            (PeriodLabel::Asr, self.asr),
            (PeriodLabel::Maghrib, self.maghrib),
            (PeriodLabel::Isha, self.isha),
        ]
    }

    /// Whether the six boundaries strictly increase within the day.
    pub fn is_ordered(&self) -> bool {
        self.boundaries().windows(2).all(|w| w[0].1 < w[1].1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VigilWindow {
    pub start: ClockTime,
    pub end: ClockTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(deny_unknown_fields)]
pub struct ReferenceLocation {
    /// Display name, also used to select the location
    pub name: String,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl ReferenceLocation {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Start and end of one displayed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodBounds {
    pub label: PeriodLabel,
    pub start: ClockTime,
    pub end: ClockTime,
}

/// Everything a display needs for one tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodStatus {
    pub now: String,
    pub period: PeriodLabel,
    pub start: ClockTime,
    pub end: ClockTime,
    pub remaining_seconds: i64,
    pub countdown: String,
    pub progress: f64,
}

#[derive(Debug, Serialize)]
pub struct StatusReport<'a> {
    pub location: Option<&'a str>,
    pub calendar: &'a CalendarInfo,
    pub status: PeriodStatus,
}

#[derive(Debug, Serialize)]
pub struct DayTable<'a> {
    pub location: Option<&'a str>,
    pub calendar: &'a CalendarInfo,
    pub current: PeriodLabel,
    pub rows: Vec<PeriodBounds>,
}

#[derive(Debug, Serialize)]
pub struct NearestLocation<'a> {
    pub location: &'a ReferenceLocation,
    pub distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::helpers::{sample_schedule, t};

    #[test]
    fn sunrise_is_not_a_prayer() {
        let prayers: Vec<_> = PeriodLabel::CANONICAL
            .into_iter()
            .filter(PeriodLabel::is_prayer)
            .collect();
        assert_eq!(prayers.len(), 5);
        assert!(!prayers.contains(&PeriodLabel::Sunrise));
        assert!(PeriodLabel::Tahajjud.is_prayer());
    }

    #[test]
    fn boundaries_follow_canonical_order() {
        let s = sample_schedule();
        let labels: Vec<_> = s.boundaries().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, PeriodLabel::CANONICAL);
        assert_eq!(s.boundaries()[3], (PeriodLabel::Asr, t("15:28")));
    }

    #[test]
    fn ordered_schedule_detection() {
        let mut s = sample_schedule();
        assert!(s.is_ordered());
        s.dhuhr = t("16:03");
        assert!(!s.is_ordered());
        s.dhuhr = s.asr;
        assert!(!s.is_ordered());
    }

    #[test]
    fn hijri_display_skips_missing_parts() {
        let full = HijriDate {
            date: "04-05-1448".into(),
            day: "4".into(),
            month: HijriMonth {
                en: "Jumada al-awwal".into(),
                number: Some(5),
            },
            year: "1448".into(),
        };
        assert_eq!(full.display(), "4 Jumada al-awwal 1448");

        let numeric = HijriDate {
            date: "04-05-1448".into(),
            ..HijriDate::default()
        };
        assert_eq!(numeric.display(), "04-05-1448");
        assert_eq!(HijriDate::default().display(), "");
    }

    #[test]
    fn weekday_from_readable_date() {
        let calendar = CalendarInfo {
            readable: Some("16 Oct 2026".into()),
            hijri: None,
        };
        assert_eq!(calendar.weekday(), Some(time::Weekday::Friday));

        let unpadded = CalendarInfo {
            readable: Some("4 Jan 2027".into()),
            hijri: None,
        };
        assert_eq!(unpadded.weekday(), Some(time::Weekday::Monday));
    }

    #[test]
    fn weekday_absent_for_missing_or_odd_dates() {
        assert_eq!(CalendarInfo::default().weekday(), None);
        let odd = CalendarInfo {
            readable: Some("sometime soon".into()),
            hijri: None,
        };
        assert_eq!(odd.weekday(), None);
    }

    #[test]
    fn period_label_serializes_as_name() {
        let json = serde_json::to_string(&PeriodLabel::Tahajjud).unwrap();
        assert_eq!(json, "\"Tahajjud\"");
    }
}
