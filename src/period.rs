//! Active period resolution for a schedule and an explicit instant.

use time::PrimitiveDateTime;

use crate::clock::ClockTime;
use crate::model::{PeriodBounds, PeriodLabel, PeriodStatus, PrayerSchedule};
use crate::progress;
use crate::vigil::night_vigil;

/// Resolve which period is active at `now`.
///
/// Canonical boundaries are checked first as plain `[start, next)` intervals,
/// with 23:59 closing Isha. Anything left over is either inside the night vigil
/// or falls back to Isha.
pub fn resolve_period(schedule: &PrayerSchedule, now: ClockTime) -> PeriodLabel {
    let now_min = now.to_minutes();
    let boundaries = schedule.boundaries();

    for (i, &(label, start)) in boundaries.iter().enumerate() {
        let next = boundaries
            .get(i + 1)
            .map(|&(_, t)| t)
            .unwrap_or(ClockTime::END_OF_DAY);
        if now_min >= start.to_minutes() && now_min < next.to_minutes() {
            return label;
        }
    }

    if night_vigil(schedule.isha, schedule.fajr).contains(now_min) {
        return PeriodLabel::Tahajjud;
    }

    PeriodLabel::Isha
}

/// The interval displayed for `label`.
///
/// Each canonical period ends where the next one starts, Isha ends at 23:59,
/// and Tahajjud spans the night vigil window.
pub fn period_bounds(schedule: &PrayerSchedule, label: PeriodLabel) -> PeriodBounds {
    let (start, end) = match label {
        PeriodLabel::Fajr => (schedule.fajr, schedule.sunrise),
        PeriodLabel::Sunrise => (schedule.sunrise, schedule.dhuhr),
        PeriodLabel::Dhuhr => (schedule.dhuhr, schedule.asr),
        PeriodLabel::Asr => (schedule.asr, schedule.maghrib),
        PeriodLabel::Maghrib => (schedule.maghrib, schedule.isha),
        PeriodLabel::Isha => (schedule.isha, ClockTime::END_OF_DAY),
        PeriodLabel::Tahajjud => {
            let vigil = night_vigil(schedule.isha, schedule.fajr);
            (vigil.start, vigil.end)
        }
    };
    PeriodBounds { label, start, end }
}

/// Rows for a day table: the vigil first, then every prayer in order.
/// Sunrise is not listed on its own; it appears as the end of Fajr.
pub fn day_rows(schedule: &PrayerSchedule) -> Vec<PeriodBounds> {
    std::iter::once(PeriodLabel::Tahajjud)
        .chain(PeriodLabel::CANONICAL)
        .filter(PeriodLabel::is_prayer)
        .map(|label| period_bounds(schedule, label))
        .collect()
}

/// Resolve the active period at `now` and compute its countdown and progress.
pub fn status_at(schedule: &PrayerSchedule, now: PrimitiveDateTime) -> PeriodStatus {
    let label = resolve_period(schedule, ClockTime::from(now.time()));
    let bounds = period_bounds(schedule, label);
    let remaining = progress::remaining(bounds.end, now);

    tracing::debug!(
        period = %label,
        start = %bounds.start,
        end = %bounds.end,
        "resolved active period"
    );

    PeriodStatus {
        now: format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second()),
        period: label,
        start: bounds.start,
        end: bounds.end,
        remaining_seconds: remaining.whole_seconds(),
        countdown: progress::format_countdown(remaining),
        progress: progress::progress_percent(bounds.start, bounds.end, now.time()),
    }
}
