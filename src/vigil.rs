//! Night vigil (Tahajjud) window derived from Isha and the following Fajr.

use crate::clock::{self, ClockTime, MINUTES_PER_DAY};
use crate::model::VigilWindow;

/// Fraction of the Isha to Fajr span that passes before the vigil opens.
pub const VIGIL_START_FRACTION: f64 = 0.66;

/// Compute the final third of the night between `isha` and the next `fajr`.
///
/// Fajr is taken to fall on the following day when its hour is smaller than
/// Isha's hour. Only the hour components are compared, so two times sharing an
/// hour are treated as the same day even if Fajr's minute is earlier.
pub fn night_vigil(isha: ClockTime, fajr: ClockTime) -> VigilWindow {
    let isha_min = isha.to_minutes() as i64;
    let mut fajr_min = fajr.to_minutes() as i64;
    if fajr.hour() < isha.hour() {
        fajr_min += MINUTES_PER_DAY as i64;
    }

    let night = fajr_min - isha_min;
    let offset = (night as f64 * VIGIL_START_FRACTION).floor() as i64;
    let start = isha.add_minutes(offset);

    VigilWindow { start, end: fajr }
}

impl VigilWindow {
    /// Whether `minutes` since midnight falls inside the window.
    pub fn contains(&self, minutes: u32) -> bool {
        clock::contains(self.start.to_minutes(), self.end.to_minutes(), minutes)
    }
}
