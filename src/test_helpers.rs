#[cfg(test)]
pub mod helpers {
    use time::macros::format_description;
    use time::PrimitiveDateTime;

    use crate::clock::ClockTime;
    use crate::model::{CalendarInfo, PrayerSchedule};

    pub fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    pub fn at(s: &str) -> PrimitiveDateTime {
        PrimitiveDateTime::parse(
            s,
            format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"),
        )
        .unwrap()
    }

    /// Fajr 04:58, Sunrise 06:15, Dhuhr 12:03, Asr 15:28, Maghrib 18:02, Isha 19:21.
    pub fn sample_schedule() -> PrayerSchedule {
        PrayerSchedule {
            fajr: t("04:58"),
            sunrise: t("06:15"),
            dhuhr: t("12:03"),
            asr: t("15:28"),
            maghrib: t("18:02"),
            isha: t("19:21"),
            calendar: CalendarInfo::default(),
        }
    }
}
