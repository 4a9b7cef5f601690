//! Wall-clock helpers shared by the taskbar and startup displays.

use chrono::{Local, NaiveDateTime, Timelike};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local wall-clock reading used by clock displays.
pub struct ClockSnapshot {
    local: NaiveDateTime,
}

impl ClockSnapshot {
    /// Reads the current local time.
    pub fn now() -> Self {
        Self::from_local(Local::now().naive_local())
    }

    /// Wraps an already-localized date and time.
    pub const fn from_local(local: NaiveDateTime) -> Self {
        Self { local }
    }

    /// Hour of day, `0..=23`.
    pub fn hour(self) -> u32 {
        self.local.hour()
    }

    /// Formats as `hh:mm AM`, the taskbar clock format.
    pub fn format_time_hm(self) -> String {
        self.local.format("%I:%M %p").to_string()
    }

    /// Formats as `hh:mm:ss AM`, the startup clock format.
    pub fn format_time_hms(self) -> String {
        self.local.format("%I:%M:%S %p").to_string()
    }

    /// Formats as `Friday, October 16, 2026`.
    pub fn format_long_date(self) -> String {
        self.local.format("%A, %B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};

    use super::*;

    fn at(hour: u32, minute: u32, second: u32) -> ClockSnapshot {
        let local = NaiveDate::from_ymd_opt(2026, 10, 16)
            .and_then(|date| date.and_hms_opt(hour, minute, second))
            .expect("valid date");
        ClockSnapshot::from_local(local)
    }

    #[test]
    fn twelve_hour_formats_pad_and_wrap_midnight_and_noon() {
        assert_eq!(at(0, 5, 9).format_time_hm(), "12:05 AM");
        assert_eq!(at(12, 0, 0).format_time_hm(), "12:00 PM");
        assert_eq!(at(15, 7, 0).format_time_hm(), "03:07 PM");
        assert_eq!(at(9, 30, 4).format_time_hms(), "09:30:04 AM");
        assert_eq!(at(23, 59, 59).format_time_hms(), "11:59:59 PM");
    }

    #[test]
    fn long_date_names_weekday_and_month_without_day_padding() {
        assert_eq!(at(0, 0, 0).format_long_date(), "Friday, October 16, 2026");
        let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29)
            .and_then(|date| date.and_hms_opt(13, 45, 30))
            .expect("valid date");
        assert_eq!(
            ClockSnapshot::from_local(leap_day).format_long_date(),
            "Thursday, February 29, 2024"
        );
    }

    #[test]
    fn hour_reports_the_local_hour() {
        assert_eq!(at(18, 0, 0).hour(), 18);
        let before = Local::now();
        let hour = ClockSnapshot::now().hour();
        let after = Local::now();
        assert!(hour == before.hour() || hour == after.hour());
    }
}
