// src/util/clock.rs
// Date/time stamps used for store file names and list headers

use chrono::{DateTime, Local};

/// `YYYY_MM_DD`, the date part of store file names.
pub fn file_date(now: &DateTime<Local>) -> String {
    now.format("%Y_%m_%d").to_string()
}

/// `HH_MM`, the time part of store file names.
pub fn file_time(now: &DateTime<Local>) -> String {
    now.format("%H_%M").to_string()
}

/// `YYYY_MM_DD__HH_MM`
pub fn file_stamp(now: &DateTime<Local>) -> String {
    format!("{}__{}", file_date(now), file_time(now))
}

/// `YYYY-MM-DD`, as stored in the session table and shown in list headers.
pub fn display_date(now: &DateTime<Local>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// `HH:MM:SS`
pub fn display_time(now: &DateTime<Local>) -> String {
    now.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stamps_are_zero_padded() {
        let now = Local.with_ymd_and_hms(2024, 3, 7, 9, 5, 2).unwrap();

        assert_eq!(file_stamp(&now), "2024_03_07__09_05");
        assert_eq!(display_date(&now), "2024-03-07");
        assert_eq!(display_time(&now), "09:05:02");
    }
}
