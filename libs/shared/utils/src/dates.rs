use chrono::{Datelike, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

pub use shared_models::datetime::{parse_local_date_time, to_local_date_time_string};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// `YYYY-MM-DD`, the value a date picker works with.
pub fn to_date_input_value(date: &NaiveDate) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

/// Day of week with Sunday = 0, matching working-hour entries.
pub fn day_of_week(date: &NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Interprets a local wall-clock time in the machine's zone and renders it as a
/// UTC ISO-8601 instant (`2024-01-15T13:30:00.000Z`).
pub fn to_utc_iso_string(date_time: &NaiveDateTime) -> String {
    let utc = Local
        .from_local_datetime(date_time)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(date_time));

    utc.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn test_local_date_time_string_has_no_zone_shift() {
        assert_eq!(
            to_local_date_time_string(&at(2024, 1, 15, 14, 30, 45)),
            "2024-01-15T14:30:45"
        );
    }

    #[test]
    fn test_local_date_time_string_pads_fields() {
        assert_eq!(to_local_date_time_string(&at(2024, 3, 5, 9, 5, 7)), "2024-03-05T09:05:07");
        assert_eq!(to_local_date_time_string(&at(2024, 12, 31, 23, 59, 59)), "2024-12-31T23:59:59");
        assert_eq!(to_local_date_time_string(&at(2024, 1, 1, 0, 0, 0)), "2024-01-01T00:00:00");
    }

    #[test]
    fn test_formatted_value_parses_back() {
        let original = at(2024, 1, 15, 14, 30, 45);
        let formatted = to_local_date_time_string(&original);
        assert_eq!(parse_local_date_time(&formatted), Some(original));
    }

    #[test]
    fn test_date_input_value() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(to_date_input_value(&date), "2024-02-29");
        assert_eq!(parse_date_input("2024-02-29"), Some(date));
        assert_eq!(parse_date_input("2023-02-29"), None);
    }

    #[test]
    fn test_parse_accepts_minutes_and_fractions() {
        assert_eq!(parse_local_date_time("2024-01-15T09:20"), Some(at(2024, 1, 15, 9, 20, 0)));
        assert_eq!(
            parse_local_date_time("2024-01-15T09:20:00.000"),
            Some(at(2024, 1, 15, 9, 20, 0))
        );
        assert_eq!(parse_local_date_time(""), None);
        assert_eq!(parse_local_date_time("not a date"), None);
    }

    #[test]
    fn test_day_of_week_starts_on_sunday() {
        // 2024-01-14 is a Sunday, 2024-01-15 a Monday
        assert_eq!(day_of_week(&NaiveDate::from_ymd_opt(2024, 1, 14).unwrap()), 0);
        assert_eq!(day_of_week(&NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()), 1);
        assert_eq!(day_of_week(&NaiveDate::from_ymd_opt(2024, 1, 20).unwrap()), 6);
    }

    #[test]
    fn test_utc_iso_string_shape() {
        let iso = to_utc_iso_string(&at(2024, 1, 15, 14, 30, 0));
        assert!(iso.ends_with('Z'));
        assert_eq!(iso.len(), "2024-01-15T14:30:00.000Z".len());
    }
}
