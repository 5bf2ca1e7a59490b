use chrono::{Local, NaiveDateTime};

pub const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Formats as `yyyy-MM-ddTHH:mm:ss` with no zone designator and no shift.
pub fn to_local_date_time_string(date_time: &NaiveDateTime) -> String {
    date_time.format(LOCAL_DATE_TIME_FORMAT).to_string()
}

/// Parses the local date-time forms the backend and users produce. Values
/// carrying an offset are converted into local wall-clock time.
pub fn parse_local_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Some(parsed);
        }
    }

    chrono::DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Local).naive_local())
}

/// Serde adapter for zone-less `dateTime` fields.
pub mod local_date_time {
    use chrono::NaiveDateTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_local_date_time_string(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_local_date_time(&raw)
            .ok_or_else(|| D::Error::custom(format!("invalid date-time '{}'", raw)))
    }
}
