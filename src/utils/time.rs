use chrono::{DateTime, NaiveDate, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn to_rfc3339(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

pub fn from_rfc3339(s: &str) -> anyhow::Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

/// Lenient parse used on the read path: a malformed timestamp in a row is
/// treated as absent rather than failing the whole fetch.
pub fn parse_timestamp(s: Option<&str>) -> Option<DateTime<Utc>> {
    s.and_then(|raw| from_rfc3339(raw).ok())
}

/// Date-only columns arrive as `YYYY-MM-DD`.
pub fn parse_date(s: Option<&str>) -> Option<NaiveDate> {
    s.and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
}
