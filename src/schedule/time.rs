use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;
use tracing::warn;

/// The original deployment's zone offset, used when the configured zone name
/// cannot be resolved: availability over precision.
const FALLBACK_OFFSET_SECS: i32 = 3 * 3600;

/// A remote timestamp that survived none of the parse attempts. Callers skip
/// the record; a bad timestamp never aborts a batch.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized timestamp: {0}")]
pub struct TimestampParseError(pub String);

/// The civil-time zone fixtures are presented in.
#[derive(Debug, Clone, Copy)]
pub enum LocalZone {
    Named(Tz),
    Fixed(FixedOffset),
}

impl LocalZone {
    /// Look the zone name up in the embedded tz database; an unknown name
    /// degrades to fixed UTC-3 rather than failing startup.
    pub fn resolve(name: &str) -> Self {
        match name.parse::<Tz>() {
            Ok(tz) => LocalZone::Named(tz),
            Err(_) => {
                warn!("Unknown timezone '{}', falling back to UTC-3", name);
                LocalZone::Fixed(fallback_offset())
            }
        }
    }

    pub fn localize(&self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            LocalZone::Named(tz) => utc.with_timezone(tz).fixed_offset(),
            LocalZone::Fixed(offset) => utc.with_timezone(offset),
        }
    }

    /// Current calendar date in this zone.
    pub fn today(&self) -> NaiveDate {
        self.localize(Utc::now()).date_naive()
    }
}

fn fallback_offset() -> FixedOffset {
    FixedOffset::west_opt(FALLBACK_OFFSET_SECS).expect("static UTC-3 offset is in range")
}

/// Convert a remote UTC timestamp of flexible format into the target zone.
pub fn normalize(
    raw: &str,
    zone: &LocalZone,
) -> Result<DateTime<FixedOffset>, TimestampParseError> {
    Ok(zone.localize(parse_utc(raw)?))
}

/// Ordered parse attempts; the first success wins.
const PARSE_ATTEMPTS: &[fn(&str) -> Option<DateTime<Utc>>] = &[
    parse_zulu,
    parse_with_offset,
    parse_naive_as_utc,
    parse_fraction_stripped,
];

pub fn parse_utc(raw: &str) -> Result<DateTime<Utc>, TimestampParseError> {
    PARSE_ATTEMPTS
        .iter()
        .find_map(|parse| parse(raw))
        .ok_or_else(|| TimestampParseError(raw.to_string()))
}

/// Strict UTC with the trailing zone marker: `2025-05-03T19:00:00Z`.
fn parse_zulu(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ")
        .ok()
        .map(as_utc)
}

/// An ISO-8601 timestamp carrying its own offset.
fn parse_with_offset(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Offset missing entirely: treat as UTC.
fn parse_naive_as_utc(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(as_utc)
}

/// Last resort: strip a trailing fractional-seconds suffix and retry as UTC.
fn parse_fraction_stripped(raw: &str) -> Option<DateTime<Utc>> {
    let (head, _) = raw.split_once('.')?;
    NaiveDateTime::parse_from_str(head, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(as_utc)
}

fn as_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc)
}
