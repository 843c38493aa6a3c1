//! Explicit serialization rules for timestamp fields and epoch conversions.
//!
//! Entities opt in per field with `#[serde(with = "...")]`; nothing here
//! overrides serialization globally.

use chrono::{DateTime, NaiveDate, Utc};

use crate::LensError;

/// Convert provider epoch seconds into a UTC timestamp.
///
/// # Errors
/// Returns `LensError::Data` when the value is outside chrono's representable range.
pub fn from_epoch_seconds(secs: i64) -> Result<DateTime<Utc>, LensError> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| LensError::data(format!("epoch seconds out of range: {secs}")))
}

/// Convert a provider expiration (epoch seconds) into its UTC calendar date.
///
/// # Errors
/// Returns `LensError::Data` when the value is outside chrono's representable range.
pub fn expiration_date(secs: i64) -> Result<NaiveDate, LensError> {
    from_epoch_seconds(secs).map(|dt| dt.date_naive())
}

/// ISO-8601 (RFC 3339, UTC, whole seconds) for `DateTime<Utc>` fields.
pub mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as e.g. `2024-05-01T13:30:00Z`.
    ///
    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Secs, true))
    }

    /// Parse any RFC 3339 timestamp and normalize to UTC.
    ///
    /// # Errors
    /// Returns a deserializer error for malformed timestamps.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// `YYYY-MM-DD` for `NaiveDate` fields.
pub mod ymd {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    /// Serialize as e.g. `2024-06-21`.
    ///
    /// # Errors
    /// Propagates serializer errors.
    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    /// Parse a `YYYY-MM-DD` date.
    ///
    /// # Errors
    /// Returns a deserializer error for malformed dates.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}
