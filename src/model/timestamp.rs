//! Wire codec for timestamps.
//!
//! The service exchanges instants as Unix epoch seconds in a JSON number with
//! millisecond precision (`1580000000.123`). Whole-second integers are
//! accepted on input. Anything finer than a millisecond is dropped.

use chrono::{DateTime, Utc};

pub fn to_epoch_seconds(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp_millis() as f64 / 1000.0
}

/// Returns `None` for non-finite or out-of-range values.
pub fn from_epoch_seconds(seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let millis = (seconds * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}

/// `#[serde(with = ...)]` adapter for optional timestamp members.
pub mod epoch_seconds {
    use super::{from_epoch_seconds, to_epoch_seconds};
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_f64(to_epoch_seconds(instant)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<f64>::deserialize(deserializer)? {
            Some(seconds) => from_epoch_seconds(seconds).map(Some).ok_or_else(|| {
                de::Error::custom(format!("timestamp out of range: {seconds}"))
            }),
            None => Ok(None),
        }
    }
}
