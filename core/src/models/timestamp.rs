use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A UTC instant as PlayFab sends it.
///
/// Accepts RFC 3339 as well as the zone-less form, which the service uses
/// for UTC values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    pub fn now() -> Self {
        Timestamp(Utc::now())
    }

    pub fn parse(s: &str) -> Option<Self> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(Timestamp(dt.with_timezone(&Utc)));
        }
        NaiveDateTime::parse_from_str(s, NAIVE_FORMAT)
            .ok()
            .map(|naive| Timestamp(naive.and_utc()))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(WIRE_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid timestamp: {raw}")))
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn parses_rfc3339() {
        let ts = Timestamp::parse("2017-04-11T19:27:54.123Z").unwrap();
        assert_eq!(ts.to_string(), "2017-04-11T19:27:54.123Z");
    }

    #[test]
    fn parses_zoneless_as_utc() {
        let ts = Timestamp::parse("2017-04-11T19:27:54").unwrap();
        assert_eq!(ts.0, Utc.with_ymd_and_hms(2017, 4, 11, 19, 27, 54).unwrap());
    }

    #[test]
    fn normalizes_offsets() {
        let ts = Timestamp::parse("2017-04-11T21:27:54+02:00").unwrap();
        assert_eq!(ts.to_string(), "2017-04-11T19:27:54.000Z");
    }

    #[test]
    fn rejects_garbage() {
        assert!(Timestamp::parse("yesterday").is_none());
        let err = serde_json::from_str::<Timestamp>(r#""yesterday""#);
        assert!(err.is_err());
    }

    #[test]
    fn serializes_in_wire_format() {
        let ts = Timestamp(Utc.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(serde_json::to_string(&ts).unwrap(), r#""2020-01-02T03:04:05.000Z""#);
    }
}
