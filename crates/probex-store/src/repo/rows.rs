//! Row decoding
//!
//! Columns are read raw and converted in a second step so that a row the
//! model cannot represent surfaces as a storage error instead of a panic.

use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use probex_core::{Direction, Probe, ProbeError, ProbeId};
use rusqlite::Row;
use uuid::Uuid;

pub(crate) const SELECT_PROBE: &str =
    "SELECT id, size_x, size_y, x, y, direction, created_at, updated_at FROM probes";

/// Fixed-width RFC 3339 so text order equals time order
pub(crate) fn encode_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn decode_timestamp(raw: &str) -> Result<DateTime<Utc>, ProbeError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| corrupt(format!("bad timestamp '{}': {}", raw, e)))
}

fn corrupt(message: String) -> ProbeError {
    ProbeError::Storage {
        op: "decode_probe".to_string(),
        message,
    }
}

pub(crate) struct ProbeRow {
    id: String,
    size_x: u32,
    size_y: u32,
    x: u32,
    y: u32,
    direction: String,
    created_at: String,
    updated_at: String,
}

impl ProbeRow {
    pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            size_x: row.get(1)?,
            size_y: row.get(2)?,
            x: row.get(3)?,
            y: row.get(4)?,
            direction: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}

impl TryFrom<ProbeRow> for Probe {
    type Error = ProbeError;

    fn try_from(row: ProbeRow) -> Result<Self, Self::Error> {
        let id = Uuid::parse_str(&row.id)
            .map(ProbeId::from_uuid)
            .map_err(|e| corrupt(format!("bad id '{}': {}", row.id, e)))?;
        let direction = Direction::from_str(&row.direction)
            .map_err(|_| corrupt(format!("bad direction '{}'", row.direction)))?;

        Ok(Probe {
            id,
            size_x: row.size_x,
            size_y: row.size_y,
            x: row.x,
            y: row.y,
            direction,
            created_at: decode_timestamp(&row.created_at)?,
            updated_at: decode_timestamp(&row.updated_at)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamp_encoding_is_fixed_width() {
        let a = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let encoded = encode_timestamp(&a);
        assert_eq!(encoded, "2024-01-02T03:04:05.000000000Z");
        assert_eq!(decode_timestamp(&encoded).unwrap(), a);
    }

    #[test]
    fn test_bad_direction_is_storage_error() {
        let row = ProbeRow {
            id: ProbeId::new().to_string(),
            size_x: 1,
            size_y: 1,
            x: 0,
            y: 0,
            direction: "UP".to_string(),
            created_at: "2024-01-02T03:04:05.000000000Z".to_string(),
            updated_at: "2024-01-02T03:04:05.000000000Z".to_string(),
        };

        let err = Probe::try_from(row).unwrap_err();
        assert!(matches!(err, ProbeError::Storage { ref op, .. } if op == "decode_probe"));
    }
}
