//! Track point representation shared by all formats.

use std::path::Path;

use csv::StringRecord;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const KEY_TRACK: &str = "track";
pub const KEY_TIME: &str = "time";
pub const KEY_LAT: &str = "latitude";
pub const KEY_LON: &str = "longitude";
pub const KEY_ELEVATION: &str = "elevation";

/// Column names in the order every tabular file uses them.
pub const HEADER: [&str; 5] = [KEY_TRACK, KEY_TIME, KEY_LAT, KEY_LON, KEY_ELEVATION];

/// A single GPS sample. Values are kept exactly as they appear in the file,
/// no parsing of timestamps or coordinates takes place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub track: String,
    pub time: String,
    pub latitude: String,
    pub longitude: String,
    pub elevation: String,
}

impl TrackPoint {
    pub fn new(
        track: impl Into<String>,
        time: impl Into<String>,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
        elevation: impl Into<String>,
    ) -> Self {
        Self {
            track: track.into(),
            time: time.into(),
            latitude: latitude.into(),
            longitude: longitude.into(),
            elevation: elevation.into(),
        }
    }

    /// Map a raw row onto the five columns. `line` is 1-based and only used
    /// for error reporting.
    pub fn from_record(record: &StringRecord, path: &Path, line: u64) -> Result<Self> {
        if record.len() != HEADER.len() {
            return Err(Error::SchemaMismatch {
                path: path.to_path_buf(),
                line,
                found: record.len(),
            });
        }

        Ok(Self::new(
            &record[0], &record[1], &record[2], &record[3], &record[4],
        ))
    }

    pub fn fields(&self) -> [&str; 5] {
        [
            self.track.as_str(),
            self.time.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
            self.elevation.as_str(),
        ]
    }

    /// Whether this point carries the column names instead of data.
    pub fn is_header(&self) -> bool {
        self.fields() == HEADER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_record() {
        let path = Path::new("points.csv");
        let record = StringRecord::from(vec!["trk1", "2016-01-01T00:00:00Z", "50.0", "8.0", "100"]);
        let point = TrackPoint::from_record(&record, path, 1).unwrap();
        assert_eq!(
            point,
            TrackPoint::new("trk1", "2016-01-01T00:00:00Z", "50.0", "8.0", "100")
        );
        assert_eq!(point.fields(), ["trk1", "2016-01-01T00:00:00Z", "50.0", "8.0", "100"]);
    }

    #[test]
    fn wrong_field_count() {
        let path = Path::new("points.csv");

        let short = StringRecord::from(vec!["trk1", "2016-01-01T00:00:00Z", "50.0"]);
        match TrackPoint::from_record(&short, path, 3) {
            Err(Error::SchemaMismatch { line, found, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let long = StringRecord::from(vec!["a", "b", "c", "d", "e", "f"]);
        assert!(matches!(
            TrackPoint::from_record(&long, path, 1),
            Err(Error::SchemaMismatch { found: 6, .. })
        ));
    }

    #[test]
    fn header() {
        assert!(TrackPoint::new("track", "time", "latitude", "longitude", "elevation").is_header());
        assert!(!TrackPoint::new("trk1", "time", "latitude", "longitude", "elevation").is_header());
    }
}
