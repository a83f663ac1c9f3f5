//! Five column CSV: track, time, latitude, longitude, elevation.
//!
//! Written files always start with the column names (unless there is nothing
//! to write). Reading does not treat the first row specially unless
//! `skip_header` is enabled, so by default a written file reads back with the
//! header as its first point.

use std::{fmt, path::Path};

use csv::{ReaderBuilder, WriterBuilder};
use log::{Level, Log, Record};

use crate::{
    error::{Error, Result},
    logs::GlobalLogger,
    model::{TrackPoint, HEADER},
};

use super::Format;

#[derive(Debug, Default)]
pub struct CsvTracks<L = GlobalLogger> {
    logger: L,
    skip_header: bool,
}

impl<L: Log> CsvTracks<L> {
    pub fn new(logger: L) -> Self {
        Self {
            logger,
            skip_header: false,
        }
    }

    pub fn with_skip_header(mut self, skip_header: bool) -> Self {
        self.skip_header = skip_header;
        self
    }

    fn emit(&self, level: Level, args: fmt::Arguments) {
        self.logger.log(
            &Record::builder()
                .level(level)
                .target(module_path!())
                .args(args)
                .build(),
        );
    }

    fn parse(&self, input: &Path) -> Result<Vec<TrackPoint>> {
        let read_error = |source: csv::Error| Error::Read {
            path: input.to_path_buf(),
            source,
        };

        // field counts are checked per row by TrackPoint::from_record
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(input)
            .map_err(read_error)?;

        let mut points = Vec::new();
        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(read_error)?;
            let line = record
                .position()
                .map(|pos| pos.line())
                .unwrap_or(i as u64 + 1);
            let point = TrackPoint::from_record(&record, input, line)?;

            if i == 0 && self.skip_header && point.is_header() {
                continue;
            }
            points.push(point);
        }

        Ok(points)
    }

    fn print(&self, points: &[TrackPoint], output: &Path) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(output)
            .map_err(|e| Error::write(output, e))?;

        if !points.is_empty() {
            writer
                .write_record(HEADER)
                .map_err(|e| Error::write(output, e))?;
        }
        for point in points {
            writer
                .write_record(point.fields())
                .map_err(|e| Error::write(output, e))?;
        }

        writer.flush().map_err(|e| Error::write(output, e))?;
        Ok(())
    }
}

impl<L: Log> Format for CsvTracks<L> {
    fn name(&self) -> &'static str {
        "csv"
    }

    fn can_read(&self) -> bool {
        true
    }

    fn can_write(&self) -> bool {
        true
    }

    fn read(&self, input: &Path) -> Result<Vec<TrackPoint>> {
        self.emit(Level::Info, format_args!("Reading: {}", input.display()));
        self.parse(input).inspect_err(|e| {
            self.emit(
                Level::Error,
                format_args!("Failed to read: {}: {e:?}", input.display()),
            )
        })
    }

    fn write(&self, points: &[TrackPoint], output: &Path) -> Result<()> {
        self.emit(Level::Info, format_args!("Writing: {}", output.display()));
        self.print(points, output).inspect_err(|e| {
            self.emit(
                Level::Error,
                format_args!("Failed to write: {}: {e:?}", output.display()),
            )
        })
    }
}
