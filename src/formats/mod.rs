//! Registry of the file formats the converter understands.

use std::path::Path;

use clap::ValueEnum;

use crate::{
    config::Config,
    error::{Error, Result},
    logs::GlobalLogger,
    model::TrackPoint,
};

pub mod csv_tracks;

pub use csv_tracks::CsvTracks;

pub trait Format {
    fn name(&self) -> &'static str;

    fn can_read(&self) -> bool {
        false
    }

    fn can_write(&self) -> bool {
        false
    }

    fn read(&self, _input: &Path) -> Result<Vec<TrackPoint>> {
        Err(Error::Unsupported {
            format: self.name(),
            operation: "reading",
        })
    }

    fn write(&self, _points: &[TrackPoint], _output: &Path) -> Result<()> {
        Err(Error::Unsupported {
            format: self.name(),
            operation: "writing",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatKind {
    #[value(name = "csv")]
    Csv,
}

impl FormatKind {
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            FormatKind::Csv => &["csv"],
        }
    }

    /// Pick a format from the file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|x| x.to_str());

        extension
            .and_then(|ext| {
                Self::value_variants().iter().copied().find(|kind| {
                    kind.extensions()
                        .iter()
                        .any(|known| known.eq_ignore_ascii_case(ext))
                })
            })
            .ok_or_else(|| Error::UnknownFormat {
                path: path.to_path_buf(),
            })
    }

    /// An explicit choice always wins over the extension.
    pub fn resolve(explicit: Option<Self>, path: &Path) -> Result<Self> {
        match explicit {
            Some(kind) => Ok(kind),
            None => Self::from_path(path),
        }
    }

    pub fn build(self, config: &Config) -> Box<dyn Format> {
        match self {
            FormatKind::Csv => Box::new(
                CsvTracks::new(GlobalLogger).with_skip_header(config.csv.skip_header),
            ),
        }
    }
}
