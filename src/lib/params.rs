use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};
use log::warn;
use crate::errors::*;

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// The inputs of one archiving run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameters {
    /// Folder the zip files are written into
    pub destination: PathBuf,
    /// Folder scanned (not recursively) for files to archive
    pub source: PathBuf,
    /// Extension of the files to archive, without the leading '.'
    pub extension: String,
    /// Files modified more recently than this many days ago are skipped
    pub min_age_days: i64,
}

impl Parameters {
    pub fn new<D, S>(destination: D, source: S, extension: &str, min_age_days: i64) -> Self
        where D: Into<PathBuf>, S: Into<PathBuf> {
        Parameters {
            destination: destination.into(),
            source: source.into(),
            extension: extension.to_owned(),
            min_age_days,
        }
    }

    /// Check the [Parameters], failing on the first rule that is broken
    pub fn validate(self) -> Result<Self> {
        if self.destination.as_os_str().is_empty() || self.source.as_os_str().is_empty()
            || self.extension.is_empty() {
            bail!(ErrorKind::InvalidParameters(
                "all arguments except -m are mandatory. use -h to get argument list".into()));
        }

        if self.min_age_days < 0 {
            bail!(ErrorKind::InvalidParameters(
                format!("-m value must be positive, got {}", self.min_age_days)));
        }

        check_folder("destination", &self.destination)?;
        check_folder("source", &self.source)?;

        Ok(self)
    }

    /// The age cutoff: files modified after the returned instant are too recent to archive.
    /// Days are a fixed 86 400 seconds, not local calendar days, so across a daylight saving
    /// change the cutoff is an hour away from the same wall-clock time `min_age_days` ago.
    pub fn cutoff(&self, now: SystemTime) -> SystemTime {
        let days = u64::try_from(self.min_age_days).unwrap_or(0);
        days.checked_mul(SECONDS_PER_DAY)
            .and_then(|seconds| now.checked_sub(Duration::from_secs(seconds)))
            .unwrap_or(UNIX_EPOCH)
    }
}

fn check_folder(role: &str, folder: &Path) -> Result<()> {
    match fs::metadata(folder) {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => {
            warn!("{} is not a directory", folder.display());
            bail!(ErrorKind::InvalidParameters(
                format!("{role} folder {} is not a directory", folder.display())))
        }
        Err(e) => {
            warn!("error reading metadata of {}: {e}", folder.display());
            bail!(ErrorKind::InvalidParameters(
                format!("cannot find {role} folder {}", folder.display())))
        }
    }
}
