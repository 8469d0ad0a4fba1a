use std::time::SystemTime;
use log::info;

/// A module with error types
pub mod errors;

/// A module to validate the parameters of a run
pub mod params;

/// A module to select the files that are old enough to be zipped
pub mod select;

/// A module to zip files individually and delete the originals
pub mod archive;

/// A module with the observer notified of each file's progress
pub mod progress;

pub use archive::{zip_and_delete, Archived};
pub use params::Parameters;
pub use progress::{Observer, Phase};
pub use select::{select_candidates, Candidate};

use crate::errors::Result;

/// The outcome of a completed run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub archived: Vec<Archived>,
    pub original_bytes: u64,
    pub archive_bytes: u64,
}

impl Summary {
    fn new(archived: Vec<Archived>) -> Self {
        let original_bytes = archived.iter().map(|a| a.original_size).sum();
        let archive_bytes = archived.iter().map(|a| a.archive_size).sum();
        Summary { archived, original_bytes, archive_bytes }
    }
}

/// Validate `params`, select the files in the source folder of the requested type that were
/// last modified at least `min_age_days` before `now`, then zip each of them into the
/// destination folder and delete it
pub fn archive_old_files(params: Parameters, now: SystemTime, observer: &mut dyn Observer)
    -> Result<Summary> {
    let params = params.validate()?;
    let cutoff = params.cutoff(now);
    let candidates = select_candidates(&params.source, &params.extension, cutoff)?;
    let summary = Summary::new(zip_and_delete(&params.destination, &candidates, observer)?);

    info!("{} file(s) zipped into '{}', {} bytes compressed to {}", summary.archived.len(),
          params.destination.display(), summary.original_bytes, summary.archive_bytes);

    Ok(summary)
}
