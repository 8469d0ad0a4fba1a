use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use log::{debug, info};
use crate::errors::*;

/// A file chosen to be zipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// List the files directly inside `source` whose extension is `extension` (ignoring case)
/// and that have not been modified after `cutoff`. Sub-folders are never selected.
pub fn select_candidates(source: &Path, extension: &str, cutoff: SystemTime)
    -> Result<Vec<Candidate>> {
    let wanted = format!(".{extension}").to_lowercase();
    let mut candidates = vec![];

    for entry in fs::read_dir(source).chain_err(|| ErrorKind::ListSource(source.to_owned()))? {
        let entry = entry.chain_err(|| ErrorKind::ListSource(source.to_owned()))?;
        let path = entry.path();

        let name = entry.file_name();
        if !dot_extension(&name.to_string_lossy()).is_some_and(|ext| ext.to_lowercase() == wanted) {
            debug!("Skipping '{}': extension does not match", path.display());
            continue;
        }

        let metadata = fs::metadata(&path)
            .chain_err(|| ErrorKind::ListSource(source.to_owned()))?;
        if !metadata.is_file() {
            debug!("Skipping '{}': not a file", path.display());
            continue;
        }

        let modified = metadata.modified()
            .chain_err(|| ErrorKind::ListSource(source.to_owned()))?;
        if modified > cutoff {
            debug!("Skipping '{}': modified too recently", path.display());
            continue;
        }

        debug!("Selected '{}'", path.display());
        candidates.push(Candidate { path, modified });
    }

    candidates.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    info!("{} file(s) in '{}' selected for zipping", candidates.len(), source.display());

    Ok(candidates)
}

// The extension including its '.', taken from the last '.' of the name
fn dot_extension(name: &str) -> Option<&str> {
    name.rfind('.').map(|index| &name[index..])
}
