use std::fs::{self, File, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use log::{debug, trace};
use time::OffsetDateTime;
use zip::{CompressionMethod, DateTime, ZipWriter, write::FileOptions};
use crate::errors::*;
use crate::progress::{Observer, Phase};
use crate::select::Candidate;

/// What happened to one file that was zipped and removed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Archived {
    pub source: PathBuf,
    pub archive: PathBuf,
    pub original_size: u64,
    pub archive_size: u64,
}

/// Where the zip file for `file` is written: `destination/<file name>.zip`
pub fn archive_path(destination: &Path, file: &Path) -> Result<PathBuf> {
    let mut name = file.file_name()
        .ok_or_else(|| ErrorKind::CreateArchive(file.to_owned()))?
        .to_os_string();
    name.push(".zip");
    Ok(destination.join(name))
}

/// Compress each of `files` into its own zip file in `destination`, deleting each original
/// once its zip file is complete. Files are processed one after the other and the first
/// failure stops the batch, leaving the rest of the files untouched.
pub fn zip_and_delete(destination: &Path, files: &[Candidate], observer: &mut dyn Observer)
    -> Result<Vec<Archived>> {
    if !fs::metadata(destination)?.is_dir() {
        bail!(ErrorKind::DestinationNotDirectory(destination.to_owned()));
    }

    let mut archived = Vec::with_capacity(files.len());
    for candidate in files {
        match zip_and_delete_file(destination, &candidate.path, observer) {
            Ok(done) => {
                debug!("'{}' zipped into '{}' ({} -> {} bytes)", done.source.display(),
                       done.archive.display(), done.original_size, done.archive_size);
                archived.push(done);
            }
            Err(e) => {
                observer.on_failure(&candidate.path, &e);
                return Err(e);
            }
        }
    }

    Ok(archived)
}

// Both file handles are closed before the original is removed
fn zip_and_delete_file(destination: &Path, file: &Path, observer: &mut dyn Observer)
    -> Result<Archived> {
    let archive = archive_path(destination, file)?;
    let zip_file = File::create(&archive)
        .chain_err(|| ErrorKind::CreateArchive(archive.clone()))?;
    let mut zip = ZipWriter::new(zip_file);

    observer.on_phase(file, Phase::Opening);
    let mut source = File::open(file).chain_err(|| ErrorKind::OpenSource(file.to_owned()))?;
    let metadata = source.metadata().chain_err(|| ErrorKind::ReadMetadata(file.to_owned()))?;
    let (entry_name, options) = entry_header(file, &metadata)?;
    zip.start_file(entry_name, options).chain_err(|| ErrorKind::BuildHeader(file.to_owned()))?;

    observer.on_phase(file, Phase::Zipping);
    let original_size = io::copy(&mut source, &mut zip)
        .chain_err(|| ErrorKind::WriteEntry(file.to_owned()))?;
    drop(source);

    let zip_file = zip.finish().chain_err(|| ErrorKind::FinishArchive(archive.clone()))?;
    zip_file.sync_all().chain_err(|| ErrorKind::FinishArchive(archive.clone()))?;
    let archive_size = zip_file.metadata()
        .chain_err(|| ErrorKind::FinishArchive(archive.clone()))?
        .len();
    drop(zip_file);

    observer.on_phase(file, Phase::Deleting);
    fs::remove_file(file).chain_err(|| ErrorKind::DeleteSource(file.to_owned()))?;
    observer.on_phase(file, Phase::Deleted);

    Ok(Archived {
        source: file.to_owned(),
        archive,
        original_size,
        archive_size,
    })
}

// Entry name and options derived from the original file, always deflated
fn entry_header(file: &Path, metadata: &Metadata) -> Result<(String, FileOptions<'static, ()>)> {
    let name = file.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| ErrorKind::BuildHeader(file.to_owned()))?;
    let modified = metadata.modified().chain_err(|| ErrorKind::ReadMetadata(file.to_owned()))?;

    let options: FileOptions<'static, ()> = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip_timestamp(modified))
        .large_file(metadata.len() >= u32::MAX as u64);

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };

    trace!("Header for '{name}': {} bytes, modified {modified:?}", metadata.len());

    Ok((name, options))
}

// Zip timestamps only cover 1980 to 2107, anything outside gets the zip epoch
fn zip_timestamp(modified: SystemTime) -> DateTime {
    let utc = OffsetDateTime::from(modified);
    u16::try_from(utc.year()).ok()
        .and_then(|year| DateTime::from_date_and_time(year, utc.month().into(), utc.day(),
                                                      utc.hour(), utc.minute(), utc.second())
            .ok())
        .unwrap_or_else(|| {
            trace!("Modification time {utc:?} cannot be stored in a zip header");
            DateTime::default()
        })
}
