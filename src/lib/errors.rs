use std::path::PathBuf;

use error_chain::error_chain;
pub use error_chain::bail;

error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    errors {
        InvalidParameters(reason: String) {
            description("invalid parameters")
            display("{}", reason)
        }

        ListSource(path: PathBuf) {
            description("could not list source folder")
            display("could not list source folder '{}'", path.display())
        }

        DestinationNotDirectory(path: PathBuf) {
            description("destination is not a folder")
            display("'{}' is not a folder", path.display())
        }

        CreateArchive(path: PathBuf) {
            description("could not create zip file")
            display("could not create zip file '{}'", path.display())
        }

        OpenSource(path: PathBuf) {
            description("could not open file to zip")
            display("could not open '{}'", path.display())
        }

        ReadMetadata(path: PathBuf) {
            description("could not get file info")
            display("could not get file info for '{}'", path.display())
        }

        BuildHeader(path: PathBuf) {
            description("could not build zip entry header")
            display("could not build zip entry header for '{}'", path.display())
        }

        WriteEntry(path: PathBuf) {
            description("could not write zip entry")
            display("could not write '{}' into its zip file", path.display())
        }

        FinishArchive(path: PathBuf) {
            description("could not finish zip file")
            display("could not finish zip file '{}'", path.display())
        }

        DeleteSource(path: PathBuf) {
            description("could not delete original file")
            display("could not delete '{}'", path.display())
        }
    }

    foreign_links {
        Io(std::io::Error);
    }
}
