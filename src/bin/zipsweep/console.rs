use std::io::{self, Write};
use std::path::Path;
use zipsweep::errors::{Error, ErrorKind};
use zipsweep::{Observer, Phase};

/// Narrates the progress of each file on stdout, one line per file
#[derive(Default)]
pub struct ConsoleProgress {
    line: String,
}

impl ConsoleProgress {
    fn show(&self) {
        print!("\r{}", self.line);
        io::stdout().flush().ok();
    }
}

impl Observer for ConsoleProgress {
    fn on_phase(&mut self, file: &Path, phase: Phase) {
        if phase == Phase::Opening {
            self.line = format!("File: {} - ", display_name(file));
        }
        self.line.push_str(&format!(" {phase}"));
        self.show();
        if phase == Phase::Deleted {
            println!();
            self.line.clear();
        }
    }

    fn on_failure(&mut self, file: &Path, error: &Error) {
        if self.line.is_empty() {
            self.line = format!("File: {} - ", display_name(file));
        }
        self.line.push_str(&format!(" Failed ({})", failure_reason(error.kind())));
        self.show();
        println!();
    }
}

fn display_name(file: &Path) -> String {
    file.file_name().map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| file.display().to_string())
}

fn failure_reason(kind: &ErrorKind) -> &'static str {
    match kind {
        ErrorKind::CreateArchive(_) => "error creating zip file",
        ErrorKind::OpenSource(_) => "error opening file",
        ErrorKind::ReadMetadata(_) => "error getting file info",
        ErrorKind::BuildHeader(_) => "error creating header",
        ErrorKind::WriteEntry(_) => "error zipping",
        ErrorKind::FinishArchive(_) => "error closing zip file",
        ErrorKind::DeleteSource(_) => "error deleting",
        _ => "error",
    }
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;
    use zipsweep::errors::ErrorKind;
    use super::failure_reason;

    #[test]
    fn failures_are_told_apart() {
        let path = PathBuf::from("a.txt");
        let reasons = [
            failure_reason(&ErrorKind::CreateArchive(path.clone())),
            failure_reason(&ErrorKind::OpenSource(path.clone())),
            failure_reason(&ErrorKind::ReadMetadata(path.clone())),
            failure_reason(&ErrorKind::BuildHeader(path.clone())),
            failure_reason(&ErrorKind::WriteEntry(path.clone())),
            failure_reason(&ErrorKind::FinishArchive(path.clone())),
            failure_reason(&ErrorKind::DeleteSource(path)),
        ];
        for (index, reason) in reasons.iter().enumerate() {
            assert!(!reasons[index + 1..].contains(reason), "'{reason}' is not distinct");
        }
    }
}
