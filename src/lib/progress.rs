use std::fmt;
use std::path::Path;
use crate::errors::Error;

/// The steps a file goes through on its way into a zip file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Opening,
    Zipping,
    Deleting,
    Deleted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Phase::Opening => write!(f, "Opening.."),
            Phase::Zipping => write!(f, "Zipping.."),
            Phase::Deleting => write!(f, "Deleting.."),
            Phase::Deleted => write!(f, "Deleted"),
        }
    }
}

/// Notified as each file advances through the [Phase]s. Purely informational, nothing
/// an [Observer] does can change the outcome of the run.
pub trait Observer {
    fn on_phase(&mut self, _file: &Path, _phase: Phase) {}

    fn on_failure(&mut self, _file: &Path, _error: &Error) {}
}

/// Silent observer
impl Observer for () {}
