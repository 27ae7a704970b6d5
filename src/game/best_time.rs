//! Best finish time persistence.
//!
//! One plain text file holding a single non-negative decimal integer, the
//! best finish time in whole seconds. Updates are transactional: the file
//! is rewritten only when the new time is strictly better. A missing,
//! empty or corrupt file counts as "no prior record".

use std::fs;
use std::path::PathBuf;

pub struct BestTimeFile {
    path: PathBuf,
}

impl BestTimeFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Fold `finish_secs` into the record and return the best time to
    /// display: the smaller of the stored record and the new finish.
    pub fn record(&self, finish_secs: u64) -> u64 {
        match self.stored() {
            Some(stored) if stored <= finish_secs => stored,
            _ => {
                self.write(finish_secs);
                finish_secs
            }
        }
    }

    /// Read the stored record, if any. Corrupt content is recoverable:
    /// warn and carry on as if no record existed.
    pub fn stored(&self) -> Option<u64> {
        let content = fs::read_to_string(&self.path).ok()?;
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse() {
            Ok(secs) => Some(secs),
            Err(_) => {
                eprintln!(
                    "best-time file {} is corrupt ({:?}), ignoring it",
                    self.path.display(),
                    trimmed
                );
                None
            }
        }
    }

    fn write(&self, secs: u64) {
        if let Err(e) = fs::write(&self.path, secs.to_string()) {
            eprintln!("failed to write best-time file {}: {}", self.path.display(), e);
        }
    }
}
