//! gradekeep-persist — flat-file persistence for student records.
//!
//! The on-disk format is one labelled text block per record, blocks
//! separated by a blank line. Every mutation writes through before the
//! controller reports success: a single add appends one block, while edits
//! and deletes rewrite the whole file from the in-memory roster.

pub mod flat_file;
pub mod format;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use gradekeep_core::Student;

pub use flat_file::FlatFileAdapter;
pub use format::LoadOutcome;

/// Errors from reading or writing the records file.
///
/// These are recoverable: the caller reports them and the in-memory store
/// keeps operating (the file may then lag until the next successful write).
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Write-through persistence seam for the roster.
///
/// The controller only ever appends one record or rewrites everything, so
/// an alternative strategy (append-log, indexed file) can slot in behind
/// this trait without touching any flow.
pub trait PersistenceAdapter {
    /// Persist a single newly added record.
    fn append(&self, student: &Student) -> Result<(), PersistError>;

    /// Replace the persisted state with the given records, in order.
    fn rewrite_all(&self, students: &[Student]) -> Result<(), PersistError>;
}
