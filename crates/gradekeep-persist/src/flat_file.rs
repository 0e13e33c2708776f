//! The flat-file persistence adapter.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use gradekeep_core::Student;

use crate::format::{parse_records, render_all, render_block, LoadOutcome};
use crate::{PersistError, PersistenceAdapter};

/// Persists the roster to a single text file of labelled record blocks.
#[derive(Debug, Clone)]
pub struct FlatFileAdapter {
    path: PathBuf,
}

impl FlatFileAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the records file into a [`LoadOutcome`].
    ///
    /// A missing file is not an error; it simply means an empty roster.
    /// Individual malformed blocks are dropped and counted, not fatal.
    pub fn load(&self) -> Result<LoadOutcome, PersistError> {
        if !self.path.exists() {
            return Ok(LoadOutcome::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| PersistError::Read {
            path: self.path.clone(),
            source,
        })?;

        Ok(parse_records(&content))
    }
}

impl PersistenceAdapter for FlatFileAdapter {
    fn append(&self, student: &Student) -> Result<(), PersistError> {
        let write_err = |source| PersistError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        file.write_all(render_block(student).as_bytes())
            .map_err(write_err)
    }

    fn rewrite_all(&self, students: &[Student]) -> Result<(), PersistError> {
        fs::write(&self.path, render_all(students)).map_err(|source| PersistError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter_in(dir: &tempfile::TempDir) -> FlatFileAdapter {
        FlatFileAdapter::new(dir.path().join("student_records.txt"))
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = adapter_in(&dir).load().unwrap();
        assert!(outcome.students.is_empty());
        assert_eq!(outcome.max_numeric_id, 0);
        assert_eq!(outcome.skipped, 0);
    }

    #[test]
    fn append_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = adapter_in(&dir);

        let alice = Student::new("S1001", "Alice", 92.0);
        let bob = Student::new("S1002", "Bob", 35.0);
        adapter.append(&alice).unwrap();
        adapter.append(&bob).unwrap();

        let outcome = adapter.load().unwrap();
        assert_eq!(outcome.students, vec![alice, bob]);
        assert_eq!(outcome.max_numeric_id, 1002);
    }

    #[test]
    fn rewrite_all_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = adapter_in(&dir);

        adapter.append(&Student::new("S1001", "Alice", 92.0)).unwrap();
        adapter.append(&Student::new("S1002", "Bob", 64.0)).unwrap();
        adapter
            .rewrite_all(&[Student::new("S1001", "Alice", 55.0)])
            .unwrap();

        let outcome = adapter.load().unwrap();
        assert_eq!(outcome.students.len(), 1);
        assert_eq!(outcome.students[0].grade, 55.0);
    }

    #[test]
    fn rewrite_all_is_byte_stable() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = adapter_in(&dir);
        let students = vec![
            Student::new("S1001", "Alice", 92.0),
            Student::new("S1002", "Bob", 64.0),
        ];

        adapter.rewrite_all(&students).unwrap();
        let first = fs::read(adapter.path()).unwrap();
        adapter.rewrite_all(&students).unwrap();
        let second = fs::read(adapter.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn written_file_matches_expected_block() {
        let dir = tempfile::tempdir().unwrap();
        let adapter = adapter_in(&dir);
        adapter.append(&Student::new("S1001", "Alice", 92.0)).unwrap();

        let content = fs::read_to_string(adapter.path()).unwrap();
        assert_eq!(
            content,
            "------ Student Record ------\n\
             ID          : S1001\n\
             Name        : Alice\n\
             Grade       : 92.00\n\
             Letter Grade: A+\n\
             ----------------------------\n\n"
        );
    }
}
