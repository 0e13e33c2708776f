//! Record block rendering and forward-only parsing.
//!
//! Rendering and parsing are pure string functions, separated from file
//! I/O so they can be tested (and benchmarked) without a filesystem.

use gradekeep_core::Student;

const BLOCK_HEADER: &str = "------ Student Record ------";
const BLOCK_FOOTER: &str = "----------------------------";

/// Render one student as a labelled text block, including the trailing
/// blank separator line.
pub fn render_block(student: &Student) -> String {
    format!(
        "{BLOCK_HEADER}\n\
         ID          : {}\n\
         Name        : {}\n\
         Grade       : {:.2}\n\
         Letter Grade: {}\n\
         {BLOCK_FOOTER}\n\n",
        student.id,
        student.name,
        student.grade,
        student.letter_grade()
    )
}

/// Render a whole roster in order.
pub fn render_all(students: &[Student]) -> String {
    students.iter().map(render_block).collect()
}

/// Result of parsing a records file.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Successfully parsed records, in file order.
    pub students: Vec<Student>,
    /// Largest numeric ID suffix among the parsed records; feeds the
    /// store's counter so new IDs never collide with loaded ones.
    pub max_numeric_id: u32,
    /// Blocks dropped because of a malformed or missing field.
    pub skipped: usize,
}

#[derive(Default)]
struct Pending {
    id: Option<String>,
    name: Option<String>,
    grade: Option<f64>,
    bad_grade: bool,
}

/// Parse the flat-file format, forward-only.
///
/// An `ID` line starts a fresh pending record; `Name` and `Grade` fill it
/// in; the `Letter` line commits it. A malformed grade drops that one
/// record (reported, counted) rather than aborting the load. Dash and
/// blank lines are ignored, and a truncated trailing block is never
/// committed because its `Letter` line never arrives.
pub fn parse_records(text: &str) -> LoadOutcome {
    let mut outcome = LoadOutcome::default();
    let mut pending = Pending::default();

    for line in text.lines() {
        if line.starts_with("ID") {
            pending = Pending {
                id: field_value(line),
                ..Pending::default()
            };
        } else if line.starts_with("Name") {
            pending.name = field_value(line);
        } else if line.starts_with("Grade") {
            match field_value(line).map(|v| v.parse::<f64>()) {
                Some(Ok(grade)) => pending.grade = Some(grade),
                Some(Err(_)) => {
                    tracing::warn!(line, "malformed grade field, dropping record");
                    pending.bad_grade = true;
                }
                None => {}
            }
        } else if line.starts_with("Letter") {
            commit(&mut outcome, std::mem::take(&mut pending));
        }
    }

    outcome
}

fn commit(outcome: &mut LoadOutcome, pending: Pending) {
    match pending {
        Pending {
            id: Some(id),
            name: Some(name),
            grade: Some(grade),
            bad_grade: false,
        } => {
            if let Some(n) = numeric_suffix(&id) {
                outcome.max_numeric_id = outcome.max_numeric_id.max(n);
            }
            outcome.students.push(Student::new(id, name, grade));
        }
        Pending { id: None, name: None, grade: None, .. } => {
            // Stray Letter line with no block in progress; ignore.
        }
        Pending { id, .. } => {
            tracing::warn!(id = id.as_deref(), "incomplete record block, skipping");
            outcome.skipped += 1;
        }
    }
}

/// Text after the first colon on a labelled line, trimmed.
fn field_value(line: &str) -> Option<String> {
    line.split_once(':').map(|(_, v)| v.trim().to_string())
}

/// Numeric part of an `S`-prefixed ID, if it parses.
fn numeric_suffix(id: &str) -> Option<u32> {
    id.strip_prefix(['S', 's'])?.parse().ok()
}
