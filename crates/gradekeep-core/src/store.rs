//! The in-memory roster store.
//!
//! Owns the ordered list of students and the sequential ID counter. The
//! store is a plain value with no filesystem dependency, so tests (and any
//! alternative frontend) can build isolated rosters freely.

use crate::error::StoreError;
use crate::model::Student;

/// IDs start above this seed, so the first student is `S1001`.
const ID_COUNTER_SEED: u32 = 1000;

/// Ordered in-memory collection of student records.
#[derive(Debug, Clone)]
pub struct Store {
    students: Vec<Student>,
    id_counter: u32,
}

/// Aggregate view over a non-empty store.
#[derive(Debug, Clone, Copy)]
pub struct Summary<'a> {
    /// Arithmetic mean of all grades.
    pub average: f64,
    /// Record with the highest grade; the first occurrence wins on ties.
    pub highest: &'a Student,
    /// Record with the lowest grade; the first occurrence wins on ties.
    pub lowest: &'a Student,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// An empty store with the ID counter at its seed.
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            id_counter: ID_COUNTER_SEED,
        }
    }

    /// Rebuild a store from loaded records.
    ///
    /// `max_seen_id` is the largest numeric ID suffix found during load;
    /// the counter advances past it so newly issued IDs never collide.
    pub fn from_parts(students: Vec<Student>, max_seen_id: u32) -> Self {
        Self {
            students,
            id_counter: max_seen_id.max(ID_COUNTER_SEED),
        }
    }

    /// Add a student with a freshly allocated ID.
    ///
    /// Inputs are assumed to be validated already (see
    /// [`crate::model::is_valid_name`] and [`crate::model::is_valid_grade`]);
    /// this never fails.
    pub fn add(&mut self, name: impl Into<String>, grade: f64) -> &Student {
        self.id_counter += 1;
        let id = format!("S{}", self.id_counter);
        let idx = self.students.len();
        self.students.push(Student::new(id, name, grade));
        &self.students[idx]
    }

    /// All records in insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Case-insensitive exact match on the full name, insertion order.
    /// Duplicate names are expected; all matches are returned.
    pub fn find_by_name(&self, name: &str) -> Vec<&Student> {
        self.students
            .iter()
            .filter(|s| s.name.eq_ignore_ascii_case(name))
            .collect()
    }

    /// Case-insensitive exact match on the ID.
    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id.eq_ignore_ascii_case(id))
    }

    /// Replace the grade of the student with the given ID.
    pub fn update_grade(&mut self, id: &str, grade: f64) -> Result<&Student, StoreError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        student.grade = grade;
        Ok(student)
    }

    /// Remove the student with the given ID. Returns `None` (and changes
    /// nothing) when no record matches.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Student> {
        let pos = self
            .students
            .iter()
            .position(|s| s.id.eq_ignore_ascii_case(id))?;
        Some(self.students.remove(pos))
    }

    /// Average/highest/lowest over the current roster, or `None` when empty.
    ///
    /// Extremes are tracked with strict comparisons, so among tied grades
    /// the earliest record is reported.
    pub fn summary(&self) -> Option<Summary<'_>> {
        let first = self.students.first()?;

        let mut total = 0.0;
        let mut highest = first;
        let mut lowest = first;
        for student in &self.students {
            total += student.grade;
            if student.grade > highest.grade {
                highest = student;
            }
            if student.grade < lowest.grade {
                lowest = student;
            }
        }

        Some(Summary {
            average: total / self.students.len() as f64,
            highest,
            lowest,
        })
    }
}
