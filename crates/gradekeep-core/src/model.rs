//! Core data model: the student record and the letter-grade mapping.
//!
//! A [`Student`] is one roster entry: an immutable ID and name plus a
//! mutable numeric grade. The letter grade is always derived from the
//! numeric grade at display time, never stored, so an edited grade can
//! never disagree with its letter.

use std::fmt;

/// One student record in the roster.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    /// Unique identifier, `"S"` followed by a sequential number.
    pub id: String,
    /// Display name. Starts with a letter; letters, digits, and spaces only.
    pub name: String,
    /// Numeric grade in `[0, 100]`.
    pub grade: f64,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, grade: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade,
        }
    }

    /// The letter grade derived from the current numeric grade.
    pub fn letter_grade(&self) -> &'static str {
        letter_grade(self.grade)
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {:<6} Name: {:<20} Grade: {:.2} ({})",
            self.id,
            self.name,
            self.grade,
            self.letter_grade()
        )
    }
}

/// Map a numeric grade to its letter grade.
///
/// Inclusive lower bounds, evaluated highest-first; total over all inputs
/// (anything below 35 is an F, anything at or above 90 an A+).
pub fn letter_grade(grade: f64) -> &'static str {
    if grade >= 90.0 {
        "A+"
    } else if grade >= 80.0 {
        "A"
    } else if grade >= 70.0 {
        "B+"
    } else if grade >= 60.0 {
        "B"
    } else if grade >= 50.0 {
        "C+"
    } else if grade >= 40.0 {
        "C"
    } else if grade >= 35.0 {
        "D"
    } else {
        "F"
    }
}

/// Check a (pre-trimmed) student name: first character an ASCII letter,
/// the rest ASCII letters, digits, or spaces.
pub fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

/// Check that a grade is within the accepted `[0, 100]` range.
pub fn is_valid_grade(grade: f64) -> bool {
    (0.0..=100.0).contains(&grade)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_grade_boundaries() {
        assert_eq!(letter_grade(100.0), "A+");
        assert_eq!(letter_grade(90.0), "A+");
        assert_eq!(letter_grade(89.99), "A");
        assert_eq!(letter_grade(80.0), "A");
        assert_eq!(letter_grade(79.99), "B+");
        assert_eq!(letter_grade(70.0), "B+");
        assert_eq!(letter_grade(60.0), "B");
        assert_eq!(letter_grade(50.0), "C+");
        assert_eq!(letter_grade(40.0), "C");
        assert_eq!(letter_grade(35.0), "D");
        assert_eq!(letter_grade(34.99), "F");
        assert_eq!(letter_grade(0.0), "F");
    }

    #[test]
    fn letter_grade_total_outside_range() {
        assert_eq!(letter_grade(-5.0), "F");
        assert_eq!(letter_grade(150.0), "A+");
    }

    #[test]
    fn display_line_format() {
        let s = Student::new("S1001", "Alice", 87.5);
        assert_eq!(
            s.to_string(),
            "ID: S1001  Name: Alice                Grade: 87.50 (A)"
        );
    }

    #[test]
    fn valid_names() {
        assert!(is_valid_name("Alice"));
        assert!(is_valid_name("Bob Smith"));
        assert!(is_valid_name("A1 b2"));
    }

    #[test]
    fn invalid_names() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("1Alice"));
        assert!(!is_valid_name(" Alice"));
        assert!(!is_valid_name("Al-ice"));
        assert!(!is_valid_name("Ann_Marie"));
    }

    #[test]
    fn grade_range() {
        assert!(is_valid_grade(0.0));
        assert!(is_valid_grade(100.0));
        assert!(is_valid_grade(55.5));
        assert!(!is_valid_grade(-0.01));
        assert!(!is_valid_grade(100.01));
        assert!(!is_valid_grade(f64::NAN));
    }
}
