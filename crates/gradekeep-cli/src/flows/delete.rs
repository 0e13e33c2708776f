//! The delete flow: match by name, disambiguate duplicates by ID, confirm,
//! then rewrite the file without the removed record.

use std::io::{self, BufRead, Write};

use gradekeep_core::Student;
use gradekeep_persist::PersistenceAdapter;

use crate::app::App;

pub fn execute<R: BufRead, W: Write, P: PersistenceAdapter>(
    app: &mut App<R, W, P>,
) -> io::Result<()> {
    let Some(name) = app.prompt_line("Enter name of student to delete: ")? else {
        return Ok(());
    };

    let matches: Vec<Student> = app
        .store
        .find_by_name(&name)
        .into_iter()
        .cloned()
        .collect();

    if matches.is_empty() {
        writeln!(app.out, "\nNo student found with that name.\n")?;
        return Ok(());
    }

    if let [student] = matches.as_slice() {
        let prompt = format!(
            "Are you sure you want to delete {} (ID: {})? (yes/no): ",
            student.name, student.id
        );
        return confirm_and_remove(app, &prompt, &student.id);
    }

    writeln!(app.out, "\nMultiple students found:")?;
    for student in &matches {
        writeln!(app.out, "{student}")?;
    }
    writeln!(app.out)?;

    let Some(id) = app.prompt_line("Enter the ID of the student you want to delete: ")? else {
        return Ok(());
    };

    // Only an ID from the listed matches is accepted; anything else is
    // rejected outright rather than re-prompted.
    match matches.iter().find(|s| s.id.eq_ignore_ascii_case(&id)) {
        Some(student) => {
            let prompt = format!(
                "Are you sure you want to delete student ID {}? (yes/no): ",
                student.id
            );
            let id = student.id.clone();
            confirm_and_remove(app, &prompt, &id)
        }
        None => writeln!(app.out, "Invalid ID. No student deleted.\n"),
    }
}

/// Ask for confirmation; only an exact (case-insensitive) "yes" deletes.
fn confirm_and_remove<R: BufRead, W: Write, P: PersistenceAdapter>(
    app: &mut App<R, W, P>,
    prompt: &str,
    id: &str,
) -> io::Result<()> {
    let Some(answer) = app.prompt_line(prompt)? else {
        return Ok(());
    };

    if answer.eq_ignore_ascii_case("yes") {
        app.store.remove_by_id(id);
        if let Err(e) = app.adapter.rewrite_all(app.store.students()) {
            tracing::warn!(error = %e, "rewrite failed");
            writeln!(app.out, "Error writing to file.\n")?;
        }
        writeln!(app.out, "Student deleted successfully.\n")?;
    } else {
        writeln!(app.out, "Deletion canceled.\n")?;
    }

    Ok(())
}
