//! The add-students flow: batch of N, each appended to the file as it
//! is created.

use std::io::{self, BufRead, Write};

use gradekeep_persist::PersistenceAdapter;

use crate::app::App;

pub fn execute<R: BufRead, W: Write, P: PersistenceAdapter>(
    app: &mut App<R, W, P>,
) -> io::Result<()> {
    let count = loop {
        let Some(n) = app.prompt_int("Enter the number of students to add: ")? else {
            return Ok(());
        };
        if n > 0 {
            break n;
        }
        writeln!(app.out, "Please enter a number greater than 0.\n")?;
    };

    for i in 1..=count {
        let Some(name) = app.prompt_name(&format!("Enter name of student {i}: "))? else {
            return Ok(());
        };
        let Some(grade) = app.prompt_grade(&format!("Enter grade for {name} (0 - 100): "))?
        else {
            return Ok(());
        };

        let student = app.store.add(name, grade).clone();
        if let Err(e) = app.adapter.append(&student) {
            tracing::warn!(error = %e, id = %student.id, "append failed");
            writeln!(app.out, "Error saving student record to file.\n")?;
        }
        writeln!(app.out, "Student added successfully.\n")?;
    }

    Ok(())
}
