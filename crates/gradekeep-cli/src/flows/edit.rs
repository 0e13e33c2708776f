//! The edit-grade flow: locate by ID, replace the grade, rewrite the file.

use std::io::{self, BufRead, Write};

use gradekeep_persist::PersistenceAdapter;

use crate::app::App;

pub fn execute<R: BufRead, W: Write, P: PersistenceAdapter>(
    app: &mut App<R, W, P>,
) -> io::Result<()> {
    let Some(id) = app.prompt_line("Enter student ID to edit: ")? else {
        return Ok(());
    };

    let Some(name) = app.store.find_by_id(&id).map(|s| s.name.clone()) else {
        writeln!(app.out, "\nStudent ID not found.\n")?;
        return Ok(());
    };

    let Some(grade) = app.prompt_grade(&format!("Enter new grade for {name} (0 - 100): "))?
    else {
        return Ok(());
    };

    match app.store.update_grade(&id, grade) {
        Ok(_) => {
            if let Err(e) = app.adapter.rewrite_all(app.store.students()) {
                tracing::warn!(error = %e, "rewrite failed");
                writeln!(app.out, "Error writing to file.\n")?;
            }
            writeln!(app.out, "Grade updated successfully.\n")?;
        }
        Err(_) => writeln!(app.out, "\nStudent ID not found.\n")?,
    }

    Ok(())
}
