//! The grade-summary view: full roster table plus aggregate statistics.

use std::io::{self, BufRead, Write};

use comfy_table::Table;

use gradekeep_persist::PersistenceAdapter;

use crate::app::App;

pub fn execute<R: BufRead, W: Write, P: PersistenceAdapter>(
    app: &mut App<R, W, P>,
) -> io::Result<()> {
    let Some(summary) = app.store.summary() else {
        writeln!(app.out, "\nNo student data available.\n")?;
        return Ok(());
    };

    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Grade", "Letter"]);
    for student in app.store.students() {
        table.add_row(vec![
            student.id.clone(),
            student.name.clone(),
            format!("{:.2}", student.grade),
            student.letter_grade().to_string(),
        ]);
    }

    writeln!(app.out, "\n--- Grade Summary Report ---")?;
    writeln!(app.out, "{table}")?;
    writeln!(app.out, "Average Grade : {:.2}", summary.average)?;
    writeln!(
        app.out,
        "Highest Grade : {:.2} (by {})",
        summary.highest.grade, summary.highest.name
    )?;
    writeln!(
        app.out,
        "Lowest Grade  : {:.2} (by {})\n",
        summary.lowest.grade, summary.lowest.name
    )?;

    Ok(())
}
