//! The search flow: print every record matching a name.

use std::io::{self, BufRead, Write};

use gradekeep_persist::PersistenceAdapter;

use crate::app::App;

pub fn execute<R: BufRead, W: Write, P: PersistenceAdapter>(
    app: &mut App<R, W, P>,
) -> io::Result<()> {
    let Some(name) = app.prompt_line("Enter name to search: ")? else {
        return Ok(());
    };

    let matches = app.store.find_by_name(&name);
    if matches.is_empty() {
        writeln!(app.out, "\nNo student found with that name.\n")?;
        return Ok(());
    }

    writeln!(app.out, "\nSearch Results:")?;
    writeln!(app.out, "----------------")?;
    for student in matches {
        writeln!(app.out, "{student}")?;
    }
    writeln!(app.out)?;

    Ok(())
}
