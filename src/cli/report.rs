use std::io;

use super::select;
use crate::db::Database;
use crate::report::Registry;
use crate::report::output::{self, Destination};

/// Show the menu, wait for a choice, then emit the chosen report.
pub fn run(db: &Database, registry: &Registry, to_file: bool) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    select::print_menu(registry, &mut out)?;

    let stdin = io::stdin();
    let report = select::select(registry, &mut stdin.lock(), &mut out)?;
    drop(out);

    let dest = if to_file {
        Destination::File {
            dir: std::env::current_dir()?,
        }
    } else {
        Destination::Console
    };
    tracing::info!(
        "Running '{}' against {}",
        report.title(),
        db.path().display()
    );
    output::emit(report, db, &dest)?;
    Ok(())
}
