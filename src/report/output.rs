use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::Report;
use crate::db::DataSource;
use crate::error::Result;

/// Where a report is written.
pub enum Destination {
    Console,
    /// A `<Title_with_underscores>.txt` file inside `dir`.
    File { dir: PathBuf },
}

pub fn file_name(report: &Report) -> String {
    format!("{}.txt", report.title().replace(' ', "_"))
}

/// Write the title and one formatted line per row.
pub fn write_report<W: Write>(report: &Report, source: &dyn DataSource, out: &mut W) -> Result<()> {
    let lines = report.lines(source)?;
    write_lines(report, &lines, out)
}

fn write_lines<W: Write>(report: &Report, lines: &[String], out: &mut W) -> Result<()> {
    writeln!(out, "{}", report.title())?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

pub fn emit(report: &Report, source: &dyn DataSource, dest: &Destination) -> Result<()> {
    match dest {
        Destination::Console => {
            let stdout = io::stdout();
            write_report(report, source, &mut stdout.lock())
        }
        Destination::File { dir } => {
            let path = write_file(report, source, dir)?;
            tracing::info!("Report written to {}", path.display());
            Ok(())
        }
    }
}

/// Rows are fetched before the file is opened, so a failing query leaves no
/// file behind. A failed write leaves whatever was written so far.
pub fn write_file(report: &Report, source: &dyn DataSource, dir: &Path) -> Result<PathBuf> {
    let lines = report.lines(source)?;
    let path = dir.join(file_name(report));
    let mut file = File::create(&path)?;
    write_lines(report, &lines, &mut file)?;
    Ok(path)
}
