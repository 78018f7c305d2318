use std::io::{BufRead, Write};

use crate::error::{AppError, Result};
use crate::report::{Registry, Report};

pub fn retry_message(registry: &Registry) -> String {
    format!("Please pick a number 1 - {}", registry.len())
}

pub fn print_menu<W: Write>(registry: &Registry, out: &mut W) -> Result<()> {
    writeln!(out, "Select a report:")?;
    for (key, report) in registry.iter() {
        writeln!(out, "{key} - {}", report.title())?;
    }
    out.flush()?;
    Ok(())
}

/// Read lines until one names a report. Keeps asking on bad input; only
/// end of input stops the loop without a selection.
pub fn select<'a, R: BufRead, W: Write>(
    registry: &'a Registry,
    input: &mut R,
    out: &mut W,
) -> Result<&'a Report> {
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(AppError::InputClosed);
        }
        match registry.lookup(&line) {
            Some(report) => {
                tracing::debug!("Selected report '{}'", report.title());
                return Ok(report);
            }
            None => {
                tracing::debug!("Rejected selection {:?}", line.trim_end());
                writeln!(out, "{}", retry_message(registry))?;
                out.flush()?;
            }
        }
    }
}
