pub mod builtin;
pub mod output;

use std::collections::BTreeMap;
use std::fmt::Display;

use crate::db::DataSource;
use crate::db::models::Row;
use crate::error::{AppError, Result};

/// Turns one row of a report's query into a display line.
pub type Formatter = fn(&Row) -> Result<String>;

/// A titled query paired with the formatter for its rows.
pub struct Report {
    title: String,
    query: String,
    formatter: Formatter,
}

impl Report {
    /// Build a report, filling each `{}` in `query` with the next argument.
    /// Arguments are interpolated as text, so only pass fixed literals.
    pub fn new(
        title: impl Into<String>,
        formatter: Formatter,
        query: &str,
        query_args: &[&dyn Display],
    ) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            query: render_template(query, query_args)?,
            formatter,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn format(&self, row: &Row) -> Result<String> {
        (self.formatter)(row)
    }

    /// Run the query. Every call goes back to the data source.
    pub fn rows(&self, source: &dyn DataSource) -> Result<Vec<Row>> {
        source.fetch(&self.query)
    }

    /// Formatted lines for every row, excluding the title.
    pub fn lines(&self, source: &dyn DataSource) -> Result<Vec<String>> {
        self.rows(source)?.iter().map(|row| self.format(row)).collect()
    }
}

impl std::fmt::Debug for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Report")
            .field("title", &self.title)
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

fn render_template(template: &str, args: &[&dyn Display]) -> Result<String> {
    let pieces: Vec<&str> = template.split("{}").collect();
    let placeholders = pieces.len() - 1;
    if placeholders != args.len() {
        return Err(AppError::Template(format!(
            "{placeholders} placeholder(s) but {} argument(s)",
            args.len()
        )));
    }

    let mut out = String::with_capacity(template.len());
    for (i, piece) in pieces.iter().enumerate() {
        out.push_str(piece);
        if let Some(arg) = args.get(i) {
            out.push_str(&arg.to_string());
        }
    }
    Ok(out)
}

/// Reports selectable by number, in menu order.
#[derive(Debug)]
pub struct Registry {
    reports: BTreeMap<u32, Report>,
}

impl Registry {
    pub fn new(reports: impl IntoIterator<Item = (u32, Report)>) -> Self {
        Self {
            reports: reports.into_iter().collect(),
        }
    }

    /// The three built-in reports, keyed 1 to 3.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new([
            (1, builtin::top_articles()?),
            (2, builtin::top_authors()?),
            (3, builtin::bad_days()?),
        ]))
    }

    pub fn get(&self, key: u32) -> Option<&Report> {
        self.reports.get(&key)
    }

    /// Interpret a line of user input as a registry key.
    pub fn lookup(&self, input: &str) -> Option<&Report> {
        input.trim().parse().ok().and_then(|key| self.get(key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Report)> {
        self.reports.iter().map(|(k, r)| (*k, r))
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }
}
