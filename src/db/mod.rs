pub mod models;

use std::path::{Path, PathBuf};

use rusqlite::{Connection, OpenFlags};

use crate::error::Result;
use models::{Row, Value};

/// Anything that can run a query and hand back every row.
pub trait DataSource {
    fn fetch(&self, query: &str) -> Result<Vec<Row>>;
}

/// The news database. Holds only its location; each fetch opens and closes
/// its own connection.
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(conn)
    }
}

impl DataSource for Database {
    fn fetch(&self, query: &str) -> Result<Vec<Row>> {
        tracing::debug!(db = %self.path.display(), "executing query: {}", query.trim());
        let conn = self.connect()?;
        let mut stmt = conn.prepare(query)?;
        let columns = stmt.column_count();
        let rows = stmt.query_map([], |row| {
            let mut values = Vec::with_capacity(columns);
            for i in 0..columns {
                values.push(Value::from(row.get_ref(i)?));
            }
            Ok(Row(values))
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        tracing::info!("Fetched {} row(s)", out.len());
        Ok(out)
    }
}
