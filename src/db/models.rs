use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rusqlite::types::ValueRef;

use crate::error::{AppError, Result};

/// A single scalar returned by the database.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl From<ValueRef<'_>> for Value {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(t) => Value::Text(String::from_utf8_lossy(t).into_owned()),
            ValueRef::Blob(b) => Value::Blob(b.to_vec()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

/// One result record, columns in select-list order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row(pub Vec<Value>);

impl Row {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self(values.into_iter().collect())
    }

    fn column(&self, idx: usize, expected: &'static str) -> Result<&Value> {
        self.0.get(idx).ok_or(AppError::RowShape {
            column: idx,
            expected,
        })
    }

    pub fn text(&self, idx: usize) -> Result<&str> {
        match self.column(idx, "text")? {
            Value::Text(s) => Ok(s),
            _ => Err(AppError::RowShape {
                column: idx,
                expected: "text",
            }),
        }
    }

    pub fn integer(&self, idx: usize) -> Result<i64> {
        match self.column(idx, "integer")? {
            Value::Integer(i) => Ok(*i),
            _ => Err(AppError::RowShape {
                column: idx,
                expected: "integer",
            }),
        }
    }

    /// Integers are widened, as SQLite may return an exact ratio as either.
    pub fn real(&self, idx: usize) -> Result<f64> {
        match self.column(idx, "real")? {
            Value::Real(r) => Ok(*r),
            Value::Integer(i) => Ok(*i as f64),
            _ => Err(AppError::RowShape {
                column: idx,
                expected: "real",
            }),
        }
    }

    /// Calendar day of a text timestamp column.
    pub fn date(&self, idx: usize) -> Result<NaiveDate> {
        let shape = || AppError::RowShape {
            column: idx,
            expected: "date",
        };
        let Value::Text(s) = self.column(idx, "date")? else {
            return Err(shape());
        };
        let s = s.trim();
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
            .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
            .map_err(|_| shape())
    }
}
