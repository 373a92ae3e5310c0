/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Tabular view of a response section
//!
//! Columns are taken from the keys of the first record, in server order, and
//! every value is kept as text. A section that is an object becomes one row;
//! an array becomes one row per element.

use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;

/// Ordered columns of text values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    columns: Vec<String>,
    values: Vec<Vec<String>>,
    rows: usize,
}

/// Borrowed view of one row
#[derive(Debug, Clone, Copy)]
pub struct RowRef<'a> {
    table: &'a ResultTable,
    index: usize,
}

impl<'a> RowRef<'a> {
    /// Value of `column` in this row
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.table.get(self.index, column)
    }

    /// Row position in the table
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Values in column order
    #[must_use]
    pub fn values(&self) -> Vec<&'a str> {
        self.table
            .values
            .iter()
            .map(|col| col[self.index].as_str())
            .collect()
    }
}

/// Text form of a JSON scalar; nested values keep their JSON text
fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl ResultTable {
    /// Empty table with the given columns
    #[must_use]
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let values = vec![Vec::new(); columns.len()];
        Self {
            columns,
            values,
            rows: 0,
        }
    }

    /// Builds a table from a response section
    ///
    /// Arrays give one row per element, objects give one row, anything else
    /// (null, missing, scalars) gives an empty table.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(items) => {
                let mut table = Self::default();
                for item in items {
                    if let Value::Object(record) = item {
                        table.push_record(record);
                    }
                }
                table
            }
            Value::Object(record) => {
                let mut table = Self::default();
                table.push_record(record);
                table
            }
            _ => Self::default(),
        }
    }

    /// Like [`from_value`](Self::from_value) for an optional section
    #[must_use]
    pub fn from_section(value: Option<&Value>) -> Self {
        value.map(Self::from_value).unwrap_or_default()
    }

    /// Appends one record
    ///
    /// The first record of an empty table fixes the columns. Later records
    /// fill missing columns with `""` and their extra keys are dropped.
    /// A record without any field adds nothing.
    pub fn push_record(&mut self, record: &Map<String, Value>) {
        if record.is_empty() {
            return;
        }
        if self.rows == 0 && self.columns.is_empty() {
            self.columns = record.keys().cloned().collect();
            self.values = vec![Vec::new(); self.columns.len()];
        }
        for (name, column) in self.columns.iter().zip(self.values.iter_mut()) {
            column.push(record.get(name).map(to_text).unwrap_or_default());
        }
        self.rows += 1;
    }

    /// Appends the rows of `other`
    ///
    /// Columns are matched by name. A column known to only one side is
    /// filled with `""` on the other.
    pub fn merge(&mut self, other: ResultTable) {
        if other.rows == 0 && other.columns.is_empty() {
            return;
        }
        if self.rows == 0 && self.columns.is_empty() {
            *self = other;
            return;
        }

        for name in &other.columns {
            if !self.columns.contains(name) {
                self.columns.push(name.clone());
                self.values.push(vec![String::new(); self.rows]);
            }
        }

        let mut other_columns: Vec<Option<Vec<String>>> =
            other.values.into_iter().map(Some).collect();
        for (name, column) in self.columns.iter().zip(self.values.iter_mut()) {
            let incoming = other
                .columns
                .iter()
                .position(|c| c == name)
                .and_then(|i| other_columns[i].take());
            match incoming {
                Some(values) => column.extend(values),
                None => column.extend(std::iter::repeat_n(String::new(), other.rows)),
            }
        }
        self.rows += other.rows;
    }

    /// Number of rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows
    }

    /// True when the table has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Column names in order
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Every value of one column
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&[String]> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|i| self.values[i].as_slice())
    }

    /// One cell
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        self.column(column)
            .and_then(|values| values.get(row))
            .map(String::as_str)
    }

    /// One row, if `index` is in range
    #[must_use]
    pub fn row(&self, index: usize) -> Option<RowRef<'_>> {
        (index < self.rows).then_some(RowRef { table: self, index })
    }

    /// Rows in order
    pub fn rows(&self) -> impl Iterator<Item = RowRef<'_>> {
        (0..self.rows).map(move |index| RowRef { table: self, index })
    }

    /// New table with the rows for which `keep` returns true
    #[must_use]
    pub fn filter<F>(&self, mut keep: F) -> ResultTable
    where
        F: FnMut(&RowRef<'_>) -> bool,
    {
        let kept: Vec<usize> = self.rows().filter(|r| keep(r)).map(|r| r.index).collect();
        ResultTable {
            columns: self.columns.clone(),
            values: self
                .values
                .iter()
                .map(|col| kept.iter().map(|&i| col[i].clone()).collect())
                .collect(),
            rows: kept.len(),
        }
    }

    /// One JSON object per row, values as strings
    #[must_use]
    pub fn to_records(&self) -> Vec<Map<String, Value>> {
        self.rows()
            .map(|row| {
                self.columns
                    .iter()
                    .zip(row.values())
                    .map(|(k, v)| (k.clone(), Value::String(v.to_string())))
                    .collect()
            })
            .collect()
    }

    /// Deserializes every row into a typed record
    pub fn records<T: DeserializeOwned>(&self) -> Result<Vec<T>, AppError> {
        self.to_records()
            .into_iter()
            .map(|record| {
                serde_json::from_value(Value::Object(record))
                    .map_err(|e| AppError::Deserialization(e.to_string()))
            })
            .collect()
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        if self.columns.is_empty() {
            return write!(f, "(no data)");
        }

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(Row::new(self.columns.iter().map(|c| Cell::new(c)).collect()));
        for row in self.rows() {
            table.add_row(Row::new(row.values().into_iter().map(Cell::new).collect()));
        }

        write!(f, "{}", table)
    }
}
