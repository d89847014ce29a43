//! In-memory tabular result shared by the parser and the writer.

use crate::error::{Error, Result};
use crate::infer::DataType;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Column {
    pub name: String,
    pub data_type: DataType,
    pub allow_blank: bool,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::default(),
            allow_blank: false,
        }
    }
}

/// Ordered columns plus fixed-width rows of string values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the given column names, deduplicated the same way the
    /// parser deduplicates headers.
    pub fn with_columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        for name in names {
            table.add_column(name.as_ref());
        }
        table
    }

    /// Appends a column named `base`, or `base1`, `base2`, … when taken.
    /// Existing rows get an empty value. Returns the name actually used.
    pub fn add_column(&mut self, base: &str) -> &str {
        let name = unique_name(base, &self.columns);
        self.columns.push(Column::new(name));
        for row in &mut self.rows {
            row.push(String::new());
        }
        &self.columns[self.columns.len() - 1].name
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows
            .get(row)
            .and_then(|r| r.get(idx))
            .map(String::as_str)
    }

    /// Values of one column, top to bottom.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter_map(move |r| r.get(index).map(String::as_str))
    }

    pub fn push_row<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = values.into_iter().map(Into::into).collect();
        if row.len() != self.width() {
            return Err(Error::ColumnCount {
                expected: self.width(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Re-runs type inference on every column.
    pub fn infer_types(&mut self, preserve_whitespace: bool) {
        for idx in 0..self.columns.len() {
            let inference =
                crate::infer::infer_column(self.column_values(idx), preserve_whitespace);
            let column = &mut self.columns[idx];
            column.data_type = inference.data_type;
            column.allow_blank = inference.allow_blank;
            tracing::trace!(
                column = %column.name,
                data_type = %column.data_type,
                allow_blank = column.allow_blank,
                "inferred column type"
            );
        }
    }
}

pub(crate) fn unique_name(base: &str, taken: &[Column]) -> String {
    let mut candidate = base.to_string();
    let mut counter = 0usize;
    while taken.iter().any(|c| c.name == candidate) {
        counter += 1;
        candidate = format!("{base}{counter}");
    }
    candidate
}

#[cfg(feature = "json")]
mod json {
    use serde_json::{Map, Number, Value};

    use super::Table;
    use crate::error::{Error, Result};
    use crate::infer::{DataType, parse_boolean};

    impl Table {
        /// Rows as an array of objects keyed by column name. Values are typed
        /// by the inferred column type; blanks become `null`.
        pub fn to_json(&self) -> Value {
            let rows = self
                .rows
                .iter()
                .map(|row| {
                    let mut obj = Map::with_capacity(self.columns.len());
                    for (column, raw) in self.columns.iter().zip(row) {
                        obj.insert(column.name.clone(), typed_value(raw, column.data_type));
                    }
                    Value::Object(obj)
                })
                .collect();
            Value::Array(rows)
        }

        /// Builds a table from an array of flat objects. Columns come from the
        /// keys of the first object; missing keys become empty values.
        pub fn from_json(value: &Value) -> Result<Table> {
            let Value::Array(items) = value else {
                return Err(Error::Message("expected a JSON array of objects".into()));
            };
            let mut table = Table::new();
            let Some(first) = items.first() else {
                return Ok(table);
            };
            let Value::Object(first) = first else {
                return Err(Error::Message("expected a JSON array of objects".into()));
            };
            for key in first.keys() {
                table.add_column(key);
            }
            let keys: Vec<String> = first.keys().cloned().collect();
            for (idx, item) in items.iter().enumerate() {
                let Value::Object(obj) = item else {
                    return Err(Error::Message(format!("row {idx} is not an object")));
                };
                let mut row = Vec::with_capacity(keys.len());
                for key in &keys {
                    row.push(match obj.get(key) {
                        None | Some(Value::Null) => String::new(),
                        Some(Value::String(s)) => s.clone(),
                        Some(Value::Bool(b)) => b.to_string(),
                        Some(Value::Number(n)) => n.to_string(),
                        Some(other) => {
                            return Err(Error::Message(format!(
                                "row {idx}, key {key}: nested value {other} is not tabular"
                            )));
                        }
                    });
                }
                table.push_row(row)?;
            }
            Ok(table)
        }
    }

    fn typed_value(raw: &str, data_type: DataType) -> Value {
        let v = raw.trim();
        if v.is_empty() {
            return Value::Null;
        }
        match data_type {
            DataType::Integer => v
                .parse::<i64>()
                .map(Value::from)
                .unwrap_or_else(|_| Value::String(raw.to_string())),
            DataType::Float => v
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or_else(|| Value::String(raw.to_string())),
            DataType::Boolean => parse_boolean(v)
                .map(Value::Bool)
                .unwrap_or_else(|| Value::String(raw.to_string())),
            DataType::DateTime | DataType::Date | DataType::Time | DataType::Text => {
                Value::String(raw.to_string())
            }
        }
    }
}
