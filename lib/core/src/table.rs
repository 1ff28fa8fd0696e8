use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A tabular dataset with named columns and one row per record
///
/// Cells are stored as `Option<String>`; `None` marks a missing value.
/// All text handling treats missing cells as empty strings, mirroring the
/// null-fill step of the training pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DocumentTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl DocumentTable {
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from a slice of flat JSON objects
    ///
    /// Columns are collected in first-seen order across records; rows are
    /// padded with `None` for keys a record does not carry. Non-string
    /// scalars are stored in their JSON string form.
    pub fn from_records(records: &[Value]) -> Result<Self> {
        let mut objects = Vec::with_capacity(records.len());
        for record in records {
            let obj = record.as_object().ok_or_else(|| {
                Error::MalformedDataset("expected an array of JSON objects".to_string())
            })?;
            objects.push(obj);
        }

        let mut columns: Vec<String> = Vec::new();
        for obj in &objects {
            for key in obj.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut table = Self::new(columns);
        for obj in objects {
            let mut row = Vec::with_capacity(table.columns.len());
            for col in &table.columns {
                let cell = match obj.get(col) {
                    None | Some(Value::Null) => None,
                    Some(Value::String(s)) => Some(s.clone()),
                    Some(v) => Some(v.to_string()),
                };
                row.push(cell);
            }
            table.rows.push(row);
        }

        Ok(table)
    }

    #[inline]
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    #[inline]
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Get a cell by row index and column name
    #[must_use]
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.column_index(column)?;
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Push a row; must match the column count
    pub fn push_row(&mut self, row: Vec<Option<String>>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(Error::InvalidDimension {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Append a column filled from `values`; must match the row count
    pub fn push_column(&mut self, name: &str, values: Vec<Option<String>>) -> Result<()> {
        if values.len() != self.rows.len() {
            return Err(Error::InvalidDimension {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        self.columns.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// Set a column from `values`, replacing it if it already exists;
    /// must match the row count
    pub fn set_column(&mut self, name: &str, values: Vec<Option<String>>) -> Result<()> {
        let Some(col) = self.column_index(name) else {
            return self.push_column(name, values);
        };
        if values.len() != self.rows.len() {
            return Err(Error::InvalidDimension {
                expected: self.rows.len(),
                actual: values.len(),
            });
        }
        for (row, value) in self.rows.iter_mut().zip(values) {
            row[col] = value;
        }
        Ok(())
    }

    /// Select the representative text for a row
    ///
    /// Prefers a `summary` column, then `description`, then `full_text`;
    /// falls back to joining every cell in the row with spaces. Missing
    /// cells read as empty strings.
    #[must_use]
    pub fn text_for_row(&self, row: usize) -> String {
        for preferred in ["summary", "description", "full_text"] {
            if self.has_column(preferred) {
                return self.get(row, preferred).unwrap_or("").to_string();
            }
        }
        match self.rows.get(row) {
            Some(cells) => cells
                .iter()
                .map(|c| c.as_deref().unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" "),
            None => String::new(),
        }
    }

    /// Render a row as a JSON object, substituting `placeholder` for
    /// missing cells
    #[must_use]
    pub fn row_as_record(&self, row: usize, placeholder: &str) -> serde_json::Map<String, Value> {
        let mut record = serde_json::Map::new();
        if let Some(cells) = self.rows.get(row) {
            for (col, cell) in self.columns.iter().zip(cells) {
                let value = cell.as_deref().unwrap_or(placeholder);
                record.insert(col.clone(), Value::String(value.to_string()));
            }
        }
        record
    }
}
