//! Tables of input rows with computed descriptor columns appended.

use indexmap::IndexSet;

use crate::descriptors::{is_reserved_key, FeatureRecord, FeatureValue};

pub mod csv_io;

pub use csv_io::*;

pub const COLLISION_SUFFIX: &str = "_calculated";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<FeatureValue>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: vec![],
        }
    }

    /// Appends a row, padding short rows with nulls. Longer rows are truncated, so readers
    /// must reject them first.
    pub fn push_row(&mut self, mut row: Vec<FeatureValue>) {
        row.resize(self.columns.len(), FeatureValue::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<FeatureValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn cell(&self, row: usize, name: &str) -> Option<&FeatureValue> {
        let idx = self.column_index(name)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    pub fn push_column(&mut self, name: String, values: Vec<FeatureValue>) -> eyre::Result<()> {
        if values.len() != self.rows.len() {
            return Err(eyre::eyre!(
                "column {} has {} values for {} rows",
                name,
                values.len(),
                self.rows.len()
            ));
        }
        if self.column_index(&name).is_some() {
            return Err(eyre::eyre!("column {} already exists", name));
        }

        self.columns.push(name);
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(())
    }

    /// `key` if it is free, else `key_calculated`, then `key_calculated_2`, `_3`, ...
    pub fn free_column_name(&self, key: &str) -> String {
        if self.column_index(key).is_none() {
            return key.to_string();
        }

        let base = format!("{key}{COLLISION_SUFFIX}");
        if self.column_index(&base).is_none() {
            return base;
        }

        let mut n = 2;
        loop {
            let name = format!("{base}_{n}");
            if self.column_index(&name).is_none() {
                return name;
            }
            n += 1;
        }
    }
}

/// Appends one column per non-reserved record key, in first-appearance order. Existing
/// columns are never overwritten. Returns the names of the added columns.
pub fn merge_into_table(table: &mut Table, records: &[FeatureRecord]) -> eyre::Result<Vec<String>> {
    if records.len() != table.row_count() {
        return Err(eyre::eyre!(
            "got {} records for {} rows",
            records.len(),
            table.row_count()
        ));
    }

    let keys = records
        .iter()
        .flat_map(|r| r.keys())
        .filter(|k| !is_reserved_key(k))
        .collect::<IndexSet<_>>();

    let mut added = Vec::with_capacity(keys.len());
    for key in keys {
        let name = table.free_column_name(key);
        let values = records
            .iter()
            .map(|r| r.get(key).cloned().unwrap_or_default())
            .collect();
        table.push_column(name.clone(), values)?;
        added.push(name);
    }

    Ok(added)
}
