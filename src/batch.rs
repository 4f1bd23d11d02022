//! CSV batch processing: one structure column in, descriptor and filter columns out.

use std::collections::HashSet;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::descriptors::{FeatureRecord, FeatureValue};
use crate::engine::Featurizer;
use crate::filters::{RuleSetSelection, ALL};
use crate::table::{from_csv, merge_into_table, to_csv, Table};

pub const DEFAULT_PROPERTIES: [&str; 1] = ["molecular_weight"];
pub const MISSING_STRUCTURE_ERROR: &str = "Invalid or missing SMILES";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRequest {
    pub csv_content: String,
    /// Defaults to the last column.
    pub smiles_column: Option<String>,
    pub properties: Option<Vec<String>>,
    pub filters: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSuccess {
    pub result: String,
    pub message: String,
    pub structure_column: String,
    pub properties_added: Vec<String>,
    pub filters_applied: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BatchEnvelope {
    Failure { error: String },
    Success(BatchSuccess),
}

/// Converts literal `\n` escapes to line breaks when the text has no real line breaks,
/// which is how CSV arrives when it was pasted into a single-line string field.
pub fn normalize_line_breaks(content: &str) -> String {
    match content.contains('\n') {
        true => content.to_string(),
        false => content.replace("\\n", "\n"),
    }
}

/// Reads the CSV from disk when the input is a single line naming an existing `.csv` file.
pub fn resolve_csv_input(input: &str) -> eyre::Result<String> {
    let candidate = input.trim();
    let path = std::path::Path::new(candidate);
    let is_csv_path = !candidate.contains('\n')
        && candidate.to_lowercase().ends_with(".csv")
        && path.is_file();

    match is_csv_path {
        true => {
            let content = std::fs::read_to_string(path).map_err(|e| {
                eyre::eyre!("Failed to read CSV file from path {}: {}", candidate, e)
            })?;
            log::info!("loaded CSV file {}", candidate);
            Ok(content)
        }
        false => Ok(normalize_line_breaks(input)),
    }
}

/// Requested descriptor keys that exist in the catalog, in request order.
fn resolve_properties(featurizer: &Featurizer, requested: Option<&[String]>) -> Vec<String> {
    let catalog = featurizer.catalog();
    let requested = match requested {
        Some(names) if !names.is_empty() => names.to_vec(),
        _ => DEFAULT_PROPERTIES.iter().map(|s| s.to_string()).collect(),
    };

    if requested.iter().any(|p| p.trim().eq_ignore_ascii_case(ALL)) {
        return catalog.keys().map(str::to_string).collect();
    }

    let mut resolved: Vec<String> = Vec::with_capacity(requested.len());
    for name in requested {
        let name = name.trim();
        if !catalog.contains(name) {
            log::warn!("ignoring unknown property {:?}", name);
        } else if !resolved.iter().any(|r| r == name) {
            resolved.push(name.to_string());
        }
    }
    resolved
}

fn structure_cell(value: &FeatureValue) -> Option<&str> {
    value.as_str().map(str::trim).filter(|s| !s.is_empty())
}

/// Runs one batch. Never fails: structural problems come back as the failure envelope and
/// per-row problems as null cells.
pub fn process_csv(featurizer: &Featurizer, request: &BatchRequest) -> BatchEnvelope {
    match run_batch(featurizer, request) {
        Ok(success) => BatchEnvelope::Success(success),
        Err(e) => {
            log::error!("batch failed: {}", e);
            BatchEnvelope::Failure {
                error: e.to_string(),
            }
        }
    }
}

fn run_batch(featurizer: &Featurizer, request: &BatchRequest) -> eyre::Result<BatchSuccess> {
    if request.csv_content.trim().is_empty() {
        return Err(eyre::eyre!("No input data provided"));
    }

    let content = resolve_csv_input(&request.csv_content)?;
    let mut table: Table =
        from_csv(&content).map_err(|e| eyre::eyre!("Failed to parse CSV data: {}", e))?;

    let structure_column = match request.smiles_column.as_deref().map(str::trim) {
        Some(column) if !column.is_empty() => column.to_string(),
        _ => table
            .columns()
            .last()
            .cloned()
            .ok_or_else(|| eyre::eyre!("CSV has no columns"))?,
    };
    let column_idx = table.column_index(&structure_column).ok_or_else(|| {
        eyre::eyre!(
            "Specified SMILES column '{}' not found in CSV data. Available columns: {}",
            structure_column,
            table.columns().join(", ")
        )
    })?;

    let properties = resolve_properties(featurizer, request.properties.as_deref());
    let selection = match &request.filters {
        Some(filters) => RuleSetSelection::parse(filters),
        None => RuleSetSelection::default(),
    };
    let keep = properties.iter().map(String::as_str).collect::<HashSet<_>>();

    let records = table
        .rows()
        .par_iter()
        .map(|row| match structure_cell(&row[column_idx]) {
            Some(smiles) => {
                let mut record = featurizer.compute_features(smiles, &selection);
                record
                    .retain_descriptors(|k| keep.contains(k) || !featurizer.catalog().contains(k));
                record
            }
            None => FeatureRecord::missing(MISSING_STRUCTURE_ERROR),
        })
        .collect::<Vec<_>>();

    let properties_added = merge_into_table(&mut table, &records)?;
    let result = to_csv(&table)?;

    log::info!(
        "processed {} rows, added {} columns",
        records.len(),
        properties_added.len()
    );

    Ok(BatchSuccess {
        result,
        message: format!("Processed {} compounds", records.len()),
        structure_column,
        properties_added,
        filters_applied: selection.names(),
    })
}
