use std::sync::Arc;

use crate::descriptors::{
    aggregate, aggregate_molecule, DescriptorCatalog, DescriptorSpec, FeatureRecord,
};
use crate::filters::{evaluate_filters, FilterReport, RuleSetSelection};
use crate::toolkit::fragments::FRAGMENT_PREFIX;
use crate::toolkit::Toolkit;

#[derive(Debug, Clone)]
pub struct FeaturizerOptions {
    /// Whether toolkit capabilities named with `auxiliary_prefix` become descriptors.
    pub auxiliary_descriptors: bool,
    pub auxiliary_prefix: String,
}

impl Default for FeaturizerOptions {
    fn default() -> Self {
        Self {
            auxiliary_descriptors: true,
            auxiliary_prefix: FRAGMENT_PREFIX.to_string(),
        }
    }
}

/// Descriptor and filter engine bound to one toolkit. Immutable once built and cheap to
/// clone, so it can be shared between request handlers and worker threads.
#[derive(Clone)]
pub struct Featurizer {
    toolkit: Arc<dyn Toolkit>,
    catalog: Arc<DescriptorCatalog>,
}

impl Featurizer {
    pub fn new(toolkit: Arc<dyn Toolkit>) -> Self {
        Self::with_options(toolkit, &FeaturizerOptions::default())
    }

    pub fn with_options(toolkit: Arc<dyn Toolkit>, options: &FeaturizerOptions) -> Self {
        let mut catalog = DescriptorCatalog::core();
        if options.auxiliary_descriptors {
            catalog.discover_auxiliary(toolkit.as_ref(), &options.auxiliary_prefix);
        }

        log::info!(
            "featurizer ready: {} descriptors from {}",
            catalog.len(),
            toolkit.name()
        );

        Self {
            toolkit,
            catalog: Arc::new(catalog),
        }
    }

    pub fn toolkit(&self) -> &dyn Toolkit {
        self.toolkit.as_ref()
    }

    pub fn catalog(&self) -> &DescriptorCatalog {
        &self.catalog
    }

    pub fn list_descriptors(&self) -> &[DescriptorSpec] {
        self.catalog.list_descriptors()
    }

    pub fn aggregate(&self, smiles: &str) -> FeatureRecord {
        aggregate(self.toolkit(), &self.catalog, smiles)
    }

    /// The record's SMILES is parsed again when the structural alert screen is selected.
    pub fn evaluate_filters(
        &self,
        record: &FeatureRecord,
        selection: &RuleSetSelection,
    ) -> FilterReport {
        let needs_molecule = selection.contains(crate::filters::RuleSetName::Pains);
        let mol = match (needs_molecule, record.smiles()) {
            (true, Some(smiles)) if !smiles.trim().is_empty() => self.toolkit.parse_smiles(smiles),
            _ => None,
        };

        evaluate_filters(record, selection, mol.as_deref())
    }

    /// Descriptors plus the selected filters flattened into one record, parsing once.
    pub fn compute_features(&self, smiles: &str, selection: &RuleSetSelection) -> FeatureRecord {
        let mol = match smiles.trim().is_empty() {
            true => None,
            false => self.toolkit.parse_smiles(smiles),
        };

        let mut record = match &mol {
            Some(mol) => aggregate_molecule(mol.as_ref(), &self.catalog, smiles),
            None => self.aggregate(smiles),
        };

        if !selection.is_empty() {
            let report = evaluate_filters(&record, selection, mol.as_deref());
            report.flatten_into(&mut record);
        }

        record
    }
}
