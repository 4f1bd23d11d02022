//! The boundary to the external cheminformatics toolkit.
//!
//! Everything numerically interesting (SMILES parsing, descriptor math, substructure
//! matching) happens behind these two traits. The rest of the crate only decides which
//! capabilities to call and what to do with their results.

use crate::descriptors::FeatureValue;

pub mod fragments;
#[cfg(feature = "rdkit")]
pub mod rdkit_toolkit;

/// An opaque, parsed molecule.
pub trait Molecule {
    /// Evaluate a named capability exported by the toolkit (see [`Toolkit::capabilities`]).
    fn compute(&self, capability: &str) -> eyre::Result<FeatureValue>;

    /// Number of distinct matches of a SMARTS pattern.
    fn substructure_matches(&self, smarts: &str) -> eyre::Result<usize>;
}

pub trait Toolkit: Send + Sync {
    fn name(&self) -> &str;

    /// `None` when the toolkit rejects the input.
    fn parse_smiles(&self, smiles: &str) -> Option<Box<dyn Molecule>>;

    /// Every capability name the toolkit exports.
    fn capabilities(&self) -> Vec<String>;

    /// Human readable description for an exported capability, if the toolkit has one.
    fn describe(&self, _capability: &str) -> Option<String> {
        None
    }
}
