#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use molprops::descriptors::FeatureValue;
use molprops::engine::Featurizer;
use molprops::toolkit::{Molecule, Toolkit};

pub const ASPIRIN: &str = "CC(=O)OC1=CC=CC=C1C(=O)O";
pub const ETHANOL: &str = "CCO";
pub const CATECHOL: &str = "Oc1ccccc1O";

/// A toolkit that knows a handful of molecules by their exact SMILES.
pub struct FixtureToolkit {
    molecules: HashMap<&'static str, FixtureMolecule>,
}

#[derive(Clone)]
pub struct FixtureMolecule {
    values: HashMap<&'static str, FeatureValue>,
    alerts: Vec<&'static str>,
}

impl Molecule for FixtureMolecule {
    fn compute(&self, capability: &str) -> eyre::Result<FeatureValue> {
        self.values
            .get(capability)
            .cloned()
            .ok_or(eyre::eyre!("fixture has no {}", capability))
    }

    fn substructure_matches(&self, smarts: &str) -> eyre::Result<usize> {
        Ok(self.alerts.iter().filter(|a| **a == smarts).count())
    }
}

fn floats(values: &[(&'static str, f64)]) -> HashMap<&'static str, FeatureValue> {
    values
        .iter()
        .map(|(k, v)| (*k, FeatureValue::Float(*v)))
        .collect()
}

impl FixtureToolkit {
    pub fn new() -> Self {
        let mut aspirin = floats(&[
            ("amw", 180.159),
            ("exactmw", 180.042),
            ("CrippenClogP", 1.3101),
            ("CrippenMR", 44.71),
            ("tpsa", 63.6),
            ("labuteASA", 74.76),
            ("NumHBD", 1.0),
            ("NumHBA", 3.0),
            ("NumRotatableBonds", 2.0),
            ("NumHeavyAtoms", 13.0),
            ("NumRings", 1.0),
            ("fr_ester", 1.0),
            ("fr_benzene", 1.0),
        ]);
        aspirin.insert("formula", "C9H8O4".into());
        aspirin.insert("canonical_smiles", "CC(=O)Oc1ccccc1C(=O)O".into());

        let mut ethanol = floats(&[
            ("amw", 46.069),
            ("CrippenClogP", -0.0014),
            ("CrippenMR", 12.76),
            ("tpsa", 20.23),
            ("NumHBD", 1.0),
            ("NumHBA", 1.0),
            ("NumRotatableBonds", 0.0),
            ("NumHeavyAtoms", 3.0),
            ("NumRings", 0.0),
            ("fr_ester", 0.0),
            ("fr_benzene", 0.0),
        ]);
        ethanol.insert("formula", "C2H6O".into());

        let catechol = floats(&[
            ("amw", 110.112),
            ("CrippenClogP", 1.0978),
            ("CrippenMR", 30.1),
            ("tpsa", 40.46),
            ("NumHBD", 2.0),
            ("NumHBA", 2.0),
            ("NumRotatableBonds", 0.0),
            ("NumHeavyAtoms", 8.0),
            ("NumRings", 1.0),
            ("fr_ester", 0.0),
            ("fr_benzene", 1.0),
        ]);

        let molecules = [
            (
                ASPIRIN,
                FixtureMolecule {
                    values: aspirin,
                    alerts: vec![],
                },
            ),
            (
                ETHANOL,
                FixtureMolecule {
                    values: ethanol,
                    alerts: vec![],
                },
            ),
            (
                CATECHOL,
                FixtureMolecule {
                    values: catechol,
                    alerts: vec!["c([OH])c([OH])"],
                },
            ),
        ]
        .into_iter()
        .collect();

        Self { molecules }
    }
}

impl Toolkit for FixtureToolkit {
    fn name(&self) -> &str {
        "fixture"
    }

    fn parse_smiles(&self, smiles: &str) -> Option<Box<dyn Molecule>> {
        self.molecules
            .get(smiles)
            .map(|m| Box::new(m.clone()) as Box<dyn Molecule>)
    }

    fn capabilities(&self) -> Vec<String> {
        vec![
            "amw".to_string(),
            "fr_ester".to_string(),
            "fr_benzene".to_string(),
        ]
    }

    fn describe(&self, capability: &str) -> Option<String> {
        match capability {
            "fr_ester" => Some("Number of esters".to_string()),
            _ => None,
        }
    }
}

pub fn featurizer() -> Featurizer {
    Featurizer::new(Arc::new(FixtureToolkit::new()))
}
