use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::descriptors::{DescriptorCatalog, DescriptorSpec, FeatureRecord, FeatureValue};
use crate::toolkit::{Molecule, Toolkit};

pub const EMPTY_INPUT_ERROR: &str = "empty or invalid";

/// Computes every catalog descriptor for `smiles`.
///
/// Never fails: empty input yields `{smiles, error}`, an unparseable structure yields
/// `{smiles}` alone, and a descriptor whose computation errors or panics is stored as null.
pub fn aggregate(
    toolkit: &dyn Toolkit,
    catalog: &DescriptorCatalog,
    smiles: &str,
) -> FeatureRecord {
    if smiles.trim().is_empty() {
        return FeatureRecord::failed(smiles, EMPTY_INPUT_ERROR);
    }

    let mol = match toolkit.parse_smiles(smiles) {
        Some(mol) => mol,
        None => {
            log::warn!("could not parse smiles {:?}", smiles);
            return FeatureRecord::new(smiles);
        }
    };

    aggregate_molecule(mol.as_ref(), catalog, smiles)
}

/// Same as [`aggregate`] for a molecule that is already parsed.
pub fn aggregate_molecule(
    mol: &dyn Molecule,
    catalog: &DescriptorCatalog,
    smiles: &str,
) -> FeatureRecord {
    let mut record = FeatureRecord::new(smiles);

    for spec in catalog.list_descriptors() {
        let value = match compute_descriptor(mol, spec) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("failed to compute {} for {:?}: {}", spec.key, smiles, e);
                FeatureValue::Null
            }
        };
        record.insert(spec.key.as_str(), value);
    }

    record
}

fn compute_descriptor(mol: &dyn Molecule, spec: &DescriptorSpec) -> eyre::Result<FeatureValue> {
    let raw = catch_unwind(AssertUnwindSafe(|| mol.compute(&spec.capability)))
        .map_err(|_| eyre::eyre!("toolkit panicked in {}", spec.capability))??;

    spec.kind.coerce(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptors::{DisplayNames, ValueKind};

    struct Ethanol;

    impl Molecule for Ethanol {
        fn compute(&self, capability: &str) -> eyre::Result<FeatureValue> {
            match capability {
                "amw" => Ok(FeatureValue::Float(46.069)),
                "NumHBD" => Ok(FeatureValue::Float(1.0)),
                "boom" => panic!("binding blew up"),
                other => Err(eyre::eyre!("no such capability {}", other)),
            }
        }

        fn substructure_matches(&self, _smarts: &str) -> eyre::Result<usize> {
            Ok(0)
        }
    }

    struct EthanolOnly;

    impl Toolkit for EthanolOnly {
        fn name(&self) -> &str {
            "ethanol-only"
        }

        fn parse_smiles(&self, smiles: &str) -> Option<Box<dyn Molecule>> {
            (smiles == "CCO").then(|| Box::new(Ethanol) as Box<dyn Molecule>)
        }

        fn capabilities(&self) -> Vec<String> {
            vec!["amw".to_string(), "NumHBD".to_string()]
        }
    }

    fn spec(key: &str, capability: &str, kind: ValueKind) -> DescriptorSpec {
        DescriptorSpec {
            key: key.to_string(),
            names: DisplayNames {
                en: key.to_string(),
                ja: key.to_string(),
            },
            category: "test".to_string(),
            description: String::new(),
            kind,
            capability: capability.to_string(),
        }
    }

    fn catalog() -> DescriptorCatalog {
        let mut catalog = DescriptorCatalog::new();
        catalog.register(spec("molecular_weight", "amw", ValueKind::Float));
        catalog.register(spec("num_h_donors", "NumHBD", ValueKind::Int));
        catalog.register(spec("exploding", "boom", ValueKind::Float));
        catalog.register(spec("missing", "nothing", ValueKind::Float));
        catalog
    }

    #[test]
    fn test_aggregate_isolates_failures() {
        let record = aggregate(&EthanolOnly, &catalog(), "CCO");

        assert_eq!(record.smiles(), Some("CCO"));
        assert_eq!(record.get("molecular_weight"), Some(&FeatureValue::Float(46.069)));
        assert_eq!(record.get("num_h_donors"), Some(&FeatureValue::Int(1)));
        assert_eq!(record.get("exploding"), Some(&FeatureValue::Null));
        assert_eq!(record.get("missing"), Some(&FeatureValue::Null));
        assert!(record.error().is_none());
    }

    #[test]
    fn test_aggregate_parse_failure() {
        let record = aggregate(&EthanolOnly, &catalog(), "not a molecule");
        assert_eq!(record.len(), 1);
        assert_eq!(record.smiles(), Some("not a molecule"));
    }

    #[test]
    fn test_aggregate_empty_input() {
        for input in ["", "   "] {
            let record = aggregate(&EthanolOnly, &catalog(), input);
            assert_eq!(record.error(), Some(EMPTY_INPUT_ERROR));
            assert_eq!(record.descriptor_keys().count(), 0);
        }
    }

    #[test]
    fn test_aggregate_is_repeatable() {
        let catalog = catalog();
        assert_eq!(
            aggregate(&EthanolOnly, &catalog, "CCO"),
            aggregate(&EthanolOnly, &catalog, "CCO")
        );
    }
}
