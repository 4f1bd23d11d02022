use std::collections::{BTreeMap, HashMap};

use rdkit::{substruct_match, Properties, ROMol, RWMol, SubstructMatchParameters};

use crate::descriptors::FeatureValue;
use crate::toolkit::fragments::{find_fragment, FRAGMENT_PATTERNS};
use crate::toolkit::{Molecule, Toolkit};

pub const FORMULA: &str = "formula";
pub const CANONICAL_SMILES: &str = "canonical_smiles";

/// Names produced by `rdkit::Properties::compute_properties`.
pub const RDKIT_PROPERTIES: [&str; 43] = [
    "CrippenClogP",
    "CrippenMR",
    "FractionCSP3",
    "NumAliphaticHeterocycles",
    "NumAliphaticRings",
    "NumAmideBonds",
    "NumAromaticHeterocycles",
    "NumAromaticRings",
    "NumAtomStereoCenters",
    "NumAtoms",
    "NumBridgeheadAtoms",
    "NumHBA",
    "NumHBD",
    "NumHeavyAtoms",
    "NumHeteroatoms",
    "NumHeterocycles",
    "NumRings",
    "NumRotatableBonds",
    "NumSaturatedHeterocycles",
    "NumSaturatedRings",
    "NumSpiroAtoms",
    "NumUnspecifiedAtomStereoCenters",
    "Phi",
    "amw",
    "chi0n",
    "chi0v",
    "chi1n",
    "chi1v",
    "chi2n",
    "chi2v",
    "chi3n",
    "chi3v",
    "chi4n",
    "chi4v",
    "exactmw",
    "hallKierAlpha",
    "kappa1",
    "kappa2",
    "kappa3",
    "labuteASA",
    "lipinskiHBA",
    "lipinskiHBD",
    "tpsa",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct RdkitToolkit;

impl RdkitToolkit {
    pub fn new() -> Self {
        Self
    }
}

impl Toolkit for RdkitToolkit {
    fn name(&self) -> &str {
        "rdkit"
    }

    fn parse_smiles(&self, smiles: &str) -> Option<Box<dyn Molecule>> {
        match ROMol::from_smiles(smiles) {
            Ok(romol) => {
                let properties = Properties::new();
                let computed = properties.compute_properties(&romol);
                Some(Box::new(RdkitMolecule { romol, computed }))
            }
            Err(e) => {
                log::debug!("rdkit rejected {:?}: {}", smiles, e);
                None
            }
        }
    }

    fn capabilities(&self) -> Vec<String> {
        RDKIT_PROPERTIES
            .iter()
            .copied()
            .chain([FORMULA, CANONICAL_SMILES])
            .chain(FRAGMENT_PATTERNS.iter().map(|f| f.name))
            .map(str::to_string)
            .collect()
    }

    fn describe(&self, capability: &str) -> Option<String> {
        find_fragment(capability).map(|f| f.description.to_string())
    }
}

pub struct RdkitMolecule {
    romol: ROMol,
    computed: HashMap<String, f64>,
}

impl RdkitMolecule {
    /// Indices of every atom in the graph, explicit hydrogens included.
    fn atom_indices(&self) -> eyre::Result<Vec<u32>> {
        let any_atom = RWMol::from_smarts("*").map_err(|e| eyre::eyre!("{}", e))?;
        let params = SubstructMatchParameters::default();
        let mut indices = substruct_match(&self.romol, &any_atom.to_ro_mol(), &params)
            .into_iter()
            .map(|v| v[0].mol_atom_idx.as_u32())
            .collect::<Vec<_>>();
        indices.sort_unstable();
        indices.dedup();
        Ok(indices)
    }

    /// Hill-ordered formula with the net formal charge appended, e.g. `C9H8O4` or `C4H12N+`.
    pub fn formula(&self) -> eyre::Result<String> {
        let mut romol = self.romol.clone();
        let mut counts: BTreeMap<String, u32> = BTreeMap::new();
        let mut charge = 0;

        for idx in self.atom_indices()? {
            let atom = romol.atom_with_idx(idx);
            *counts.entry(atom.symbol()).or_insert(0) += 1;
            let num_h = atom.get_total_num_hs() as u32;
            if num_h > 0 {
                *counts.entry("H".to_string()).or_insert(0) += num_h;
            }
            charge += atom.get_formal_charge();
        }

        Ok(hill_formula(&counts, charge))
    }
}

pub fn hill_formula(counts: &BTreeMap<String, u32>, charge: i32) -> String {
    let mut ordered: Vec<(&str, u32)> = Vec::with_capacity(counts.len());
    let has_carbon = counts.contains_key("C");

    if has_carbon {
        for first in ["C", "H"] {
            if let Some(n) = counts.get(first) {
                ordered.push((first, *n));
            }
        }
    }
    for (symbol, n) in counts {
        if has_carbon && (symbol == "C" || symbol == "H") {
            continue;
        }
        ordered.push((symbol.as_str(), *n));
    }

    let mut formula = ordered
        .into_iter()
        .map(|(symbol, n)| match n {
            1 => symbol.to_string(),
            _ => format!("{symbol}{n}"),
        })
        .collect::<String>();

    match charge {
        0 => {}
        1 => formula.push('+'),
        -1 => formula.push('-'),
        c if c > 0 => formula.push_str(&format!("+{c}")),
        c => formula.push_str(&format!("-{}", -c)),
    }

    formula
}

impl Molecule for RdkitMolecule {
    fn compute(&self, capability: &str) -> eyre::Result<FeatureValue> {
        match capability {
            FORMULA => Ok(FeatureValue::Text(self.formula()?)),
            CANONICAL_SMILES => Ok(FeatureValue::Text(self.romol.as_smiles())),
            _ => {
                if let Some(fragment) = find_fragment(capability) {
                    return Ok(self.substructure_matches(fragment.smarts)?.into());
                }

                self.computed
                    .get(capability)
                    .map(|v| FeatureValue::Float(*v))
                    .ok_or(eyre::eyre!("rdkit does not export {}", capability))
            }
        }
    }

    fn substructure_matches(&self, smarts: &str) -> eyre::Result<usize> {
        let pattern = RWMol::from_smarts(smarts).map_err(|e| eyre::eyre!("{}", e))?;
        let params = SubstructMatchParameters::default();
        let matches = substruct_match(&self.romol, &pattern.to_ro_mol(), &params);
        Ok(matches.len())
    }
}
