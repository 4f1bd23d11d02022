use serde::Serialize;

use crate::descriptors::FeatureValue;
use crate::toolkit::Toolkit;

pub const FRAGMENT_CATEGORY: &str = "fragment";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Float,
    Int,
    Text,
}

impl ValueKind {
    /// Normalize a raw toolkit value to this kind. Toolkits tend to hand back counts as
    /// floats, so integral floats are accepted for `Int`.
    pub fn coerce(&self, value: FeatureValue) -> eyre::Result<FeatureValue> {
        match (self, value) {
            (_, FeatureValue::Null) => Ok(FeatureValue::Null),
            (ValueKind::Float, FeatureValue::Float(f)) => Ok(FeatureValue::Float(f)),
            (ValueKind::Float, FeatureValue::Int(i)) => Ok(FeatureValue::Float(i as f64)),
            (ValueKind::Int, FeatureValue::Int(i)) => Ok(FeatureValue::Int(i)),
            (ValueKind::Int, FeatureValue::Float(f)) if f.is_finite() && f.fract() == 0.0 => {
                Ok(FeatureValue::Int(f as i64))
            }
            (ValueKind::Text, FeatureValue::Text(s)) => Ok(FeatureValue::Text(s)),
            (kind, other) => Err(eyre::eyre!("expected {:?} value, got {:?}", kind, other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayNames {
    pub en: String,
    pub ja: String,
}

impl DisplayNames {
    pub fn get(&self, locale: &str) -> Option<&str> {
        match locale {
            "en" => Some(&self.en),
            "ja" => Some(&self.ja),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorSpec {
    pub key: String,
    pub names: DisplayNames,
    pub category: String,
    pub description: String,
    pub kind: ValueKind,
    /// Name of the toolkit capability that computes this descriptor.
    pub capability: String,
}

struct CoreDescriptor {
    key: &'static str,
    capability: &'static str,
    kind: ValueKind,
    category: &'static str,
    en: &'static str,
    ja: &'static str,
    description: &'static str,
}

const fn entry(
    key: &'static str,
    capability: &'static str,
    kind: ValueKind,
    category: &'static str,
    en: &'static str,
    ja: &'static str,
    description: &'static str,
) -> CoreDescriptor {
    CoreDescriptor {
        key,
        capability,
        kind,
        category,
        en,
        ja,
        description,
    }
}

use ValueKind::{Float, Int, Text};

#[rustfmt::skip]
const CORE_DESCRIPTORS: [CoreDescriptor; 45] = [
    entry("molecular_weight", "amw", Float, "basic", "Molecular weight", "分子量", "Average molecular weight (g/mol)"),
    entry("exact_molecular_weight", "exactmw", Float, "basic", "Exact molecular weight", "精密質量", "Monoisotopic mass"),
    entry("formula", "formula", Text, "basic", "Molecular formula", "分子式", "Hill-ordered molecular formula"),
    entry("canonical_smiles", "canonical_smiles", Text, "identifier", "Canonical SMILES", "正規化SMILES", "Toolkit canonical SMILES"),
    entry("logp", "CrippenClogP", Float, "lipophilicity", "LogP", "脂溶性 (LogP)", "Wildman-Crippen octanol/water partition coefficient"),
    entry("molar_refractivity", "CrippenMR", Float, "lipophilicity", "Molar refractivity", "モル屈折", "Wildman-Crippen molar refractivity"),
    entry("tpsa", "tpsa", Float, "surface", "Topological polar surface area", "トポロジカル極性表面積", "Ertl topological polar surface area"),
    entry("labute_asa", "labuteASA", Float, "surface", "Labute ASA", "Labute近似表面積", "Labute approximate surface area"),
    entry("num_h_donors", "NumHBD", Int, "hydrogen_bonding", "H-bond donors", "水素結合ドナー数", "Number of hydrogen bond donors"),
    entry("num_h_acceptors", "NumHBA", Int, "hydrogen_bonding", "H-bond acceptors", "水素結合アクセプター数", "Number of hydrogen bond acceptors"),
    entry("num_lipinski_h_donors", "lipinskiHBD", Int, "hydrogen_bonding", "Lipinski H-bond donors", "リピンスキー水素結合ドナー数", "NH and OH count"),
    entry("num_lipinski_h_acceptors", "lipinskiHBA", Int, "hydrogen_bonding", "Lipinski H-bond acceptors", "リピンスキー水素結合アクセプター数", "N and O count"),
    entry("num_rotatable_bonds", "NumRotatableBonds", Int, "flexibility", "Rotatable bonds", "回転可能結合数", "Number of rotatable bonds"),
    entry("fraction_csp3", "FractionCSP3", Float, "flexibility", "Fraction Csp3", "sp3炭素の割合", "Fraction of sp3 hybridized carbons"),
    entry("heavy_atom_count", "NumHeavyAtoms", Int, "atom_counts", "Heavy atom count", "重原子数", "Number of non-hydrogen atoms"),
    entry("num_atoms", "NumAtoms", Int, "atom_counts", "Atom count", "原子数", "Number of atoms including hydrogens"),
    entry("num_hetero_atoms", "NumHeteroatoms", Int, "atom_counts", "Heteroatom count", "ヘテロ原子数", "Number of atoms other than C and H"),
    entry("num_amide_bonds", "NumAmideBonds", Int, "atom_counts", "Amide bonds", "アミド結合数", "Number of amide bonds"),
    entry("num_spiro_atoms", "NumSpiroAtoms", Int, "atom_counts", "Spiro atoms", "スピロ原子数", "Number of spiro atoms"),
    entry("num_bridgehead_atoms", "NumBridgeheadAtoms", Int, "atom_counts", "Bridgehead atoms", "橋頭位原子数", "Number of bridgehead atoms"),
    entry("num_atom_stereo_centers", "NumAtomStereoCenters", Int, "stereochemistry", "Stereocenters", "不斉中心数", "Number of atom stereocenters"),
    entry("num_unspecified_atom_stereo_centers", "NumUnspecifiedAtomStereoCenters", Int, "stereochemistry", "Unspecified stereocenters", "未指定不斉中心数", "Number of stereocenters without assigned configuration"),
    entry("ring_count", "NumRings", Int, "rings", "Ring count", "環の数", "Number of rings (SSSR)"),
    entry("num_aromatic_rings", "NumAromaticRings", Int, "rings", "Aromatic rings", "芳香環数", "Number of aromatic rings"),
    entry("num_aliphatic_rings", "NumAliphaticRings", Int, "rings", "Aliphatic rings", "脂肪族環数", "Number of aliphatic rings"),
    entry("num_saturated_rings", "NumSaturatedRings", Int, "rings", "Saturated rings", "飽和環数", "Number of saturated rings"),
    entry("num_heterocycles", "NumHeterocycles", Int, "rings", "Heterocycles", "複素環数", "Number of rings containing a heteroatom"),
    entry("num_aromatic_heterocycles", "NumAromaticHeterocycles", Int, "rings", "Aromatic heterocycles", "芳香族複素環数", "Number of aromatic heterocycles"),
    entry("num_aliphatic_heterocycles", "NumAliphaticHeterocycles", Int, "rings", "Aliphatic heterocycles", "脂肪族複素環数", "Number of aliphatic heterocycles"),
    entry("num_saturated_heterocycles", "NumSaturatedHeterocycles", Int, "rings", "Saturated heterocycles", "飽和複素環数", "Number of saturated heterocycles"),
    entry("chi0n", "chi0n", Float, "topological", "Chi0n", "連結性指数 χ0n", "Kier-Hall connectivity index"),
    entry("chi0v", "chi0v", Float, "topological", "Chi0v", "連結性指数 χ0v", "Kier-Hall valence connectivity index"),
    entry("chi1n", "chi1n", Float, "topological", "Chi1n", "連結性指数 χ1n", "Kier-Hall connectivity index"),
    entry("chi1v", "chi1v", Float, "topological", "Chi1v", "連結性指数 χ1v", "Kier-Hall valence connectivity index"),
    entry("chi2n", "chi2n", Float, "topological", "Chi2n", "連結性指数 χ2n", "Kier-Hall connectivity index"),
    entry("chi2v", "chi2v", Float, "topological", "Chi2v", "連結性指数 χ2v", "Kier-Hall valence connectivity index"),
    entry("chi3n", "chi3n", Float, "topological", "Chi3n", "連結性指数 χ3n", "Kier-Hall connectivity index"),
    entry("chi3v", "chi3v", Float, "topological", "Chi3v", "連結性指数 χ3v", "Kier-Hall valence connectivity index"),
    entry("chi4n", "chi4n", Float, "topological", "Chi4n", "連結性指数 χ4n", "Kier-Hall connectivity index"),
    entry("chi4v", "chi4v", Float, "topological", "Chi4v", "連結性指数 χ4v", "Kier-Hall valence connectivity index"),
    entry("kappa1", "kappa1", Float, "topological", "Kappa1", "形状指数 κ1", "Kier first shape index"),
    entry("kappa2", "kappa2", Float, "topological", "Kappa2", "形状指数 κ2", "Kier second shape index"),
    entry("kappa3", "kappa3", Float, "topological", "Kappa3", "形状指数 κ3", "Kier third shape index"),
    entry("hall_kier_alpha", "hallKierAlpha", Float, "topological", "Hall-Kier alpha", "Hall-Kier α", "Hall-Kier alpha value"),
    entry("phi", "Phi", Float, "topological", "Phi", "柔軟性指数 Φ", "Kier molecular flexibility index"),
];

/// Registry of every descriptor the aggregator computes, in registration order.
#[derive(Debug, Clone, Default)]
pub struct DescriptorCatalog {
    specs: Vec<DescriptorSpec>,
}

impl DescriptorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The descriptors every toolkit is expected to provide.
    pub fn core() -> Self {
        let mut catalog = Self::new();
        for d in CORE_DESCRIPTORS.iter() {
            catalog.register(DescriptorSpec {
                key: d.key.to_string(),
                names: DisplayNames {
                    en: d.en.to_string(),
                    ja: d.ja.to_string(),
                },
                category: d.category.to_string(),
                description: d.description.to_string(),
                kind: d.kind,
                capability: d.capability.to_string(),
            });
        }
        catalog
    }

    /// Adds `spec`. A key that is already registered is replaced in place.
    pub fn register(&mut self, spec: DescriptorSpec) {
        match self.specs.iter_mut().find(|s| s.key == spec.key) {
            Some(existing) => {
                log::warn!("descriptor {} registered twice, keeping the later one", spec.key);
                *existing = spec;
            }
            None => self.specs.push(spec),
        }
    }

    /// Registers every toolkit capability whose name starts with `prefix` as an auxiliary
    /// descriptor, unless a descriptor already computes it. Returns how many were added.
    pub fn discover_auxiliary(&mut self, toolkit: &dyn Toolkit, prefix: &str) -> usize {
        let mut added = 0;

        for capability in toolkit.capabilities() {
            if !capability.starts_with(prefix)
                || self.specs.iter().any(|s| s.capability == capability || s.key == capability)
            {
                continue;
            }

            let description = toolkit
                .describe(&capability)
                .unwrap_or_else(|| capability.clone());

            self.specs.push(DescriptorSpec {
                key: capability.clone(),
                names: DisplayNames {
                    en: description.clone(),
                    ja: format!(
                        "フラグメント数 ({})",
                        capability.trim_start_matches(prefix)
                    ),
                },
                category: FRAGMENT_CATEGORY.to_string(),
                description,
                kind: ValueKind::Int,
                capability,
            });
            added += 1;
        }

        log::debug!(
            "discovered {} auxiliary descriptors from {}",
            added,
            toolkit.name()
        );
        added
    }

    pub fn list_descriptors(&self) -> &[DescriptorSpec] {
        &self.specs
    }

    pub fn get(&self, key: &str) -> Option<&DescriptorSpec> {
        self.specs.iter().find(|s| s.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|s| s.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
