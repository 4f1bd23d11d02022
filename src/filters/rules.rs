use indexmap::IndexMap;

use crate::descriptors::FeatureRecord;
use crate::filters::RuleSetName;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    AtMost(f64),
    AtLeast(f64),
    /// Strict upper bound.
    Below(f64),
    /// Inclusive on both ends.
    Between(f64, f64),
}

impl Bound {
    pub fn holds(&self, value: f64) -> bool {
        match *self {
            Bound::AtMost(max) => value <= max,
            Bound::AtLeast(min) => value >= min,
            Bound::Below(max) => value < max,
            Bound::Between(min, max) => min <= value && value <= max,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Predicate {
    pub descriptor: &'static str,
    pub bound: Bound,
}

impl Predicate {
    const fn new(descriptor: &'static str, bound: Bound) -> Self {
        Self { descriptor, bound }
    }

    /// False when the descriptor is missing, null, non-numeric or NaN.
    pub fn evaluate(&self, record: &FeatureRecord) -> bool {
        record
            .get(self.descriptor)
            .and_then(|v| v.as_f64())
            .map(|v| self.bound.holds(v))
            .unwrap_or(false)
    }
}

/// A named conjunction of threshold predicates.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleSet {
    pub name: RuleSetName,
    pub predicates: &'static [Predicate],
}

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RuleSetOutcome {
    pub name: RuleSetName,
    pub result_key: &'static str,
    pub predicates: IndexMap<String, bool>,
    pub passed: bool,
}

impl RuleSet {
    pub fn predicate_key(&self, predicate: &Predicate) -> String {
        format!("{}_{}_ok", self.name.as_str(), predicate.descriptor)
    }

    /// Every predicate is evaluated and reported, even after one has failed.
    pub fn evaluate(&self, record: &FeatureRecord) -> RuleSetOutcome {
        let predicates = self
            .predicates
            .iter()
            .map(|p| (self.predicate_key(p), p.evaluate(record)))
            .collect::<IndexMap<_, _>>();
        let passed = predicates.values().all(|ok| *ok);

        RuleSetOutcome {
            name: self.name,
            result_key: self.name.result_key(),
            predicates,
            passed,
        }
    }
}

use Bound::*;

const LIPINSKI: [Predicate; 4] = [
    Predicate::new("molecular_weight", AtMost(500.0)),
    Predicate::new("logp", AtMost(5.0)),
    Predicate::new("num_h_donors", AtMost(5.0)),
    Predicate::new("num_h_acceptors", AtMost(10.0)),
];

const VEBER: [Predicate; 2] = [
    Predicate::new("num_rotatable_bonds", AtMost(10.0)),
    Predicate::new("tpsa", AtMost(140.0)),
];

const GHOSE: [Predicate; 4] = [
    Predicate::new("molecular_weight", Between(160.0, 480.0)),
    Predicate::new("logp", Between(-0.4, 5.6)),
    Predicate::new("heavy_atom_count", Between(20.0, 70.0)),
    Predicate::new("molar_refractivity", Between(40.0, 130.0)),
];

const EGAN: [Predicate; 2] = [
    Predicate::new("logp", AtMost(5.88)),
    Predicate::new("tpsa", AtMost(131.6)),
];

const MUEGGE: [Predicate; 7] = [
    Predicate::new("molecular_weight", Between(200.0, 600.0)),
    Predicate::new("logp", Between(-2.0, 5.0)),
    Predicate::new("tpsa", AtMost(150.0)),
    Predicate::new("ring_count", AtMost(7.0)),
    Predicate::new("num_h_acceptors", AtMost(10.0)),
    Predicate::new("num_h_donors", AtMost(5.0)),
    Predicate::new("num_rotatable_bonds", Below(15.0)),
];

/// The threshold rule-set for `name`; `None` for the structural alert filter.
pub fn rule_set(name: RuleSetName) -> Option<RuleSet> {
    let predicates: &'static [Predicate] = match name {
        RuleSetName::Lipinski => &LIPINSKI,
        RuleSetName::Veber => &VEBER,
        RuleSetName::Ghose => &GHOSE,
        RuleSetName::Egan => &EGAN,
        RuleSetName::Muegge => &MUEGGE,
        RuleSetName::Pains => return None,
    };

    Some(RuleSet { name, predicates })
}
