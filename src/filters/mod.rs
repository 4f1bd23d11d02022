//! Drug-likeness filters: five threshold rule-sets and a PAINS structural alert screen.

use std::str::FromStr;

use serde::Serialize;

use crate::descriptors::{FeatureRecord, FeatureValue, ALERT_DETAIL_KEY};
use crate::toolkit::Molecule;

pub mod rules;
pub mod structural_alerts;

pub use rules::*;
pub use structural_alerts::*;

pub const ALL: &str = "all";
pub const ALL_FILTERS_PASSED_KEY: &str = "all_filters_passed";
pub const ALERT_COUNT_KEY: &str = "pains_alert_count";

lazy_static::lazy_static! {
    static ref LIST_SEPARATOR: regex::Regex = regex::Regex::new(r"[,\s]+").unwrap();
}

/// Splits a comma and/or whitespace separated list of names.
pub fn split_names(list: &str) -> Vec<String> {
    LIST_SEPARATOR
        .split(list.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSetName {
    Lipinski,
    Veber,
    Ghose,
    Egan,
    Muegge,
    Pains,
}

impl RuleSetName {
    pub const ALL: [RuleSetName; 6] = [
        RuleSetName::Lipinski,
        RuleSetName::Veber,
        RuleSetName::Ghose,
        RuleSetName::Egan,
        RuleSetName::Muegge,
        RuleSetName::Pains,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleSetName::Lipinski => "lipinski",
            RuleSetName::Veber => "veber",
            RuleSetName::Ghose => "ghose",
            RuleSetName::Egan => "egan",
            RuleSetName::Muegge => "muegge",
            RuleSetName::Pains => "pains",
        }
    }

    pub fn result_key(&self) -> &'static str {
        match self {
            RuleSetName::Lipinski => "lipinski_rule_passed",
            RuleSetName::Veber => "veber_rule_passed",
            RuleSetName::Ghose => "ghose_filter_passed",
            RuleSetName::Egan => "egan_filter_passed",
            RuleSetName::Muegge => "muegge_filter_passed",
            RuleSetName::Pains => "pains_free",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RuleSetName::Lipinski => concat!(
                "Lipinski's rule of five: MW <= 500, LogP <= 5, ",
                "H-bond donors <= 5, H-bond acceptors <= 10"
            ),
            RuleSetName::Veber => "Veber oral bioavailability: rotatable bonds <= 10, TPSA <= 140",
            RuleSetName::Ghose => concat!(
                "Ghose filter: 160 <= MW <= 480, -0.4 <= LogP <= 5.6, ",
                "20 <= heavy atoms <= 70, 40 <= MR <= 130"
            ),
            RuleSetName::Egan => "Egan filter: LogP <= 5.88, TPSA <= 131.6",
            RuleSetName::Muegge => concat!(
                "Muegge filter: 200 <= MW <= 600, -2 <= LogP <= 5, TPSA <= 150, rings <= 7, ",
                "H-bond acceptors <= 10, H-bond donors <= 5, rotatable bonds < 15"
            ),
            RuleSetName::Pains => "PAINS structural alerts: passes when no alert matches",
        }
    }
}

impl FromStr for RuleSetName {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        RuleSetName::ALL
            .into_iter()
            .find(|r| r.as_str() == name)
            .ok_or_else(|| eyre::eyre!("unknown filter {:?}", s))
    }
}

/// The rule-sets a caller asked for, deduplicated, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSetSelection(Vec<RuleSetName>);

impl RuleSetSelection {
    pub fn all() -> Self {
        Self(RuleSetName::ALL.to_vec())
    }

    /// Unknown names are logged and dropped.
    pub fn parse<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selected = Vec::new();

        for name in names {
            let name = name.as_ref();
            if name.trim().eq_ignore_ascii_case(ALL) {
                for r in RuleSetName::ALL {
                    if !selected.contains(&r) {
                        selected.push(r);
                    }
                }
                continue;
            }

            match name.parse::<RuleSetName>() {
                Ok(r) if !selected.contains(&r) => selected.push(r),
                Ok(_) => {}
                Err(e) => log::warn!("ignoring filter: {}", e),
            }
        }

        Self(selected)
    }

    pub fn parse_list(list: &str) -> Self {
        Self::parse(split_names(list))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = RuleSetName> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, name: RuleSetName) -> bool {
        self.0.contains(&name)
    }

    pub fn names(&self) -> Vec<String> {
        self.iter().map(|r| r.as_str().to_string()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterReport {
    pub rule_sets: Vec<RuleSetOutcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structural_alerts: Option<StructuralAlertOutcome>,
    /// AND over every requested aggregate; `None` when nothing was requested.
    pub all_filters_passed: Option<bool>,
}

impl FilterReport {
    /// Writes predicate keys, aggregate keys and alert details into `record`.
    pub fn flatten_into(&self, record: &mut FeatureRecord) {
        for outcome in &self.rule_sets {
            for (key, ok) in &outcome.predicates {
                record.insert(key.as_str(), *ok);
            }
            record.insert(outcome.result_key, outcome.passed);
        }

        if let Some(alerts) = &self.structural_alerts {
            record.insert(RuleSetName::Pains.result_key(), alerts.free);
            record.insert(ALERT_COUNT_KEY, alerts.count);
            record.insert(
                ALERT_DETAIL_KEY,
                FeatureValue::List(alerts.alerts.iter().map(AlertMatch::to_value).collect()),
            );
        }

        record.insert(ALL_FILTERS_PASSED_KEY, self.all_filters_passed);
    }
}

/// Evaluates the selected rule-sets against an aggregated record. The structural alert
/// screen also needs the parsed molecule; without one it fails closed.
pub fn evaluate_filters(
    record: &FeatureRecord,
    selection: &RuleSetSelection,
    mol: Option<&dyn Molecule>,
) -> FilterReport {
    let mut report = FilterReport::default();
    let mut aggregates = Vec::with_capacity(selection.len());

    for name in selection.iter() {
        match rule_set(name) {
            Some(rules) => {
                let outcome = rules.evaluate(record);
                aggregates.push(outcome.passed);
                report.rule_sets.push(outcome);
            }
            None => {
                let outcome = screen(mol, &PAINS_ALERTS);
                aggregates.push(outcome.free);
                report.structural_alerts = Some(outcome);
            }
        }
    }

    report.all_filters_passed = match aggregates.is_empty() {
        true => None,
        false => Some(aggregates.iter().all(|passed| *passed)),
    };

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_names() {
        assert_eq!(split_names("lipinski, veber  ghose"), vec!["lipinski", "veber", "ghose"]);
        assert!(split_names("  ").is_empty());
    }

    #[test]
    fn test_selection_parse() {
        let selection = RuleSetSelection::parse(["Lipinski", "nonsense", "veber", "lipinski"]);
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec![RuleSetName::Lipinski, RuleSetName::Veber]
        );

        let all = RuleSetSelection::parse_list("veber,all");
        assert_eq!(all.len(), 6);
        assert_eq!(all.names()[0], "veber");
        assert_eq!(all, {
            let mut expected = RuleSetSelection::parse(["veber"]);
            expected.0.extend(RuleSetName::ALL.into_iter().filter(|r| *r != RuleSetName::Veber));
            expected
        });
    }

    #[test]
    fn test_nothing_requested() {
        let record = FeatureRecord::new("CCO");
        let report = evaluate_filters(&record, &RuleSetSelection::default(), None);
        assert!(report.rule_sets.is_empty());
        assert_eq!(report.all_filters_passed, None);

        let mut flat = record.clone();
        report.flatten_into(&mut flat);
        assert_eq!(flat.get(ALL_FILTERS_PASSED_KEY), Some(&FeatureValue::Null));
    }

    #[test]
    fn test_flatten() {
        let mut record = FeatureRecord::new("CCO");
        record.insert("num_rotatable_bonds", 0_i64);
        record.insert("tpsa", 20.23);

        let selection = RuleSetSelection::parse(["veber", "pains"]);
        let report = evaluate_filters(&record, &selection, None);
        assert_eq!(report.all_filters_passed, Some(false));

        report.flatten_into(&mut record);
        let keys = record.keys().map(String::as_str).collect::<Vec<_>>();
        assert_eq!(
            keys,
            vec![
                "smiles",
                "num_rotatable_bonds",
                "tpsa",
                "veber_num_rotatable_bonds_ok",
                "veber_tpsa_ok",
                "veber_rule_passed",
                "pains_free",
                "pains_alert_count",
                "pains_alerts",
                "all_filters_passed",
            ]
        );
        assert_eq!(record.get("veber_rule_passed"), Some(&FeatureValue::Bool(true)));
        assert_eq!(record.get("pains_free"), Some(&FeatureValue::Bool(false)));
        assert_eq!(record.get("pains_alert_count"), Some(&FeatureValue::Null));
    }
}
