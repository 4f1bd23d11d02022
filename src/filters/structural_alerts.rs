use serde::Serialize;

use crate::descriptors::FeatureValue;
use crate::toolkit::Molecule;

/// A substructure associated with assay interference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralAlert {
    pub description: &'static str,
    pub smarts: &'static str,
}

const fn alert(description: &'static str, smarts: &'static str) -> StructuralAlert {
    StructuralAlert {
        description,
        smarts,
    }
}

/// Representative PAINS families.
pub const PAINS_ALERTS: [StructuralAlert; 16] = [
    alert("ene_rhod_A", "S1C(=S)NC(=O)C1=C"),
    alert("rhod_sat_A", "S1C(=S)NC(=O)C1"),
    alert("quinone_A", "O=C1C=CC(=O)C=C1"),
    alert("catechol_A", "c([OH])c([OH])"),
    alert("hydroquinone_A", "[OH]c1ccc([OH])cc1"),
    alert("azo_A", "c-N=N-c"),
    alert("anil_di_alk_A", "c1ccc(cc1)N([CH2,CH3])[CH2,CH3]"),
    alert("hzone_phenol_A", "[OH]c1ccccc1[CH]=N[NH]"),
    alert("hzone_acyl", "C(=O)N[NH0]=C"),
    alert("mannich_A", "[OH]c1ccccc1C[NX3]([#6])[#6]"),
    alert("ene_cyano_A", "C=C(C#N)C#N"),
    alert("ene_one_ene_A", "C=CC(=O)C=C"),
    alert("thiophene_amino", "[NH2]c1sccc1C=O"),
    alert("indol_3yl_alk", "c1ccc2c(c1)c(C[NX3])c[nH]2"),
    alert("thio_ketone", "[#6]C(=S)[#6]"),
    alert("imine_one_A", "[#6]C(=O)C=N[#6]"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlertMatch {
    pub description: String,
    pub pattern: String,
}

impl AlertMatch {
    pub fn to_value(&self) -> FeatureValue {
        FeatureValue::Map(
            [
                ("description".to_string(), FeatureValue::from(self.description.as_str())),
                ("pattern".to_string(), FeatureValue::from(self.pattern.as_str())),
            ]
            .into_iter()
            .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralAlertOutcome {
    pub free: bool,
    /// Number of alerts that matched; `None` when screening could not run.
    pub count: Option<usize>,
    pub alerts: Vec<AlertMatch>,
}

impl StructuralAlertOutcome {
    fn unavailable() -> Self {
        Self {
            free: false,
            count: None,
            alerts: vec![],
        }
    }
}

/// Screens `mol` against `alerts`. Without a molecule, or if any pattern cannot be
/// evaluated, the outcome is not free and carries no count.
pub fn screen(mol: Option<&dyn Molecule>, alerts: &[StructuralAlert]) -> StructuralAlertOutcome {
    let mol = match mol {
        Some(mol) => mol,
        None => {
            log::warn!("structural alerts need a parsed molecule");
            return StructuralAlertOutcome::unavailable();
        }
    };

    let mut matched = Vec::new();
    for alert in alerts {
        match mol.substructure_matches(alert.smarts) {
            Ok(0) => {}
            Ok(_) => matched.push(AlertMatch {
                description: alert.description.to_string(),
                pattern: alert.smarts.to_string(),
            }),
            Err(e) => {
                log::error!("could not evaluate alert {}: {}", alert.description, e);
                return StructuralAlertOutcome::unavailable();
            }
        }
    }

    StructuralAlertOutcome {
        free: matched.is_empty(),
        count: Some(matched.len()),
        alerts: matched,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Matches exactly the patterns it was built with.
    struct Matching(Vec<&'static str>);

    impl Molecule for Matching {
        fn compute(&self, capability: &str) -> eyre::Result<FeatureValue> {
            Err(eyre::eyre!("{} not available", capability))
        }

        fn substructure_matches(&self, smarts: &str) -> eyre::Result<usize> {
            if smarts.contains("C#N") {
                return Err(eyre::eyre!("bad pattern"));
            }
            Ok(self.0.iter().filter(|s| **s == smarts).count())
        }
    }

    #[test]
    fn test_no_matches_is_free() {
        let outcome = screen(Some(&Matching(vec![])), &PAINS_ALERTS[..5]);
        assert!(outcome.free);
        assert_eq!(outcome.count, Some(0));
        assert!(outcome.alerts.is_empty());
    }

    #[test]
    fn test_matches_are_reported() {
        let mol = Matching(vec!["c([OH])c([OH])", "[OH]c1ccc([OH])cc1"]);
        let outcome = screen(Some(&mol), &PAINS_ALERTS[..5]);
        assert!(!outcome.free);
        assert_eq!(outcome.count, Some(2));
        assert_eq!(outcome.alerts[0].description, "catechol_A");
        assert_eq!(outcome.alerts[1].pattern, "[OH]c1ccc([OH])cc1");
    }

    #[test]
    fn test_fails_closed() {
        let outcome = screen(None, &PAINS_ALERTS);
        assert!(!outcome.free);
        assert_eq!(outcome.count, None);

        // ene_cyano_A is rejected by the stub
        let outcome = screen(Some(&Matching(vec![])), &PAINS_ALERTS);
        assert!(!outcome.free);
        assert_eq!(outcome.count, None);
    }

    #[test]
    fn test_alert_match_value() {
        let value = AlertMatch {
            description: "azo_A".to_string(),
            pattern: "c-N=N-c".to_string(),
        }
        .to_value();
        assert_eq!(
            serde_json::to_value(&value).unwrap(),
            serde_json::json!({"description": "azo_A", "pattern": "c-N=N-c"})
        );
    }
}
