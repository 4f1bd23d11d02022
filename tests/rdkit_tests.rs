#![cfg(feature = "rdkit")]

use std::sync::Arc;

use molprops::descriptors::FeatureValue;
use molprops::engine::Featurizer;
use molprops::filters::RuleSetSelection;
use molprops::toolkit::rdkit_toolkit::RdkitToolkit;

const ASPIRIN: &str = "CC(=O)OC1=CC=CC=C1C(=O)O";

fn featurizer() -> Featurizer {
    Featurizer::new(Arc::new(RdkitToolkit::new()))
}

#[test]
fn test_aspirin_descriptors() {
    let record = featurizer().aggregate(ASPIRIN);

    let amw = record.get("molecular_weight").and_then(FeatureValue::as_f64).unwrap();
    assert!((amw - 180.159).abs() < 1e-3, "{amw}");
    assert_eq!(record.get("formula"), Some(&FeatureValue::from("C9H8O4")));
    assert_eq!(record.get("num_h_donors"), Some(&FeatureValue::Int(1)));
    assert_eq!(record.get("num_h_acceptors"), Some(&FeatureValue::Int(3)));
    assert_eq!(record.get("fr_ester"), Some(&FeatureValue::Int(1)));
    assert_eq!(record.get("fr_benzene"), Some(&FeatureValue::Int(1)));
}

#[test]
fn test_aspirin_is_pains_free() {
    let record = featurizer().compute_features(ASPIRIN, &RuleSetSelection::all());
    assert_eq!(record.get("pains_free"), Some(&FeatureValue::Bool(true)));
    assert_eq!(record.get("pains_alert_count"), Some(&FeatureValue::Int(0)));
    assert_eq!(record.get("lipinski_rule_passed"), Some(&FeatureValue::Bool(true)));
    assert_eq!(record.get("all_filters_passed"), Some(&FeatureValue::Bool(false)));
}

#[test]
fn test_catechol_alert() {
    let record = featurizer().compute_features("Oc1ccccc1O", &RuleSetSelection::parse(["pains"]));
    assert_eq!(record.get("pains_free"), Some(&FeatureValue::Bool(false)));

    let alerts = match record.get("pains_alerts") {
        Some(FeatureValue::List(alerts)) => alerts.clone(),
        other => panic!("unexpected alerts {:?}", other),
    };
    assert!(alerts.iter().any(|a| match a {
        FeatureValue::Map(m) => m.get("description") == Some(&FeatureValue::from("catechol_A")),
        _ => false,
    }));
}

#[test]
fn test_invalid_smiles() {
    let record = featurizer().aggregate("C1CC(");
    assert_eq!(record.len(), 1);
}
