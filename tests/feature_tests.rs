mod common;

use common::{featurizer, ASPIRIN, CATECHOL, ETHANOL};
use molprops::descriptors::{FeatureValue, FRAGMENT_CATEGORY};
use molprops::engine::FeaturizerOptions;
use molprops::filters::RuleSetSelection;

#[test]
fn test_aggregate_echoes_smiles() {
    let featurizer = featurizer();
    for smiles in [ASPIRIN, ETHANOL, CATECHOL] {
        let record = featurizer.aggregate(smiles);
        assert_eq!(record.smiles(), Some(smiles));
        assert!(record.error().is_none());
    }
}

#[test]
fn test_aggregate_covers_catalog() {
    let featurizer = featurizer();
    let record = featurizer.aggregate(ASPIRIN);

    let keys = record.descriptor_keys().cloned().collect::<Vec<_>>();
    let expected = featurizer
        .catalog()
        .keys()
        .map(str::to_string)
        .collect::<Vec<_>>();
    assert_eq!(keys, expected);

    assert_eq!(record.get("formula"), Some(&FeatureValue::from("C9H8O4")));
    assert_eq!(record.get("num_h_donors"), Some(&FeatureValue::Int(1)));
    assert_eq!(record.get("num_h_acceptors"), Some(&FeatureValue::Int(3)));
    assert_eq!(record.get("fr_ester"), Some(&FeatureValue::Int(1)));
    // the fixture does not export kappa indices
    assert_eq!(record.get("kappa1"), Some(&FeatureValue::Null));
}

#[test]
fn test_unparseable_input() {
    let featurizer = featurizer();

    let record = featurizer.aggregate("C1CC(");
    assert_eq!(record.len(), 1);
    assert_eq!(record.smiles(), Some("C1CC("));

    let record = featurizer.aggregate("");
    assert_eq!(record.error(), Some("empty or invalid"));
    assert_eq!(record.descriptor_keys().count(), 0);
}

#[test]
fn test_aggregate_is_repeatable() {
    let featurizer = featurizer();
    assert_eq!(featurizer.aggregate(ASPIRIN), featurizer.aggregate(ASPIRIN));
}

#[test]
fn test_auxiliary_descriptors() {
    let featurizer = featurizer();
    let ester = featurizer.catalog().get("fr_ester").unwrap();
    assert_eq!(ester.category, FRAGMENT_CATEGORY);
    assert_eq!(ester.description, "Number of esters");
    assert!(featurizer.catalog().contains("fr_benzene"));

    let without = molprops::engine::Featurizer::with_options(
        std::sync::Arc::new(common::FixtureToolkit::new()),
        &FeaturizerOptions {
            auxiliary_descriptors: false,
            ..Default::default()
        },
    );
    assert!(!without.catalog().contains("fr_ester"));
    assert_eq!(without.catalog().len() + 2, featurizer.catalog().len());
}

#[test]
fn test_compute_features_flattens_filters() {
    let featurizer = featurizer();
    let selection = RuleSetSelection::parse(["lipinski", "pains"]);
    let record = featurizer.compute_features(ASPIRIN, &selection);

    assert_eq!(record.get("lipinski_molecular_weight_ok"), Some(&FeatureValue::Bool(true)));
    assert_eq!(record.get("lipinski_rule_passed"), Some(&FeatureValue::Bool(true)));
    assert_eq!(record.get("pains_free"), Some(&FeatureValue::Bool(true)));
    assert_eq!(record.get("pains_alert_count"), Some(&FeatureValue::Int(0)));
    assert_eq!(record.get("pains_alerts"), Some(&FeatureValue::List(vec![])));
    assert_eq!(record.get("all_filters_passed"), Some(&FeatureValue::Bool(true)));

    let plain = featurizer.compute_features(ASPIRIN, &RuleSetSelection::default());
    assert_eq!(plain, featurizer.aggregate(ASPIRIN));
}
