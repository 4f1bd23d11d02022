use poem_openapi::payload::Json;
use rayon::prelude::*;

use crate::engine::Featurizer;
use crate::filters::{RuleSetName, RuleSetSelection};
use crate::rest_api::api::{
    ComputeFeaturesResponse, FeatureListing, FilterDetail, ListFeaturesResponse, PropertyDetail,
};
use crate::rest_api::models::Smiles;

pub fn v1_list_features(featurizer: &Featurizer) -> ListFeaturesResponse {
    let property_details = featurizer
        .list_descriptors()
        .iter()
        .map(|spec| PropertyDetail {
            key: spec.key.clone(),
            name_en: spec.names.en.clone(),
            name_ja: spec.names.ja.clone(),
            category: spec.category.clone(),
            description: spec.description.clone(),
            kind: format!("{:?}", spec.kind).to_lowercase(),
        })
        .collect::<Vec<_>>();

    let filter_details = RuleSetName::ALL
        .iter()
        .map(|r| FilterDetail {
            name: r.as_str().to_string(),
            description: r.description().to_string(),
            result_key: r.result_key().to_string(),
        })
        .collect::<Vec<_>>();

    ListFeaturesResponse::Ok(Json(FeatureListing {
        properties: property_details.iter().map(|p| p.key.clone()).collect(),
        property_count: property_details.len(),
        property_details,
        filters: filter_details.iter().map(|f| f.name.clone()).collect(),
        filter_count: filter_details.len(),
        filter_details,
        message: "Available molecular features that can be calculated".to_string(),
    }))
}

pub fn v1_compute_features(
    featurizer: &Featurizer,
    smiles_vec: Json<Vec<Smiles>>,
    filters: Option<&str>,
) -> ComputeFeaturesResponse {
    let selection = filters
        .map(RuleSetSelection::parse_list)
        .unwrap_or_default();

    let records = smiles_vec
        .0
        .into_par_iter()
        .map(|s| featurizer.compute_features(&s.smiles, &selection).to_json())
        .collect::<Vec<_>>();

    ComputeFeaturesResponse::Ok(Json(records))
}
