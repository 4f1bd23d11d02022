use poem_openapi::payload::Json;
use rayon::prelude::*;

use crate::batch::MISSING_STRUCTURE_ERROR;
use crate::engine::Featurizer;
use crate::filters::RuleSetSelection;
use crate::rest_api::api::{EvaluateFiltersResponse, FilterEvaluation};
use crate::rest_api::models::Smiles;

pub fn v1_evaluate_filters(
    featurizer: &Featurizer,
    smiles_vec: Json<Vec<Smiles>>,
    filters: Option<&str>,
) -> EvaluateFiltersResponse {
    let selection = match filters {
        Some(filters) => RuleSetSelection::parse_list(filters),
        None => RuleSetSelection::all(),
    };

    let evaluations = smiles_vec
        .0
        .into_par_iter()
        .map(|s| {
            let record = featurizer.aggregate(&s.smiles);
            let error = match (record.error(), record.descriptor_keys().next()) {
                (Some(e), _) => Some(e.to_string()),
                (None, None) => Some(MISSING_STRUCTURE_ERROR.to_string()),
                (None, Some(_)) => None,
            };
            let report = featurizer.evaluate_filters(&record, &selection);

            FilterEvaluation {
                smiles: s.smiles,
                error,
                report: serde_json::to_value(&report).unwrap_or_default(),
            }
        })
        .collect::<Vec<_>>();

    EvaluateFiltersResponse::Ok(Json(evaluations))
}
