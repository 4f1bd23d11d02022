use poem::web::Data;
use poem_openapi::{param::Query, payload::Json, OpenApi};

use crate::engine::Featurizer;
use crate::rest_api::api::{
    v1_compute_features, v1_evaluate_filters, v1_list_features, v1_process_batch,
    BatchRequestBody, BatchResponse, ComputeFeaturesResponse, EvaluateFiltersResponse,
    ListFeaturesResponse,
};
use crate::rest_api::models::Smiles;

#[derive(Default)]
pub struct ApiV1 {}

#[OpenApi]
impl ApiV1 {
    #[oai(path = "/v1/features", method = "get")]
    /// List every descriptor with its English and Japanese names, and every filter
    pub async fn v1_list_features(&self, featurizer: Data<&Featurizer>) -> ListFeaturesResponse {
        v1_list_features(featurizer.0)
    }

    // v1/features?filters=lipinski,pains
    #[oai(path = "/v1/features", method = "post")]
    /// Compute all descriptors for a list of SMILES, optionally with the named filters
    /// ("all" selects every filter) flattened into each record
    pub async fn v1_compute_features(
        &self,
        smiles: Json<Vec<Smiles>>,
        filters: Query<Option<String>>,
        featurizer: Data<&Featurizer>,
    ) -> ComputeFeaturesResponse {
        v1_compute_features(featurizer.0, smiles, filters.0.as_deref())
    }

    #[oai(path = "/v1/filters", method = "post")]
    /// Evaluate drug-likeness filters for a list of SMILES. Defaults to every filter
    pub async fn v1_evaluate_filters(
        &self,
        smiles: Json<Vec<Smiles>>,
        filters: Query<Option<String>>,
        featurizer: Data<&Featurizer>,
    ) -> EvaluateFiltersResponse {
        v1_evaluate_filters(featurizer.0, smiles, filters.0.as_deref())
    }

    #[oai(path = "/v1/batch", method = "post")]
    /// Append descriptor and filter columns to CSV content
    pub async fn v1_process_batch(
        &self,
        body: Json<BatchRequestBody>,
        featurizer: Data<&Featurizer>,
    ) -> BatchResponse {
        v1_process_batch(featurizer.0, body)
    }
}
