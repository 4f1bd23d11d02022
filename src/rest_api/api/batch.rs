use poem_openapi::payload::Json;

use crate::batch::{process_csv, BatchEnvelope, BatchRequest};
use crate::engine::Featurizer;
use crate::rest_api::api::{BatchRequestBody, BatchResponse, BatchResult};
use crate::rest_api::models::ErrorResponse;

pub fn v1_process_batch(featurizer: &Featurizer, body: Json<BatchRequestBody>) -> BatchResponse {
    let request = BatchRequest {
        csv_content: body.0.csv_content,
        smiles_column: body.0.smiles_column,
        properties: body.0.properties,
        filters: body.0.filters,
    };

    match process_csv(featurizer, &request) {
        BatchEnvelope::Success(success) => BatchResponse::Ok(Json(BatchResult {
            result: success.result,
            message: success.message,
            structure_column: success.structure_column,
            properties_added: success.properties_added,
            filters_applied: success.filters_applied,
        })),
        BatchEnvelope::Failure { error } => BatchResponse::Err(Json(ErrorResponse::from(error))),
    }
}
