use poem_openapi::{payload::Json, ApiResponse, Object};

use crate::rest_api::models::ErrorResponse;

#[derive(ApiResponse, Debug)]
pub enum ListFeaturesResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<FeatureListing>),
}

#[derive(ApiResponse, Debug)]
pub enum ComputeFeaturesResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<Vec<serde_json::Value>>),
}

#[derive(ApiResponse, Debug)]
pub enum EvaluateFiltersResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<Vec<FilterEvaluation>>),
}

#[derive(ApiResponse, Debug)]
pub enum BatchResponse {
    #[oai(status = "200", content_type = "application/json")]
    Ok(Json<BatchResult>),
    #[oai(status = "400", content_type = "application/json")]
    Err(Json<ErrorResponse>),
}

#[derive(Object, Debug, Clone, PartialEq, serde::Serialize)]
pub struct PropertyDetail {
    pub key: String,
    pub name_en: String,
    pub name_ja: String,
    pub category: String,
    pub description: String,
    pub kind: String,
}

#[derive(Object, Debug, Clone, PartialEq, serde::Serialize)]
pub struct FilterDetail {
    pub name: String,
    pub description: String,
    pub result_key: String,
}

#[derive(Object, Debug, Clone, PartialEq, serde::Serialize)]
pub struct FeatureListing {
    pub properties: Vec<String>,
    pub property_count: usize,
    pub property_details: Vec<PropertyDetail>,
    pub filters: Vec<String>,
    pub filter_count: usize,
    pub filter_details: Vec<FilterDetail>,
    pub message: String,
}

#[derive(Object, Debug, Clone, PartialEq, serde::Serialize)]
pub struct FilterEvaluation {
    pub smiles: String,
    #[oai(skip_serializing_if_is_none)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub report: serde_json::Value,
}

#[derive(Object, Debug, Clone, PartialEq, serde::Serialize)]
pub struct BatchRequestBody {
    pub csv_content: String,
    pub smiles_column: Option<String>,
    pub properties: Option<Vec<String>>,
    pub filters: Option<Vec<String>>,
}

#[derive(Object, Debug, Clone, PartialEq, serde::Serialize)]
pub struct BatchResult {
    pub result: String,
    pub message: String,
    pub structure_column: String,
    pub properties_added: Vec<String>,
    pub filters_applied: Vec<String>,
}
