use poem_openapi_derive::Object;

#[derive(Object, Debug, Clone, PartialEq, serde::Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl From<String> for ErrorResponse {
    fn from(error: String) -> Self {
        Self { error }
    }
}
