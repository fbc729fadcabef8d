use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateSampleOperationRequest {
    pub sample_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub operation_type: String,
    #[validate(length(min = 1, max = 200))]
    pub name_of_operation: String,
    #[serde(default = "default_number_of_operation")]
    #[validate(range(min = 1))]
    pub number_of_operation: i32,
    pub size: Option<String>,
    /// Minutes
    pub duration: Option<f64>,
    /// Ignored: total duration is always recomputed server-side
    pub total_duration: Option<f64>,
}

fn default_number_of_operation() -> i32 {
    1
}

#[derive(Debug, Default, Deserialize, Validate, Serialize)]
pub struct UpdateSampleOperationRequest {
    pub operation_type: Option<String>,
    pub name_of_operation: Option<String>,
    #[validate(range(min = 1))]
    pub number_of_operation: Option<i32>,
    pub size: Option<String>,
    pub duration: Option<f64>,
    /// Ignored: total duration is always recomputed server-side
    pub total_duration: Option<f64>,
}

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateSmvCalculationRequest {
    #[validate(length(min = 1, max = 100))]
    pub sample_id: String,
    #[validate(length(min = 1, max = 200))]
    pub buyer_name: String,
    #[validate(length(min = 1, max = 200))]
    pub style_name: String,
    pub category: Option<String>,
    pub gauge: Option<String>,
    pub total_smv: f64,
    /// Serialized operations breakdown, stored as an opaque blob
    pub operations: Option<String>,
}
