use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateOperationTypeRequest {
    #[validate(length(min = 1, max = 100))]
    pub operation_type: String,
    #[validate(length(min = 1, max = 200))]
    pub operation_name: String,
}

/// Operation type update is a full replace, matching the legacy contract.
pub type ReplaceOperationTypeRequest = CreateOperationTypeRequest;

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateGarmentColorRequest {
    #[validate(length(min = 1, max = 100))]
    pub color_name: String,
    #[validate(length(min = 1, max = 20))]
    pub color_code: String,
    pub color_ref: Option<String>,
    pub category: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, Validate, Serialize)]
pub struct UpdateGarmentColorRequest {
    pub color_name: Option<String>,
    pub color_code: Option<String>,
    pub color_ref: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateGarmentSizeRequest {
    #[validate(length(min = 1, max = 20))]
    pub size_value: String,
    pub size_label: Option<String>,
    pub size_category: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Debug, Default, Deserialize, Validate, Serialize)]
pub struct UpdateGarmentSizeRequest {
    pub size_value: Option<String>,
    pub size_label: Option<String>,
    pub size_category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}
