use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateSampleTnaRequest {
    #[validate(length(min = 1, max = 100))]
    pub sample_id: String,
    #[validate(length(min = 1, max = 200))]
    pub buyer_name: String,
    #[validate(length(min = 1, max = 200))]
    pub style_name: String,
    #[validate(length(min = 1, max = 50))]
    pub sample_type: String,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<String>,
    pub yarn_rcv_date: Option<String>,
    pub required_date: Option<String>,
    pub color: Option<String>,
    pub piece_name: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, Serialize)]
pub struct UpdateSampleTnaRequest {
    pub sample_id: Option<String>,
    pub buyer_name: Option<String>,
    pub style_name: Option<String>,
    pub sample_type: Option<String>,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<String>,
    pub yarn_rcv_date: Option<String>,
    pub required_date: Option<String>,
    pub color: Option<String>,
    pub piece_name: Option<String>,
    pub notes: Option<String>,
}

/// Full plan payload. Create is an upsert keyed by sample_id: when a row
/// exists, every field below overwrites it (replace, not merge).
#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct UpsertSamplePlanRequest {
    #[validate(length(min = 1, max = 100))]
    pub sample_id: String,
    #[validate(length(min = 1, max = 200))]
    pub buyer_name: String,
    #[validate(length(min = 1, max = 200))]
    pub style_name: String,
    #[validate(length(min = 1, max = 50))]
    pub sample_type: String,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<String>,
    pub yarn_rcv_date: Option<String>,
    pub required_date: Option<String>,
    pub color: Option<String>,
    pub piece_name: Option<String>,
    pub assigned_designer: Option<String>,
    pub required_sample_quantity: Option<i32>,
    #[serde(default = "default_round")]
    pub round: i32,
    pub notes: Option<String>,
    pub submit_status: Option<String>,
}

fn default_round() -> i32 {
    1
}
