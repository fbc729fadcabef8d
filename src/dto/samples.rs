use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateSampleRequest {
    #[validate(length(min = 1, max = 100))]
    pub sample_id: String,
    pub buyer_id: i32,
    /// Numeric id of the owning style summary (same store)
    pub style_id: i32,
    #[validate(length(min = 1, max = 50))]
    pub sample_type: String,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<DateTime<Utc>>,
    pub yarn_rcv_date: Option<DateTime<Utc>>,
    pub required_date: Option<DateTime<Utc>>,
    pub color: Option<String>,
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

#[derive(Debug, Default, Deserialize, Validate, Serialize)]
pub struct UpdateSampleRequest {
    pub sample_type: Option<String>,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<DateTime<Utc>>,
    pub yarn_rcv_date: Option<DateTime<Utc>>,
    pub required_date: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub assigned_designer: Option<String>,
    pub required_sample_quantity: Option<i32>,
    pub notes: Option<String>,
    /// Writing "Reject and Request for remake" increments the sample's round
    /// as part of the same update
    pub submit_status: Option<String>,
}

/// Sample view with the display names resolved at read time: style_name from
/// the owning style (same store), buyer_name from the clients store when the
/// weak ref resolves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleResponse {
    pub id: i32,
    pub sample_id: String,
    pub buyer_id: i32,
    pub style_id: i32,
    pub sample_type: String,
    pub sample_description: Option<String>,
    pub item: Option<String>,
    pub gauge: Option<String>,
    pub worksheet_rcv_date: Option<DateTime<Utc>>,
    pub yarn_rcv_date: Option<DateTime<Utc>>,
    pub required_date: Option<DateTime<Utc>>,
    pub color: Option<String>,
    pub assigned_designer: Option<String>,
    pub required_sample_quantity: Option<i32>,
    pub round: i32,
    pub notes: Option<String>,
    pub submit_status: Option<String>,
    pub buyer_name: Option<String>,
    pub style_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
