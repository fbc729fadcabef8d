use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateStyleRequest {
    pub buyer_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub style_name: String,
    #[validate(length(min = 1, max = 100))]
    pub style_id: String,
    pub product_category: Option<String>,
    pub product_type: Option<String>,
    pub customs_customer_group: Option<String>,
    pub type_of_construction: Option<String>,
    pub gauge: Option<String>,
    pub style_description: Option<String>,
    #[serde(default)]
    pub is_set: bool,
    /// Number of pieces in a set
    #[validate(range(min = 2, max = 6))]
    pub set_piece_count: Option<i32>,
}

#[derive(Debug, Default, Deserialize, Validate, Serialize)]
pub struct UpdateStyleRequest {
    pub buyer_id: Option<i32>,
    pub style_name: Option<String>,
    pub style_id: Option<String>,
    pub product_category: Option<String>,
    pub product_type: Option<String>,
    pub customs_customer_group: Option<String>,
    pub type_of_construction: Option<String>,
    pub gauge: Option<String>,
    pub style_description: Option<String>,
    pub is_set: Option<bool>,
    #[validate(range(min = 2, max = 6))]
    pub set_piece_count: Option<i32>,
}

/// Payload for one color part of a garment (Body, Collar, Sleeves, ...)
#[derive(Debug, Clone, Deserialize, Validate, Serialize)]
pub struct ColorPartBody {
    #[validate(length(min = 1, max = 100))]
    pub part_name: String,
    #[validate(length(min = 1, max = 100))]
    pub colour_name: String,
    pub colour_code: Option<String>,
    pub colour_ref: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateStyleVariantRequest {
    pub style_summary_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub style_name: String,
    #[validate(length(min = 1, max = 100))]
    pub style_id: String,
    /// For multi-color variants this is a placeholder (e.g. "Multi")
    #[validate(length(min = 1, max = 100))]
    pub colour_name: String,
    pub colour_code: Option<String>,
    pub colour_ref: Option<String>,
    #[serde(default)]
    pub is_multicolor: bool,
    pub display_name: Option<String>,
    pub piece_name: Option<String>,
    pub sizes: Option<Vec<String>>,
    /// Accepted for API compatibility but not persisted by variant create:
    /// parts are a read-time relationship, written through the color-parts
    /// sub-resource.
    pub color_parts: Option<Vec<ColorPartBody>>,
}

#[derive(Debug, Default, Deserialize, Validate, Serialize)]
pub struct UpdateStyleVariantRequest {
    pub style_summary_id: Option<i32>,
    pub style_name: Option<String>,
    pub style_id: Option<String>,
    pub colour_name: Option<String>,
    pub colour_code: Option<String>,
    pub colour_ref: Option<String>,
    pub is_multicolor: Option<bool>,
    pub display_name: Option<String>,
    pub piece_name: Option<String>,
    pub sizes: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorPartResponse {
    pub id: i32,
    pub style_variant_id: i32,
    pub part_name: String,
    pub colour_name: String,
    pub colour_code: Option<String>,
    pub colour_ref: Option<String>,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Variant view with the read-time computed fields: ordered color parts,
/// full color description and the parent style's category/gauge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleVariantResponse {
    pub id: i32,
    pub style_summary_id: i32,
    pub style_name: String,
    pub style_id: String,
    pub colour_name: String,
    pub colour_code: Option<String>,
    pub colour_ref: Option<String>,
    pub is_multicolor: bool,
    pub display_name: Option<String>,
    pub piece_name: Option<String>,
    pub sizes: Option<Vec<String>>,
    pub style_category: Option<String>,
    pub gauge: Option<String>,
    pub color_parts: Vec<ColorPartResponse>,
    pub full_color_description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
