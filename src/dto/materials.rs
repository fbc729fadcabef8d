use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate, Serialize)]
pub struct CreateRequiredMaterialRequest {
    pub style_variant_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub style_name: String,
    #[validate(length(min = 1, max = 100))]
    pub style_id: String,
    #[validate(length(min = 1, max = 200))]
    pub material: String,
    /// Base unit of measure (kg, meter, piece, ...)
    #[validate(length(min = 1, max = 50))]
    pub uom: String,
    pub consumption_per_piece: Decimal,
    /// Populated together with converted_consumption only when the caller
    /// performed a UOM conversion; no compatibility validation happens here
    pub converted_uom: Option<String>,
    pub converted_consumption: Option<Decimal>,
    pub remarks: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, Serialize)]
pub struct UpdateRequiredMaterialRequest {
    pub style_variant_id: Option<i32>,
    pub style_name: Option<String>,
    pub style_id: Option<String>,
    pub material: Option<String>,
    pub uom: Option<String>,
    pub consumption_per_piece: Option<Decimal>,
    pub converted_uom: Option<String>,
    pub converted_consumption: Option<Decimal>,
    pub remarks: Option<String>,
}
