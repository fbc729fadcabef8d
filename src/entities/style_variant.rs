use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A colorway of a style. Single-color variants carry `colour_name` directly;
/// multi-color variants are composed of ordered `variant_color_part` children.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "style_variants")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub style_summary_id: i32,
    pub style_name: String,
    pub style_id: String,
    pub colour_name: String,
    pub colour_code: Option<String>,
    pub colour_ref: Option<String>,
    pub is_multicolor: bool,
    pub display_name: Option<String>,
    /// For set pieces (e.g. "Top", "Bottom", "Jacket")
    pub piece_name: Option<String>,
    /// Array of applicable size labels (e.g. ["S", "M", "L"])
    #[sea_orm(column_type = "Json", nullable)]
    pub sizes: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::style_summary::Entity",
        from = "Column::StyleSummaryId",
        to = "super::style_summary::Column::Id"
    )]
    StyleSummary,
    #[sea_orm(has_many = "super::variant_color_part::Entity")]
    ColorParts,
    #[sea_orm(has_many = "super::required_material::Entity")]
    RequiredMaterials,
}

impl Related<super::style_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StyleSummary.def()
    }
}

impl Related<super::variant_color_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ColorParts.def()
    }
}

impl Related<super::required_material::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequiredMaterials.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
