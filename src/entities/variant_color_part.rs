use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One named region (Body, Collar, Sleeves, ...) of a multi-color variant.
/// Exclusively owned by its variant and removed with it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "style_variant_colors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub style_variant_id: i32,
    pub part_name: String,
    pub colour_name: String,
    pub colour_code: Option<String>,
    pub colour_ref: Option<String>,
    /// Display order within the variant
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::style_variant::Entity",
        from = "Column::StyleVariantId",
        to = "super::style_variant::Column::Id"
    )]
    StyleVariant,
}

impl Related<super::style_variant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StyleVariant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
