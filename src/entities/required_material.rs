use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-variant material consumption line. The converted pair is populated
/// only when a user performs a UOM conversion; both fields stay null
/// otherwise.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "required_materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub style_variant_id: i32,
    pub style_name: String,
    pub style_id: String,
    pub material: String,
    pub uom: String,
    pub consumption_per_piece: Decimal,
    pub converted_uom: Option<String>,
    pub converted_consumption: Option<Decimal>,
    pub remarks: Option<String>,
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
