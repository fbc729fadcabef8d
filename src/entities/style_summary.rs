use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A garment style. `buyer_id` points into the clients store and is not
/// enforced here.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "style_summaries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub buyer_id: i32,
    pub style_name: String,
    #[sea_orm(unique)]
    pub style_id: String,
    pub product_category: Option<String>,
    pub product_type: Option<String>,
    pub customs_customer_group: Option<String>,
    pub type_of_construction: Option<String>,
    pub gauge: Option<String>,
    pub style_description: Option<String>,
    pub is_set: bool,
    /// Number of pieces when the style is a set (2-6)
    pub set_piece_count: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::style_variant::Entity")]
    StyleVariants,
    #[sea_orm(has_many = "super::sample::Entity")]
    Samples,
}

impl Related<super::style_variant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StyleVariants.def()
    }
}

impl Related<super::sample::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Samples.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
