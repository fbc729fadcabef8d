use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One manufacturing operation of a sample (knitting, linking, ...).
/// `total_duration` is always recomputed as number_of_operation * duration,
/// never trusted from caller input.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sample_operations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub sample_id: i32,
    /// Knitting, Linking, Trimming, Mending, ...
    pub operation_type: String,
    /// Front Part, Back Part, Sleeve, ...
    pub name_of_operation: String,
    pub number_of_operation: i32,
    pub size: Option<String>,
    /// Minutes
    pub duration: Option<f64>,
    pub total_duration: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sample::Entity",
        from = "Column::SampleId",
        to = "super::sample::Column::Id"
    )]
    Sample,
}

impl Related<super::sample::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sample.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
