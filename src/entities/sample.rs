use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One physical sample of a style, tracked through submission rounds.
/// `buyer_id` points into the clients store (weak ref); `style_id` is a
/// same-store FK to `style_summaries.id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "samples")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub sample_id: String,
    pub buyer_id: i32,
    pub style_id: i32,
    /// Proto, Fit, PP, ...
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
    /// Submission round, starts at 1; incremented when the buyer rejects and
    /// requests a remake
    pub round: i32,
    pub notes: Option<String>,
    /// Approve, Reject and Request for remake, Proceed Next Stage With
    /// Comments, Reject & Drop, Drop
    pub submit_status: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::style_summary::Entity",
        from = "Column::StyleId",
        to = "super::style_summary::Column::Id"
    )]
    StyleSummary,
    #[sea_orm(has_many = "super::sample_operation::Entity")]
    Operations,
}

impl Related<super::style_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StyleSummary.def()
    }
}

impl Related<super::sample_operation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Operations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
