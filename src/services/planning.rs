use crate::{
    db::DbPool,
    dto::planning::{CreateSampleTnaRequest, UpdateSampleTnaRequest, UpsertSamplePlanRequest},
    entities::{
        sample_plan, sample_plan::Entity as SamplePlanEntity, sample_tna,
        sample_tna::Entity as SampleTnaEntity,
    },
    errors::ServiceError,
};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;
use tracing::instrument;

/// Service for the TNA and plan scheduling snapshots.
///
/// The two records carry different write contracts: TNA updates are partial
/// merges, while plan creation is a full-replace upsert keyed by sample_id.
#[derive(Clone)]
pub struct PlanningService {
    db_pool: Arc<DbPool>,
}

impl PlanningService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    fn connection(&self) -> &DatabaseConnection {
        self.db_pool.as_ref()
    }

    /// Creates a TNA record. Multiple records per sample_id are allowed (one
    /// per set piece).
    #[instrument(skip(self, req))]
    pub async fn create_tna(
        &self,
        req: CreateSampleTnaRequest,
    ) -> Result<sample_tna::Model, ServiceError> {
        let model = sample_tna::ActiveModel {
            id: Default::default(),
            sample_id: Set(req.sample_id),
            buyer_name: Set(req.buyer_name),
            style_name: Set(req.style_name),
            sample_type: Set(req.sample_type),
            sample_description: Set(req.sample_description),
            item: Set(req.item),
            gauge: Set(req.gauge),
            worksheet_rcv_date: Set(req.worksheet_rcv_date),
            yarn_rcv_date: Set(req.yarn_rcv_date),
            required_date: Set(req.required_date),
            color: Set(req.color),
            piece_name: Set(req.piece_name),
            notes: Set(req.notes),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        model
            .insert(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn list_tna(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<sample_tna::Model>, ServiceError> {
        SampleTnaEntity::find()
            .order_by_desc(sample_tna::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get_tna_by_sample_id(
        &self,
        sample_id: &str,
    ) -> Result<Option<sample_tna::Model>, ServiceError> {
        SampleTnaEntity::find()
            .filter(sample_tna::Column::SampleId.eq(sample_id))
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Partial merge update of a TNA record by numeric id.
    #[instrument(skip(self, req))]
    pub async fn update_tna(
        &self,
        id: i32,
        req: UpdateSampleTnaRequest,
    ) -> Result<sample_tna::Model, ServiceError> {
        let db = self.connection();
        let model = SampleTnaEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("TNA record {} not found", id)))?;

        let mut active = model.into_active_model();
        if let Some(sample_id) = req.sample_id {
            active.sample_id = Set(sample_id);
        }
        if let Some(buyer_name) = req.buyer_name {
            active.buyer_name = Set(buyer_name);
        }
        if let Some(style_name) = req.style_name {
            active.style_name = Set(style_name);
        }
        if let Some(sample_type) = req.sample_type {
            active.sample_type = Set(sample_type);
        }
        if let Some(description) = req.sample_description {
            active.sample_description = Set(Some(description));
        }
        if let Some(item) = req.item {
            active.item = Set(Some(item));
        }
        if let Some(gauge) = req.gauge {
            active.gauge = Set(Some(gauge));
        }
        if let Some(date) = req.worksheet_rcv_date {
            active.worksheet_rcv_date = Set(Some(date));
        }
        if let Some(date) = req.yarn_rcv_date {
            active.yarn_rcv_date = Set(Some(date));
        }
        if let Some(date) = req.required_date {
            active.required_date = Set(Some(date));
        }
        if let Some(color) = req.color {
            active.color = Set(Some(color));
        }
        if let Some(piece_name) = req.piece_name {
            active.piece_name = Set(Some(piece_name));
        }
        if let Some(notes) = req.notes {
            active.notes = Set(Some(notes));
        }
        active.updated_at = Set(Some(Utc::now()));

        active.update(db).await.map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_tna(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = SampleTnaEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("TNA record {} not found", id)))?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    /// Find-or-overwrite keyed by sample_id: when a plan exists, every field
    /// of the incoming payload replaces the stored row (no merge); otherwise
    /// a new row is inserted. At most one plan per sample_id.
    #[instrument(skip(self, req))]
    pub async fn upsert_plan(
        &self,
        req: UpsertSamplePlanRequest,
    ) -> Result<sample_plan::Model, ServiceError> {
        let db = self.connection();
        let existing = SamplePlanEntity::find()
            .filter(sample_plan::Column::SampleId.eq(req.sample_id.clone()))
            .one(db)
            .await
            .map_err(ServiceError::db_error)?;

        match existing {
            Some(model) => {
                let mut active = model.into_active_model();
                active.sample_id = Set(req.sample_id);
                active.buyer_name = Set(req.buyer_name);
                active.style_name = Set(req.style_name);
                active.sample_type = Set(req.sample_type);
                active.sample_description = Set(req.sample_description);
                active.item = Set(req.item);
                active.gauge = Set(req.gauge);
                active.worksheet_rcv_date = Set(req.worksheet_rcv_date);
                active.yarn_rcv_date = Set(req.yarn_rcv_date);
                active.required_date = Set(req.required_date);
                active.color = Set(req.color);
                active.piece_name = Set(req.piece_name);
                active.assigned_designer = Set(req.assigned_designer);
                active.required_sample_quantity = Set(req.required_sample_quantity);
                active.round = Set(req.round);
                active.notes = Set(req.notes);
                active.submit_status = Set(req.submit_status);
                active.updated_at = Set(Some(Utc::now()));

                active.update(db).await.map_err(ServiceError::db_error)
            }
            None => {
                let model = sample_plan::ActiveModel {
                    id: Default::default(),
                    sample_id: Set(req.sample_id),
                    buyer_name: Set(req.buyer_name),
                    style_name: Set(req.style_name),
                    sample_type: Set(req.sample_type),
                    sample_description: Set(req.sample_description),
                    item: Set(req.item),
                    gauge: Set(req.gauge),
                    worksheet_rcv_date: Set(req.worksheet_rcv_date),
                    yarn_rcv_date: Set(req.yarn_rcv_date),
                    required_date: Set(req.required_date),
                    color: Set(req.color),
                    piece_name: Set(req.piece_name),
                    assigned_designer: Set(req.assigned_designer),
                    required_sample_quantity: Set(req.required_sample_quantity),
                    round: Set(req.round),
                    notes: Set(req.notes),
                    submit_status: Set(req.submit_status),
                    created_at: Set(Utc::now()),
                    updated_at: Set(None),
                };

                model.insert(db).await.map_err(ServiceError::db_error)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list_plans(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<sample_plan::Model>, ServiceError> {
        SamplePlanEntity::find()
            .order_by_desc(sample_plan::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get_plan_by_sample_id(
        &self,
        sample_id: &str,
    ) -> Result<Option<sample_plan::Model>, ServiceError> {
        SamplePlanEntity::find()
            .filter(sample_plan::Column::SampleId.eq(sample_id))
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }
}
