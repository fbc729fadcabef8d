use crate::{
    db::DbPool,
    dto::timing::{
        CreateSampleOperationRequest, CreateSmvCalculationRequest, UpdateSampleOperationRequest,
    },
    entities::{
        sample_operation, sample_operation::Entity as SampleOperationEntity, smv_calculation,
        smv_calculation::Entity as SmvCalculationEntity,
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

/// Derives an operation's total duration. Returns the fallback (the caller's
/// value, or the stored one on update) when either input is missing.
fn derive_total_duration(
    number_of_operation: i32,
    duration: Option<f64>,
    fallback: Option<f64>,
) -> Option<f64> {
    match duration {
        Some(duration) if number_of_operation != 0 => {
            Some(f64::from(number_of_operation) * duration)
        }
        _ => fallback,
    }
}

/// Service for per-sample operation timing and SMV snapshots.
#[derive(Clone)]
pub struct TimingService {
    db_pool: Arc<DbPool>,
}

impl TimingService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    fn connection(&self) -> &DatabaseConnection {
        self.db_pool.as_ref()
    }

    /// Creates a sample operation; total_duration is derived server-side.
    #[instrument(skip(self, req))]
    pub async fn create_operation(
        &self,
        req: CreateSampleOperationRequest,
    ) -> Result<sample_operation::Model, ServiceError> {
        let total_duration =
            derive_total_duration(req.number_of_operation, req.duration, req.total_duration);

        let model = sample_operation::ActiveModel {
            id: Default::default(),
            sample_id: Set(req.sample_id),
            operation_type: Set(req.operation_type),
            name_of_operation: Set(req.name_of_operation),
            number_of_operation: Set(req.number_of_operation),
            size: Set(req.size),
            duration: Set(req.duration),
            total_duration: Set(total_duration),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        model
            .insert(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Returns operations, newest first, optionally scoped to one sample.
    #[instrument(skip(self))]
    pub async fn list_operations(
        &self,
        sample_id: Option<i32>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<sample_operation::Model>, ServiceError> {
        let mut query = SampleOperationEntity::find();
        if let Some(sample_id) = sample_id {
            query = query.filter(sample_operation::Column::SampleId.eq(sample_id));
        }
        query
            .order_by_desc(sample_operation::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get_operation(
        &self,
        id: i32,
    ) -> Result<Option<sample_operation::Model>, ServiceError> {
        SampleOperationEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Partial merge update; total_duration is re-derived from the merged
    /// inputs, overriding anything the caller supplied.
    #[instrument(skip(self, req))]
    pub async fn update_operation(
        &self,
        id: i32,
        req: UpdateSampleOperationRequest,
    ) -> Result<sample_operation::Model, ServiceError> {
        let db = self.connection();
        let model = SampleOperationEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Sample operation {} not found", id)))?;

        let merged_number = req.number_of_operation.unwrap_or(model.number_of_operation);
        let merged_duration = req.duration.or(model.duration);
        let fallback = req.total_duration.or(model.total_duration);
        let total_duration = derive_total_duration(merged_number, merged_duration, fallback);

        let mut active = model.into_active_model();
        if let Some(operation_type) = req.operation_type {
            active.operation_type = Set(operation_type);
        }
        if let Some(name) = req.name_of_operation {
            active.name_of_operation = Set(name);
        }
        active.number_of_operation = Set(merged_number);
        if let Some(size) = req.size {
            active.size = Set(Some(size));
        }
        active.duration = Set(merged_duration);
        active.total_duration = Set(total_duration);
        active.updated_at = Set(Some(Utc::now()));

        active.update(db).await.map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_operation(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = SampleOperationEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Sample operation {} not found", id)))?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    /// Records a write-once SMV snapshot. The totals and operation breakdown
    /// are taken from the caller as-is, never recomputed from live rows.
    #[instrument(skip(self, req))]
    pub async fn create_smv(
        &self,
        req: CreateSmvCalculationRequest,
    ) -> Result<smv_calculation::Model, ServiceError> {
        let model = smv_calculation::ActiveModel {
            id: Default::default(),
            sample_id: Set(req.sample_id),
            buyer_name: Set(req.buyer_name),
            style_name: Set(req.style_name),
            category: Set(req.category),
            gauge: Set(req.gauge),
            total_smv: Set(req.total_smv),
            operations: Set(req.operations),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        model
            .insert(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn list_smv(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<smv_calculation::Model>, ServiceError> {
        SmvCalculationEntity::find()
            .order_by_desc(smv_calculation::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get_smv_by_sample_id(
        &self,
        sample_id: &str,
    ) -> Result<Option<smv_calculation::Model>, ServiceError> {
        SmvCalculationEntity::find()
            .filter(smv_calculation::Column::SampleId.eq(sample_id))
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_duration_is_count_times_duration() {
        assert_eq!(derive_total_duration(4, Some(2.5), None), Some(10.0));
    }

    #[test]
    fn caller_total_is_overridden_when_inputs_present() {
        assert_eq!(derive_total_duration(3, Some(2.0), Some(999.0)), Some(6.0));
    }

    #[test]
    fn missing_duration_keeps_fallback() {
        assert_eq!(derive_total_duration(3, None, Some(7.5)), Some(7.5));
        assert_eq!(derive_total_duration(3, None, None), None);
    }

    #[test]
    fn zero_count_keeps_fallback() {
        assert_eq!(derive_total_duration(0, Some(2.0), None), None);
    }
}
