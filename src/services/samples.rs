use crate::{
    db::DbPool,
    dto::samples::{CreateSampleRequest, SampleResponse, UpdateSampleRequest},
    entities::{
        buyer, buyer::Entity as BuyerEntity, sample, sample::Entity as SampleEntity,
        style_summary, style_summary::Entity as StyleSummaryEntity,
    },
    errors::ServiceError,
};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use strum::{Display, EnumString};
use tracing::{instrument, warn};

/// The submit-status vocabulary used by buyers when reviewing a sample.
/// Stored as free-form text; statuses outside this set are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum SubmitStatus {
    #[strum(serialize = "Approve")]
    Approve,
    #[strum(serialize = "Reject and Request for remake")]
    RejectAndRequestForRemake,
    #[strum(serialize = "Proceed Next Stage With Comments")]
    ProceedNextStageWithComments,
    #[strum(serialize = "Reject & Drop")]
    RejectAndDrop,
    #[strum(serialize = "Drop")]
    Drop,
}

impl SubmitStatus {
    /// True when the status triggers a new submission round.
    pub fn is_remake_request(status: &str) -> bool {
        matches!(
            SubmitStatus::from_str(status),
            Ok(SubmitStatus::RejectAndRequestForRemake)
        )
    }
}

/// Service for the physical sample lifecycle. Holds both store pools: samples
/// for its own rows, clients for the best-effort buyer_name display lookup.
#[derive(Clone)]
pub struct SampleLifecycleService {
    samples_pool: Arc<DbPool>,
    clients_pool: Arc<DbPool>,
}

impl SampleLifecycleService {
    pub fn new(samples_pool: Arc<DbPool>, clients_pool: Arc<DbPool>) -> Self {
        Self {
            samples_pool,
            clients_pool,
        }
    }

    fn connection(&self) -> &DatabaseConnection {
        self.samples_pool.as_ref()
    }

    /// Creates a sample. Duplicate sample_id surfaces as a conflict; buyer_id
    /// is a cross-store weak ref and deliberately not validated.
    #[instrument(skip(self, req))]
    pub async fn create(&self, req: CreateSampleRequest) -> Result<SampleResponse, ServiceError> {
        let db = self.connection();
        let model = sample::ActiveModel {
            id: Default::default(),
            sample_id: Set(req.sample_id),
            buyer_id: Set(req.buyer_id),
            style_id: Set(req.style_id),
            sample_type: Set(req.sample_type),
            sample_description: Set(req.sample_description),
            item: Set(req.item),
            gauge: Set(req.gauge),
            worksheet_rcv_date: Set(req.worksheet_rcv_date),
            yarn_rcv_date: Set(req.yarn_rcv_date),
            required_date: Set(req.required_date),
            color: Set(req.color),
            assigned_designer: Set(req.assigned_designer),
            required_sample_quantity: Set(req.required_sample_quantity),
            round: Set(req.round),
            notes: Set(req.notes),
            submit_status: Set(req.submit_status),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        let created = model.insert(db).await.map_err(ServiceError::db_error)?;
        self.map_one(created).await
    }

    /// Returns samples, newest first, optionally filtered by buyer.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        buyer_id: Option<i32>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<SampleResponse>, ServiceError> {
        let db = self.connection();
        let mut query = SampleEntity::find();
        if let Some(buyer_id) = buyer_id {
            query = query.filter(sample::Column::BuyerId.eq(buyer_id));
        }
        let samples = query
            .order_by_desc(sample::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(db)
            .await
            .map_err(ServiceError::db_error)?;

        self.map_many(samples).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Option<SampleResponse>, ServiceError> {
        let model = SampleEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)?;
        match model {
            Some(model) => Ok(Some(self.map_one(model).await?)),
            None => Ok(None),
        }
    }

    /// Looks a sample up by its sample_id string.
    #[instrument(skip(self))]
    pub async fn get_by_sample_id(
        &self,
        sample_id: &str,
    ) -> Result<Option<SampleResponse>, ServiceError> {
        let model = SampleEntity::find()
            .filter(sample::Column::SampleId.eq(sample_id))
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)?;
        match model {
            Some(model) => Ok(Some(self.map_one(model).await?)),
            None => Ok(None),
        }
    }

    /// Partial merge update. Writing the remake status bumps `round` before
    /// the rest of the payload is merged; every other status (including ones
    /// outside the documented vocabulary) leaves the counter alone.
    #[instrument(skip(self, req))]
    pub async fn merge_update(
        &self,
        id: i32,
        req: UpdateSampleRequest,
    ) -> Result<SampleResponse, ServiceError> {
        let db = self.connection();
        let model = SampleEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Sample {} not found", id)))?;

        let current_round = model.round;
        let mut active = model.into_active_model();

        if let Some(status) = req.submit_status.as_deref() {
            if SubmitStatus::is_remake_request(status) {
                active.round = Set(current_round + 1);
            }
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
        if let Some(designer) = req.assigned_designer {
            active.assigned_designer = Set(Some(designer));
        }
        if let Some(quantity) = req.required_sample_quantity {
            active.required_sample_quantity = Set(Some(quantity));
        }
        if let Some(notes) = req.notes {
            active.notes = Set(Some(notes));
        }
        if let Some(status) = req.submit_status {
            active.submit_status = Set(Some(status));
        }
        active.updated_at = Set(Some(Utc::now()));

        let updated = active.update(db).await.map_err(ServiceError::db_error)?;
        self.map_one(updated).await
    }

    /// Unconditional delete; operation rows referencing the sample are left
    /// orphaned (no cascade, no block).
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = SampleEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Sample {} not found", id)))?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    async fn map_one(&self, model: sample::Model) -> Result<SampleResponse, ServiceError> {
        let style_name = StyleSummaryEntity::find_by_id(model.style_id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)?
            .map(|style| style.style_name);
        let buyer_name = self.lookup_buyer_names(&[model.buyer_id]).await;

        Ok(Self::to_response(
            model,
            |id| buyer_name.get(&id).cloned(),
            |_| style_name.clone(),
        ))
    }

    async fn map_many(
        &self,
        models: Vec<sample::Model>,
    ) -> Result<Vec<SampleResponse>, ServiceError> {
        let style_ids: Vec<i32> = models.iter().map(|m| m.style_id).collect();
        let styles: HashMap<i32, String> = StyleSummaryEntity::find()
            .filter(style_summary::Column::Id.is_in(style_ids))
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)?
            .into_iter()
            .map(|style| (style.id, style.style_name))
            .collect();

        let buyer_ids: Vec<i32> = models.iter().map(|m| m.buyer_id).collect();
        let buyers = self.lookup_buyer_names(&buyer_ids).await;

        Ok(models
            .into_iter()
            .map(|model| {
                Self::to_response(
                    model,
                    |id| buyers.get(&id).cloned(),
                    |id| styles.get(&id).cloned(),
                )
            })
            .collect())
    }

    /// Resolves buyer display names from the clients store. The weak ref is
    /// best-effort: an unreachable clients store degrades to anonymous
    /// samples rather than failing the read.
    async fn lookup_buyer_names(&self, buyer_ids: &[i32]) -> HashMap<i32, String> {
        let result = BuyerEntity::find()
            .filter(buyer::Column::Id.is_in(buyer_ids.to_vec()))
            .all(self.clients_pool.as_ref())
            .await;

        match result {
            Ok(buyers) => buyers
                .into_iter()
                .map(|buyer| (buyer.id, buyer.buyer_name))
                .collect(),
            Err(err) => {
                warn!("buyer name lookup against clients store failed: {}", err);
                HashMap::new()
            }
        }
    }

    fn to_response(
        model: sample::Model,
        buyer_name: impl Fn(i32) -> Option<String>,
        style_name: impl Fn(i32) -> Option<String>,
    ) -> SampleResponse {
        SampleResponse {
            buyer_name: buyer_name(model.buyer_id),
            style_name: style_name(model.style_id),
            id: model.id,
            sample_id: model.sample_id,
            buyer_id: model.buyer_id,
            style_id: model.style_id,
            sample_type: model.sample_type,
            sample_description: model.sample_description,
            item: model.item,
            gauge: model.gauge,
            worksheet_rcv_date: model.worksheet_rcv_date,
            yarn_rcv_date: model.yarn_rcv_date,
            required_date: model.required_date,
            color: model.color,
            assigned_designer: model.assigned_designer,
            required_sample_quantity: model.required_sample_quantity,
            round: model.round,
            notes: model.notes,
            submit_status: model.submit_status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remake_status_matches_exact_wording_only() {
        assert!(SubmitStatus::is_remake_request(
            "Reject and Request for remake"
        ));
        assert!(!SubmitStatus::is_remake_request("Approve"));
        assert!(!SubmitStatus::is_remake_request("Reject & Drop"));
        assert!(!SubmitStatus::is_remake_request(
            "reject and request for remake"
        ));
        assert!(!SubmitStatus::is_remake_request("anything else"));
    }

    #[test]
    fn submit_status_round_trips_through_display() {
        assert_eq!(
            SubmitStatus::RejectAndRequestForRemake.to_string(),
            "Reject and Request for remake"
        );
        assert_eq!(
            "Proceed Next Stage With Comments".parse::<SubmitStatus>(),
            Ok(SubmitStatus::ProceedNextStageWithComments)
        );
    }
}
