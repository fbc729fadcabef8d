use crate::{
    db::DbPool,
    dto::materials::{CreateRequiredMaterialRequest, UpdateRequiredMaterialRequest},
    entities::{required_material, required_material::Entity as RequiredMaterialEntity},
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

/// Service for the per-variant bill of material consumption. The converted
/// UOM pair is opaque caller data; no unit compatibility checks happen at
/// write time.
#[derive(Clone)]
pub struct MaterialLedgerService {
    db_pool: Arc<DbPool>,
}

impl MaterialLedgerService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    fn connection(&self) -> &DatabaseConnection {
        self.db_pool.as_ref()
    }

    #[instrument(skip(self, req))]
    pub async fn create(
        &self,
        req: CreateRequiredMaterialRequest,
    ) -> Result<required_material::Model, ServiceError> {
        let model = required_material::ActiveModel {
            id: Default::default(),
            style_variant_id: Set(req.style_variant_id),
            style_name: Set(req.style_name),
            style_id: Set(req.style_id),
            material: Set(req.material),
            uom: Set(req.uom),
            consumption_per_piece: Set(req.consumption_per_piece),
            converted_uom: Set(req.converted_uom),
            converted_consumption: Set(req.converted_consumption),
            remarks: Set(req.remarks),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        model
            .insert(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Returns material lines, newest first, optionally scoped to a variant.
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        style_variant_id: Option<i32>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<required_material::Model>, ServiceError> {
        let mut query = RequiredMaterialEntity::find();
        if let Some(style_variant_id) = style_variant_id {
            query = query.filter(required_material::Column::StyleVariantId.eq(style_variant_id));
        }
        query
            .order_by_desc(required_material::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Option<required_material::Model>, ServiceError> {
        RequiredMaterialEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Partial merge update; unset fields stay untouched.
    #[instrument(skip(self, req))]
    pub async fn update(
        &self,
        id: i32,
        req: UpdateRequiredMaterialRequest,
    ) -> Result<required_material::Model, ServiceError> {
        let db = self.connection();
        let model = RequiredMaterialEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Required material {} not found", id))
            })?;

        let mut active = model.into_active_model();
        if let Some(style_variant_id) = req.style_variant_id {
            active.style_variant_id = Set(style_variant_id);
        }
        if let Some(style_name) = req.style_name {
            active.style_name = Set(style_name);
        }
        if let Some(style_id) = req.style_id {
            active.style_id = Set(style_id);
        }
        if let Some(material) = req.material {
            active.material = Set(material);
        }
        if let Some(uom) = req.uom {
            active.uom = Set(uom);
        }
        if let Some(consumption) = req.consumption_per_piece {
            active.consumption_per_piece = Set(consumption);
        }
        if let Some(converted_uom) = req.converted_uom {
            active.converted_uom = Set(Some(converted_uom));
        }
        if let Some(converted_consumption) = req.converted_consumption {
            active.converted_consumption = Set(Some(converted_consumption));
        }
        if let Some(remarks) = req.remarks {
            active.remarks = Set(Some(remarks));
        }
        active.updated_at = Set(Some(Utc::now()));

        active.update(db).await.map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = RequiredMaterialEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| {
                ServiceError::NotFound(format!("Required material {} not found", id))
            })?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }
}
