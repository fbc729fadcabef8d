use crate::{
    db::DbPool,
    dto::masters::{
        CreateGarmentColorRequest, CreateGarmentSizeRequest, CreateOperationTypeRequest,
        ReplaceOperationTypeRequest, UpdateGarmentColorRequest, UpdateGarmentSizeRequest,
    },
    entities::{
        garment_color, garment_color::Entity as GarmentColorEntity, garment_size,
        garment_size::Entity as GarmentSizeEntity, operation_master,
        operation_master::Entity as OperationMasterEntity, operation_type,
        operation_type::Entity as OperationTypeEntity, smv_settings,
        smv_settings::Entity as SmvSettingsEntity,
    },
    errors::ServiceError,
};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use tracing::instrument;

/// Service for master-data tables: operation types, garment colors and sizes,
/// plus the read-only operations module data.
#[derive(Clone)]
pub struct MasterDataService {
    db_pool: Arc<DbPool>,
}

impl MasterDataService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    fn connection(&self) -> &DatabaseConnection {
        self.db_pool.as_ref()
    }

    // Operation types

    #[instrument(skip(self, req))]
    pub async fn create_operation_type(
        &self,
        req: CreateOperationTypeRequest,
    ) -> Result<operation_type::Model, ServiceError> {
        let model = operation_type::ActiveModel {
            id: Default::default(),
            operation_type: Set(req.operation_type),
            operation_name: Set(req.operation_name),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        model
            .insert(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn list_operation_types(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<operation_type::Model>, ServiceError> {
        OperationTypeEntity::find()
            .order_by_desc(operation_type::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    /// Full replace of an operation type (the legacy contract sends every
    /// field on update).
    #[instrument(skip(self, req))]
    pub async fn replace_operation_type(
        &self,
        id: i32,
        req: ReplaceOperationTypeRequest,
    ) -> Result<operation_type::Model, ServiceError> {
        let db = self.connection();
        let model = OperationTypeEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Operation type {} not found", id)))?;

        let mut active = model.into_active_model();
        active.operation_type = Set(req.operation_type);
        active.operation_name = Set(req.operation_name);
        active.updated_at = Set(Some(Utc::now()));

        active.update(db).await.map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_operation_type(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = OperationTypeEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Operation type {} not found", id)))?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    // Garment colors

    #[instrument(skip(self, req))]
    pub async fn create_garment_color(
        &self,
        req: CreateGarmentColorRequest,
    ) -> Result<garment_color::Model, ServiceError> {
        let model = garment_color::ActiveModel {
            id: Default::default(),
            color_name: Set(req.color_name),
            color_code: Set(req.color_code),
            color_ref: Set(req.color_ref),
            category: Set(req.category),
            is_active: Set(req.is_active),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        model
            .insert(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn list_garment_colors(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<garment_color::Model>, ServiceError> {
        GarmentColorEntity::find()
            .order_by_desc(garment_color::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get_garment_color(
        &self,
        id: i32,
    ) -> Result<Option<garment_color::Model>, ServiceError> {
        GarmentColorEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self, req))]
    pub async fn update_garment_color(
        &self,
        id: i32,
        req: UpdateGarmentColorRequest,
    ) -> Result<garment_color::Model, ServiceError> {
        let db = self.connection();
        let model = GarmentColorEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Garment color {} not found", id)))?;

        let mut active = model.into_active_model();
        if let Some(color_name) = req.color_name {
            active.color_name = Set(color_name);
        }
        if let Some(color_code) = req.color_code {
            active.color_code = Set(color_code);
        }
        if let Some(color_ref) = req.color_ref {
            active.color_ref = Set(Some(color_ref));
        }
        if let Some(category) = req.category {
            active.category = Set(Some(category));
        }
        if let Some(is_active) = req.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Some(Utc::now()));

        active.update(db).await.map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_garment_color(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = GarmentColorEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Garment color {} not found", id)))?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    // Garment sizes

    #[instrument(skip(self, req))]
    pub async fn create_garment_size(
        &self,
        req: CreateGarmentSizeRequest,
    ) -> Result<garment_size::Model, ServiceError> {
        let model = garment_size::ActiveModel {
            id: Default::default(),
            size_value: Set(req.size_value),
            size_label: Set(req.size_label),
            size_category: Set(req.size_category),
            sort_order: Set(req.sort_order),
            is_active: Set(req.is_active),
            created_at: Set(Utc::now()),
            updated_at: Set(None),
        };

        model
            .insert(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn list_garment_sizes(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<garment_size::Model>, ServiceError> {
        GarmentSizeEntity::find()
            .order_by_asc(garment_size::Column::SortOrder)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get_garment_size(
        &self,
        id: i32,
    ) -> Result<Option<garment_size::Model>, ServiceError> {
        GarmentSizeEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self, req))]
    pub async fn update_garment_size(
        &self,
        id: i32,
        req: UpdateGarmentSizeRequest,
    ) -> Result<garment_size::Model, ServiceError> {
        let db = self.connection();
        let model = GarmentSizeEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Garment size {} not found", id)))?;

        let mut active = model.into_active_model();
        if let Some(size_value) = req.size_value {
            active.size_value = Set(size_value);
        }
        if let Some(size_label) = req.size_label {
            active.size_label = Set(Some(size_label));
        }
        if let Some(size_category) = req.size_category {
            active.size_category = Set(Some(size_category));
        }
        if let Some(sort_order) = req.sort_order {
            active.sort_order = Set(sort_order);
        }
        if let Some(is_active) = req.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Some(Utc::now()));

        active.update(db).await.map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_garment_size(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = GarmentSizeEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Garment size {} not found", id)))?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    // Operations module (read-only)

    #[instrument(skip(self))]
    pub async fn list_operation_master(
        &self,
    ) -> Result<Vec<operation_master::Model>, ServiceError> {
        OperationMasterEntity::find()
            .order_by_desc(operation_master::Column::Id)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn list_smv_settings(&self) -> Result<Vec<smv_settings::Model>, ServiceError> {
        SmvSettingsEntity::find()
            .order_by_desc(smv_settings::Column::Id)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }
}
