use crate::{
    db::DbPool,
    dto::clients::{
        CreateBuyerRequest, CreateSupplierRequest, UpdateBuyerRequest, UpdateSupplierRequest,
    },
    entities::{buyer, buyer::Entity as BuyerEntity, supplier, supplier::Entity as SupplierEntity},
    errors::ServiceError,
};
use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryOrder, QuerySelect,
};
use std::sync::Arc;
use tracing::instrument;

/// Buyer/supplier directory over the clients store. Other modules reference
/// these rows by id only; nothing here knows about the samples store.
#[derive(Clone)]
pub struct ClientDirectoryService {
    db_pool: Arc<DbPool>,
}

impl ClientDirectoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    fn connection(&self) -> &DatabaseConnection {
        self.db_pool.as_ref()
    }

    // Buyers

    #[instrument(skip(self, req))]
    pub async fn create_buyer(
        &self,
        req: CreateBuyerRequest,
    ) -> Result<buyer::Model, ServiceError> {
        let model = buyer::ActiveModel {
            id: Default::default(),
            buyer_name: Set(req.buyer_name),
            contact_person: Set(req.contact_person),
            email: Set(req.email),
            phone: Set(req.phone),
            address: Set(req.address),
            country: Set(req.country),
            remarks: Set(req.remarks),
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
    pub async fn list_buyers(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<buyer::Model>, ServiceError> {
        BuyerEntity::find()
            .order_by_desc(buyer::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get_buyer(&self, id: i32) -> Result<Option<buyer::Model>, ServiceError> {
        BuyerEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self, req))]
    pub async fn update_buyer(
        &self,
        id: i32,
        req: UpdateBuyerRequest,
    ) -> Result<buyer::Model, ServiceError> {
        let db = self.connection();
        let model = BuyerEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Buyer {} not found", id)))?;

        let mut active = model.into_active_model();
        if let Some(buyer_name) = req.buyer_name {
            active.buyer_name = Set(buyer_name);
        }
        if let Some(contact_person) = req.contact_person {
            active.contact_person = Set(Some(contact_person));
        }
        if let Some(email) = req.email {
            active.email = Set(Some(email));
        }
        if let Some(phone) = req.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(address) = req.address {
            active.address = Set(Some(address));
        }
        if let Some(country) = req.country {
            active.country = Set(Some(country));
        }
        if let Some(remarks) = req.remarks {
            active.remarks = Set(Some(remarks));
        }
        if let Some(is_active) = req.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Some(Utc::now()));

        active.update(db).await.map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_buyer(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = BuyerEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Buyer {} not found", id)))?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }

    // Suppliers

    #[instrument(skip(self, req))]
    pub async fn create_supplier(
        &self,
        req: CreateSupplierRequest,
    ) -> Result<supplier::Model, ServiceError> {
        let model = supplier::ActiveModel {
            id: Default::default(),
            supplier_name: Set(req.supplier_name),
            supplier_type: Set(req.supplier_type),
            contact_person: Set(req.contact_person),
            email: Set(req.email),
            phone: Set(req.phone),
            address: Set(req.address),
            country: Set(req.country),
            remarks: Set(req.remarks),
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
    pub async fn list_suppliers(
        &self,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<supplier::Model>, ServiceError> {
        SupplierEntity::find()
            .order_by_desc(supplier::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn get_supplier(&self, id: i32) -> Result<Option<supplier::Model>, ServiceError> {
        SupplierEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(ServiceError::db_error)
    }

    #[instrument(skip(self, req))]
    pub async fn update_supplier(
        &self,
        id: i32,
        req: UpdateSupplierRequest,
    ) -> Result<supplier::Model, ServiceError> {
        let db = self.connection();
        let model = SupplierEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Supplier {} not found", id)))?;

        let mut active = model.into_active_model();
        if let Some(supplier_name) = req.supplier_name {
            active.supplier_name = Set(supplier_name);
        }
        if let Some(supplier_type) = req.supplier_type {
            active.supplier_type = Set(Some(supplier_type));
        }
        if let Some(contact_person) = req.contact_person {
            active.contact_person = Set(Some(contact_person));
        }
        if let Some(email) = req.email {
            active.email = Set(Some(email));
        }
        if let Some(phone) = req.phone {
            active.phone = Set(Some(phone));
        }
        if let Some(address) = req.address {
            active.address = Set(Some(address));
        }
        if let Some(country) = req.country {
            active.country = Set(Some(country));
        }
        if let Some(remarks) = req.remarks {
            active.remarks = Set(Some(remarks));
        }
        if let Some(is_active) = req.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Some(Utc::now()));

        active.update(db).await.map_err(ServiceError::db_error)
    }

    #[instrument(skip(self))]
    pub async fn delete_supplier(&self, id: i32) -> Result<(), ServiceError> {
        let db = self.connection();
        let model = SupplierEntity::find_by_id(id)
            .one(db)
            .await
            .map_err(ServiceError::db_error)?
            .ok_or_else(|| ServiceError::NotFound(format!("Supplier {} not found", id)))?;

        model
            .into_active_model()
            .delete(db)
            .await
            .map_err(ServiceError::db_error)?;
        Ok(())
    }
}
