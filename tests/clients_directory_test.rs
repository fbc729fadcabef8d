//! Integration tests for the buyer/supplier directory.

mod common;

use assert_matches::assert_matches;
use stitchline_api::{
    dto::clients::{CreateBuyerRequest, CreateSupplierRequest, UpdateBuyerRequest},
    errors::ServiceError,
    services::clients::ClientDirectoryService,
};

fn buyer_request(name: &str) -> CreateBuyerRequest {
    CreateBuyerRequest {
        buyer_name: name.into(),
        contact_person: Some("L. Svensson".into()),
        email: Some("orders@nordicapparel.example".into()),
        phone: None,
        address: None,
        country: Some("Sweden".into()),
        remarks: None,
        is_active: true,
    }
}

#[tokio::test]
async fn buyer_crud_round_trip() {
    let db = common::clients_db().await;
    let service = ClientDirectoryService::new(db);

    let buyer = service.create_buyer(buyer_request("Nordic Apparel")).await.unwrap();
    assert!(buyer.is_active);

    let fetched = service.get_buyer(buyer.id).await.unwrap().unwrap();
    assert_eq!(fetched.buyer_name, "Nordic Apparel");

    let updated = service
        .update_buyer(
            buyer.id,
            UpdateBuyerRequest {
                country: Some("Norway".into()),
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.country.as_deref(), Some("Norway"));
    assert!(!updated.is_active);
    // Unset fields stay untouched
    assert_eq!(updated.contact_person.as_deref(), Some("L. Svensson"));

    service.delete_buyer(buyer.id).await.unwrap();
    assert!(service.get_buyer(buyer.id).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_buyer_name_is_a_conflict() {
    let db = common::clients_db().await;
    let service = ClientDirectoryService::new(db);

    service.create_buyer(buyer_request("Nordic Apparel")).await.unwrap();
    let err = service
        .create_buyer(buyer_request("Nordic Apparel"))
        .await
        .unwrap_err();

    assert_matches!(err, ServiceError::Conflict(_));
}

#[tokio::test]
async fn supplier_crud_round_trip() {
    let db = common::clients_db().await;
    let service = ClientDirectoryService::new(db);

    let supplier = service
        .create_supplier(CreateSupplierRequest {
            supplier_name: "Dhaka Yarns Ltd".into(),
            supplier_type: Some("Yarn".into()),
            contact_person: None,
            email: None,
            phone: None,
            address: None,
            country: Some("Bangladesh".into()),
            remarks: None,
            is_active: true,
        })
        .await
        .unwrap();

    let listed = service.list_suppliers(0, 1000).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].supplier_name, "Dhaka Yarns Ltd");

    service.delete_supplier(supplier.id).await.unwrap();
    let err = service.delete_supplier(supplier.id).await.unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));
}
