//! Integration tests for the material requirement ledger.

mod common;

use assert_matches::assert_matches;
use rust_decimal::Decimal;
use stitchline_api::{
    dto::materials::{CreateRequiredMaterialRequest, UpdateRequiredMaterialRequest},
    errors::ServiceError,
    services::materials::MaterialLedgerService,
};

fn material_request(style_variant_id: i32, material: &str) -> CreateRequiredMaterialRequest {
    CreateRequiredMaterialRequest {
        style_variant_id,
        style_name: "Polo Shirt".into(),
        style_id: "PS-001".into(),
        material: material.into(),
        uom: "kg".into(),
        consumption_per_piece: Decimal::new(25, 2), // 0.25
        converted_uom: None,
        converted_consumption: None,
        remarks: None,
    }
}

#[tokio::test]
async fn create_and_filter_by_variant() {
    let db = common::samples_db().await;
    let service = MaterialLedgerService::new(db);

    service.create(material_request(1, "Cotton Yarn")).await.unwrap();
    service.create(material_request(1, "Sewing Thread")).await.unwrap();
    service.create(material_request(2, "Cotton Yarn")).await.unwrap();

    let all = service.list(None, 0, 100).await.unwrap();
    assert_eq!(all.len(), 3);

    let scoped = service.list(Some(1), 0, 100).await.unwrap();
    assert_eq!(scoped.len(), 2);
    assert!(scoped.iter().all(|m| m.style_variant_id == 1));
}

#[tokio::test]
async fn conversion_pair_is_opaque_caller_data() {
    let db = common::samples_db().await;
    let service = MaterialLedgerService::new(db);

    let created = service.create(material_request(1, "Cotton Yarn")).await.unwrap();
    // Nothing populates the converted pair behind the caller's back
    assert_eq!(created.converted_uom, None);
    assert_eq!(created.converted_consumption, None);

    let updated = service
        .update(
            created.id,
            UpdateRequiredMaterialRequest {
                converted_uom: Some("g".into()),
                converted_consumption: Some(Decimal::new(250, 0)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // Stored verbatim; no unit compatibility validation
    assert_eq!(updated.converted_uom.as_deref(), Some("g"));
    assert_eq!(updated.converted_consumption, Some(Decimal::new(250, 0)));
    assert_eq!(updated.consumption_per_piece, Decimal::new(25, 2));
}

#[tokio::test]
async fn get_update_delete_round_trip() {
    let db = common::samples_db().await;
    let service = MaterialLedgerService::new(db);

    let created = service.create(material_request(1, "Cotton Yarn")).await.unwrap();

    let fetched = service.get(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.material, "Cotton Yarn");

    let updated = service
        .update(
            created.id,
            UpdateRequiredMaterialRequest {
                material: Some("Merino Yarn".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.material, "Merino Yarn");
    // Unset fields stay untouched
    assert_eq!(updated.uom, "kg");

    service.delete(created.id).await.unwrap();
    assert!(service.get(created.id).await.unwrap().is_none());

    let err = service.delete(created.id).await.unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));
}
