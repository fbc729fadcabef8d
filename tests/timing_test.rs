//! Integration tests for operation timing and SMV snapshots.

mod common;

use stitchline_api::{
    dto::timing::{
        CreateSampleOperationRequest, CreateSmvCalculationRequest, UpdateSampleOperationRequest,
    },
    services::timing::TimingService,
};

fn operation_request(sample_id: i32) -> CreateSampleOperationRequest {
    CreateSampleOperationRequest {
        sample_id,
        operation_type: "Knitting".into(),
        name_of_operation: "Front Part".into(),
        number_of_operation: 4,
        size: Some("M".into()),
        duration: Some(2.5),
        total_duration: None,
    }
}

#[tokio::test]
async fn create_derives_total_duration() {
    let db = common::samples_db().await;
    let service = TimingService::new(db);

    let operation = service.create_operation(operation_request(1)).await.unwrap();
    assert_eq!(operation.total_duration, Some(10.0));
}

#[tokio::test]
async fn caller_supplied_total_is_overwritten() {
    let db = common::samples_db().await;
    let service = TimingService::new(db);

    let mut req = operation_request(1);
    req.total_duration = Some(999.0);
    let operation = service.create_operation(req).await.unwrap();

    assert_eq!(operation.total_duration, Some(10.0));
}

#[tokio::test]
async fn missing_duration_keeps_caller_total() {
    let db = common::samples_db().await;
    let service = TimingService::new(db);

    let mut req = operation_request(1);
    req.duration = None;
    req.total_duration = Some(7.5);
    let operation = service.create_operation(req).await.unwrap();

    assert_eq!(operation.duration, None);
    assert_eq!(operation.total_duration, Some(7.5));
}

#[tokio::test]
async fn update_recomputes_from_merged_inputs() {
    let db = common::samples_db().await;
    let service = TimingService::new(db);

    let operation = service.create_operation(operation_request(1)).await.unwrap();

    // Bump only the count; duration is merged from the stored row
    let updated = service
        .update_operation(
            operation.id,
            UpdateSampleOperationRequest {
                number_of_operation: Some(6),
                total_duration: Some(1.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.number_of_operation, 6);
    assert_eq!(updated.total_duration, Some(15.0));

    // New duration recomputes again
    let updated = service
        .update_operation(
            operation.id,
            UpdateSampleOperationRequest {
                duration: Some(1.0),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.total_duration, Some(6.0));
}

#[tokio::test]
async fn list_filters_by_sample() {
    let db = common::samples_db().await;
    let service = TimingService::new(db);

    service.create_operation(operation_request(1)).await.unwrap();
    service.create_operation(operation_request(1)).await.unwrap();
    service.create_operation(operation_request(2)).await.unwrap();

    let all = service.list_operations(None, 0, 100).await.unwrap();
    assert_eq!(all.len(), 3);

    let scoped = service.list_operations(Some(1), 0, 100).await.unwrap();
    assert_eq!(scoped.len(), 2);
    assert!(scoped.iter().all(|op| op.sample_id == 1));
}

#[tokio::test]
async fn smv_snapshot_is_stored_as_supplied_and_found_by_sample_id() {
    let db = common::samples_db().await;
    let service = TimingService::new(db);

    let breakdown = r#"[{"name":"Front Part","smv":2.5}]"#;
    service
        .create_smv(CreateSmvCalculationRequest {
            sample_id: "SMP-001".into(),
            buyer_name: "Nordic Apparel".into(),
            style_name: "Polo Shirt".into(),
            category: Some("Knitwear".into()),
            gauge: Some("12GG".into()),
            total_smv: 18.75,
            operations: Some(breakdown.into()),
        })
        .await
        .unwrap();

    let found = service
        .get_smv_by_sample_id("SMP-001")
        .await
        .unwrap()
        .unwrap();

    // The snapshot is opaque: totals and blob come back exactly as written
    assert_eq!(found.total_smv, 18.75);
    assert_eq!(found.operations.as_deref(), Some(breakdown));

    assert!(service
        .get_smv_by_sample_id("SMP-404")
        .await
        .unwrap()
        .is_none());
}
