//! Integration tests for the planning snapshots: TNA merge updates vs. the
//! plan's full-replace upsert.

mod common;

use assert_matches::assert_matches;
use stitchline_api::{
    dto::planning::{CreateSampleTnaRequest, UpdateSampleTnaRequest, UpsertSamplePlanRequest},
    errors::ServiceError,
    services::planning::PlanningService,
};

fn tna_request(sample_id: &str, piece_name: Option<&str>) -> CreateSampleTnaRequest {
    CreateSampleTnaRequest {
        sample_id: sample_id.into(),
        buyer_name: "Nordic Apparel".into(),
        style_name: "Polo Shirt".into(),
        sample_type: "Proto".into(),
        sample_description: None,
        item: None,
        gauge: None,
        worksheet_rcv_date: Some("2024-03-01".into()),
        yarn_rcv_date: None,
        required_date: None,
        color: None,
        piece_name: piece_name.map(Into::into),
        notes: None,
    }
}

fn plan_request(sample_id: &str, designer: &str, round: i32) -> UpsertSamplePlanRequest {
    UpsertSamplePlanRequest {
        sample_id: sample_id.into(),
        buyer_name: "Nordic Apparel".into(),
        style_name: "Polo Shirt".into(),
        sample_type: "Proto".into(),
        sample_description: None,
        item: None,
        gauge: None,
        worksheet_rcv_date: None,
        yarn_rcv_date: None,
        required_date: Some("2024-04-15".into()),
        color: Some("Navy".into()),
        piece_name: None,
        assigned_designer: Some(designer.into()),
        required_sample_quantity: Some(3),
        round,
        notes: Some("initial plan".into()),
        submit_status: None,
    }
}

#[tokio::test]
async fn tna_allows_multiple_records_per_sample() {
    let db = common::samples_db().await;
    let service = PlanningService::new(db);

    // One TNA row per set piece shares the sample_id
    service
        .create_tna(tna_request("SMP-001", Some("Top")))
        .await
        .unwrap();
    service
        .create_tna(tna_request("SMP-001", Some("Bottom")))
        .await
        .unwrap();

    let records = service.list_tna(0, 100).await.unwrap();
    assert_eq!(records.len(), 2);

    let found = service
        .get_tna_by_sample_id("SMP-001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.sample_id, "SMP-001");
}

#[tokio::test]
async fn tna_update_merges_and_delete_removes() {
    let db = common::samples_db().await;
    let service = PlanningService::new(db);

    let tna = service
        .create_tna(tna_request("SMP-001", None))
        .await
        .unwrap();

    let updated = service
        .update_tna(
            tna.id,
            UpdateSampleTnaRequest {
                color: Some("Navy".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.color.as_deref(), Some("Navy"));
    // Unset fields stay untouched
    assert_eq!(updated.worksheet_rcv_date.as_deref(), Some("2024-03-01"));

    service.delete_tna(tna.id).await.unwrap();
    let err = service.delete_tna(tna.id).await.unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));
}

#[tokio::test]
async fn plan_create_inserts_then_fully_overwrites() {
    let db = common::samples_db().await;
    let service = PlanningService::new(db);

    let first = service
        .upsert_plan(plan_request("SMP-001", "Anna", 1))
        .await
        .unwrap();
    assert_eq!(first.assigned_designer.as_deref(), Some("Anna"));

    // Second create with the same sample_id replaces every field
    let mut replacement = plan_request("SMP-001", "Priya", 2);
    replacement.notes = None;
    replacement.required_date = None;
    let second = service.upsert_plan(replacement).await.unwrap();

    assert_eq!(second.id, first.id);
    assert_eq!(second.assigned_designer.as_deref(), Some("Priya"));
    assert_eq!(second.round, 2);
    // Full replace, not merge: fields absent from the second payload are
    // cleared rather than inherited
    assert_eq!(second.notes, None);
    assert_eq!(second.required_date, None);

    let records = service.list_plans(0, 100).await.unwrap();
    assert_eq!(records.len(), 1);

    let found = service
        .get_plan_by_sample_id("SMP-001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.assigned_designer.as_deref(), Some("Priya"));
}

#[tokio::test]
async fn plans_for_different_samples_stay_separate() {
    let db = common::samples_db().await;
    let service = PlanningService::new(db);

    service
        .upsert_plan(plan_request("SMP-001", "Anna", 1))
        .await
        .unwrap();
    service
        .upsert_plan(plan_request("SMP-002", "Priya", 1))
        .await
        .unwrap();

    assert_eq!(service.list_plans(0, 100).await.unwrap().len(), 2);
    assert!(service
        .get_plan_by_sample_id("SMP-404")
        .await
        .unwrap()
        .is_none());
}
