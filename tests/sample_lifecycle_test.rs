//! Integration tests for the sample lifecycle: round tracking on rejection,
//! lookups by sample_id, the buyer weak-ref display join and orphaning
//! semantics on delete.

mod common;

use assert_matches::assert_matches;
use rstest::rstest;
use stitchline_api::{
    dto::clients::CreateBuyerRequest,
    dto::samples::{CreateSampleRequest, UpdateSampleRequest},
    dto::styles::CreateStyleRequest,
    dto::timing::CreateSampleOperationRequest,
    errors::ServiceError,
    services::{
        clients::ClientDirectoryService, samples::SampleLifecycleService,
        styles::StyleCatalogService, timing::TimingService,
    },
};

struct Env {
    styles: StyleCatalogService,
    samples: SampleLifecycleService,
    timing: TimingService,
    clients: ClientDirectoryService,
    style_id: i32,
}

async fn setup() -> Env {
    let samples_db = common::samples_db().await;
    let clients_db = common::clients_db().await;

    let styles = StyleCatalogService::new(samples_db.clone());
    let style = styles
        .create_style(CreateStyleRequest {
            buyer_id: 1,
            style_name: "Polo Shirt".into(),
            style_id: "PS-001".into(),
            product_category: None,
            product_type: None,
            customs_customer_group: None,
            type_of_construction: None,
            gauge: None,
            style_description: None,
            is_set: false,
            set_piece_count: None,
        })
        .await
        .unwrap();

    Env {
        styles,
        samples: SampleLifecycleService::new(samples_db.clone(), clients_db.clone()),
        timing: TimingService::new(samples_db),
        clients: ClientDirectoryService::new(clients_db),
        style_id: style.id,
    }
}

fn sample_request(style_id: i32, sample_id: &str) -> CreateSampleRequest {
    CreateSampleRequest {
        sample_id: sample_id.into(),
        buyer_id: 1,
        style_id,
        sample_type: "Proto".into(),
        sample_description: None,
        item: None,
        gauge: None,
        worksheet_rcv_date: None,
        yarn_rcv_date: None,
        required_date: None,
        color: None,
        assigned_designer: None,
        required_sample_quantity: None,
        round: 1,
        notes: None,
        submit_status: None,
    }
}

#[tokio::test]
async fn create_resolves_style_name_and_starts_at_round_one() {
    let env = setup().await;

    let sample = env
        .samples
        .create(sample_request(env.style_id, "SMP-001"))
        .await
        .unwrap();

    assert_eq!(sample.round, 1);
    assert_eq!(sample.style_name.as_deref(), Some("Polo Shirt"));
    // No buyer row exists in the clients store, so the weak ref stays blank
    assert_eq!(sample.buyer_name, None);
}

#[tokio::test]
async fn duplicate_sample_id_is_a_conflict() {
    let env = setup().await;

    env.samples
        .create(sample_request(env.style_id, "SMP-001"))
        .await
        .unwrap();
    let err = env
        .samples
        .create(sample_request(env.style_id, "SMP-001"))
        .await
        .unwrap_err();

    assert_matches!(err, ServiceError::Conflict(_));
}

#[rstest]
#[case::approve("Approve", 1)]
#[case::remake("Reject and Request for remake", 2)]
#[case::proceed("Proceed Next Stage With Comments", 1)]
#[case::reject_drop("Reject & Drop", 1)]
#[case::drop("Drop", 1)]
#[case::outside_vocabulary("Totally made up status", 1)]
#[tokio::test]
async fn submit_status_drives_the_round_counter(
    #[case] status: &str,
    #[case] expected_round: i32,
) {
    let env = setup().await;

    let sample = env
        .samples
        .create(sample_request(env.style_id, "SMP-001"))
        .await
        .unwrap();

    let updated = env
        .samples
        .merge_update(
            sample.id,
            UpdateSampleRequest {
                submit_status: Some(status.into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.round, expected_round);
    assert_eq!(updated.submit_status.as_deref(), Some(status));
}

#[tokio::test]
async fn every_remake_request_increments_the_round_again() {
    let env = setup().await;

    let sample = env
        .samples
        .create(sample_request(env.style_id, "SMP-001"))
        .await
        .unwrap();

    for expected in [2, 3, 4] {
        let updated = env
            .samples
            .merge_update(
                sample.id,
                UpdateSampleRequest {
                    submit_status: Some("Reject and Request for remake".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.round, expected);
    }
}

#[tokio::test]
async fn update_without_status_leaves_round_untouched() {
    let env = setup().await;

    let sample = env
        .samples
        .create(sample_request(env.style_id, "SMP-001"))
        .await
        .unwrap();

    let updated = env
        .samples
        .merge_update(
            sample.id,
            UpdateSampleRequest {
                notes: Some("fit comments".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.round, 1);
    assert_eq!(updated.notes.as_deref(), Some("fit comments"));
    // Unset fields stay untouched
    assert_eq!(updated.sample_type, "Proto");
}

#[tokio::test]
async fn lookup_by_sample_id_string() {
    let env = setup().await;

    env.samples
        .create(sample_request(env.style_id, "SMP-001"))
        .await
        .unwrap();

    let found = env
        .samples
        .get_by_sample_id("SMP-001")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.sample_id, "SMP-001");

    assert!(env
        .samples
        .get_by_sample_id("SMP-404")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn list_filters_by_buyer_and_resolves_buyer_names() {
    let env = setup().await;

    let buyer = env
        .clients
        .create_buyer(CreateBuyerRequest {
            buyer_name: "Nordic Apparel".into(),
            contact_person: None,
            email: None,
            phone: None,
            address: None,
            country: Some("Sweden".into()),
            remarks: None,
            is_active: true,
        })
        .await
        .unwrap();

    let mut for_buyer = sample_request(env.style_id, "SMP-001");
    for_buyer.buyer_id = buyer.id;
    env.samples.create(for_buyer).await.unwrap();

    let mut for_other = sample_request(env.style_id, "SMP-002");
    for_other.buyer_id = buyer.id + 100;
    env.samples.create(for_other).await.unwrap();

    let filtered = env.samples.list(Some(buyer.id), 0, 10_000).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].buyer_name.as_deref(), Some("Nordic Apparel"));

    let all = env.samples.list(None, 0, 10_000).await.unwrap();
    assert_eq!(all.len(), 2);
    // The unknown buyer id resolves to no display name, not an error
    let orphan = all.iter().find(|s| s.sample_id == "SMP-002").unwrap();
    assert_eq!(orphan.buyer_name, None);
}

#[tokio::test]
async fn delete_is_unconditional_and_orphans_operations() {
    let env = setup().await;

    let sample = env
        .samples
        .create(sample_request(env.style_id, "SMP-001"))
        .await
        .unwrap();

    env.timing
        .create_operation(CreateSampleOperationRequest {
            sample_id: sample.id,
            operation_type: "Knitting".into(),
            name_of_operation: "Front Part".into(),
            number_of_operation: 1,
            size: None,
            duration: Some(10.0),
            total_duration: None,
        })
        .await
        .unwrap();

    env.samples.delete(sample.id).await.unwrap();
    assert!(env.samples.get(sample.id).await.unwrap().is_none());

    // Operation rows survive the sample: no cascade, no block
    let orphaned = env
        .timing
        .list_operations(Some(sample.id), 0, 100)
        .await
        .unwrap();
    assert_eq!(orphaned.len(), 1);

    // With the sample gone the style has no dependents left
    env.styles.delete_style(env.style_id).await.unwrap();
}
