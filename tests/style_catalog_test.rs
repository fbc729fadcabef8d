//! Integration tests for the style catalog: style CRUD with dependency
//! blocking, variants, color parts and the derived color description.

mod common;

use assert_matches::assert_matches;
use stitchline_api::{
    dto::samples::CreateSampleRequest,
    dto::styles::{
        ColorPartBody, CreateStyleRequest, CreateStyleVariantRequest, UpdateStyleRequest,
    },
    errors::ServiceError,
    services::{samples::SampleLifecycleService, styles::StyleCatalogService},
};

fn style_request(style_id: &str) -> CreateStyleRequest {
    CreateStyleRequest {
        buyer_id: 1,
        style_name: "Polo Shirt".into(),
        style_id: style_id.into(),
        product_category: Some("Knitwear".into()),
        product_type: Some("Polo".into()),
        customs_customer_group: None,
        type_of_construction: None,
        gauge: Some("12GG".into()),
        style_description: None,
        is_set: false,
        set_piece_count: None,
    }
}

fn variant_request(style_summary_id: i32, multicolor: bool) -> CreateStyleVariantRequest {
    CreateStyleVariantRequest {
        style_summary_id,
        style_name: "Polo Shirt".into(),
        style_id: "PS-001".into(),
        colour_name: if multicolor { "Multi".into() } else { "Navy".into() },
        colour_code: None,
        colour_ref: None,
        is_multicolor: multicolor,
        display_name: None,
        piece_name: None,
        sizes: Some(vec!["S".into(), "M".into(), "L".into()]),
        color_parts: None,
    }
}

fn part(name: &str, colour: &str, sort_order: i32) -> ColorPartBody {
    ColorPartBody {
        part_name: name.into(),
        colour_name: colour.into(),
        colour_code: None,
        colour_ref: None,
        sort_order,
    }
}

#[tokio::test]
async fn create_get_and_list_styles() {
    let db = common::samples_db().await;
    let service = StyleCatalogService::new(db);

    let first = service.create_style(style_request("PS-001")).await.unwrap();
    let second = service.create_style(style_request("PS-002")).await.unwrap();

    let fetched = service.get_style(first.id).await.unwrap().unwrap();
    assert_eq!(fetched.style_id, "PS-001");
    assert_eq!(fetched.gauge.as_deref(), Some("12GG"));

    // Newest first
    let listed = service.list_styles(0, 1000).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);

    let paged = service.list_styles(1, 1).await.unwrap();
    assert_eq!(paged.len(), 1);
    assert_eq!(paged[0].id, first.id);
}

#[tokio::test]
async fn duplicate_style_id_is_a_conflict() {
    let db = common::samples_db().await;
    let service = StyleCatalogService::new(db);

    service.create_style(style_request("PS-001")).await.unwrap();
    let err = service
        .create_style(style_request("PS-001"))
        .await
        .unwrap_err();

    assert_matches!(err, ServiceError::Conflict(_));
}

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let db = common::samples_db().await;
    let service = StyleCatalogService::new(db);

    let style = service.create_style(style_request("PS-001")).await.unwrap();
    let updated = service
        .update_style(
            style.id,
            UpdateStyleRequest {
                style_name: Some("Polo Shirt LS".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.style_name, "Polo Shirt LS");
    // Unset fields stay untouched
    assert_eq!(updated.style_id, "PS-001");
    assert_eq!(updated.gauge.as_deref(), Some("12GG"));
    assert!(updated.updated_at.is_some());
}

#[tokio::test]
async fn update_missing_style_is_not_found() {
    let db = common::samples_db().await;
    let service = StyleCatalogService::new(db);

    let err = service
        .update_style(999, UpdateStyleRequest::default())
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));
}

#[tokio::test]
async fn delete_is_blocked_while_dependents_exist() {
    let samples_db = common::samples_db().await;
    let clients_db = common::clients_db().await;
    let styles = StyleCatalogService::new(samples_db.clone());
    let samples = SampleLifecycleService::new(samples_db, clients_db);

    let style = styles.create_style(style_request("PS-001")).await.unwrap();

    let sample = samples
        .create(CreateSampleRequest {
            sample_id: "SMP-001".into(),
            buyer_id: 1,
            style_id: style.id,
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
        })
        .await
        .unwrap();

    let err = styles.delete_style(style.id).await.unwrap_err();
    assert_matches!(err, ServiceError::DependencyBlocked(ref msg) if msg.contains("1 sample(s)"));

    samples.delete(sample.id).await.unwrap();

    let variant = styles
        .create_variant(variant_request(style.id, false))
        .await
        .unwrap();
    let err = styles.delete_style(style.id).await.unwrap_err();
    assert_matches!(
        err,
        ServiceError::DependencyBlocked(ref msg) if msg.contains("1 style variant(s)")
    );

    styles.delete_variant(variant.id).await.unwrap();
    styles.delete_style(style.id).await.unwrap();

    assert!(styles.get_style(style.id).await.unwrap().is_none());
}

#[tokio::test]
async fn single_color_variant_description_is_the_colour_name() {
    let db = common::samples_db().await;
    let service = StyleCatalogService::new(db);

    let style = service.create_style(style_request("PS-001")).await.unwrap();
    let variant = service
        .create_variant(variant_request(style.id, false))
        .await
        .unwrap();

    assert_eq!(variant.full_color_description, "Navy");
    assert_eq!(variant.style_category.as_deref(), Some("Knitwear"));
    assert_eq!(variant.gauge.as_deref(), Some("12GG"));
    assert_eq!(
        variant.sizes,
        Some(vec!["S".to_string(), "M".to_string(), "L".to_string()])
    );
}

#[tokio::test]
async fn multicolor_variant_composes_parts_in_sort_order() {
    let db = common::samples_db().await;
    let service = StyleCatalogService::new(db);

    let style = service.create_style(style_request("PS-001")).await.unwrap();

    // The create payload's color_parts list is a read-time relationship and
    // must not be persisted by variant create
    let mut req = variant_request(style.id, true);
    req.color_parts = Some(vec![part("Ignored", "Ignored", 1)]);
    let variant = service.create_variant(req).await.unwrap();
    assert!(variant.color_parts.is_empty());
    assert_eq!(variant.full_color_description, "Multi");

    // Parts created out of order surface ordered by sort_order
    service
        .add_color_part(variant.id, part("Sleeves", "Red", 3))
        .await
        .unwrap();
    service
        .add_color_part(variant.id, part("Body", "Navy Blue", 1))
        .await
        .unwrap();
    service
        .add_color_part(variant.id, part("Collar", "White", 2))
        .await
        .unwrap();

    let detail = service.get_variant(variant.id).await.unwrap().unwrap();
    assert_eq!(detail.color_parts.len(), 3);
    assert_eq!(
        detail.full_color_description,
        "Body: Navy Blue, Collar: White, Sleeves: Red"
    );
}

#[tokio::test]
async fn deleting_a_variant_removes_its_color_parts() {
    let db = common::samples_db().await;
    let service = StyleCatalogService::new(db);

    let style = service.create_style(style_request("PS-001")).await.unwrap();
    let variant = service
        .create_variant(variant_request(style.id, true))
        .await
        .unwrap();
    service
        .add_color_part(variant.id, part("Body", "Navy", 1))
        .await
        .unwrap();

    service.delete_variant(variant.id).await.unwrap();

    assert!(service.get_variant(variant.id).await.unwrap().is_none());
    assert!(service
        .list_color_parts(variant.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn color_part_delete_checks_ownership() {
    let db = common::samples_db().await;
    let service = StyleCatalogService::new(db);

    let style = service.create_style(style_request("PS-001")).await.unwrap();
    let first = service
        .create_variant(variant_request(style.id, true))
        .await
        .unwrap();
    let second = service
        .create_variant(variant_request(style.id, true))
        .await
        .unwrap();
    let owned = service
        .add_color_part(first.id, part("Body", "Navy", 1))
        .await
        .unwrap();

    let err = service
        .delete_color_part(second.id, owned.id)
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::InvalidOperation(_));

    let err = service.delete_color_part(first.id, 9999).await.unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));

    service.delete_color_part(first.id, owned.id).await.unwrap();
}

#[tokio::test]
async fn variant_list_filters_by_style() {
    let db = common::samples_db().await;
    let service = StyleCatalogService::new(db);

    let first = service.create_style(style_request("PS-001")).await.unwrap();
    let second = service.create_style(style_request("PS-002")).await.unwrap();
    service
        .create_variant(variant_request(first.id, false))
        .await
        .unwrap();
    service
        .create_variant(variant_request(second.id, false))
        .await
        .unwrap();

    let all = service.list_variants(None, 0, 1000).await.unwrap();
    assert_eq!(all.len(), 2);

    let scoped = service
        .list_variants(Some(first.id), 0, 1000)
        .await
        .unwrap();
    assert_eq!(scoped.len(), 1);
    assert_eq!(scoped[0].style_summary_id, first.id);
}
