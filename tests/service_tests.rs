//! Integration tests for the record store, aggregation engine, and the
//! mutate-then-audit orchestration of the inventory service.

use cloudops_inventory::service::{InventoryService, DEFAULT_AUDIT_LIMIT};
use cloudops_inventory::store::{Store, DEFAULT_LOW_STOCK_THRESHOLD};
use cloudops_inventory::types::ItemInput;
use cloudops_inventory::Error;

async fn setup_service() -> InventoryService {
    let store = Store::in_memory().await.unwrap();
    InventoryService::new(store)
}

fn input(name: &str, quantity: i64, price: f64, category: Option<&str>, sku: Option<&str>) -> ItemInput {
    ItemInput {
        name: Some(name.to_string()),
        description: None,
        quantity: Some(quantity),
        price: Some(price),
        category: category.map(str::to_string),
        sku: sku.map(str::to_string),
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[tokio::test]
async fn test_create_assigns_fresh_unique_ids() {
    let service = setup_service().await;

    let first = service
        .create(input("EC2 t3.micro", 15, 8.50, Some("Compute"), Some("SKU-A")))
        .await
        .unwrap();
    let second = service
        .create(input("NAT Gateway", 2, 32.85, Some("Networking"), Some("SKU-B")))
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "EC2 t3.micro");
    assert_eq!(first.quantity, 15);
    assert!(approx(first.price, 8.50));
    assert_eq!(first.created_at, first.updated_at);
}

#[tokio::test]
async fn test_duplicate_sku_fails_and_leaves_count_unchanged() {
    let service = setup_service().await;

    service
        .create(input("First", 1, 1.00, None, Some("SKU1")))
        .await
        .unwrap();
    let err = service
        .create(input("Second", 2, 2.00, None, Some("SKU1")))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::DuplicateSku));
    assert_eq!(service.list().await.unwrap().len(), 1);
    // Failed mutations append nothing: only the first CREATE is recorded
    let entries = service.recent_audit(None).await.unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "CREATE");
}

#[tokio::test]
async fn test_items_without_sku_do_not_collide() {
    let service = setup_service().await;

    service.create(input("A", 1, 1.00, None, None)).await.unwrap();
    service.create(input("B", 2, 2.00, None, None)).await.unwrap();

    assert_eq!(service.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_replaces_all_fields_and_refreshes_updated_at() {
    let service = setup_service().await;

    let created = service
        .create(input("S3 Standard", 20, 2.30, Some("Storage"), Some("AWS-S3")))
        .await
        .unwrap();

    let updated = service
        .update(
            created.id,
            input("S3 Standard 500GB", 10, 11.50, Some("Storage"), Some("AWS-S3-500")),
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);

    let fetched = service.get(created.id).await.unwrap();
    assert_eq!(fetched.name, "S3 Standard 500GB");
    assert_eq!(fetched.quantity, 10);
    assert!(approx(fetched.price, 11.50));
    assert_eq!(fetched.sku.as_deref(), Some("AWS-S3-500"));
}

#[tokio::test]
async fn test_update_audits_exactly_once_with_new_field_values() {
    let service = setup_service().await;

    let created = service
        .create(input("Before", 1, 1.00, None, None))
        .await
        .unwrap();
    service
        .update(created.id, input("After", 7, 3.50, None, None))
        .await
        .unwrap();

    let entries = service.recent_audit(None).await.unwrap();
    let updates: Vec<_> = entries.iter().filter(|e| e.action == "UPDATE").collect();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].record_id, Some(created.id));
    assert_eq!(updates[0].table_name, "inventory_items");
    let details: serde_json::Value =
        serde_json::from_str(updates[0].details.as_deref().unwrap()).unwrap();
    assert_eq!(details["name"], "After");
    assert_eq!(details["quantity"], 7);
    assert_eq!(details["price"], 3.5);
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let service = setup_service().await;
    let err = service
        .update(9999, input("Ghost", 1, 1.00, None, None))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound));
    assert!(service.recent_audit(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_to_taken_sku_is_rejected() {
    let service = setup_service().await;

    service.create(input("A", 1, 1.00, None, Some("SKU-A"))).await.unwrap();
    let b = service.create(input("B", 1, 1.00, None, Some("SKU-B"))).await.unwrap();

    let err = service
        .update(b.id, input("B", 1, 1.00, None, Some("SKU-A")))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateSku));
}

#[tokio::test]
async fn test_delete_removes_item_and_audits_exactly_once() {
    let service = setup_service().await;

    let created = service
        .create(input("Lambda Function", 12, 0.20, Some("Serverless"), None))
        .await
        .unwrap();
    let deleted = service.delete(created.id).await.unwrap();
    assert_eq!(deleted.name, "Lambda Function");

    let err = service.get(created.id).await.unwrap_err();
    assert!(matches!(err, Error::NotFound));

    let entries = service.recent_audit(None).await.unwrap();
    let deletes: Vec<_> = entries.iter().filter(|e| e.action == "DELETE").collect();
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].record_id, Some(created.id));
    assert_eq!(deletes[0].table_name, "inventory_items");
    let details: serde_json::Value =
        serde_json::from_str(deletes[0].details.as_deref().unwrap()).unwrap();
    assert_eq!(details["deleted"], "Lambda Function");
}

#[tokio::test]
async fn test_delete_missing_id_is_not_found() {
    let service = setup_service().await;
    assert!(matches!(service.delete(42).await.unwrap_err(), Error::NotFound));
}

#[tokio::test]
async fn test_audit_entries_outlive_deleted_items() {
    let service = setup_service().await;

    let created = service.create(input("Ephemeral", 1, 1.00, None, None)).await.unwrap();
    service.delete(created.id).await.unwrap();

    // CREATE and DELETE both remain after the item is gone
    let entries = service.recent_audit(None).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e.record_id == Some(created.id)));
}

#[tokio::test]
async fn test_recent_audit_is_newest_first_with_default_limit() {
    let service = setup_service().await;

    for i in 0..25 {
        service
            .create(input(&format!("Item {i}"), 1, 1.00, None, None))
            .await
            .unwrap();
    }
    let last = service.create(input("Last", 1, 1.00, None, None)).await.unwrap();

    let entries = service.recent_audit(None).await.unwrap();
    assert_eq!(entries.len() as i64, DEFAULT_AUDIT_LIMIT);
    assert_eq!(entries[0].record_id, Some(last.id));

    let one = service.recent_audit(Some(1)).await.unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0].action, "CREATE");

    // Callers are trusted: limits beyond the row count just return everything
    let all = service.recent_audit(Some(1000)).await.unwrap();
    assert_eq!(all.len(), 26);
}

#[tokio::test]
async fn test_validation_rejects_missing_required_fields() {
    let service = setup_service().await;

    let missing_price = ItemInput {
        name: Some("X".to_string()),
        quantity: Some(1),
        ..ItemInput::default()
    };
    let err = service.create(missing_price).await.unwrap_err();
    assert!(matches!(err, Error::Validation(_)));

    assert!(service.list().await.unwrap().is_empty());
    assert!(service.recent_audit(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_total_value_is_sum_of_quantity_times_price() {
    let service = setup_service().await;

    // Empty store sums to zero
    let stats = service.stats().await.unwrap();
    assert_eq!(stats.total_items, 0);
    assert!(approx(stats.total_value, 0.0));

    service.create(input("A", 3, 10.00, None, None)).await.unwrap();
    service.create(input("B", 2, 1.25, None, None)).await.unwrap();

    let stats = service.stats().await.unwrap();
    assert_eq!(stats.total_items, 2);
    assert!(approx(stats.total_value, 3.0 * 10.00 + 2.0 * 1.25));
}

#[tokio::test]
async fn test_low_stock_count_uses_default_threshold() {
    let service = setup_service().await;

    for (i, quantity) in [2, 5, 4, 10].into_iter().enumerate() {
        service
            .create(input(&format!("Item {i}"), quantity, 1.00, None, None))
            .await
            .unwrap();
    }

    assert_eq!(DEFAULT_LOW_STOCK_THRESHOLD, 5);
    let stats = service.stats().await.unwrap();
    assert_eq!(stats.low_stock_items, 2);
}

#[tokio::test]
async fn test_by_category_sums_to_totals_and_sorts_by_value() {
    let service = setup_service().await;

    // A: 100.0, B: 50.0, uncategorized: 5.0
    service.create(input("a1", 10, 6.00, Some("A"), None)).await.unwrap();
    service.create(input("a2", 4, 10.00, Some("A"), None)).await.unwrap();
    service.create(input("b1", 5, 10.00, Some("B"), None)).await.unwrap();
    service.create(input("n1", 1, 5.00, None, None)).await.unwrap();

    let stats = service.stats().await.unwrap();
    let rows = &stats.by_category;

    let count_sum: i64 = rows.iter().map(|r| r.count).sum();
    let value_sum: f64 = rows.iter().map(|r| r.value).sum();
    assert_eq!(count_sum, stats.total_items);
    assert!(approx(value_sum, stats.total_value));

    // Descending by value, null category grouped under a null key
    assert!(rows.windows(2).all(|w| w[0].value >= w[1].value));
    assert_eq!(rows[0].category.as_deref(), Some("A"));
    assert!(approx(rows[0].value, 100.0));
    assert_eq!(rows[1].category.as_deref(), Some("B"));
    assert!(rows.iter().any(|r| r.category.is_none() && r.count == 1));

    // Null categories are excluded from the distinct count
    assert_eq!(stats.categories, 2);
}

#[tokio::test]
async fn test_list_orders_by_category_then_name() {
    let service = setup_service().await;

    service.create(input("Zeta", 1, 1.00, Some("Storage"), None)).await.unwrap();
    service.create(input("Alpha", 1, 1.00, Some("Storage"), None)).await.unwrap();
    service.create(input("Mid", 1, 1.00, Some("Compute"), None)).await.unwrap();

    let names: Vec<String> = service
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.name)
        .collect();
    assert_eq!(names, vec!["Mid", "Alpha", "Zeta"]);
}

#[tokio::test]
async fn test_file_backed_store_persists_across_reconnect() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite:{}", dir.path().join("inventory.db").display());

    {
        let store = Store::connect(&url, 2).await.unwrap();
        let service = InventoryService::new(store.clone());
        service
            .create(input("Durable", 1, 1.00, None, Some("SKU-D")))
            .await
            .unwrap();
        store.pool().close().await;
    }

    let store = Store::connect(&url, 2).await.unwrap();
    assert_eq!(store.count_items().await.unwrap(), 1);
    assert_eq!(store.audit_count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_seed_catalog_runs_once() {
    let store = Store::in_memory().await.unwrap();

    assert!(store.seed_catalog().await.unwrap());
    let seeded = store.count_items().await.unwrap();
    assert_eq!(seeded, 19);

    // Non-empty store is left alone
    assert!(!store.seed_catalog().await.unwrap());
    assert_eq!(store.count_items().await.unwrap(), seeded);
}
