use product_service::lifecycle::ProductSystem;
use product_service::model::{ProductDraft, ProductId};
use product_service::product_actor::{ProductError, ProductQuery, ValidationError};
use std::collections::HashSet;

#[tokio::test]
async fn test_product_lifecycle() {
    let system = ProductSystem::new(32);
    let service = system.service.clone();

    // 1. Create
    let laptop = service
        .create_product(ProductDraft::new("Laptop", 999.99).with_quantity(10))
        .await
        .unwrap();
    assert_eq!(laptop.id, ProductId(1));
    assert_eq!(laptop.description, None);
    assert_eq!(laptop.quantity, 10);
    assert_eq!(service.get_product(laptop.id).await.unwrap(), laptop);

    // 2. Update
    let updated = service
        .update_product(
            laptop.id,
            ProductDraft::new("Gaming Laptop", 1299.99).with_quantity(5),
        )
        .await
        .unwrap();
    assert_eq!(updated.id, laptop.id);
    assert_eq!(updated.name, "Gaming Laptop");
    assert_eq!(updated.price, 1299.99);
    assert_eq!(updated.quantity, 5);
    assert_eq!(service.list_products().await.unwrap(), vec![updated]);

    // 3. Delete
    service.delete_product(laptop.id).await.unwrap();
    assert_eq!(
        service.get_product(laptop.id).await,
        Err(ProductError::NotFound("1".to_string()))
    );
    assert!(!service.product_exists(laptop.id).await.unwrap());
    assert_eq!(service.count_products().await.unwrap(), 0);

    drop(service);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_price_search() {
    let system = ProductSystem::new(32);
    let service = &system.service;

    for (name, price) in [("Laptop", 999.99), ("Mouse", 29.99), ("Keyboard", 79.99)] {
        service
            .create_product(ProductDraft::new(name, price))
            .await
            .unwrap();
    }

    let cheap = service
        .search(ProductQuery::PriceBelow(100.0))
        .await
        .unwrap();
    let ids: Vec<ProductId> = cheap.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![ProductId(2), ProductId(3)]);

    let keyboards = service.search_by_name("KEY").await.unwrap();
    assert_eq!(keyboards.len(), 1);
    assert_eq!(keyboards[0].name, "Keyboard");

    let nothing = service
        .search(ProductQuery::PriceAbove(5000.0))
        .await
        .unwrap();
    assert!(nothing.is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_drafts_leave_store_unchanged() {
    let system = ProductSystem::new(32);
    let service = &system.service;

    let desk = service
        .create_product(ProductDraft::new("Desk", 250.0).with_quantity(3))
        .await
        .unwrap();

    assert_eq!(
        service.create_product(ProductDraft::new("", 10.0)).await,
        Err(ProductError::Validation(ValidationError::EmptyName))
    );
    assert_eq!(
        service
            .update_product(desk.id, ProductDraft::new("Desk", f64::NAN))
            .await,
        Err(ProductError::Validation(ValidationError::NonFinitePrice))
    );
    assert_eq!(
        service
            .update_product(ProductId(99), ProductDraft::new("Ghost", 1.0))
            .await,
        Err(ProductError::NotFound("99".to_string()))
    );
    assert_eq!(
        service.delete_product(ProductId(99)).await,
        Err(ProductError::NotFound("99".to_string()))
    );

    assert_eq!(service.list_products().await.unwrap(), vec![desk]);

    // The rejected create did not consume an id.
    let chair = service
        .create_product(ProductDraft::new("Chair", 80.0))
        .await
        .unwrap();
    assert_eq!(chair.id, ProductId(2));

    system.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates() {
    let system = ProductSystem::new(8);

    let mut handles = vec![];
    for i in 0..40 {
        let service = system.service.clone();
        handles.push(tokio::spawn(async move {
            service
                .create_product(ProductDraft::new(format!("item-{}", i), i as f64))
                .await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let product = handle.await.unwrap().unwrap();
        assert!(ids.insert(product.id), "duplicate id {}", product.id);
    }

    let listed = system.service.list_products().await.unwrap();
    assert_eq!(listed.len(), 40);
    let expected: Vec<ProductId> = (1..=40).map(ProductId).collect();
    assert_eq!(listed.iter().map(|p| p.id).collect::<Vec<_>>(), expected);

    system.shutdown().await.unwrap();
}
