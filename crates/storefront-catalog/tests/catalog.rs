use std::time::Duration;

use storefront_catalog::{
    load_catalog, CatalogError, CatalogState, CatalogView, MockCatalog, Product, ProductSource,
    DEFAULT_LATENCY,
};

/// Source whose categories query fails while products succeed.
struct HalfBroken(MockCatalog);

impl ProductSource for HalfBroken {
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.0.all_products().await
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        Err(CatalogError::Unavailable("categories endpoint down".into()))
    }
}

#[tokio::test(start_paused = true)]
async fn products_and_categories_load_concurrently() {
    let source = MockCatalog::new();
    let start = tokio::time::Instant::now();

    let catalog = load_catalog(&source, None).await.unwrap();

    assert_eq!(catalog.products.len(), 8);
    // Both queries sleep for the latency; run together they take one latency.
    assert!(start.elapsed() < DEFAULT_LATENCY * 2);
}

#[tokio::test]
async fn partial_failure_discards_everything() {
    let source = HalfBroken(MockCatalog::new().with_latency(Duration::ZERO));
    let mut view = CatalogView::new();

    view.load(&source, None).await;

    assert!(matches!(view.state(), CatalogState::Failed { .. }));
    assert!(view.products().is_empty());
}

#[tokio::test(start_paused = true)]
async fn slower_overlapping_load_overwrites_faster_one() {
    let slow = MockCatalog::new().with_latency(Duration::from_millis(900));
    let fast = MockCatalog::new()
        .with_latency(Duration::from_millis(100))
        .failing("timeout");

    let (slow_result, fast_result) =
        tokio::join!(load_catalog(&slow, None), load_catalog(&fast, None));

    let mut view = CatalogView::new();
    // Apply in completion order: the fast failure first, the slow success last.
    view.resolve(fast_result);
    assert!(matches!(view.state(), CatalogState::Failed { .. }));
    view.resolve(slow_result);
    assert_eq!(view.products().len(), 8);
}

#[tokio::test]
async fn catalog_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(
        &path,
        r#"{
            "products": [
                {"id": 10, "title": "Desk", "price": 1299.99, "description": "Oak desk",
                 "category": "furniture", "image": "", "rating": {"rate": 4.0, "count": 3}}
            ],
            "categories": ["furniture", "lighting"]
        }"#,
    )
    .unwrap();

    let source = MockCatalog::from_file(&path)
        .unwrap()
        .with_latency(Duration::ZERO);
    let desk = source.product(10).await.unwrap();
    assert_eq!(desk.display_price(), "$1,299.99");
    assert_eq!(source.categories().await.unwrap(), vec!["furniture", "lighting"]);
}

#[test]
fn missing_file_is_unavailable() {
    let err = MockCatalog::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, CatalogError::Unavailable(_)));
}
