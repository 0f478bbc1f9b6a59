//! In-process product source with simulated network latency.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::CatalogError;
use crate::product::{Product, Rating};
use crate::source::ProductSource;

/// Delay applied to every call unless configured otherwise.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(500);

/// A [`ProductSource`] over fixed data.
///
/// Every call sleeps for the configured latency before answering, the way a
/// remote catalog would. A catalog built with [`failing`](Self::failing)
/// answers every call with [`CatalogError::Unavailable`].
///
/// ```rust
/// use std::time::Duration;
/// use storefront_catalog::{MockCatalog, ProductSource};
///
/// # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
/// let catalog = MockCatalog::new().with_latency(Duration::ZERO);
/// let products = catalog.all_products().await.unwrap();
/// assert_eq!(products.len(), 8);
/// assert_eq!(products[0].title, "Premium Wireless Headphones");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockCatalog {
    products: Vec<Product>,
    categories: Vec<String>,
    latency: Duration,
    failure: Option<String>,
}

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
    #[serde(default)]
    categories: Vec<String>,
}

impl MockCatalog {
    /// The built-in catalog: 8 products in 4 categories.
    pub fn new() -> Self {
        Self::with_data(
            default_products(),
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        )
    }

    pub fn with_data(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
            latency: DEFAULT_LATENCY,
            failure: None,
        }
    }

    /// Parses a catalog from JSON: `{ "products": [...], "categories": [...] }`.
    ///
    /// When `categories` is omitted, it is derived from the products in
    /// first-seen order.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let categories = if file.categories.is_empty() {
            let mut seen: Vec<String> = Vec::new();
            for product in &file.products {
                if !seen.contains(&product.category) {
                    seen.push(product.category.clone());
                }
            }
            seen
        } else {
            file.categories
        };
        Ok(Self::with_data(file.products, categories))
    }

    /// Reads [`from_json`](Self::from_json) input from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CatalogError::Unavailable(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes every call fail with `reason`.
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.failure = Some(reason.into());
        self
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn respond<T>(&self, what: &str, value: impl FnOnce() -> T) -> Result<T, CatalogError> {
        debug!(query = what, latency_ms = self.latency.as_millis() as u64, "serving mock data");
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        match &self.failure {
            Some(reason) => Err(CatalogError::Unavailable(reason.clone())),
            None => Ok(value()),
        }
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductSource for MockCatalog {
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.respond("products", || self.products.clone()).await
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        self.respond("categories", || self.categories.clone()).await
    }
}

const DEFAULT_CATEGORIES: [&str; 4] = ["electronics", "clothing", "accessories", "footwear"];

#[allow(clippy::too_many_arguments)]
fn product(
    id: u32,
    title: &str,
    price: f64,
    description: &str,
    category: &str,
    image: &str,
    rate: f64,
    count: u32,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: description.to_string(),
        category: category.to_string(),
        image: format!("https://images.unsplash.com/{}?w=400&h=400&fit=crop", image),
        rating: Rating { rate, count },
    }
}

fn default_products() -> Vec<Product> {
    vec![
        product(
            1,
            "Premium Wireless Headphones",
            199.99,
            "High-quality wireless headphones with noise cancellation and premium sound quality.",
            "electronics",
            "photo-1583394838336-acd977736f90",
            4.5,
            120,
        ),
        product(
            2,
            "Classic Denim Jacket",
            89.99,
            "Timeless denim jacket perfect for casual wear. Made from premium denim fabric.",
            "clothing",
            "photo-1544022613-e87ca75a784a",
            4.2,
            89,
        ),
        product(
            3,
            "Stainless Steel Watch",
            299.99,
            "Elegant stainless steel watch with precision movement and water resistance.",
            "accessories",
            "photo-1523275335684-37898b6baf30",
            4.8,
            203,
        ),
        product(
            4,
            "Leather Crossbody Bag",
            149.99,
            "Stylish leather crossbody bag perfect for everyday use. Multiple compartments.",
            "accessories",
            "photo-1553062407-98eeb64c6a62",
            4.3,
            76,
        ),
        product(
            5,
            "Comfortable Running Shoes",
            129.99,
            "Lightweight running shoes with superior comfort and durability for all activities.",
            "footwear",
            "photo-1542291026-7eec264c27ff",
            4.6,
            156,
        ),
        product(
            6,
            "Organic Cotton T-Shirt",
            29.99,
            "Soft organic cotton t-shirt available in multiple colors. Sustainable and comfortable.",
            "clothing",
            "photo-1521572163474-6864f9cf17ab",
            4.4,
            234,
        ),
        product(
            7,
            "Wireless Bluetooth Speaker",
            79.99,
            "Portable Bluetooth speaker with rich sound and long battery life. Perfect for outdoor use.",
            "electronics",
            "photo-1608043152269-423dbba4e7e1",
            4.1,
            98,
        ),
        product(
            8,
            "Minimalist Backpack",
            119.99,
            "Clean, minimalist backpack with laptop compartment and thoughtful organization.",
            "accessories",
            "photo-1553062407-98eeb64c6a62",
            4.7,
            145,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant() -> MockCatalog {
        MockCatalog::new().with_latency(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_default_data_shape() {
        let catalog = instant();
        assert_eq!(catalog.all_products().await.unwrap().len(), 8);
        assert_eq!(
            catalog.categories().await.unwrap(),
            vec!["electronics", "clothing", "accessories", "footwear"]
        );
    }

    #[tokio::test]
    async fn test_products_by_category() {
        let accessories = instant().products_by_category("accessories").await.unwrap();
        let ids: Vec<u32> = accessories.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 4, 8]);

        assert!(instant().products_by_category("toys").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_limited_products() {
        assert_eq!(instant().limited_products(3).await.unwrap().len(), 3);
        assert_eq!(instant().limited_products(0).await.unwrap().len(), 0);
        assert_eq!(instant().limited_products(100).await.unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_product_by_id() {
        let catalog = instant();
        assert_eq!(catalog.product(5).await.unwrap().title, "Comfortable Running Shoes");
        assert!(matches!(
            catalog.product(99).await,
            Err(CatalogError::NotFound { id: 99 })
        ));
    }

    #[tokio::test]
    async fn test_failing_catalog() {
        let catalog = instant().failing("offline");
        let err = catalog.all_products().await.unwrap_err();
        assert!(matches!(err, CatalogError::Unavailable(ref r) if r == "offline"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_latency_is_simulated() {
        let catalog = MockCatalog::new();
        let start = tokio::time::Instant::now();
        catalog.categories().await.unwrap();
        assert!(start.elapsed() >= DEFAULT_LATENCY);
    }

    #[test]
    fn test_from_json_derives_categories() {
        let json = r#"{"products": [
            {"id": 1, "title": "A", "price": 1.0, "description": "", "category": "b",
             "image": "", "rating": {"rate": 1.0, "count": 1}},
            {"id": 2, "title": "B", "price": 2.0, "description": "", "category": "a",
             "image": "", "rating": {"rate": 2.0, "count": 2}},
            {"id": 3, "title": "C", "price": 3.0, "description": "", "category": "b",
             "image": "", "rating": {"rate": 3.0, "count": 3}}
        ]}"#;
        let catalog = MockCatalog::from_json(json).unwrap();
        assert_eq!(catalog.categories, vec!["b", "a"]);
        assert_eq!(catalog.latency(), DEFAULT_LATENCY);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            MockCatalog::from_json("[1, 2"),
            Err(CatalogError::Decode(_))
        ));
    }
}
