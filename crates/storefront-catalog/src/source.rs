//! The asynchronous product data boundary.

use crate::error::CatalogError;
use crate::product::Product;

/// Provider of product records and category names.
///
/// Only [`all_products`](Self::all_products) and
/// [`categories`](Self::categories) are required; the narrower queries
/// default to filtering the full list, so each call costs one round trip.
///
/// The trait is used through generics only, so it does not require `Send`
/// futures.
#[allow(async_fn_in_trait)]
pub trait ProductSource {
    /// Every product, in catalog order.
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Every category name, in catalog order.
    async fn categories(&self) -> Result<Vec<String>, CatalogError>;

    /// Products whose category equals `category` exactly.
    async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        let mut products = self.all_products().await?;
        products.retain(|p| p.category == category);
        Ok(products)
    }

    /// The first `limit` products.
    async fn limited_products(&self, limit: usize) -> Result<Vec<Product>, CatalogError> {
        let mut products = self.all_products().await?;
        products.truncate(limit);
        Ok(products)
    }

    /// One product by id.
    async fn product(&self, id: u32) -> Result<Product, CatalogError> {
        self.all_products()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(CatalogError::NotFound { id })
    }
}

impl<T: ProductSource + ?Sized> ProductSource for &T {
    async fn all_products(&self) -> Result<Vec<Product>, CatalogError> {
        (**self).all_products().await
    }

    async fn categories(&self) -> Result<Vec<String>, CatalogError> {
        (**self).categories().await
    }

    async fn products_by_category(&self, category: &str) -> Result<Vec<Product>, CatalogError> {
        (**self).products_by_category(category).await
    }

    async fn limited_products(&self, limit: usize) -> Result<Vec<Product>, CatalogError> {
        (**self).limited_products(limit).await
    }

    async fn product(&self, id: u32) -> Result<Product, CatalogError> {
        (**self).product(id).await
    }
}
