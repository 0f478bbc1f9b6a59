//! Catalog page state: loading, failure, category filtering.
//!
//! [`CatalogView`] is a small state machine driven by the result of
//! [`load_catalog`]:
//!
//! ```text
//! Loading --Ok(catalog)--> Ready(catalog)
//!         --Err(_)-------> Failed { LOAD_ERROR_MESSAGE }
//! ```
//!
//! [`resolve`](CatalogView::resolve) can be called again at any time and
//! simply overwrites the state, so when two loads overlap the one that
//! resolves last wins.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, error, info};

use crate::error::CatalogError;
use crate::product::Product;
use crate::source::ProductSource;

/// Message shown while the first load is in flight.
pub const LOADING_MESSAGE: &str = "Loading products...";

/// Generic message shown for any load failure.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load products. Please try again later.";

/// Message shown when the active category has no products.
pub const EMPTY_CATEGORY_MESSAGE: &str = "No products found in this category.";

/// Number of leading products shown as featured.
pub const FEATURED_COUNT: usize = 3;

/// Products plus the category list, as loaded together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

/// Fetches products and categories concurrently.
///
/// With `limit`, only the first `limit` products are requested. Either
/// query failing fails the whole load; no partial data is kept.
pub async fn load_catalog<S: ProductSource>(
    source: &S,
    limit: Option<usize>,
) -> Result<Catalog, CatalogError> {
    let products = async {
        match limit {
            Some(n) => source.limited_products(n).await,
            None => source.all_products().await,
        }
    };
    let (products, categories) = tokio::join!(products, source.categories());
    let catalog = Catalog {
        products: products?,
        categories: categories?,
    };
    debug!(
        products = catalog.products.len(),
        categories = catalog.categories.len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Failed { message: String },
    Ready(Catalog),
}

/// Which products the grid shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => product.category == *c,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = Infallible;

    /// `"all"` selects everything; any other string names a category.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(s.to_string())
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Category(c) => f.write_str(c),
        }
    }
}

/// One filter button: its label, how many products it selects, and whether
/// it is the active filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// `"all"` or the category name.
    pub key: String,
    pub label: String,
    pub count: usize,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct CatalogView {
    state: CatalogState,
    filter: CategoryFilter,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogView {
    pub fn new() -> Self {
        Self {
            state: CatalogState::Loading,
            filter: CategoryFilter::All,
        }
    }

    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        debug!(filter = %filter, "category filter changed");
        self.filter = filter;
    }

    /// Moves to `Ready` or `Failed`, replacing whatever was there.
    pub fn resolve(&mut self, result: Result<Catalog, CatalogError>) {
        self.state = match result {
            Ok(catalog) => CatalogState::Ready(catalog),
            Err(e) => {
                error!(error = %e, "error fetching catalog data");
                CatalogState::Failed {
                    message: LOAD_ERROR_MESSAGE.to_string(),
                }
            }
        };
    }

    /// Resets to `Loading`, runs [`load_catalog`] and resolves.
    pub async fn load<S: ProductSource>(&mut self, source: &S, limit: Option<usize>) {
        self.state = CatalogState::Loading;
        info!("{}", LOADING_MESSAGE);
        let result = load_catalog(source, limit).await;
        self.resolve(result);
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            CatalogState::Ready(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn products(&self) -> &[Product] {
        self.catalog()
            .map(|c| c.products.as_slice())
            .unwrap_or(&[])
    }

    /// The first [`FEATURED_COUNT`] products, independent of the filter.
    pub fn featured(&self) -> &[Product] {
        let products = self.products();
        &products[..products.len().min(FEATURED_COUNT)]
    }

    /// Products selected by the active filter, in catalog order.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.products()
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// True when loaded data is available but the filter selects nothing.
    pub fn is_empty_selection(&self) -> bool {
        self.catalog().is_some() && self.visible_products().is_empty()
    }

    /// Filter buttons: "All Products" first, then one per category in
    /// category order.
    pub fn category_counts(&self) -> Vec<CategoryCount> {
        let Some(catalog) = self.catalog() else {
            return Vec::new();
        };

        let mut counts = vec![CategoryCount {
            key: "all".to_string(),
            label: "All Products".to_string(),
            count: catalog.products.len(),
            active: self.filter == CategoryFilter::All,
        }];
        for category in &catalog.categories {
            counts.push(CategoryCount {
                key: category.clone(),
                label: category.clone(),
                count: catalog
                    .products
                    .iter()
                    .filter(|p| p.category == *category)
                    .count(),
                active: matches!(&self.filter, CategoryFilter::Category(c) if c == category),
            });
        }
        counts
    }
}
