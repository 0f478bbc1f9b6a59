//! # Storefront Catalog - Products and Catalog Page State
//!
//! - [`Product`]: one catalog entry, with [`format_price`] and [`StarBreakdown`]
//!   display helpers
//! - [`ProductSource`]: async boundary for product and category queries
//! - [`MockCatalog`]: fixed data behind a simulated network delay
//! - [`CatalogView`]: loading/failed/ready state plus category filtering
//!
//! ```rust
//! use std::time::Duration;
//! use storefront_catalog::{CatalogView, MockCatalog};
//!
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let source = MockCatalog::new().with_latency(Duration::ZERO);
//! let mut view = CatalogView::new();
//! view.load(&source, None).await;
//!
//! assert_eq!(view.featured().len(), 3);
//! assert_eq!(view.category_counts()[0].label, "All Products");
//! # });
//! ```

mod error;
mod mock;
mod product;
mod source;
mod view;

pub use error::CatalogError;
pub use mock::{MockCatalog, DEFAULT_LATENCY};
pub use product::{format_price, Product, Rating, StarBreakdown};
pub use source::ProductSource;
pub use view::{
    load_catalog, Catalog, CatalogState, CatalogView, CategoryCount, CategoryFilter,
    EMPTY_CATEGORY_MESSAGE, FEATURED_COUNT, LOADING_MESSAGE, LOAD_ERROR_MESSAGE,
};
