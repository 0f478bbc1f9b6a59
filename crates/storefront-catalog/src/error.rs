//! Errors raised by product sources.

use thiserror::Error;

/// Failure to retrieve catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product carries the requested id.
    #[error("product {id} not found")]
    NotFound { id: u32 },

    /// The source could not be reached or refused the request.
    #[error("product source unavailable: {0}")]
    Unavailable(String),

    /// Catalog data could not be decoded.
    #[error("invalid catalog data: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_id() {
        assert_eq!(CatalogError::NotFound { id: 42 }.to_string(), "product 42 not found");
    }

    #[test]
    fn test_decode_from_serde_json() {
        let err: CatalogError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, CatalogError::Decode(_)));
    }
}
