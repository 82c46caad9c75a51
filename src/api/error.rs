//! API Error Types
//!
//! Transport failures raised by the marketplace API client.

use thiserror::Error;

/// A failed call to the marketplace API
#[derive(Error, Debug)]
pub enum TransportError {
    /// The request never produced a response (connection refused, DNS, CORS)
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body did not have the expected shape
    #[error("Response from {url} could not be decoded: {message}")]
    Decode { url: String, message: String },

    /// The product id would not survive as a single path segment
    #[error("Product id {product_id:?} cannot be sent to {url}")]
    InvalidProductId { url: String, product_id: String },
}

impl TransportError {
    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            TransportError::Request { url, .. }
            | TransportError::Status { url, .. }
            | TransportError::Decode { url, .. }
            | TransportError::InvalidProductId { url, .. } => url,
        }
    }

    /// HTTP status, when the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for API calls
pub type TransportResult<T> = Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TransportError::Status {
            url: "http://localhost:8000/metrics/category_distribution".to_string(),
            status: 401,
        };
        assert_eq!(
            err.to_string(),
            "Request to http://localhost:8000/metrics/category_distribution returned HTTP 401"
        );
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_decode_error_accessors() {
        let err = TransportError::Decode {
            url: "http://api/products/1/recommendations".to_string(),
            message: "missing field `title`".to_string(),
        };
        assert_eq!(err.url(), "http://api/products/1/recommendations");
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_invalid_product_id_display() {
        let err = TransportError::InvalidProductId {
            url: "http://api/products/../recommendations".to_string(),
            product_id: "..".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Product id ".." cannot be sent to http://api/products/../recommendations"#
        );
        assert_eq!(err.status(), None);
    }
}
