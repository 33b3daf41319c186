//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Product not found")]
    NotFound,

    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_invalid_id() {
        let error = Error::InvalidId("abc".to_string());
        assert_eq!(format!("{}", error), "Invalid product id: abc");
    }

    #[test]
    fn test_error_display_not_found() {
        let error = Error::NotFound;
        assert_eq!(format!("{}", error), "Product not found");
    }

    #[test]
    fn test_error_display_network() {
        let error = Error::Network("API error: 500".to_string());
        let display = format!("{}", error);
        assert!(display.contains("Network error"));
        assert!(display.contains("500"));
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = Error::NotFound;
        let debug = format!("{:?}", error);
        assert!(debug.contains("NotFound"));
    }
}
