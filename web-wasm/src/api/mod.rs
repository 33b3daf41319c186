//! リモートカタログAPIクライアント

pub mod products;
