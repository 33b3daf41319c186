//! Catalog UI Common Library
//!
//! Web(WASM)フロントエンドから利用される型とロジック:
//! - types: 商品・ページレスポンスの型定義
//! - overrides: ローカル編集のオーバーレイストア
//! - filters: 検索・カテゴリ・ページングのフィルタ状態
//! - reconcile: サーバーページとオーバーレイのマージ
//! - form: 商品フォームのバリデーション

pub mod types;
pub mod error;
pub mod overrides;
pub mod filters;
pub mod reconcile;
pub mod form;

pub use types::{Product, ProductInput, ProductsPage, normalize_categories};
pub use error::{Error, Result};
pub use overrides::OverrideStore;
pub use filters::Filters;
pub use reconcile::{matches_filters, merge_page, apply_store_to_current, insert_navigated};
pub use form::{FormValues, FormErrors, compute_errors, normalize};
