//! 商品フォームのバリデーション
//!
//! 入力中の生文字列（FormValues）からエラーを都度計算し、
//! 送信時にProductInputへ正規化する。エラーの表示タイミング
//! （blur済み or 送信試行後）はコンポーネント側の責務。

use crate::types::ProductInput;

/// フォームの生入力値（HTMLフィールドの文字列そのまま）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues {
    pub title: String,
    pub price: String,
    pub stock: String,
    pub brand: String,
    pub category: String,
    pub description: String,
}

impl FormValues {
    /// 既存商品からフォーム初期値を作る（編集用）
    pub fn from_product(product: &crate::types::Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price.to_string(),
            stock: product.stock.map(|s| s.to_string()).unwrap_or_default(),
            brand: product.brand.clone().unwrap_or_default(),
            category: product.category.clone(),
            description: product.description.clone().unwrap_or_default(),
        }
    }
}

/// フィールド別のバリデーションエラー
///
/// stock / brand / description は検証しない。
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub price: Option<&'static str>,
    pub category: Option<&'static str>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.price.is_none() && self.category.is_none()
    }
}

/// エラー計算（純粋関数、値が変わるたびに呼ぶ）
pub fn compute_errors(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();

    let title = values.title.trim();
    let title_len = title.chars().count();
    if !(2..=100).contains(&title_len) {
        errors.title = Some("Title must be 2–100 characters");
    }

    match values.price.trim().parse::<f64>() {
        Ok(price) if price < 0.0 => errors.price = Some("Price must be ≥ 0"),
        Ok(_) => {}
        Err(_) => errors.price = Some("Price is required"),
    }

    let category = values.category.trim();
    if category.is_empty() {
        errors.category = Some("Category is required");
    } else if category.chars().count() > 50 {
        errors.category = Some("Category must be ≤ 50 chars");
    }

    errors
}

/// 送信ペイロードへの正規化
///
/// title/categoryはトリム、数値はパース（空は0扱い）、
/// 任意フィールドはそのまま通す。
pub fn normalize(values: &FormValues) -> ProductInput {
    ProductInput {
        title: values.title.trim().to_string(),
        price: values.price.trim().parse::<f64>().unwrap_or(0.0),
        description: values.description.clone(),
        stock: values.stock.trim().parse::<i64>().unwrap_or(0),
        brand: values.brand.clone(),
        category: values.category.trim().to_string(),
    }
}
