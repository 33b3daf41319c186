//! 商品データの型定義
//!
//! リモートAPI（DummyJSON互換）のレスポンス形式に合わせた型:
//! - Product: 商品1件
//! - ProductsPage: 一覧レスポンス（products + total + skip + limit）
//! - ProductInput: 作成・更新リクエストのペイロード

use serde::{Deserialize, Serialize};

/// 商品
///
/// idはリモート側で採番される。descriptionなどの任意項目は
/// レスポンスに含まれないことがあるためOptionで受ける。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub category: String,
    pub description: Option<String>,
    pub stock: Option<i64>,
    pub brand: Option<String>,
    pub thumbnail: Option<String>,
}

/// 一覧レスポンス
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductsPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

/// 作成・更新リクエストのペイロード（フォームの正規化済み出力）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductInput {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
    pub brand: String,
    pub category: String,
}

/// カテゴリ一覧の正規化
///
/// APIはプレーン文字列と`{slug, name}`オブジェクトの両形式を返しうるため、
/// どちらも受け付けてslug優先で文字列化する。空要素は除外し、
/// 出現順を保って重複を取り除く。
pub fn normalize_categories(raw: &[serde_json::Value]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::new();

    for value in raw {
        let name = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Object(map) => map
                .get("slug")
                .or_else(|| map.get("name"))
                .and_then(|v| v.as_str())
                .map(|s| s.to_string())
                .unwrap_or_default(),
            other => other.to_string(),
        };

        if name.is_empty() {
            continue;
        }
        if seen.insert(name.clone()) {
            out.push(name);
        }
    }

    out
}
