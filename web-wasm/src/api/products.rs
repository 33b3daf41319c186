//! 商品APIクライアント（DummyJSON互換）
//!
//! list / get / search / category / categories / create / update を
//! fetchで薄くラップする。全操作は単発でリトライなし、失敗は
//! 呼び出し側で汎用メッセージに変換される。
//!
//! create / update はリモート側で受理されるが永続化されないため、
//! 呼び出し側が結果をオーバーライドストアへ書き込む必要がある。

use catalog_common::{normalize_categories, Product, ProductInput, ProductsPage};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

const API_BASE_URL: &str = "https://dummyjson.com/products";

/// fetch共通処理: リクエスト発行 + JSONレスポンス取得
async fn fetch_json(url: &str, method: &str, body: Option<String>) -> Result<JsValue, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    JsFuture::from(resp.json()?).await
}

fn decode<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn encode_component(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

/// 商品一覧
pub async fn get_products(limit: u64, skip: u64) -> Result<ProductsPage, JsValue> {
    let url = format!("{}?limit={}&skip={}", API_BASE_URL, limit, skip);
    decode(fetch_json(&url, "GET", None).await?)
}

/// 商品1件
pub async fn get_product(id: u64) -> Result<Product, JsValue> {
    let url = format!("{}/{}", API_BASE_URL, id);
    decode(fetch_json(&url, "GET", None).await?)
}

/// キーワード検索（サーバーサイド）
pub async fn search_products(q: &str, limit: u64, skip: u64) -> Result<ProductsPage, JsValue> {
    let url = format!(
        "{}/search?q={}&limit={}&skip={}",
        API_BASE_URL,
        encode_component(q),
        limit,
        skip
    );
    decode(fetch_json(&url, "GET", None).await?)
}

/// カテゴリ別一覧（サーバーサイド）
pub async fn get_products_by_category(
    category: &str,
    limit: u64,
    skip: u64,
) -> Result<ProductsPage, JsValue> {
    let url = format!(
        "{}/category/{}?limit={}&skip={}",
        API_BASE_URL,
        encode_component(category),
        limit,
        skip
    );
    decode(fetch_json(&url, "GET", None).await?)
}

/// カテゴリ一覧（文字列・オブジェクト両形式を正規化して返す）
pub async fn get_categories() -> Result<Vec<String>, JsValue> {
    let url = format!("{}/categories", API_BASE_URL);
    let raw: Vec<serde_json::Value> = decode(fetch_json(&url, "GET", None).await?)?;
    Ok(normalize_categories(&raw))
}

/// 商品作成（サーバー側では永続化されない）
pub async fn create_product(input: &ProductInput) -> Result<Product, JsValue> {
    let body = serde_json::to_string(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let url = format!("{}/add", API_BASE_URL);
    decode(fetch_json(&url, "POST", Some(body)).await?)
}

/// 商品更新（サーバー側では永続化されない）
pub async fn update_product(id: u64, input: &ProductInput) -> Result<Product, JsValue> {
    let body = serde_json::to_string(input).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let url = format!("{}/{}", API_BASE_URL, id);
    decode(fetch_json(&url, "PUT", Some(body)).await?)
}
