//! 一覧調停ロジックのテスト
//!
//! オーバーレイ適用・extra-insertion・切り詰め・ナビゲーション反映を検証

use catalog_common::types::Product;
use catalog_common::{
    apply_store_to_current, insert_navigated, merge_page, OverrideStore,
};

fn product(id: u64, title: &str, category: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: 1.0,
        category: category.to_string(),
        ..Default::default()
    }
}

/// ページ内の商品にオーバーライドが上書き適用される
#[test]
fn test_merge_page_applies_overrides() {
    let fetched = vec![product(1, "Server A", "beauty"), product(2, "Server B", "beauty")];

    let mut store = OverrideStore::new();
    store.set_one(product(2, "Edited B", "beauty"));

    let merged = merge_page(&fetched, &store, "", "", 10);
    assert_eq!(merged.len(), 2);
    assert_eq!(merged[0].title, "Server A");
    assert_eq!(merged[1].title, "Edited B");
}

/// extra-insertion: ページに無いローカル商品は、クエリが空か
/// タイトルの部分一致、かつカテゴリが空か完全一致のときだけ挿入される
#[test]
fn test_extra_insertion_filter_matrix() {
    let fetched = vec![product(1, "Server A", "beauty")];
    let mut store = OverrideStore::new();
    store.set_one(product(100, "Red Mug", "kitchen"));

    // フィルタなし → 挿入される
    let merged = merge_page(&fetched, &store, "", "", 10);
    assert_eq!(merged[0].id, 100);

    // クエリが部分一致（大文字小文字無視） → 挿入
    let merged = merge_page(&fetched, &store, "red m", "", 10);
    assert!(merged.iter().any(|p| p.id == 100));
    let merged = merge_page(&fetched, &store, "MUG", "", 10);
    assert!(merged.iter().any(|p| p.id == 100));

    // クエリ不一致 → 挿入されない
    let merged = merge_page(&fetched, &store, "blue", "", 10);
    assert!(!merged.iter().any(|p| p.id == 100));

    // カテゴリ完全一致 → 挿入
    let merged = merge_page(&fetched, &store, "", "kitchen", 10);
    assert!(merged.iter().any(|p| p.id == 100));

    // カテゴリ不一致 → 挿入されない
    let merged = merge_page(&fetched, &store, "", "beauty", 10);
    assert!(!merged.iter().any(|p| p.id == 100));

    // 両方一致 → 挿入
    let merged = merge_page(&fetched, &store, "red", "kitchen", 10);
    assert!(merged.iter().any(|p| p.id == 100));
}

/// ページ内に同じIDがある場合はextra-insertionしない（上書きのみ）
#[test]
fn test_no_duplicate_insertion_for_page_ids() {
    let fetched = vec![product(1, "Server A", "beauty")];
    let mut store = OverrideStore::new();
    store.set_one(product(1, "Edited A", "beauty"));

    let merged = merge_page(&fetched, &store, "", "", 10);
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].title, "Edited A");
}

/// extras + ページはlimit件へ切り詰められる
#[test]
fn test_merge_page_truncates_to_limit() {
    let fetched: Vec<Product> = (1..=5)
        .map(|i| product(i, &format!("Server {}", i), "misc"))
        .collect();

    let mut store = OverrideStore::new();
    store.set_one(product(101, "Local A", "misc"));
    store.set_one(product(102, "Local B", "misc"));

    let merged = merge_page(&fetched, &store, "", "", 5);
    assert_eq!(merged.len(), 5);
    // extrasが先頭（ID昇順）、続いてサーバーページ
    assert_eq!(merged[0].id, 101);
    assert_eq!(merged[1].id, 102);
    assert_eq!(merged[2].id, 1);
}

/// 再フェッチなしの反映: 表示中の行が更新され、新規ローカル商品が挿入される
#[test]
fn test_apply_store_to_current() {
    let current = vec![product(1, "Server A", "beauty"), product(2, "Server B", "beauty")];

    let mut store = OverrideStore::new();
    store.set_one(product(2, "Edited B", "beauty"));
    store.set_one(product(50, "Local C", "beauty"));

    let next = apply_store_to_current(&current, &store, "", "", 10);
    assert_eq!(next[0].id, 50);
    assert_eq!(next[1].title, "Server A");
    assert_eq!(next[2].title, "Edited B");
}

/// ナビゲーション反映: 同一IDがあればその場で置き換え
#[test]
fn test_insert_navigated_replaces_in_place() {
    let current = vec![product(1, "A", "x"), product(2, "B", "x"), product(3, "C", "x")];
    let updated = product(2, "B updated", "x");

    let next = insert_navigated(&current, &updated, "", "", 10);
    assert_eq!(next.len(), 3);
    assert_eq!(next[1].title, "B updated");
    // 並び順は変わらない
    assert_eq!(next[0].id, 1);
    assert_eq!(next[2].id, 3);
}

/// ナビゲーション反映: 無ければフィルタ合致時のみ先頭へ挿入
#[test]
fn test_insert_navigated_prepends_when_matching() {
    let current = vec![product(1, "A", "kitchen")];
    let created = product(200, "Red Mug", "kitchen");

    let next = insert_navigated(&current, &created, "", "kitchen", 10);
    assert_eq!(next[0].id, 200);
    assert_eq!(next.len(), 2);

    // フィルタ不一致なら現状維持
    let next = insert_navigated(&current, &created, "", "beauty", 10);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].id, 1);
}

/// ナビゲーション反映もlimit件へ切り詰める
#[test]
fn test_insert_navigated_truncates() {
    let current: Vec<Product> = (1..=3).map(|i| product(i, "X", "misc")).collect();
    let created = product(99, "X new", "misc");

    let next = insert_navigated(&current, &created, "", "", 3);
    assert_eq!(next.len(), 3);
    assert_eq!(next[0].id, 99);
    assert_eq!(next[2].id, 2);
}
