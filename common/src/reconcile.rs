//! 一覧表示の調停ロジック
//!
//! サーバーから取得したページとオーバーライドストアを組み合わせて
//! 実際に表示する商品リストを導出する:
//! 1. オーバーレイ: ページ内の商品にオーバーライドを上書き適用
//! 2. extra-insertion: ページに無いローカル商品を先頭へ挿入
//!    （現在のフィルタに合致するものだけ）
//! 3. limit件へ切り詰め
//!
//! 表示件数はextrasで増減しても、ページネーションの総件数は常に
//! サーバー報告値を使う（作成がデモ用で永続化されないため）。

use crate::overrides::OverrideStore;
use crate::types::Product;

/// 商品が現在のフィルタに合致するか
///
/// q: 空なら常に合致、非空ならタイトルの大文字小文字を無視した部分一致。
/// category: 空なら常に合致、非空なら完全一致。
pub fn matches_filters(product: &Product, q: &str, category: &str) -> bool {
    let ok_q = q.is_empty() || product.title.to_lowercase().contains(&q.to_lowercase());
    let ok_category = category.is_empty() || product.category == category;
    ok_q && ok_category
}

/// フェッチ結果とストアから表示リストを作る
///
/// extrasはストアのID昇順で先頭に並び、その後にオーバーレイ適用済みの
/// ページが続く。全体をlimit件へ切り詰める。
pub fn merge_page(
    fetched: &[Product],
    store: &OverrideStore,
    q: &str,
    category: &str,
    limit: usize,
) -> Vec<Product> {
    let overlaid: Vec<Product> = fetched.iter().map(|p| store.apply(p)).collect();

    let ids_in_page: std::collections::HashSet<u64> = overlaid.iter().map(|p| p.id).collect();
    let extras = store
        .values()
        .filter(|p| !ids_in_page.contains(&p.id) && matches_filters(p, q, category))
        .cloned();

    let mut combined: Vec<Product> = extras.collect();
    combined.extend(overlaid);
    combined.truncate(limit);
    combined
}

/// 再フェッチせずに、表示中のリストへストアの変更を反映する
///
/// 表示中の各行にオーバーライドを適用し直し、リストに無いローカル商品を
/// extra-insertionしてlimit件へ切り詰める。
pub fn apply_store_to_current(
    current: &[Product],
    store: &OverrideStore,
    q: &str,
    category: &str,
    limit: usize,
) -> Vec<Product> {
    let updated: Vec<Product> = current.iter().map(|p| store.apply(p)).collect();

    let ids: std::collections::HashSet<u64> = updated.iter().map(|p| p.id).collect();
    let extras = store
        .values()
        .filter(|p| !ids.contains(&p.id) && matches_filters(p, q, category))
        .cloned();

    let mut combined: Vec<Product> = extras.collect();
    combined.extend(updated);
    combined.truncate(limit);
    combined
}

/// ナビゲーションで持ち帰った商品を表示リストへ反映する
///
/// 同一IDの行があればその場で置き換え、無ければフィルタ合致時のみ
/// 先頭へ挿入してlimit件へ切り詰める。合致しなければ現状維持。
pub fn insert_navigated(
    current: &[Product],
    product: &Product,
    q: &str,
    category: &str,
    limit: usize,
) -> Vec<Product> {
    if let Some(index) = current.iter().position(|p| p.id == product.id) {
        let mut next = current.to_vec();
        next[index] = product.clone();
        return next;
    }

    if !matches_filters(product, q, category) {
        return current.to_vec();
    }

    let mut next = Vec::with_capacity(current.len() + 1);
    next.push(product.clone());
    next.extend_from_slice(current);
    next.truncate(limit);
    next
}
