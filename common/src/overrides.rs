//! オーバーライドストア
//!
//! リモートAPIは作成・更新を永続化しないため、ローカルで編集・作成した
//! 商品をセッション中だけ保持するオーバーレイ。表示時にサーバー値の上へ
//! マージして「保存されたように見せる」ための仕組み。
//!
//! 書き込みはUIスレッド単一なのでロック不要。エビクションは行わない
//! （セッション内で増え続けるが、デモ用途として許容）。

use std::collections::BTreeMap;

use crate::types::Product;

/// 商品ID → ローカルパッチのマップ
///
/// BTreeMapを使いID昇順で列挙する（extra-insertionの並び順を決定的にする）。
#[derive(Debug, Clone, Default)]
pub struct OverrideStore {
    entries: BTreeMap<u64, Product>,
}

impl OverrideStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1件をIDでマージ登録する
    ///
    /// 既存エントリがあれば浅いフィールド上書き: 必須フィールド
    /// （title/price/category）は常に新しい値が勝ち、任意フィールドは
    /// Someのときだけ上書きする。
    pub fn set_one(&mut self, product: Product) {
        match self.entries.get_mut(&product.id) {
            Some(existing) => merge_into(existing, &product),
            None => {
                self.entries.insert(product.id, product);
            }
        }
    }

    /// 複数件をリスト順にマージ登録する（同一IDは後の要素が勝つ）
    pub fn set_many(&mut self, list: Vec<Product>) {
        for product in list {
            self.set_one(product);
        }
    }

    /// 1件削除（存在しなければ何もしない）
    pub fn clear_one(&mut self, id: u64) {
        self.entries.remove(&id);
    }

    /// 全件削除
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.entries.get(&id)
    }

    /// ID昇順の全エントリ
    pub fn values(&self) -> impl Iterator<Item = &Product> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// サーバー値の上にオーバーライドを適用した商品を返す
    ///
    /// オーバーライドが無ければサーバー値をそのまま複製する。
    pub fn apply(&self, server: &Product) -> Product {
        let mut merged = server.clone();
        if let Some(patch) = self.entries.get(&server.id) {
            merge_into(&mut merged, patch);
        }
        merged
    }
}

/// 浅いフィールドマージ（patch側のフィールドが勝つ）
fn merge_into(base: &mut Product, patch: &Product) {
    base.id = patch.id;
    base.title = patch.title.clone();
    base.price = patch.price;
    base.category = patch.category.clone();

    if patch.description.is_some() {
        base.description = patch.description.clone();
    }
    if patch.stock.is_some() {
        base.stock = patch.stock;
    }
    if patch.brand.is_some() {
        base.brand = patch.brand.clone();
    }
    if patch.thumbnail.is_some() {
        base.thumbnail = patch.thumbnail.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price: 1.0,
            category: "misc".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_set_one_and_get() {
        let mut store = OverrideStore::new();
        store.set_one(product(1, "A"));
        assert_eq!(store.get(1).map(|p| p.title.as_str()), Some("A"));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn test_values_ascending_id_order() {
        let mut store = OverrideStore::new();
        store.set_one(product(30, "C"));
        store.set_one(product(10, "A"));
        store.set_one(product(20, "B"));
        let ids: Vec<u64> = store.values().map(|p| p.id).collect();
        assert_eq!(ids, vec![10, 20, 30]);
    }
}
