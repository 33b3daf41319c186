//! フィルタ状態
//!
//! 一覧画面の検索クエリ・カテゴリ・ページングをまとめた状態。
//! URLクエリ文字列と双方向に同期される（q / category / page / limit）。

/// デフォルトの1ページ件数
pub const DEFAULT_LIMIT: u64 = 10;

/// 一覧のフィルタ・ページング状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub q: String,
    pub category: String,
    /// 1始まり
    pub page: u64,
    pub limit: u64,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            q: String::new(),
            category: String::new(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Filters {
    /// フェッチ時のオフセット: (page - 1) * limit
    pub fn skip(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// 検索クエリ変更（ページを1に戻す）
    pub fn set_query(&mut self, q: impl Into<String>) {
        self.q = q.into();
        self.page = 1;
    }

    /// カテゴリ変更（ページを1に戻す）
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
        self.page = 1;
    }

    /// 1ページ件数変更（ページを1に戻す）
    pub fn set_limit(&mut self, limit: u64) {
        self.limit = limit.max(1);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: u64) {
        self.page = page.max(1);
    }

    /// フィルタ解除（limitは維持する）
    pub fn clear(&mut self) {
        self.q.clear();
        self.category.clear();
        self.page = 1;
    }

    /// URLクエリに載せるキー・値ペア（未エンコード）
    ///
    /// デフォルト値は省略する: 空のq/category、page=1、limit=10。
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.q.is_empty() {
            pairs.push(("q", self.q.clone()));
        }
        if !self.category.is_empty() {
            pairs.push(("category", self.category.clone()));
        }
        if self.page > 1 {
            pairs.push(("page", self.page.to_string()));
        }
        if self.limit != DEFAULT_LIMIT {
            pairs.push(("limit", self.limit.to_string()));
        }
        pairs
    }

    /// URLクエリ（デコード済みの値）から復元する
    ///
    /// 数値として読めないpage/limitはデフォルトへ落とす。
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut filters = Self::default();
        if let Some(q) = get("q") {
            filters.q = q;
        }
        if let Some(category) = get("category") {
            filters.category = category;
        }
        if let Some(page) = get("page").and_then(|v| v.parse::<u64>().ok()) {
            filters.page = page.max(1);
        }
        if let Some(limit) = get("limit").and_then(|v| v.parse::<u64>().ok()) {
            filters.limit = limit.max(1);
        }
        filters
    }
}
