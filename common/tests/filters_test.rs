//! フィルタ状態のテスト
//!
//! ページングの計算とURLクエリとの相互変換を検証

use catalog_common::Filters;

/// ページングのオフセット計算
#[test]
fn test_skip_arithmetic() {
    let mut filters = Filters::default();
    filters.limit = 10;

    filters.page = 3;
    assert_eq!(filters.skip(), 20);

    filters.page = 1;
    assert_eq!(filters.skip(), 0);
}

/// 検索クエリ変更でページが1に戻る
#[test]
fn test_set_query_resets_page() {
    let mut filters = Filters::default();
    filters.page = 3;

    filters.set_query("phone");
    assert_eq!(filters.page, 1);
    assert_eq!(filters.q, "phone");
}

/// カテゴリ変更でページが1に戻る
#[test]
fn test_set_category_resets_page() {
    let mut filters = Filters::default();
    filters.page = 5;

    filters.set_category("beauty");
    assert_eq!(filters.page, 1);
}

/// 件数変更でページが1に戻る
#[test]
fn test_set_limit_resets_page() {
    let mut filters = Filters::default();
    filters.page = 2;

    filters.set_limit(20);
    assert_eq!(filters.page, 1);
    assert_eq!(filters.limit, 20);
}

/// clearはq/category/pageを戻し、limitは維持する
#[test]
fn test_clear_keeps_limit() {
    let mut filters = Filters {
        q: "mug".to_string(),
        category: "kitchen".to_string(),
        page: 4,
        limit: 20,
    };

    filters.clear();
    assert!(filters.q.is_empty());
    assert!(filters.category.is_empty());
    assert_eq!(filters.page, 1);
    assert_eq!(filters.limit, 20);
}

/// URLペア化: デフォルト値（page=1, limit=10, 空文字）は省略
#[test]
fn test_to_pairs_omission_rules() {
    let filters = Filters {
        q: "mug".to_string(),
        category: String::new(),
        page: 1,
        limit: 10,
    };
    assert_eq!(filters.to_pairs(), vec![("q", "mug".to_string())]);

    let filters = Filters {
        q: String::new(),
        category: "kitchen".to_string(),
        page: 3,
        limit: 20,
    };
    assert_eq!(
        filters.to_pairs(),
        vec![
            ("category", "kitchen".to_string()),
            ("page", "3".to_string()),
            ("limit", "20".to_string()),
        ]
    );
}

/// URLからの復元と往復の一致
#[test]
fn test_from_lookup_round_trip() {
    let original = Filters {
        q: "red mug".to_string(),
        category: "kitchen".to_string(),
        page: 2,
        limit: 20,
    };
    let pairs = original.to_pairs();

    let restored = Filters::from_lookup(|key| {
        pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.clone())
    });
    assert_eq!(restored, original);
}

/// 不正なpage/limitはデフォルトへ落ちる
#[test]
fn test_from_lookup_invalid_numbers() {
    let restored = Filters::from_lookup(|key| match key {
        "page" => Some("abc".to_string()),
        "limit" => Some("-5".to_string()),
        _ => None,
    });
    assert_eq!(restored.page, 1);
    assert_eq!(restored.limit, 10);
}
