//! 商品一覧ページ
//!
//! フィルタ・ページング状態をURLと同期しながらフェッチし、
//! オーバーライドストアとマージして表示する。
//!
//! 表示リストの導出手順:
//! 1. 検索入力は300msデバウンスしてからフェッチキーに参加させる
//! 2. クエリ・カテゴリ・件数の変更でページを1へ戻す
//! 3. クエリあり→search、カテゴリのみ→category、無し→list
//! 4. search+カテゴリ併用時は結果をクライアント側で絞り込む
//!    （totalはサーバー報告値のまま）
//! 5-7. オーバーレイ適用 + extra-insertion + limit件へ切り詰め
//! 8. ストア変更時は再フェッチせずに表示リストだけ再導出
//! 9. 遷移で持ち帰った商品はストアへ書き込み、表示へ反映して
//!    履歴stateをreplaceで消費する

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

use catalog_common::{apply_store_to_current, insert_navigated, merge_page};
use catalog_common::{Filters, OverrideStore, Product};

use crate::api::products::{
    get_categories, get_products, get_products_by_category, search_products,
};
use crate::components::product_card::ProductCard;
use crate::nav;

/// 検索入力のデバウンス幅
const DEBOUNCE_MS: u32 = 300;

/// フィルタに応じたエンドポイント選択とフェッチ
///
/// searchはカテゴリを受け付けないため、併用時はクライアント側で
/// カテゴリ絞込みする。絞込みで行数が減ってもtotalはサーバーの
/// 検索総数のまま返す（ページ数の表示は変えない）。
async fn fetch_page(filters: &Filters) -> Result<(Vec<Product>, u64), JsValue> {
    let q = filters.q.trim();
    let category = filters.category.trim();

    if !q.is_empty() {
        let page = search_products(q, filters.limit, filters.skip()).await?;
        let mut products = page.products;
        if !category.is_empty() {
            products.retain(|p| p.category == category);
        }
        Ok((products, page.total))
    } else if !category.is_empty() {
        let page = get_products_by_category(category, filters.limit, filters.skip()).await?;
        Ok((page.products, page.total))
    } else {
        let page = get_products(filters.limit, filters.skip()).await?;
        Ok((page.products, page.total))
    }
}

#[component]
pub fn ProductsList() -> impl IntoView {
    let store = expect_context::<RwSignal<OverrideStore>>();
    let location = use_location();
    let navigate = use_navigate();
    let query_map = use_query_map();

    // URLから初期フィルタを復元
    let initial = Filters::from_lookup(|key| query_map.get_untracked().get(key));

    // 詳細・編集・作成から持ち帰ったペイロード（構築時に一度だけ読む）
    let carried = nav::payload_from_state(&location.state.get_untracked());

    let (q, set_q) = signal(initial.q.clone());
    let (debounced_q, set_debounced_q) = signal(initial.q.clone());
    let (category, set_category) = signal(initial.category.clone());
    let (page, set_page) = signal(initial.page);
    let (limit, set_limit) = signal(initial.limit);

    let (products, set_products) = signal(Vec::<Product>::new());
    let (total, set_total) = signal(0u64);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (categories, set_categories) = signal(Vec::<String>::new());

    let (flash, set_flash) = signal(carried.as_ref().and_then(|p| p.flash));
    if flash.get_untracked().is_some() {
        Timeout::new(nav::FLASH_HIDE_MS, move || set_flash.set(None)).forget();
    }

    // カテゴリ候補は一度だけ取得（失敗時は黙って空のまま）
    spawn_local(async move {
        match get_categories().await {
            Ok(list) => set_categories.set(list),
            Err(_) => set_categories.set(Vec::new()),
        }
    });

    // 1. 検索入力のデバウンス（入力のたびに既存タイマーを破棄して再設定）
    let debounce_handle = StoredValue::new_local(None::<Timeout>);
    Effect::new(move |_| {
        let value = q.get();
        debounce_handle.update_value(|handle| {
            handle.take();
        });
        let timer = Timeout::new(DEBOUNCE_MS, move || set_debounced_q.set(value));
        debounce_handle.set_value(Some(timer));
    });

    // 2. フィルタ変更でページを1へ戻す（マウント直後は除く）
    Effect::new(move |prev: Option<(String, String, u64)>| {
        let key = (debounced_q.get(), category.get(), limit.get());
        if let Some(prev) = prev {
            if prev != key {
                set_page.set(1);
            }
        }
        key
    });

    // フィルタをURLへ書き戻す（replaceで履歴を汚さない）
    let navigate_url = navigate.clone();
    Effect::new(move |_| {
        let filters = Filters {
            q: debounced_q.get(),
            category: category.get(),
            page: page.get(),
            limit: limit.get(),
        };
        let query_string = nav::encode_filters(&filters);
        let target = if query_string.is_empty() {
            "/".to_string()
        } else {
            format!("/?{}", query_string)
        };
        navigate_url(&target, nav::replace_without_payload());
    });

    // 3-7. フェッチしてストアとマージする。世代カウンタで古い応答を捨てる
    // （新しいフェッチ発行後に届いた結果は適用しない）。
    let fetch_seq = StoredValue::new(0u64);
    Effect::new(move |_| {
        let filters = Filters {
            q: debounced_q.get(),
            category: category.get(),
            page: page.get(),
            limit: limit.get(),
        };

        let generation = fetch_seq.with_value(|g| *g + 1);
        fetch_seq.set_value(generation);

        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = fetch_page(&filters).await;
            if fetch_seq.get_value() != generation {
                return;
            }

            match outcome {
                Ok((items, server_total)) => {
                    let merged = store.with_untracked(|s| {
                        merge_page(&items, s, &filters.q, &filters.category, filters.limit as usize)
                    });
                    set_products.set(merged);
                    // totalは常にサーバー報告値（extrasで行数が変わっても）
                    set_total.set(server_total);
                }
                Err(_) => set_error.set(Some("Failed to load products".to_string())),
            }
            set_loading.set(false);
        });
    });

    // 8. ストア変更時は再フェッチせず表示リストだけ再導出する
    Effect::new(move |_| {
        store.track();
        let current_q = debounced_q.get_untracked();
        let current_category = category.get_untracked();
        let current_limit = limit.get_untracked() as usize;
        set_products.update(|current| {
            let next = store.with_untracked(|s| {
                apply_store_to_current(current, s, &current_q, &current_category, current_limit)
            });
            *current = next;
        });
    });

    // 9. 持ち帰ったペイロードの消費: ストアへ書き込み、表示へ反映し、
    // 履歴エントリをreplaceしてstateを消す（戻る・進むで再適用しない）。
    if let Some(payload) = carried {
        let navigate_consume = navigate.clone();
        let location_consume = location.clone();
        Effect::new(move |_| {
            if let Some(product) = payload.product.clone() {
                store.update(|s| s.set_one(product.clone()));
                let current_q = debounced_q.get_untracked();
                let current_category = category.get_untracked();
                let current_limit = limit.get_untracked() as usize;
                set_products.update(|current| {
                    let next = insert_navigated(
                        current,
                        &product,
                        &current_q,
                        &current_category,
                        current_limit,
                    );
                    *current = next;
                });
            }
            let search = nav::search_suffix(&location_consume.search.get_untracked());
            navigate_consume(&format!("/{}", search), nav::replace_without_payload());
        });
    }

    let total_pages = move || {
        let per_page = limit.get().max(1);
        ((total.get() + per_page - 1) / per_page).max(1)
    };

    let clear_filters = move |_| {
        set_q.set(String::new());
        set_category.set(String::new());
        set_page.set(1);
    };

    let navigate_new = navigate.clone();
    let location_new = location.clone();
    let on_create = move |_| {
        let search = nav::search_suffix(&location_new.search.get_untracked());
        navigate_new(&format!("/new{}", search), Default::default());
    };

    view! {
        <div class="products-list">
            <Show when=move || flash.get().is_some()>
                <div class="alert alert-success">
                    {move || flash.get().map(|f| f.message()).unwrap_or_default()}
                    <button class="alert-close" on:click=move |_| set_flash.set(None)>
                        "×"
                    </button>
                </div>
            </Show>

            <aside class="filters-panel">
                <h3>"Filters"</h3>

                <div class="form-group">
                    <label for="search">"Search"</label>
                    <input
                        type="text"
                        id="search"
                        placeholder="Search products..."
                        prop:value=move || q.get()
                        on:input=move |ev| set_q.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="category-filter">"Category"</label>
                    <select
                        id="category-filter"
                        prop:value=move || category.get()
                        on:change=move |ev| set_category.set(event_target_value(&ev))
                    >
                        <option value="">"All categories"</option>
                        <For
                            each=move || categories.get()
                            key=|c| c.clone()
                            children=move |c: String| {
                                let value = c.clone();
                                let selected_value = c.clone();
                                view! {
                                    <option
                                        value=value
                                        selected=move || category.get() == selected_value
                                    >
                                        {c.clone()}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                <div class="form-group">
                    <label for="per-page">"Per page"</label>
                    <select
                        id="per-page"
                        on:change=move |ev| {
                            let value: u64 = event_target_value(&ev).parse().unwrap_or(10);
                            set_limit.set(value);
                        }
                    >
                        <option value="5" selected=move || limit.get() == 5>"5"</option>
                        <option value="10" selected=move || limit.get() == 10>"10"</option>
                        <option value="20" selected=move || limit.get() == 20>"20"</option>
                        <option value="40" selected=move || limit.get() == 40>"40"</option>
                    </select>
                </div>

                <button
                    class="btn btn-secondary"
                    disabled=move || q.get().is_empty() && category.get().is_empty()
                    on:click=clear_filters
                >
                    "Clear"
                </button>
            </aside>

            <section class="products-main">
                <div class="products-header">
                    <h2>"Products"</h2>
                    <button class="btn btn-primary" on:click=on_create>
                        "Create New Product"
                    </button>
                </div>

                {move || {
                    if loading.get() {
                        view! { <div class="loading">"Loading..."</div> }.into_any()
                    } else if let Some(message) = error.get() {
                        view! { <div class="alert alert-error">{message}</div> }.into_any()
                    } else if products.get().is_empty() {
                        view! { <p class="text-muted">"No products found."</p> }.into_any()
                    } else {
                        view! {
                            <div class="products-grid">
                                <For
                                    each=move || products.get()
                                    key=|p| p.id
                                    children=move |p: Product| {
                                        view! { <ProductCard product=p /> }
                                    }
                                />
                            </div>
                        }
                        .into_any()
                    }
                }}

                <div class="pagination">
                    <button
                        class="btn btn-small"
                        disabled=move || page.get() <= 1
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1).max(1))
                    >
                        "Prev"
                    </button>
                    <span>{move || format!("Page {} of {}", page.get(), total_pages())}</span>
                    <button
                        class="btn btn-small"
                        disabled=move || page.get() >= total_pages()
                        on:click=move |_| set_page.update(|p| *p += 1)
                    >
                        "Next"
                    </button>
                </div>
            </section>
        </div>
    }
}
