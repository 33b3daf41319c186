//! 商品詳細ページ
//!
//! 遷移で渡された商品がルートIDと一致すればそれを表示し、
//! 無ければリモートからフェッチする。作成・更新直後の到着時は
//! フラッシュを一度だけ表示する。一覧へ戻るときは表示中の商品と
//! フラッシュを履歴stateへ載せて運ぶ（一覧のextra-insertionに使われる）。

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use catalog_common::{Error, Product};

use crate::api::products::get_product;
use crate::nav::{self, NavPayload};

#[component]
pub fn ProductDetail() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();
    let navigate = use_navigate();

    let (product, set_product) = signal(None::<Product>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // 到着時のフラッシュ（一回限り）
    let initial_flash =
        nav::payload_from_state(&location.state.get_untracked()).and_then(|p| p.flash);
    let (flash, set_flash) = signal(initial_flash);
    if initial_flash.is_some() {
        Timeout::new(nav::FLASH_HIDE_MS, move || set_flash.set(None)).forget();
    }

    // 商品の解決: 遷移ペイロード優先、無ければフェッチ。
    // 古い応答は世代カウンタで捨てる。
    let fetch_seq = StoredValue::new(0u64);
    let state = location.state;
    Effect::new(move |_| {
        let raw_id = params.get().get("id").unwrap_or_default();
        let Ok(product_id) = raw_id.parse::<u64>() else {
            set_error.set(Some(Error::InvalidId(raw_id).to_string()));
            set_loading.set(false);
            return;
        };

        if let Some(carried) =
            nav::payload_from_state(&state.get_untracked()).and_then(|payload| payload.product)
        {
            if carried.id == product_id {
                set_product.set(Some(carried));
                set_loading.set(false);
                return;
            }
        }

        let generation = fetch_seq.with_value(|g| *g + 1);
        fetch_seq.set_value(generation);
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            let outcome = get_product(product_id).await;
            if fetch_seq.get_value() != generation {
                return;
            }
            match outcome {
                Ok(p) => set_product.set(Some(p)),
                Err(_) => set_error.set(Some("Failed to load product".to_string())),
            }
            set_loading.set(false);
        });
    });

    // 一覧へ戻る: 表示中の商品とフラッシュを持ち帰る
    let go_back = {
        let navigate = navigate.clone();
        let location = location.clone();
        move |_| {
            let payload = NavPayload {
                product: product.get_untracked(),
                flash: flash.get_untracked(),
            };
            let search = nav::search_suffix(&location.search.get_untracked());
            navigate(&format!("/{}", search), nav::with_payload(&payload, false));
        }
    };

    let go_edit = {
        let navigate = navigate.clone();
        let location = location.clone();
        move |_| {
            let Some(current) = product.get_untracked() else {
                return;
            };
            let payload = NavPayload {
                product: Some(current.clone()),
                flash: None,
            };
            let search = nav::search_suffix(&location.search.get_untracked());
            navigate(
                &format!("/products/{}/edit{}", current.id, search),
                nav::with_payload(&payload, false),
            );
        }
    };

    let go_back_error = go_back.clone();
    let go_back_missing = go_back.clone();

    view! {
        <div class="product-detail">
            <Show when=move || flash.get().is_some()>
                <div class="alert alert-success">
                    {move || flash.get().map(|f| f.message()).unwrap_or_default()}
                    <button class="alert-close" on:click=move |_| set_flash.set(None)>
                        "×"
                    </button>
                </div>
            </Show>

            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading..."</div> }.into_any()
                } else if let Some(message) = error.get() {
                    let go_back_error = go_back_error.clone();
                    view! {
                        <div class="alert alert-error">{message}</div>
                        <button class="btn btn-secondary" on:click=go_back_error>
                            "Back"
                        </button>
                    }
                    .into_any()
                } else if let Some(p) = product.get() {
                    let go_back = go_back.clone();
                    let go_edit = go_edit.clone();
                    view! {
                        <div class="detail-header">
                            <h2>{p.title.clone()}</h2>
                            <div class="detail-actions">
                                <button class="btn btn-secondary" on:click=go_back>
                                    "Back"
                                </button>
                                <button class="btn btn-primary" on:click=go_edit>
                                    "Edit"
                                </button>
                            </div>
                        </div>
                        <div class="detail-body">
                            {p.thumbnail.clone().map(|src| {
                                view! { <img src=src alt=p.title.clone() /> }
                            })}
                            <dl>
                                <dt>"Price"</dt>
                                <dd>{format!("${:.2}", p.price)}</dd>
                                {p.brand.clone().map(|brand| {
                                    view! {
                                        <dt>"Brand"</dt>
                                        <dd>{brand}</dd>
                                    }
                                })}
                                {(!p.category.is_empty()).then(|| {
                                    view! {
                                        <dt>"Category"</dt>
                                        <dd>{p.category.clone()}</dd>
                                    }
                                })}
                                {p.description.clone().map(|description| {
                                    view! {
                                        <dt>"Description"</dt>
                                        <dd>{description}</dd>
                                    }
                                })}
                            </dl>
                        </div>
                    }
                    .into_any()
                } else {
                    let go_back_missing = go_back_missing.clone();
                    view! {
                        <div class="alert alert-warning">"Product not found."</div>
                        <button class="btn btn-secondary" on:click=go_back_missing>
                            "Back"
                        </button>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
