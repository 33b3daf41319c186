//! 商品編集ページ
//!
//! 詳細ページと同じ方法で商品を解決し、送信でupdateを呼ぶ。
//! 結果はオーバーライドストアへ書き込み、"updated"フラッシュ付きで
//! 詳細へreplace遷移する（詳細からBackしても編集フォームへ戻らない）。

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate, use_params_map};
use wasm_bindgen_futures::spawn_local;

use catalog_common::{Error, FormValues, OverrideStore, Product, ProductInput};

use crate::api::products::{get_product, update_product};
use crate::components::product_form::ProductForm;
use crate::nav::{self, Flash, NavPayload};

#[component]
pub fn ProductEdit() -> impl IntoView {
    let params = use_params_map();
    let location = use_location();
    let navigate = use_navigate();
    let store = expect_context::<RwSignal<OverrideStore>>();

    let product_id = Memo::new(move |_| {
        params
            .get()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
    });

    let (product, set_product) = signal(None::<Product>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (submitting, set_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);

    // 商品の解決: 遷移ペイロード優先、無ければフェッチ
    let fetch_seq = StoredValue::new(0u64);
    let state = location.state;
    Effect::new(move |_| {
        let Some(id) = product_id.get() else {
            let raw = params.get_untracked().get("id").unwrap_or_default();
            set_error.set(Some(Error::InvalidId(raw).to_string()));
            set_loading.set(false);
            return;
        };

        if let Some(carried) =
            nav::payload_from_state(&state.get_untracked()).and_then(|payload| payload.product)
        {
            if carried.id == id {
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
            let outcome = get_product(id).await;
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

    let on_submit = {
        let navigate = navigate.clone();
        let location = location.clone();
        move |input: ProductInput| {
            let Some(id) = product_id.get_untracked() else {
                return;
            };
            set_submitting.set(true);
            set_submit_error.set(None);

            let navigate = navigate.clone();
            let search = nav::search_suffix(&location.search.get_untracked());
            spawn_local(async move {
                match update_product(id, &input).await {
                    Ok(updated) => {
                        // APIは永続化しないのでローカルへ保存する
                        store.update(|s| s.set_one(updated.clone()));
                        set_submitting.set(false);

                        let payload = NavPayload {
                            product: Some(updated),
                            flash: Some(Flash::Updated),
                        };
                        navigate(
                            &format!("/products/{}{}", id, search),
                            nav::with_payload(&payload, true),
                        );
                    }
                    Err(_) => {
                        set_submit_error.set(Some("Failed to update product".to_string()));
                        set_submitting.set(false);
                    }
                }
            });
        }
    };

    let on_cancel = move |_: ()| {
        if let Ok(history) = window().history() {
            let _ = history.back();
        }
    };

    view! {
        <div class="product-edit">
            <h2>"Edit product"</h2>

            <Show when=move || submit_error.get().is_some()>
                <div class="alert alert-error">
                    {move || submit_error.get().unwrap_or_default()}
                </div>
            </Show>

            {move || {
                if loading.get() {
                    view! { <div class="loading">"Loading..."</div> }.into_any()
                } else if let Some(message) = error.get() {
                    view! { <div class="alert alert-error">{message}</div> }.into_any()
                } else if let Some(p) = product.get() {
                    let on_submit = on_submit.clone();
                    view! {
                        <ProductForm
                            initial=FormValues::from_product(&p)
                            submitting=submitting
                            on_submit=on_submit
                            on_cancel=on_cancel
                        />
                    }
                    .into_any()
                } else {
                    view! { <div class="alert alert-warning">"Product not found."</div> }
                        .into_any()
                }
            }}
        </div>
    }
}
