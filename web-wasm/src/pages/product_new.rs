//! 商品作成ページ
//!
//! 送信でcreateを呼び、採番されたIDがあればストアへ書き込んで
//! "created"フラッシュ付きで詳細へreplace遷移する。IDが取れない
//! レスポンスの場合は、作成した商品を持ったまま一覧へ戻る。

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use wasm_bindgen_futures::spawn_local;

use catalog_common::{FormValues, OverrideStore, ProductInput};

use crate::api::products::create_product;
use crate::components::product_form::ProductForm;
use crate::nav::{self, Flash, NavPayload};

#[component]
pub fn ProductNew() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();
    let store = expect_context::<RwSignal<OverrideStore>>();

    let (submitting, set_submitting) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);

    let on_submit = {
        let navigate = navigate.clone();
        let location = location.clone();
        move |input: ProductInput| {
            set_submitting.set(true);
            set_submit_error.set(None);

            let navigate = navigate.clone();
            let search = nav::search_suffix(&location.search.get_untracked());
            spawn_local(async move {
                match create_product(&input).await {
                    Ok(created) => {
                        set_submitting.set(false);

                        if created.id != 0 {
                            // ローカルオーバーレイへ保存して一覧・詳細から見えるようにする
                            store.update(|s| s.set_one(created.clone()));
                            let payload = NavPayload {
                                product: Some(created.clone()),
                                flash: Some(Flash::Created),
                            };
                            navigate(
                                &format!("/products/{}{}", created.id, search),
                                nav::with_payload(&payload, true),
                            );
                        } else {
                            // 採番が取れない場合は商品を持ったまま一覧へ
                            let payload = NavPayload {
                                product: Some(created),
                                flash: Some(Flash::Created),
                            };
                            navigate(&format!("/{}", search), nav::with_payload(&payload, true));
                        }
                    }
                    Err(_) => {
                        set_submit_error.set(Some("Failed to create product".to_string()));
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
        <div class="product-new">
            <h2>"New product"</h2>

            <Show when=move || submit_error.get().is_some()>
                <div class="alert alert-error">
                    {move || submit_error.get().unwrap_or_default()}
                </div>
            </Show>

            <ProductForm
                initial=FormValues::default()
                submitting=submitting
                on_submit=on_submit
                on_cancel=on_cancel
            />
        </div>
    }
}
