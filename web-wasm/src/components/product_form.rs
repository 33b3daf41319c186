//! 商品フォームコンポーネント
//!
//! 値の変更ごとにエラーを再計算し、blur済みか送信試行後のフィールド
//! だけエラーを表示する。エラーが残っている間は送信コールバックを
//! 呼ばない。受理された送信は正規化済みペイロードを渡す。

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use catalog_common::{compute_errors, normalize, FormValues, ProductInput};

use crate::api::products::get_categories;

/// blur済みフィールドの記録
#[derive(Clone, Copy, Default)]
struct Touched {
    title: bool,
    price: bool,
    category: bool,
}

#[component]
pub fn ProductForm<FS, FC>(
    initial: FormValues,
    submitting: ReadSignal<bool>,
    on_submit: FS,
    on_cancel: FC,
) -> impl IntoView
where
    FS: Fn(ProductInput) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    let (values, set_values) = signal(initial);
    let (touched, set_touched) = signal(Touched::default());
    let (submitted, set_submitted) = signal(false);
    let (categories, set_categories) = signal(Vec::<String>::new());

    let errors = Memo::new(move |_| compute_errors(&values.get()));

    // カテゴリ候補は一度だけ取得（失敗時は黙って空のまま）
    spawn_local(async move {
        if let Ok(list) = get_categories().await {
            set_categories.set(list);
        }
    });

    let show_title_error =
        move || errors.get().title.is_some() && (submitted.get() || touched.get().title);
    let show_price_error =
        move || errors.get().price.is_some() && (submitted.get() || touched.get().price);
    let show_category_error =
        move || errors.get().category.is_some() && (submitted.get() || touched.get().category);

    let handle_submit = {
        let on_submit = on_submit.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            set_submitted.set(true);

            let current = values.get_untracked();
            if !compute_errors(&current).is_empty() {
                return;
            }
            on_submit(normalize(&current));
        }
    };

    let can_submit = move || !submitting.get() && errors.get().is_empty();

    view! {
        <form class="product-form" on:submit=handle_submit>
            <div class="form-group">
                <label for="title">"Title"</label>
                <input
                    type="text"
                    id="title"
                    prop:value=move || values.get().title
                    on:input=move |ev| {
                        set_values.update(|v| v.title = event_target_value(&ev));
                    }
                    on:blur=move |_| set_touched.update(|t| t.title = true)
                />
                <Show when=show_title_error>
                    <p class="field-error">{move || errors.get().title.unwrap_or_default()}</p>
                </Show>
            </div>

            <div class="form-group">
                <label for="price">"Price"</label>
                <input
                    type="number"
                    id="price"
                    min="0"
                    step="0.01"
                    prop:value=move || values.get().price
                    on:input=move |ev| {
                        set_values.update(|v| v.price = event_target_value(&ev));
                    }
                    on:blur=move |_| set_touched.update(|t| t.price = true)
                />
                <Show when=show_price_error>
                    <p class="field-error">{move || errors.get().price.unwrap_or_default()}</p>
                </Show>
            </div>

            <div class="form-group">
                <label for="stock">"Stock"</label>
                <input
                    type="number"
                    id="stock"
                    min="0"
                    step="1"
                    prop:value=move || values.get().stock
                    on:input=move |ev| {
                        set_values.update(|v| v.stock = event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <label for="brand">"Brand"</label>
                <input
                    type="text"
                    id="brand"
                    prop:value=move || values.get().brand
                    on:input=move |ev| {
                        set_values.update(|v| v.brand = event_target_value(&ev));
                    }
                />
            </div>

            <div class="form-group">
                <label for="category">"Category"</label>
                <select
                    id="category"
                    prop:value=move || values.get().category
                    on:change=move |ev| {
                        set_values.update(|v| v.category = event_target_value(&ev));
                    }
                    on:blur=move |_| set_touched.update(|t| t.category = true)
                >
                    <option value="">"Select a category"</option>
                    <For
                        each=move || categories.get()
                        key=|c| c.clone()
                        children=move |c: String| {
                            let value = c.clone();
                            let selected_value = c.clone();
                            view! {
                                <option
                                    value=value
                                    selected=move || values.get().category == selected_value
                                >
                                    {c.clone()}
                                </option>
                            }
                        }
                    />
                </select>
                <Show when=show_category_error>
                    <p class="field-error">{move || errors.get().category.unwrap_or_default()}</p>
                </Show>
            </div>

            <div class="form-group">
                <label for="description">"Description"</label>
                <textarea
                    id="description"
                    rows="3"
                    prop:value=move || values.get().description
                    on:input=move |ev| {
                        set_values.update(|v| v.description = event_target_value(&ev));
                    }
                ></textarea>
            </div>

            <div class="form-actions">
                <button
                    type="button"
                    class="btn btn-secondary"
                    disabled=move || submitting.get()
                    on:click={
                        let on_cancel = on_cancel.clone();
                        move |_| on_cancel(())
                    }
                >
                    "Cancel"
                </button>
                <button type="submit" class="btn btn-primary" disabled=move || !can_submit()>
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}
