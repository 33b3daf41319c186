//! 商品カードコンポーネント
//!
//! 一覧のセル。詳細・編集への遷移時は表示中の商品を履歴stateへ
//! 載せて運ぶ（遷移先の再フェッチを省き、古いサーバー値も避ける）。

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use catalog_common::Product;

use crate::nav::{self, NavPayload};

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let price_label = format!("${:.2}", product.price);
    let thumbnail = product.thumbnail.clone();
    let title = product.title.clone();
    let alt_title = product.title.clone();

    let view_target = {
        let location = location.clone();
        let product = product.clone();
        move || {
            let search = nav::search_suffix(&location.search.get_untracked());
            format!("/products/{}{}", product.id, search)
        }
    };
    let edit_target = {
        let location = location.clone();
        let product = product.clone();
        move || {
            let search = nav::search_suffix(&location.search.get_untracked());
            format!("/products/{}/edit{}", product.id, search)
        }
    };

    let on_view = {
        let navigate = navigate.clone();
        let product = product.clone();
        move |_| {
            let payload = NavPayload {
                product: Some(product.clone()),
                flash: None,
            };
            navigate(&view_target(), nav::with_payload(&payload, false));
        }
    };
    let on_edit = {
        let navigate = navigate.clone();
        let product = product.clone();
        move |_| {
            let payload = NavPayload {
                product: Some(product.clone()),
                flash: None,
            };
            navigate(&edit_target(), nav::with_payload(&payload, false));
        }
    };

    view! {
        <div class="product-card">
            {thumbnail.map(|src| view! { <img src=src alt=alt_title.clone() /> })}
            <div class="product-info">
                <h4>{title}</h4>
                <p class="product-price">{price_label}</p>
            </div>
            <div class="product-actions">
                <button class="btn btn-small btn-secondary" on:click=on_view>
                    "View"
                </button>
                <button class="btn btn-small btn-secondary" on:click=on_edit>
                    "Edit"
                </button>
            </div>
        </div>
    }
}
