//! メインアプリケーションコンポーネント
//!
//! ルーティングとオーバーライドストアの提供を行うシェル。

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use catalog_common::OverrideStore;

use crate::components::header::Header;
use crate::pages::product_detail::ProductDetail;
use crate::pages::product_edit::ProductEdit;
use crate::pages::product_new::ProductNew;
use crate::pages::products_list::ProductsList;

#[component]
pub fn App() -> impl IntoView {
    // ローカル編集のオーバーレイ（セッションスコープ、リロードで消える）
    provide_context(RwSignal::new(OverrideStore::new()));

    view! {
        <Router>
            <Header />
            <main class="container">
                <Routes fallback=|| view! { <p class="text-muted">"Page not found."</p> }>
                    <Route path=path!("/") view=ProductsList />
                    <Route path=path!("/new") view=ProductNew />
                    <Route path=path!("/products/:id") view=ProductDetail />
                    <Route path=path!("/products/:id/edit") view=ProductEdit />
                </Routes>
            </main>
        </Router>
    }
}
