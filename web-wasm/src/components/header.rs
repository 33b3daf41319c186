//! ヘッダーコンポーネント

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::nav::search_suffix;

#[component]
pub fn Header() -> impl IntoView {
    let location = use_location();

    // 一覧へ戻ってもフィルタを保つ
    let products_href = move || format!("/{}", search_suffix(&location.search.get()));

    view! {
        <header class="header">
            <h1>"Catalog Manager"</h1>
            <nav>
                <a href=products_href>"Products"</a>
            </nav>
        </header>
    }
}
