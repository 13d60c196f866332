//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Potato Disease Detector"</h1>
            <p class="text-muted">
                "Compare two potato plant photos to identify potential diseases"
            </p>
        </header>
    }
}
