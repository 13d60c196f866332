//! リセットボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn ResetButton<F>(on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="reset-row">
            <button
                class="btn btn-secondary"
                on:click={
                    let on_reset = on_reset.clone();
                    move |_| on_reset(())
                }
            >
                "Reset Images"
            </button>
        </div>
    }
}
