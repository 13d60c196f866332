//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use potato_disease_common::{catalog, pick, CompareState, SlotId};

use crate::components::{header::Header, reset_button::ResetButton, upload_slot::UploadSlot};

/// アプリケーションのルートコンポーネント
///
/// 両スロットを1つの`CompareState`シグナルで持つ。アップロード完了時の
/// 画像と病害の書き込みが1回の更新になり、描画側が片方だけセットされた
/// 状態を観測しない。
#[component]
pub fn App() -> impl IntoView {
    let (state, set_state) = signal(CompareState::default());

    // アップロード完了ハンドラ（スロットIDでパラメタ化、A/Bで共有）
    let on_upload_complete = move |id: SlotId, data_url: String| {
        let disease = pick(catalog());
        set_state.update(|s| s.complete_upload(id, data_url, disease));
    };

    // リセットハンドラ: 両スロットを無条件でクリア
    let on_reset = move |_: ()| {
        set_state.update(|s| s.reset());
    };

    view! {
        <div class="container">
            <Header />

            <div class="slot-grid">
                <UploadSlot id=SlotId::A state=state on_upload_complete=on_upload_complete />
                <UploadSlot id=SlotId::B state=state on_upload_complete=on_upload_complete />
            </div>

            <ResetButton on_reset=on_reset />
        </div>
    }
}
