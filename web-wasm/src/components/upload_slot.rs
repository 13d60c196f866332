//! アップロードスロットコンポーネント
//!
//! 1スロット分のアップロード領域と判定結果の表示。ファイル選択
//! ダイアログとドラッグ&ドロップの両方を受け付ける。読み込み完了時に
//! `on_upload_complete`へdata URLを渡すところまでが責務で、病害の抽選と
//! 状態遷移は呼び出し側(App)が行う。

use leptos::prelude::*;
use potato_disease_common::{CompareState, SlotId};
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader, HtmlInputElement};

use crate::components::disease_info::DiseaseInfo;

#[component]
pub fn UploadSlot<F>(
    id: SlotId,
    state: ReadSignal<CompareState>,
    on_upload_complete: F,
) -> impl IntoView
where
    F: Fn(SlotId, String) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let image = move || state.get().slot(id).image.clone();
    let disease = move || state.get().slot(id).disease;

    let handle_file = {
        let on_upload_complete = on_upload_complete.clone();
        move |file: File| {
            read_file(id, file, on_upload_complete.clone());
        }
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            // ドロップは先頭の1ファイルだけ使う
            if let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|f| f.get(0))
            {
                handle_file(file);
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_file = handle_file.clone();
        move |_| {
            // ファイル選択ダイアログを開く
            let document = web_sys::window().unwrap().document().unwrap();
            let input: HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let handle_file = handle_file.clone();
            let closure = Closure::wrap(Box::new(move |ev: web_sys::Event| {
                // キャンセル時はonchange自体が発火しないが、空リストも弾く
                let Some(target) = ev.target() else { return };
                let Ok(input) = target.dyn_into::<HtmlInputElement>() else {
                    return;
                };
                if let Some(file) = input.files().and_then(|files| files.get(0)) {
                    handle_file(file);
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    let upload_label = match id {
        SlotId::A => "Upload first image",
        SlotId::B => "Upload second image",
    };
    let alt_label = match id {
        SlotId::A => "First potato plant",
        SlotId::B => "Second potato plant",
    };

    view! {
        <div class="upload-card" id=format!("slot-{}", id.as_str())>
            <div
                class="upload-area"
                class:dragover=move || is_dragover.get()
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:click=on_click
            >
                <Show
                    when=move || image().is_some()
                    fallback=move || {
                        view! {
                            <div class="upload-icon">"📷"</div>
                            <p>{upload_label}</p>
                            <p class="text-muted">"Click or drag & drop an image"</p>
                        }
                    }
                >
                    <img src=move || image().unwrap_or_default() alt=alt_label />
                </Show>
            </div>
            {move || disease().map(|d| view! { <DiseaseInfo disease=d /> })}
        </div>
    }
}

/// ファイルをdata URLとして非同期に読み込む
///
/// 読み込み失敗時はonloadが発火しないため何も起きない（現行挙動:
/// エラーUIは出さない）。読み込み自体はキャンセル不可。
fn read_file<F>(id: SlotId, file: File, on_complete: F)
where
    F: Fn(SlotId, String) + 'static,
{
    let Ok(reader) = FileReader::new() else { return };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_complete(id, data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
