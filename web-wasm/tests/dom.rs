//! ブラウザ上での描画テスト（wasm-pack test --headless で実行）

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn app_renders_header_and_empty_slots() {
    let handle = leptos::mount::mount_to_body(potato_disease_wasm::app::App);
    std::mem::forget(handle);

    let document = web_sys::window().unwrap().document().unwrap();
    let body_html = document.body().unwrap().inner_html();

    assert!(body_html.contains("Potato Disease Detector"));
    assert!(document.get_element_by_id("slot-a").is_some());
    assert!(document.get_element_by_id("slot-b").is_some());

    // 画像未設定のスロットはアップロード領域だけを表示する
    assert!(body_html.contains("Upload first image"));
    assert!(body_html.contains("Upload second image"));
    assert!(!body_html.contains("Severity"));
}
