//! 病害情報パネルコンポーネント
//!
//! 割り当てられた病害レコードの全フィールドを表示する。リスト項目の
//! 並び順はカタログ定義のまま（並べ替え禁止）。

use leptos::prelude::*;
use potato_disease_common::DiseaseRecord;

#[component]
pub fn DiseaseInfo(disease: &'static DiseaseRecord) -> impl IntoView {
    view! {
        <div class="disease-info">
            <div class="disease-header">
                <h3>{disease.name.as_str()}</h3>
                <span class="severity-badge">
                    "⚠ " {format!("{}% Severity", disease.severity)}
                </span>
            </div>

            <p class="disease-description">{disease.description.as_str()}</p>

            <div class="impact-box">
                <p>
                    <span class="impact-label">"Yield Impact: "</span>
                    {disease.yield_impact.as_str()}
                </p>
                <p>
                    <span class="spread-label">"Spread Rate: "</span>
                    {disease.spread_rate.as_str()}
                </p>
            </div>

            <div class="disease-section">
                <h4>"Symptoms:"</h4>
                <ul>{items(&disease.symptoms)}</ul>
            </div>

            <div class="disease-section">
                <h4>"Treatment Solutions:"</h4>
                <ul>{items(&disease.solutions)}</ul>
            </div>

            <div class="disease-section">
                <h4>"Prevention:"</h4>
                <ul>{items(&disease.preventive_measures)}</ul>
            </div>
        </div>
    }
}

fn items(list: &'static [String]) -> impl IntoView {
    list.iter()
        .map(|item| view! { <li>{item.as_str()}</li> })
        .collect_view()
}
