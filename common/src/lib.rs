//! Potato Disease Common Library
//!
//! Web(WASM)フロントエンドから利用される共有コア:
//! - catalog: 病害カタログ（固定データ）
//! - selector: カタログからの一様ランダム抽選
//! - slot: アップロードスロットの状態モデル
//! - error: 共通エラー型

pub mod catalog;
pub mod error;
pub mod selector;
pub mod slot;

pub use catalog::{catalog, DiseaseRecord};
pub use error::{Error, Result};
pub use selector::{pick, pick_with};
pub use slot::{CompareState, SlotId, SlotState};
