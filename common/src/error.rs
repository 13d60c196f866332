//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
