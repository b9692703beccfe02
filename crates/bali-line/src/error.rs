//! エラー型定義 (bali-line)

use thiserror::Error;

/// bali-line のエラー型
#[derive(Error, Debug)]
pub enum LineError {
    #[error("LINE API error: {0}")]
    ApiError(String),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Flex(#[from] bali_flex::FlexError),
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, LineError>;
