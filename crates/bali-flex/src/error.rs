//! Error types for bali-flex

use thiserror::Error;

/// bali-flex error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlexError {
    #[error("Carousel must contain at least one bubble")]
    EmptyCarousel,

    #[error("Carousel holds at most {max} bubbles, got {got}")]
    TooManyBubbles { got: usize, max: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, FlexError>;
