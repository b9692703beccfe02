//! bali-core: shared configuration and error types for bali-bot

pub mod config;
pub mod error;

pub use config::{
    AirtableSettings, BotConfig, BotMode, Config, ContentConfig, LineConfig, ServerConfig,
};
pub use error::{Error, Result};
