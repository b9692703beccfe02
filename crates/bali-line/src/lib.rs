//! bali-line: LINE bot for Bali real-estate information
//!
//! LINE Messaging API の Webhook を受け取り、キーワードやポストバックに応じて
//! Flex Message で返信します。イベントの振り分け (dispatcher)、ルール表
//! (rules)、Airtable 連携の物件検索 (property)、LINE への返信 (api) を実装します。

pub mod api;
pub mod bot;
pub mod catalog;
pub mod content;
pub mod dispatcher;
pub mod error;
pub mod event;
pub mod property;
pub mod property_bot;
pub mod responder;
pub mod rules;
pub mod types;
pub mod webhook;

pub use api::{LineApiClient, ReplySink};
pub use bot::LineBot;
pub use catalog::CatalogBot;
pub use content::ContentContext;
pub use dispatcher::Dispatcher;
pub use error::{LineError, Result};
pub use event::{EventKind, InboundEvent, ReplyToken};
pub use property::{Lookup, PropertyLookup, PropertySource, RecordSource};
pub use property_bot::PropertyBot;
pub use responder::{Reply, Responder};
pub use rules::{Rule, RuleTable, Trigger};
