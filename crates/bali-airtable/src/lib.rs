//! bali-airtable: Airtable record store for bali-bot
//!
//! This crate provides read access to Airtable tables.
//!
//! ## Features
//!
//! - `RecordStore` trait so callers can swap in fakes
//! - Equality filters rendered as `filterByFormula`
//! - Bounded queries with offset paging
//! - Typed error classification (authorization vs. not found vs. transport)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bali_airtable::{AirtableClient, AirtableConfig, FieldFilter, RecordStore};
//!
//! let config = AirtableConfig::new("pat_xxx", "appXXXX");
//! let client = AirtableClient::new(config)?;
//!
//! let filter = FieldFilter::equals("area", "Kuta");
//! let records = client.query("Properties", Some(&filter), 10).await?;
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod store;

pub use client::AirtableClient;
pub use error::{AirtableError, Result};
pub use models::{AirtableConfig, FieldFilter, Record};
pub use store::RecordStore;
