//! Nylas calendar backend.
//!
//! Talks to the Nylas v3 API with an API key and a grant id; no OAuth
//! flow runs on this side, the grant is connected ahead of time in the
//! Nylas dashboard.
//!
//! # Example
//!
//! ```ignore
//! use coffeechat_providers::nylas::{NylasConfig, NylasGateway};
//!
//! let config = NylasConfig::new("nyk_...", "grant-id");
//! let gateway = NylasGateway::new(config)?;
//!
//! let calendars = gateway.list_calendars().await?;
//! ```

mod client;
mod config;
mod gateway;

pub use client::NylasClient;
pub use config::NylasConfig;
pub use gateway::NylasGateway;
