//! CalendarGateway trait and implementations.
//!
//! This crate provides the abstraction layer for calendar backends:
//!
//! - [`CalendarGateway`] - The core trait that all calendar backends implement
//! - [`ProviderEvent`] - Provider-shaped raw event data, its `when` union
//!   resolved at the wire boundary
//! - [`busy_intervals`] - Pipeline from raw events to the spans that block a day
//! - [`ProviderError`] - Error types for gateway operations
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐
//! │  Nylas v3 API   │    │  Fixed fixtures │
//! └────────┬────────┘    └────────┬────────┘
//!          │                      │
//!          ▼                      ▼
//! ┌─────────────────┐    ┌─────────────────┐
//! │  NylasGateway   │    │  StaticGateway  │
//! └────────┬────────┘    └────────┬────────┘
//!          │                      │
//!          │   CalendarGateway    │
//!          └──────────┬───────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ ProviderEvent │
//!             └───────┬───────┘
//!                     │
//!                     ▼ busy_intervals()
//!             ┌───────────────┐
//!             │ BusyInterval  │
//!             └───────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! use coffeechat_core::DayWindow;
//! use coffeechat_providers::{CalendarGateway, busy_intervals};
//!
//! async fn blocked_spans(
//!     gateway: &dyn CalendarGateway,
//!     calendar_id: &str,
//!     window: &DayWindow,
//! ) -> Vec<BusyInterval> {
//!     let events = gateway.list_events(calendar_id).await?;
//!     busy_intervals(&events, window)
//! }
//! ```

pub mod error;
pub mod event;
pub mod gateway;
pub mod normalize;
#[cfg(feature = "nylas")]
pub mod nylas;
pub mod testing;

// Re-export main types at crate root
pub use error::{ProviderError, ProviderErrorCode, ProviderResult};
pub use event::{Calendar, EventDraft, EventWhen, Organizer, Participant, ProviderEvent};
pub use gateway::{BoxFuture, CalendarGateway, ErrorGateway};
pub use normalize::{busy_interval_on, busy_intervals};
pub use testing::StaticGateway;
