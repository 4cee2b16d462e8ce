//! Utility helpers shared across site UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, downloads,
//! scrolling, the map library, alerts) from page and component logic so the
//! form flows and state objects stay testable without a browser.

pub mod clock;
pub mod dialog;
pub mod download;
pub mod latency;
pub mod map;
pub mod scroll;
