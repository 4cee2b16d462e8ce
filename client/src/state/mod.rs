//! Component-local state objects.
//!
//! DESIGN
//! ======
//! Each interactive widget keeps its state in a small plain struct with the
//! transitions as methods. Components wrap these in `RwSignal`s; tests drive
//! them directly without a document.

pub mod accordion;
pub mod cart;
pub mod lightbox;
pub mod nav;
pub mod submission;
