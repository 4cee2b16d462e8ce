//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page lays out its static copy and delegates the interactive parts to
//! `components`. Shared chrome (header, footer) comes from the app layout.

pub mod about;
pub mod contact;
pub mod enquiry;
pub mod gallery;
pub mod home;
pub mod products;
