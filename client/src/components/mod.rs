//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the site chrome and the interactive widgets. They hold
//! their state in `RwSignal`s wrapping the plain structs from `state`, and
//! delegate validation and submission to `forms`.

pub mod accordion;
pub mod contact_form;
pub mod enquiry_form;
pub mod form_field;
pub mod home_contact_form;
pub mod lightbox;
pub mod navbar;
pub mod product_card;
pub mod product_search;
pub mod response_region;
pub mod site_footer;
pub mod store_map;
