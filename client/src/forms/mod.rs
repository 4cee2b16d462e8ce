//! Form flows and the shared field-validation rules.
//!
//! ARCHITECTURE
//! ============
//! `validate` owns the declarative rule table shape used by every form.
//! Each flow module (`contact`, `enquiry`, `home_contact`) declares its own
//! rules and turns captured values into response text, and for the enquiry
//! flow a downloadable confirmation file. Components only bind inputs and
//! forward events here.

pub mod contact;
pub mod enquiry;
pub mod home_contact;
pub mod validate;
pub mod values;
