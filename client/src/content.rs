//! Static site content and timing constants.
//!
//! The site has no runtime configuration surface; everything a page shows
//! about the business, plus the simulated-latency timings, is fixed here.

use std::time::Duration;

pub const BRAND_NAME: &str = "Saints Lifestyle Apparel";
pub const CONTACT_EMAIL: &str = "info@saints.co.za";
pub const CONTACT_PHONE: &str = "+27 676 484 634";
pub const WEBSITE: &str = "www.saints-lifestyle.co.za";
pub const STORE_LOCATION: &str = "Sabie, Mpumalanga, South Africa";

/// Store coordinate as (latitude, longitude).
pub const STORE_COORDINATE: (f64, f64) = (-25.0992, 30.7793);

/// Simulated network latency for the contact form.
pub const CONTACT_LATENCY: Duration = Duration::from_millis(2000);
/// Simulated processing latency for the enquiry form.
pub const ENQUIRY_LATENCY: Duration = Duration::from_millis(1500);
/// How long an add-to-cart button shows its "Added!" state.
pub const CART_FEEDBACK: Duration = Duration::from_millis(1500);
/// Delay before a download anchor is removed and its object URL revoked.
pub const DOWNLOAD_CLEANUP: Duration = Duration::from_millis(100);

/// Border colour applied to a field that failed validation.
pub const FIELD_ERROR_BORDER: &str = "#e74c3c";
