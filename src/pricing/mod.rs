//! Quote engine for TVNet business IPTV pricing.
//!
//! Pure tariff math plus the JSON API the calculator page is built on.
//! Prices are static tables; nothing here touches the network or disk.

pub mod calculators;
pub mod models;
pub mod plans;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod tariffs;

// Re-export commonly used items
pub use calculators::round_money;
pub use models::{Breakdown, Carrier, InternetTier, QuoteInput, QuoteState, SettopType};
pub use routes::router;
pub use services::{quote, tariff_catalog, PricingError};
