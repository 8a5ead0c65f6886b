//! Response DTOs for the quote API endpoints.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::per_tv;
use super::models::{Breakdown, Carrier, InternetTier, SettopType};
use super::services::CarrierCatalog;

/// Quote breakdown for JSON responses. Amounts serialize as strings so
/// clients never lose precision to floats.
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub line_count: i32,
    #[serde(with = "rust_decimal::serde::str")]
    pub line_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub channel_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub settop_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub install_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_with_tax: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_tv_subtotal: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub per_tv_total_with_tax: Decimal,
}

impl QuoteResponse {
    /// Attach the display-only per-TV figures to a breakdown. They are
    /// derived here, never stored on the breakdown itself.
    pub fn from_breakdown(breakdown: &Breakdown, tv_count: i32) -> Self {
        Self {
            line_count: breakdown.line_count,
            line_price: breakdown.line_price,
            channel_fee: breakdown.channel_fee,
            settop_fee: breakdown.settop_fee,
            install_fee: breakdown.install_fee,
            subtotal: breakdown.subtotal,
            total_with_tax: breakdown.total_with_tax,
            per_tv_subtotal: per_tv(breakdown.subtotal, tv_count),
            per_tv_total_with_tax: per_tv(breakdown.total_with_tax, tv_count),
        }
    }
}

/// An internet tier with its monthly per-line rate
#[derive(Debug, Serialize)]
pub struct TierRateResponse {
    pub tier: InternetTier,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_rate: Decimal,
}

/// A settop class with its monthly per-unit rental
#[derive(Debug, Serialize)]
pub struct SettopRateResponse {
    pub settop: SettopType,
    #[serde(with = "rust_decimal::serde::str")]
    pub monthly_rate: Decimal,
}

/// Everything a carrier sells, for form rendering
#[derive(Debug, Serialize)]
pub struct CarrierTariffsResponse {
    pub carrier: Carrier,
    pub internet: Vec<TierRateResponse>,
    pub settops: Vec<SettopRateResponse>,
}

impl From<CarrierCatalog> for CarrierTariffsResponse {
    fn from(catalog: CarrierCatalog) -> Self {
        Self {
            carrier: catalog.carrier,
            internet: catalog
                .internet
                .into_iter()
                .map(|(tier, monthly_rate)| TierRateResponse { tier, monthly_rate })
                .collect(),
            settops: catalog
                .settops
                .into_iter()
                .map(|(settop, monthly_rate)| SettopRateResponse {
                    settop,
                    monthly_rate,
                })
                .collect(),
        }
    }
}

/// Generic pricing error response
#[derive(Debug, Serialize)]
pub struct PricingErrorResponse {
    pub error_type: String,
    pub message: String,
}
