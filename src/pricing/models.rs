//! Domain types for the quote engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Telecom carrier whose tariff tables apply.
///
/// Closed set for now; SKB is on the roadmap and lands as a third variant
/// plus one `CarrierPlan` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Carrier {
    #[serde(rename = "LGU+")]
    LguPlus,
    #[serde(rename = "KT")]
    Kt,
}

impl Carrier {
    pub const ALL: [Carrier; 2] = [Carrier::LguPlus, Carrier::Kt];

    /// Display/wire name, also used as the form value
    pub fn label(self) -> &'static str {
        match self {
            Carrier::LguPlus => "LGU+",
            Carrier::Kt => "KT",
        }
    }
}

impl std::fmt::Display for Carrier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Internet bandwidth class. Affects the per-line rate only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InternetTier {
    #[serde(rename = "500MB")]
    Mb500,
    #[serde(rename = "1GB")]
    Gb1,
}

impl InternetTier {
    pub const ALL: [InternetTier; 2] = [InternetTier::Mb500, InternetTier::Gb1];

    pub fn label(self) -> &'static str {
        match self {
            InternetTier::Mb500 => "500MB",
            InternetTier::Gb1 => "1GB",
        }
    }
}

impl std::fmt::Display for InternetTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Settop rental class. Which classes a carrier actually offers is decided
/// by the tariff tables, not by this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettopType {
    #[serde(rename = "UHD")]
    Uhd,
    #[serde(rename = "HD")]
    Hd,
}

impl SettopType {
    pub fn label(self) -> &'static str {
        match self {
            SettopType::Uhd => "UHD",
            SettopType::Hd => "HD",
        }
    }
}

impl std::fmt::Display for SettopType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Validated input snapshot for one quote computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteInput {
    pub tv_count: i32,
    pub carrier: Carrier,
    pub internet_tier: InternetTier,
    pub settop_type: SettopType,
}

/// Device counts derived from a TV count.
///
/// One internet line covers up to 8 TVs. Under KT's channel rules one
/// device per line is "main" and the rest are "sub".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceCounts {
    pub tv_count: i32,
    pub line_count: i32,
    pub main_count: i32,
    pub sub_count: i32,
}

/// Itemized result of one quote computation.
///
/// Always internally consistent at the moment it is produced:
/// `subtotal = channel_fee + settop_fee + line_price` and
/// `total_with_tax` is the subtotal plus 10% VAT, truncated to whole KRW.
/// `install_fee` is a one-time first-invoice charge and is never part of
/// the subtotal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub line_count: i32,
    pub line_price: Decimal,
    pub channel_fee: Decimal,
    pub settop_fee: Decimal,
    pub install_fee: Decimal,
    pub subtotal: Decimal,
    pub total_with_tax: Decimal,
}

impl Breakdown {
    /// The "no calculation performed" result, returned for non-positive
    /// TV counts.
    pub fn zero() -> Self {
        Self {
            line_count: 0,
            line_price: Decimal::ZERO,
            channel_fee: Decimal::ZERO,
            settop_fee: Decimal::ZERO,
            install_fee: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            total_with_tax: Decimal::ZERO,
        }
    }
}

/// Quote lifecycle as the page sees it.
///
/// A breakdown snapshot is taken only on the explicit calculate trigger.
/// Editing inputs afterwards does not recompute; the old snapshot stays on
/// screen until the user triggers again.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteState {
    Idle,
    Computed {
        input: QuoteInput,
        breakdown: Breakdown,
    },
}

impl QuoteState {
    /// Transition taken by the calculate trigger. A non-positive count
    /// means nothing was calculated, so the state stays idle.
    pub fn triggered(input: QuoteInput, breakdown: Breakdown) -> Self {
        if input.tv_count <= 0 {
            QuoteState::Idle
        } else {
            QuoteState::Computed { input, breakdown }
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, QuoteState::Computed { .. })
    }

    pub fn breakdown(&self) -> Option<&Breakdown> {
        match self {
            QuoteState::Idle => None,
            QuoteState::Computed { breakdown, .. } => Some(breakdown),
        }
    }
}
