//! Request DTOs for the quote API and the calculator form.

use serde::Deserialize;

use super::models::{Carrier, InternetTier, QuoteInput, SettopType};

/// JSON request for a quote
#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub tv_count: i32,
    pub carrier: Carrier,
    pub internet_tier: InternetTier,
    pub settop_type: SettopType,
}

impl From<QuoteRequest> for QuoteInput {
    fn from(req: QuoteRequest) -> Self {
        QuoteInput {
            tv_count: req.tv_count,
            carrier: req.carrier,
            internet_tier: req.internet_tier,
            settop_type: req.settop_type,
        }
    }
}

/// Raw calculator form submission.
///
/// The count field arrives as free text; anything that does not parse as a
/// positive integer counts as zero, which renders as "no quote yet".
#[derive(Debug, Deserialize)]
pub struct QuoteForm {
    #[serde(default)]
    pub tv_count: String,
    pub carrier: Carrier,
    pub internet_tier: InternetTier,
    pub settop_type: SettopType,
}

impl QuoteForm {
    pub fn parsed_tv_count(&self) -> i32 {
        self.tv_count.trim().parse::<i32>().unwrap_or(0).max(0)
    }

    pub fn to_input(&self) -> QuoteInput {
        QuoteInput {
            tv_count: self.parsed_tv_count(),
            carrier: self.carrier,
            internet_tier: self.internet_tier,
            settop_type: self.settop_type,
        }
    }
}
