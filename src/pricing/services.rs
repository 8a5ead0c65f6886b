//! Quote assembly on top of the pure calculators and carrier plans.

use rust_decimal::Decimal;

use super::calculators::{self, with_vat};
use super::models::{Breakdown, Carrier, InternetTier, QuoteInput, SettopType};
use super::plans::CarrierPlan;
use super::tariffs;

/// Pricing precondition violations.
///
/// The quote form only offers combinations the tariff tables support, so
/// these surface only on direct API calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("{carrier} does not offer a {settop} settop")]
    UnsupportedSettop { carrier: Carrier, settop: SettopType },

    #[error("{carrier} does not offer a {tier} internet line")]
    UnsupportedTier { carrier: Carrier, tier: InternetTier },
}

impl PricingError {
    /// Stable machine-readable tag for API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            PricingError::UnsupportedSettop { .. } => "unsupported_settop",
            PricingError::UnsupportedTier { .. } => "unsupported_tier",
        }
    }
}

/// Compute an itemized monthly quote.
///
/// A non-positive TV count yields the all-zero breakdown; the quote page
/// disables the trigger in that case, but direct callers must not crash.
/// Referentially transparent - the only inputs are the arguments and the
/// static tariff tables.
pub fn quote(input: &QuoteInput) -> Result<Breakdown, PricingError> {
    if input.tv_count <= 0 {
        return Ok(Breakdown::zero());
    }

    let counts = calculators::device_counts(input.tv_count);
    let plan = input.carrier.plan();

    let line_rate = tariffs::internet_rate(input.carrier, input.internet_tier).ok_or(
        PricingError::UnsupportedTier {
            carrier: input.carrier,
            tier: input.internet_tier,
        },
    )?;
    let line_price = Decimal::from(counts.line_count) * line_rate;

    let channel_fee = plan.channel_fee(&counts);
    let settop_fee = plan.settop_fee(&counts, input.settop_type)?;
    // one-time first-invoice charge, reported separately and never taxed
    let install_fee = plan.install_fee(&counts);

    let subtotal = channel_fee + settop_fee + line_price;
    let total_with_tax = with_vat(subtotal);

    Ok(Breakdown {
        line_count: counts.line_count,
        line_price,
        channel_fee,
        settop_fee,
        install_fee,
        subtotal,
        total_with_tax,
    })
}

/// One carrier's selectable options with their unit rates, in display
/// order. Drives both the form and the tariffs endpoint.
#[derive(Debug, Clone)]
pub struct CarrierCatalog {
    pub carrier: Carrier,
    pub internet: Vec<(InternetTier, Decimal)>,
    pub settops: Vec<(SettopType, Decimal)>,
}

/// Selectable options for every carrier.
pub fn tariff_catalog() -> Vec<CarrierCatalog> {
    Carrier::ALL
        .iter()
        .map(|&carrier| CarrierCatalog {
            carrier,
            internet: tariffs::supported_tiers(carrier)
                .iter()
                .filter_map(|&tier| tariffs::internet_rate(carrier, tier).map(|rate| (tier, rate)))
                .collect(),
            settops: tariffs::supported_settops(carrier)
                .iter()
                .filter_map(|&settop| {
                    tariffs::settop_rate(carrier, settop).map(|rate| (settop, rate))
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(
        tv_count: i32,
        carrier: Carrier,
        tier: InternetTier,
        settop: SettopType,
    ) -> QuoteInput {
        QuoteInput {
            tv_count,
            carrier,
            internet_tier: tier,
            settop_type: settop,
        }
    }

    #[test]
    fn test_non_positive_count_returns_all_zero() {
        for tv in [0, -1, -100] {
            for carrier in Carrier::ALL {
                let b = quote(&input(tv, carrier, InternetTier::Gb1, SettopType::Uhd)).unwrap();
                assert_eq!(b, Breakdown::zero());
            }
        }
    }

    #[test]
    fn test_lgu_sixteen_tvs_end_to_end() {
        // 16 TVs on LGU+ 500MB with UHD boxes:
        // 2 lines x 35,000 + 16 x 5,900 + 16 x 1,500
        let b = quote(&input(
            16,
            Carrier::LguPlus,
            InternetTier::Mb500,
            SettopType::Uhd,
        ))
        .unwrap();
        assert_eq!(b.line_count, 2);
        assert_eq!(b.line_price, dec!(70000));
        assert_eq!(b.channel_fee, dec!(94400));
        assert_eq!(b.settop_fee, dec!(24000));
        assert_eq!(b.install_fee, Decimal::ZERO);
        assert_eq!(b.subtotal, dec!(188400));
        assert_eq!(b.total_with_tax, dec!(207240));
    }

    #[test]
    fn test_kt_sixteen_tvs_end_to_end() {
        // 16 TVs on KT 500MB with UHD boxes:
        // lines 2 x 25,000; channel 2 x 12,000 + 14 x 7,400; settop 16 x 3,000;
        // install 32,000 + 20,000 + 2 x 22,000 + 14 x 14,000
        let b = quote(&input(
            16,
            Carrier::Kt,
            InternetTier::Mb500,
            SettopType::Uhd,
        ))
        .unwrap();
        assert_eq!(b.line_count, 2);
        assert_eq!(b.line_price, dec!(50000));
        assert_eq!(b.channel_fee, dec!(127600));
        assert_eq!(b.settop_fee, dec!(48000));
        assert_eq!(b.install_fee, dec!(292000));
        assert_eq!(b.subtotal, dec!(225600));
        assert_eq!(b.total_with_tax, dec!(248160));
    }

    #[test]
    fn test_subtotal_identity_holds_for_valid_combinations() {
        for tv in [1, 7, 8, 9, 16, 35, 36, 50, 51, 120] {
            for catalog in tariff_catalog() {
                for &(tier, _) in &catalog.internet {
                    for &(settop, _) in &catalog.settops {
                        let b = quote(&input(tv, catalog.carrier, tier, settop)).unwrap();
                        assert_eq!(b.subtotal, b.channel_fee + b.settop_fee + b.line_price);
                        assert_eq!(b.total_with_tax, with_vat(b.subtotal));
                        assert!(b.line_count >= 1);
                    }
                }
            }
        }
    }

    #[test]
    fn test_installation_excluded_from_subtotal() {
        let b = quote(&input(
            16,
            Carrier::Kt,
            InternetTier::Gb1,
            SettopType::Uhd,
        ))
        .unwrap();
        assert!(b.install_fee > Decimal::ZERO);
        assert_eq!(b.subtotal, b.channel_fee + b.settop_fee + b.line_price);
    }

    #[test]
    fn test_unsupported_settop_fails_loudly() {
        let err = quote(&input(
            10,
            Carrier::Kt,
            InternetTier::Mb500,
            SettopType::Hd,
        ))
        .unwrap_err();
        assert_eq!(err.kind(), "unsupported_settop");
        assert!(err.to_string().contains("KT"));
        assert!(err.to_string().contains("HD"));
    }

    #[test]
    fn test_unsupported_settop_with_zero_count_still_zero() {
        // the zero guard short-circuits before combination validation
        let b = quote(&input(0, Carrier::Kt, InternetTier::Mb500, SettopType::Hd)).unwrap();
        assert_eq!(b, Breakdown::zero());
    }

    #[test]
    fn test_catalog_key_sets() {
        let catalog = tariff_catalog();
        assert_eq!(catalog.len(), 2);

        let lgu = &catalog[0];
        assert_eq!(lgu.carrier, Carrier::LguPlus);
        assert_eq!(lgu.internet.len(), 2);
        assert_eq!(lgu.settops.len(), 2);

        let kt = &catalog[1];
        assert_eq!(kt.carrier, Carrier::Kt);
        assert_eq!(kt.internet.len(), 2);
        assert_eq!(kt.settops.len(), 1);
        assert_eq!(kt.settops[0].0, SettopType::Uhd);
    }
}
