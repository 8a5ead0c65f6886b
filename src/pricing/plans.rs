//! Per-carrier billing rules.
//!
//! Each carrier implements `CarrierPlan` and `services::quote` picks the
//! implementation from the selected carrier, so a new carrier (SKB is on
//! the roadmap) only needs one new implementation here.

use rust_decimal::Decimal;

use super::calculators::round_money;
use super::models::{Carrier, DeviceCounts, SettopType};
use super::services::PricingError;
use super::tariffs;

/// Carrier-specific parts of a quote. Line pricing is shared; everything
/// here differs between carriers.
pub trait CarrierPlan {
    /// Monthly channel/equipment fee for the device mix.
    fn channel_fee(&self, counts: &DeviceCounts) -> Decimal;

    /// Monthly settop rental, `Err` when the carrier does not offer the
    /// class.
    fn settop_fee(&self, counts: &DeviceCounts, settop: SettopType)
        -> Result<Decimal, PricingError>;

    /// One-time installation charge, billed on the first invoice only and
    /// kept out of the recurring subtotal.
    fn install_fee(&self, counts: &DeviceCounts) -> Decimal;
}

impl Carrier {
    pub fn plan(self) -> &'static dyn CarrierPlan {
        match self {
            Carrier::LguPlus => &LguPlusPlan,
            Carrier::Kt => &KtPlan,
        }
    }
}

/// LGU+: one flat per-TV channel rate, installation waived.
pub struct LguPlusPlan;

impl CarrierPlan for LguPlusPlan {
    fn channel_fee(&self, counts: &DeviceCounts) -> Decimal {
        Decimal::from(counts.tv_count) * tariffs::LGU_CHANNEL_RATE
    }

    fn settop_fee(
        &self,
        counts: &DeviceCounts,
        settop: SettopType,
    ) -> Result<Decimal, PricingError> {
        let unit = tariffs::settop_rate(Carrier::LguPlus, settop).ok_or(
            PricingError::UnsupportedSettop {
                carrier: Carrier::LguPlus,
                settop,
            },
        )?;
        // UHD rental is waived outright above 50 TVs, not just the excess
        if settop == SettopType::Uhd && counts.tv_count > tariffs::LGU_UHD_WAIVER_THRESHOLD {
            return Ok(Decimal::ZERO);
        }
        Ok(Decimal::from(counts.tv_count) * unit)
    }

    fn install_fee(&self, _counts: &DeviceCounts) -> Decimal {
        Decimal::ZERO
    }
}

/// KT: one main device per line at a higher rate, the rest as sub devices
/// with a bulk discount, plus one-time installation charges.
pub struct KtPlan;

impl CarrierPlan for KtPlan {
    fn channel_fee(&self, counts: &DeviceCounts) -> Decimal {
        let main_fee = Decimal::from(counts.main_count) * tariffs::KT_MAIN_DEVICE_RATE;
        let mut sub_fee = Decimal::from(counts.sub_count) * tariffs::KT_SUB_DEVICE_RATE;
        if counts.sub_count > tariffs::KT_SUB_BULK_THRESHOLD {
            // the whole sub fee is discounted, not just the units past the
            // threshold
            sub_fee = round_money(sub_fee * tariffs::KT_SUB_BULK_MULTIPLIER, 0);
        }
        main_fee + sub_fee
    }

    fn settop_fee(
        &self,
        counts: &DeviceCounts,
        settop: SettopType,
    ) -> Result<Decimal, PricingError> {
        let unit = tariffs::settop_rate(Carrier::Kt, settop).ok_or(
            PricingError::UnsupportedSettop {
                carrier: Carrier::Kt,
                settop,
            },
        )?;
        Ok(Decimal::from(counts.tv_count) * unit)
    }

    fn install_fee(&self, counts: &DeviceCounts) -> Decimal {
        if counts.line_count == 0 {
            return Decimal::ZERO;
        }
        let internet = tariffs::KT_INSTALL_FIRST_LINE
            + Decimal::from(counts.line_count - 1) * tariffs::KT_INSTALL_EXTRA_LINE;
        let devices = Decimal::from(counts.main_count) * tariffs::KT_INSTALL_MAIN_DEVICE
            + Decimal::from(counts.sub_count) * tariffs::KT_INSTALL_SUB_DEVICE;
        internet + devices
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculators::device_counts;
    use rust_decimal_macros::dec;

    // ==================== LGU+ tests ====================

    #[test]
    fn test_lgu_channel_fee_is_flat_per_tv() {
        let plan = LguPlusPlan;
        assert_eq!(plan.channel_fee(&device_counts(16)), dec!(94400));
        assert_eq!(plan.channel_fee(&device_counts(1)), dec!(5900));
    }

    #[test]
    fn test_lgu_uhd_settop_fee_applies_at_fifty() {
        let plan = LguPlusPlan;
        let fee = plan
            .settop_fee(&device_counts(50), SettopType::Uhd)
            .unwrap();
        assert_eq!(fee, dec!(75000)); // 50 * 1,500 - fee still applies at the boundary
    }

    #[test]
    fn test_lgu_uhd_settop_fee_waived_above_fifty() {
        let plan = LguPlusPlan;
        let fee = plan
            .settop_fee(&device_counts(51), SettopType::Uhd)
            .unwrap();
        assert_eq!(fee, Decimal::ZERO);
    }

    #[test]
    fn test_lgu_hd_settop_is_free() {
        let plan = LguPlusPlan;
        for tv in [1, 50, 51, 120] {
            let fee = plan.settop_fee(&device_counts(tv), SettopType::Hd).unwrap();
            assert_eq!(fee, Decimal::ZERO);
        }
    }

    #[test]
    fn test_lgu_never_charges_installation() {
        let plan = LguPlusPlan;
        assert_eq!(plan.install_fee(&device_counts(1)), Decimal::ZERO);
        assert_eq!(plan.install_fee(&device_counts(100)), Decimal::ZERO);
    }

    // ==================== KT tests ====================

    #[test]
    fn test_kt_channel_fee_splits_main_and_sub() {
        let plan = KtPlan;
        // 16 TVs: 2 lines -> 2 main + 14 sub, no discount
        let fee = plan.channel_fee(&device_counts(16));
        assert_eq!(fee, dec!(12000) * dec!(2) + dec!(7400) * dec!(14));
    }

    #[test]
    fn test_kt_sub_fee_not_discounted_at_threshold() {
        let plan = KtPlan;
        // 35 TVs: 5 lines -> 30 subs, exactly at the threshold
        let counts = device_counts(35);
        assert_eq!(counts.sub_count, 30);
        assert_eq!(
            plan.channel_fee(&counts),
            dec!(12000) * dec!(5) + dec!(7400) * dec!(30)
        );
    }

    #[test]
    fn test_kt_sub_fee_discounted_above_threshold() {
        let plan = KtPlan;
        // 36 TVs: 5 lines -> 31 subs, whole sub fee x0.9
        let counts = device_counts(36);
        assert_eq!(counts.sub_count, 31);
        let expected_sub = round_money(dec!(7400) * dec!(31) * dec!(0.9), 0);
        assert_eq!(plan.channel_fee(&counts), dec!(12000) * dec!(5) + expected_sub);
    }

    #[test]
    fn test_kt_bulk_discount_forty_tvs() {
        let plan = KtPlan;
        // 40 TVs: 5 lines, 35 subs: 5*12,000 + 35*7,400*0.9
        let counts = device_counts(40);
        assert_eq!(plan.channel_fee(&counts), dec!(60000) + dec!(233100));
    }

    #[test]
    fn test_kt_uhd_settop_has_no_volume_waiver() {
        let plan = KtPlan;
        let fee = plan
            .settop_fee(&device_counts(51), SettopType::Uhd)
            .unwrap();
        assert_eq!(fee, dec!(3000) * dec!(51));
    }

    #[test]
    fn test_kt_rejects_hd_settop() {
        let plan = KtPlan;
        let err = plan
            .settop_fee(&device_counts(10), SettopType::Hd)
            .unwrap_err();
        assert_eq!(
            err,
            PricingError::UnsupportedSettop {
                carrier: Carrier::Kt,
                settop: SettopType::Hd,
            }
        );
    }

    #[test]
    fn test_kt_install_fee_sixteen_tvs() {
        let plan = KtPlan;
        // 2 lines, 14 subs: internet 32,000 + 20,000; devices 2*22,000 + 14*14,000
        let fee = plan.install_fee(&device_counts(16));
        assert_eq!(fee, dec!(52000) + dec!(44000) + dec!(196000));
    }

    #[test]
    fn test_kt_install_fee_single_line() {
        let plan = KtPlan;
        // 8 TVs: 1 line, 7 subs: 32,000 + 22,000 + 7*14,000
        assert_eq!(plan.install_fee(&device_counts(8)), dec!(152000));
    }

    #[test]
    fn test_kt_install_fee_zero_lines() {
        let plan = KtPlan;
        assert_eq!(plan.install_fee(&device_counts(0)), Decimal::ZERO);
    }
}
