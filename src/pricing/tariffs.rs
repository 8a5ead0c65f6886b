//! Static tariff tables, KRW per month unless noted otherwise.
//!
//! Lookups are carrier-scoped: a carrier that does not sell a tier or
//! settop class simply has no entry for it, and callers get `None` back
//! instead of a silent zero.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::models::{Carrier, InternetTier, SettopType};

/// TVs covered by one internet line; partial groups still need a line.
pub const TVS_PER_LINE: i32 = 8;

/// VAT multiplier applied to the monthly subtotal.
pub const VAT_MULTIPLIER: Decimal = dec!(1.1);

/// LGU+ flat channel rate per TV.
// TODO: LGU+ has announced a rise to 7,000/TV; switch once the effective
// date is confirmed.
pub const LGU_CHANNEL_RATE: Decimal = dec!(5900);

/// LGU+ waives UHD settop rental outright above this many TVs.
pub const LGU_UHD_WAIVER_THRESHOLD: i32 = 50;

/// KT channel rate for the main device on each line.
pub const KT_MAIN_DEVICE_RATE: Decimal = dec!(12000);

/// KT channel rate per sub device.
pub const KT_SUB_DEVICE_RATE: Decimal = dec!(7400);

/// Sub device count above which KT discounts the whole sub fee.
pub const KT_SUB_BULK_THRESHOLD: i32 = 30;

/// Multiplier applied to the entire sub fee past the bulk threshold.
pub const KT_SUB_BULK_MULTIPLIER: Decimal = dec!(0.9);

// KT installation charges (one-time, first invoice)
pub const KT_INSTALL_FIRST_LINE: Decimal = dec!(32000);
pub const KT_INSTALL_EXTRA_LINE: Decimal = dec!(20000);
pub const KT_INSTALL_MAIN_DEVICE: Decimal = dec!(22000);
pub const KT_INSTALL_SUB_DEVICE: Decimal = dec!(14000);

/// Monthly internet rate per line, `None` when the carrier does not sell
/// the tier.
pub fn internet_rate(carrier: Carrier, tier: InternetTier) -> Option<Decimal> {
    let rate = match (carrier, tier) {
        (Carrier::LguPlus, InternetTier::Mb500) => dec!(35000),
        (Carrier::LguPlus, InternetTier::Gb1) => dec!(40000),
        (Carrier::Kt, InternetTier::Mb500) => dec!(25000),
        (Carrier::Kt, InternetTier::Gb1) => dec!(30000),
    };
    Some(rate)
}

/// Monthly settop rental per unit, `None` when the carrier does not offer
/// the class (KT has no HD box).
pub fn settop_rate(carrier: Carrier, settop: SettopType) -> Option<Decimal> {
    match (carrier, settop) {
        (Carrier::LguPlus, SettopType::Uhd) => Some(dec!(1500)),
        (Carrier::LguPlus, SettopType::Hd) => Some(Decimal::ZERO),
        (Carrier::Kt, SettopType::Uhd) => Some(dec!(3000)),
        (Carrier::Kt, SettopType::Hd) => None,
    }
}

/// Internet tiers a carrier sells, in display order.
pub fn supported_tiers(carrier: Carrier) -> &'static [InternetTier] {
    match carrier {
        Carrier::LguPlus | Carrier::Kt => &[InternetTier::Mb500, InternetTier::Gb1],
    }
}

/// Settop classes a carrier offers, in display order.
pub fn supported_settops(carrier: Carrier) -> &'static [SettopType] {
    match carrier {
        Carrier::LguPlus => &[SettopType::Uhd, SettopType::Hd],
        Carrier::Kt => &[SettopType::Uhd],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_internet_rates_per_carrier() {
        assert_eq!(
            internet_rate(Carrier::LguPlus, InternetTier::Mb500),
            Some(dec!(35000))
        );
        assert_eq!(
            internet_rate(Carrier::LguPlus, InternetTier::Gb1),
            Some(dec!(40000))
        );
        assert_eq!(
            internet_rate(Carrier::Kt, InternetTier::Mb500),
            Some(dec!(25000))
        );
        assert_eq!(
            internet_rate(Carrier::Kt, InternetTier::Gb1),
            Some(dec!(30000))
        );
    }

    #[test]
    fn test_settop_rates_are_carrier_scoped() {
        assert_eq!(
            settop_rate(Carrier::LguPlus, SettopType::Uhd),
            Some(dec!(1500))
        );
        assert_eq!(
            settop_rate(Carrier::LguPlus, SettopType::Hd),
            Some(Decimal::ZERO)
        );
        assert_eq!(settop_rate(Carrier::Kt, SettopType::Uhd), Some(dec!(3000)));
        assert_eq!(settop_rate(Carrier::Kt, SettopType::Hd), None);
    }

    #[test]
    fn test_supported_settop_sets_differ_per_carrier() {
        assert_eq!(
            supported_settops(Carrier::LguPlus),
            &[SettopType::Uhd, SettopType::Hd]
        );
        assert_eq!(supported_settops(Carrier::Kt), &[SettopType::Uhd]);
    }

    #[test]
    fn test_every_listed_option_has_a_rate() {
        for carrier in Carrier::ALL {
            for &tier in supported_tiers(carrier) {
                assert!(internet_rate(carrier, tier).is_some());
            }
            for &settop in supported_settops(carrier) {
                assert!(settop_rate(carrier, settop).is_some());
            }
        }
    }
}
