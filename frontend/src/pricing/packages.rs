//! The fixed offering table: packages, their tiers and the literal prices
//! configured for each currency.

use super::currency::EGP;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageKind {
    Testing,
    Development,
    Journey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TierKind {
    Silver,
    Gold,
}

/// Literal prices as configured, one per supported price currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierPrice {
    pub egp: &'static str,
    pub usd: &'static str,
}

pub const DEFAULT_PACKAGE: PackageKind = PackageKind::Development;

pub const FEATURE_KEYS: [&str; 10] = [
    "packages.feature.1",
    "packages.feature.2",
    "packages.feature.3",
    "packages.feature.4",
    "packages.feature.5",
    "packages.feature.6",
    "packages.feature.7",
    "packages.feature.8",
    "packages.feature.9",
    "packages.feature.10",
];

impl PackageKind {
    pub const ALL: [PackageKind; 3] = [PackageKind::Testing, PackageKind::Development, PackageKind::Journey];

    pub fn key(&self) -> &'static str {
        match self {
            PackageKind::Testing => "testing",
            PackageKind::Development => "development",
            PackageKind::Journey => "journey",
        }
    }

    pub fn from_key(key: &str) -> Option<PackageKind> {
        PackageKind::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn title_key(&self) -> String {
        format!("packages.{}.title", self.key())
    }

    pub fn duration_key(&self) -> String {
        format!("packages.{}.duration", self.key())
    }

    pub fn suitable_for_key(&self) -> String {
        format!("packages.{}.suitableFor", self.key())
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, PackageKind::Development)
    }
}

impl TierKind {
    pub const ALL: [TierKind; 2] = [TierKind::Silver, TierKind::Gold];

    pub fn key(&self) -> &'static str {
        match self {
            TierKind::Silver => "silver",
            TierKind::Gold => "gold",
        }
    }

    pub fn name_key(&self) -> &'static str {
        match self {
            TierKind::Silver => "packages.silver",
            TierKind::Gold => "packages.gold",
        }
    }

    pub fn cta_key(&self) -> &'static str {
        match self {
            TierKind::Silver => "packages.cta.silver",
            TierKind::Gold => "packages.cta.gold",
        }
    }

    pub fn benefit_keys(&self) -> &'static [&'static str] {
        match self {
            TierKind::Silver => &["packages.silver.benefit.1", "packages.silver.benefit.2"],
            TierKind::Gold => &[
                "packages.gold.benefit.1",
                "packages.gold.benefit.2",
                "packages.gold.benefit.3",
            ],
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TierKind::Silver => "🥈",
            TierKind::Gold => "🥇",
        }
    }
}

pub fn tier_price(package: PackageKind, tier: TierKind) -> TierPrice {
    match (package, tier) {
        (PackageKind::Testing, TierKind::Silver) => TierPrice { egp: "600", usd: "45" },
        (PackageKind::Testing, TierKind::Gold) => TierPrice { egp: "1200", usd: "90" },
        (PackageKind::Development, TierKind::Silver) => TierPrice { egp: "1000", usd: "70" },
        (PackageKind::Development, TierKind::Gold) => TierPrice { egp: "2000", usd: "140" },
        (PackageKind::Journey, TierKind::Silver) => TierPrice { egp: "1600", usd: "100" },
        (PackageKind::Journey, TierKind::Gold) => TierPrice { egp: "3200", usd: "200" },
    }
}

/// The literal configured for `currency`, or the USD literal when that
/// currency has no configured price.
pub fn price_literal(package: PackageKind, tier: TierKind, currency: &str) -> &'static str {
    let price = tier_price(package, tier);
    if currency == EGP {
        price.egp
    } else {
        price.usd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_price_for_development_gold_in_egp() {
        assert_eq!(price_literal(PackageKind::Development, TierKind::Gold, "EGP"), "2000");
        assert_eq!(price_literal(PackageKind::Development, TierKind::Gold, "USD"), "140");
    }

    #[test]
    fn unconfigured_currency_uses_usd_literal() {
        for package in PackageKind::ALL {
            for tier in TierKind::ALL {
                assert_eq!(price_literal(package, tier, "SAR"), tier_price(package, tier).usd);
            }
        }
    }

    #[test]
    fn gold_always_costs_more_than_silver() {
        for package in PackageKind::ALL {
            let silver = tier_price(package, TierKind::Silver);
            let gold = tier_price(package, TierKind::Gold);
            assert!(gold.usd.parse::<u32>().unwrap() > silver.usd.parse::<u32>().unwrap());
            assert!(gold.egp.parse::<u32>().unwrap() > silver.egp.parse::<u32>().unwrap());
        }
    }

    #[test]
    fn package_keys_round_trip() {
        for package in PackageKind::ALL {
            assert_eq!(PackageKind::from_key(package.key()), Some(package));
        }
        assert_eq!(PackageKind::from_key("weekly"), None);
    }

    #[test]
    fn only_the_default_package_is_highlighted() {
        let highlighted: Vec<_> = PackageKind::ALL.into_iter().filter(|p| p.is_highlighted()).collect();
        assert_eq!(highlighted, vec![DEFAULT_PACKAGE]);
    }

    #[test]
    fn translation_keys_follow_the_package_key() {
        assert_eq!(PackageKind::Journey.title_key(), "packages.journey.title");
        assert_eq!(PackageKind::Testing.duration_key(), "packages.testing.duration");
        assert_eq!(PackageKind::Development.suitable_for_key(), "packages.development.suitableFor");
    }
}
