use std::fmt;

use super::packages::{price_literal, tier_price, PackageKind, TierKind};

pub const USD: &str = "USD";
pub const EGP: &str = "EGP";
pub const EGYPT: &str = "EG";
pub const INTERNATIONAL: &str = "INTL";

/// Countries that get prices in their own currency. Everything else is USD.
pub const COUNTRY_CURRENCIES: &[(&str, &str)] = &[
    ("EG", "EGP"),
    ("SA", "SAR"),
    ("AE", "AED"),
    ("KW", "KWD"),
    ("QA", "QAR"),
    ("BH", "BHD"),
    ("OM", "OMR"),
    ("JO", "JOD"),
    ("LB", "LBP"),
    ("IQ", "IQD"),
    ("SY", "SYP"),
    ("YE", "YER"),
    ("PS", "ILS"),
    ("MA", "MAD"),
    ("DZ", "DZD"),
    ("TN", "TND"),
    ("LY", "LYD"),
    ("SD", "SDG"),
    ("SO", "SOS"),
    ("DJ", "DJF"),
    ("MR", "MRO"),
];

pub fn currency_for_country(country_code: &str) -> &'static str {
    COUNTRY_CURRENCIES
        .iter()
        .find(|(country, _)| country.eq_ignore_ascii_case(country_code.trim()))
        .map(|(_, currency)| *currency)
        .unwrap_or(USD)
}

/// How prices for a country are obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RatePlan {
    /// Egypt: EGP literals straight from the price table, no rate lookup.
    Local,
    /// Another mapped country: USD prices times the fetched rate.
    Convert(&'static str),
    /// Everything else, including `INTL`.
    Usd,
}

pub fn rate_plan(country_code: &str) -> RatePlan {
    match currency_for_country(country_code) {
        EGP => RatePlan::Local,
        USD => RatePlan::Usd,
        currency => RatePlan::Convert(currency),
    }
}

/// A price ready for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormattedPrice {
    pub price: String,
    pub currency: String,
}

impl FormattedPrice {
    /// The strike-through "before discount" amount, twice the price.
    pub fn original_price(&self) -> Option<String> {
        self.price.parse::<u64>().ok().map(|price| (price * 2).to_string())
    }
}

impl fmt::Display for FormattedPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.currency.is_empty() {
            write!(f, "{}", self.price)
        } else {
            write!(f, "{} {}", self.price, self.currency)
        }
    }
}

/// Resolved location and currency that price formatting works from.
#[derive(Clone, Debug, PartialEq)]
pub struct PriceContext {
    pub country_code: Option<String>,
    pub currency: &'static str,
    pub rate: f64,
    pub loading: bool,
}

impl Default for PriceContext {
    fn default() -> Self {
        PriceContext::loading()
    }
}

impl PriceContext {
    pub fn loading() -> Self {
        PriceContext {
            country_code: None,
            currency: USD,
            rate: 1.0,
            loading: true,
        }
    }

    pub fn usd(country_code: &str) -> Self {
        PriceContext {
            country_code: Some(country_code.to_string()),
            currency: USD,
            rate: 1.0,
            loading: false,
        }
    }

    pub fn local(country_code: &str) -> Self {
        PriceContext {
            country_code: Some(country_code.to_string()),
            currency: EGP,
            rate: 1.0,
            loading: false,
        }
    }

    pub fn converted(country_code: &str, currency: &'static str, rate: f64) -> Self {
        PriceContext {
            country_code: Some(country_code.to_string()),
            currency,
            rate,
            loading: false,
        }
    }

    fn is_egypt(&self) -> bool {
        self.country_code.as_deref().is_some_and(|code| code.eq_ignore_ascii_case(EGYPT))
    }

    /// Price and currency label for one tier. `t` is the translation accessor.
    pub fn format_price<T>(&self, package: PackageKind, tier: TierKind, t: T) -> FormattedPrice
    where
        T: Fn(&str) -> String,
    {
        if self.loading {
            return FormattedPrice { price: "...".to_string(), currency: String::new() };
        }

        if self.is_egypt() {
            return FormattedPrice {
                price: price_literal(package, tier, EGP).to_string(),
                currency: t("packages.egp"),
            };
        }

        let usd_literal = tier_price(package, tier).usd;
        if self.currency != USD && self.rate.is_finite() && self.rate > 0.0 {
            if let Ok(usd) = usd_literal.parse::<f64>() {
                let key = format!("packages.{}", self.currency.to_lowercase());
                let label = t(&key);
                return FormattedPrice {
                    price: format!("{}", (usd * self.rate).round() as i64),
                    currency: if label != key { label } else { self.currency.to_string() },
                };
            }
        }

        FormattedPrice {
            price: usd_literal.to_string(),
            currency: t("packages.usd"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::dictionary::{translate, Language};

    fn en(key: &str) -> String {
        translate(Language::En, key).to_string()
    }

    #[test]
    fn every_mapped_country_resolves_to_a_declared_currency() {
        let declared: Vec<&str> = COUNTRY_CURRENCIES.iter().map(|(_, c)| *c).collect();
        for (country, currency) in COUNTRY_CURRENCIES {
            let resolved = currency_for_country(country);
            assert_eq!(resolved, *currency);
            assert!(declared.contains(&resolved));
        }
    }

    #[test]
    fn unmapped_countries_resolve_to_usd_with_rate_one() {
        for country in ["US", "DE", "INTL", "", "XX"] {
            assert_eq!(currency_for_country(country), USD);
            assert_eq!(rate_plan(country), RatePlan::Usd);
            let context = PriceContext::usd(country);
            assert_eq!(context.currency, USD);
            assert_eq!(context.rate, 1.0);
        }
    }

    #[test]
    fn egypt_skips_the_rate_lookup() {
        assert_eq!(rate_plan("EG"), RatePlan::Local);
        assert_eq!(rate_plan("eg"), RatePlan::Local);
        assert_eq!(rate_plan("SA"), RatePlan::Convert("SAR"));
        assert_eq!(rate_plan("PS"), RatePlan::Convert("ILS"));
    }

    #[test]
    fn loading_shows_placeholder() {
        let price = PriceContext::loading().format_price(PackageKind::Development, TierKind::Gold, en);
        assert_eq!(price.price, "...");
        assert_eq!(price.currency, "");
        assert_eq!(price.original_price(), None);
    }

    #[test]
    fn egypt_gets_the_literal_egp_price() {
        let price = PriceContext::local("EG").format_price(PackageKind::Development, TierKind::Gold, en);
        assert_eq!(price, FormattedPrice { price: "2000".into(), currency: "EGP".into() });
        assert_eq!(price.original_price().as_deref(), Some("4000"));
    }

    #[test]
    fn converted_prices_are_rounded_and_labelled() {
        let context = PriceContext::converted("SA", "SAR", 3.75);
        let price = context.format_price(PackageKind::Testing, TierKind::Silver, en);
        // 45 * 3.75 = 168.75
        assert_eq!(price.price, "169");
        assert_eq!(price.currency, "SAR");

        let arabic = context.format_price(PackageKind::Testing, TierKind::Silver, |k| {
            translate(Language::Ar, k).to_string()
        });
        assert_eq!(arabic.currency, "ريال");
    }

    #[test]
    fn untranslated_currency_falls_back_to_its_code() {
        let context = PriceContext::converted("JO", "JOD", 0.709);
        let price = context.format_price(PackageKind::Journey, TierKind::Gold, en);
        // 200 * 0.709 = 141.8
        assert_eq!(price.price, "142");
        assert_eq!(price.currency, "JOD");
    }

    #[test]
    fn bad_rate_falls_back_to_usd() {
        let context = PriceContext::converted("KW", "KWD", f64::NAN);
        let price = context.format_price(PackageKind::Development, TierKind::Silver, en);
        assert_eq!(price, FormattedPrice { price: "70".into(), currency: "USD".into() });
    }

    #[test]
    fn international_visitors_see_usd_literals() {
        let context = PriceContext::usd(INTERNATIONAL);
        for package in PackageKind::ALL {
            for tier in TierKind::ALL {
                let price = context.format_price(package, tier, en);
                assert_eq!(price.price, tier_price(package, tier).usd);
                assert_eq!(price.currency, "USD");
            }
        }
    }

    #[test]
    fn display_joins_price_and_currency() {
        let price = FormattedPrice { price: "140".into(), currency: "USD".into() };
        assert_eq!(price.to_string(), "140 USD");
        let pending = FormattedPrice { price: "...".into(), currency: String::new() };
        assert_eq!(pending.to_string(), "...");
    }
}
