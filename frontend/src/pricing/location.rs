use std::cell::Cell;
use std::collections::HashMap;
use std::future::Future;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use log::{error, info, warn};
use serde::Deserialize;
use thiserror::Error;

use crate::config;
use super::currency::{rate_plan, PriceContext, RatePlan, INTERNATIONAL};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Debug, Deserialize)]
pub struct LocationResponse {
    pub country_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RatesResponse {
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

pub async fn fetch_country_code() -> Result<String, FetchError> {
    let response = Request::get(&format!("{}/api/get-location", config::get_backend_url()))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = response
        .json::<LocationResponse>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))?;

    Ok(body.country_code.unwrap_or_default())
}

pub async fn fetch_usd_rates() -> Result<RatesResponse, FetchError> {
    let response = Request::get(config::EXCHANGE_RATE_URL)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<RatesResponse>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Runs `op` up to `attempts` times, waiting `base_delay_ms * attempt`
/// between tries.
pub async fn retry_linear<T, E, Op, OpFut, Sleep, SleepFut>(
    attempts: u32,
    base_delay_ms: u32,
    mut op: Op,
    sleep: Sleep,
) -> Result<T, E>
where
    E: std::fmt::Display,
    Op: FnMut() -> OpFut,
    OpFut: Future<Output = Result<T, E>>,
    Sleep: Fn(u32) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let attempts = attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(e) if attempt >= attempts => return Err(e),
            Err(e) => {
                warn!("Attempt {}/{} failed: {}", attempt, attempts, e);
                sleep(base_delay_ms.saturating_mul(attempt)).await;
                attempt += 1;
            }
        }
    }
}

/// Turns a country lookup and a rate lookup into a price context.
/// Never fails: every error ends in USD at rate 1.
pub async fn resolve_with<Locate, LocateFut, Rates, RatesFut>(locate: Locate, rates: Rates) -> PriceContext
where
    Locate: FnOnce() -> LocateFut,
    LocateFut: Future<Output = Result<String, FetchError>>,
    Rates: FnOnce() -> RatesFut,
    RatesFut: Future<Output = Result<RatesResponse, FetchError>>,
{
    let country_code = match locate().await {
        Ok(code) if !code.trim().is_empty() => code.trim().to_string(),
        Ok(_) => {
            warn!("Location response had no country code, using {}", INTERNATIONAL);
            INTERNATIONAL.to_string()
        }
        Err(e) => {
            warn!("Location lookup failed, using {}: {}", INTERNATIONAL, e);
            INTERNATIONAL.to_string()
        }
    };
    info!("User location determined as: {}", country_code);

    match rate_plan(&country_code) {
        RatePlan::Local => PriceContext::local(&country_code),
        RatePlan::Usd => PriceContext::usd(&country_code),
        RatePlan::Convert(currency) => match rates().await {
            Ok(response) => match response.rates.get(currency).copied() {
                Some(rate) if rate.is_finite() && rate > 0.0 => {
                    info!("Exchange rate for {}: {}", currency, rate);
                    PriceContext::converted(&country_code, currency, rate)
                }
                _ => {
                    warn!("No rate for {} in exchange response, falling back to USD", currency);
                    PriceContext::usd(&country_code)
                }
            },
            Err(e) => {
                error!("Exchange rate lookup failed, falling back to USD: {}", e);
                PriceContext::usd(&country_code)
            }
        },
    }
}

/// The full browser-side resolution: location with retries, then rates.
pub async fn resolve_pricing() -> PriceContext {
    resolve_with(
        || retry_linear(
            config::LOCATION_ATTEMPTS,
            config::LOCATION_BACKOFF_MS,
            fetch_country_code,
            |ms| TimeoutFuture::new(ms),
        ),
        fetch_usd_rates,
    )
    .await
}

/// Tickets for in-flight lookups. Only the latest ticket may write state,
/// and unmounting invalidates every outstanding one.
#[derive(Clone, Default)]
pub struct RequestGeneration(Rc<Cell<u64>>);

impl RequestGeneration {
    pub fn begin(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }

    pub fn invalidate(&self) {
        self.0.set(self.0.get().wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::dictionary::{translate, Language};
    use crate::pricing::currency::{EGP, USD};
    use crate::pricing::packages::{PackageKind, TierKind, DEFAULT_PACKAGE};
    use futures::executor::block_on;
    use std::cell::RefCell;

    fn rates(pairs: &[(&str, f64)]) -> RatesResponse {
        RatesResponse {
            rates: pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }

    fn en(key: &str) -> String {
        translate(Language::En, key).to_string()
    }

    #[test]
    fn unreachable_location_still_renders_usd_prices() {
        let rate_calls = Cell::new(0);
        let context = block_on(resolve_with(
            || async { Err::<String, _>(FetchError::Network("connection refused".into())) },
            || {
                rate_calls.set(rate_calls.get() + 1);
                async { Ok::<_, FetchError>(rates(&[])) }
            },
        ));

        assert!(!context.loading);
        assert_eq!(context.country_code.as_deref(), Some("INTL"));
        assert_eq!(context.currency, USD);
        assert_eq!(context.rate, 1.0);
        assert_eq!(rate_calls.get(), 0);

        let price = context.format_price(DEFAULT_PACKAGE, TierKind::Silver, en);
        assert_eq!(price.price, "70");
        assert_eq!(price.currency, "USD");
    }

    #[test]
    fn international_header_resolves_to_usd_for_the_default_package() {
        let context = block_on(resolve_with(
            || async { Ok::<_, FetchError>("INTL".to_string()) },
            || async { Err::<RatesResponse, _>(FetchError::Status(503)) },
        ));
        assert_eq!(context, PriceContext::usd("INTL"));

        let silver = context.format_price(PackageKind::Development, TierKind::Silver, en);
        let gold = context.format_price(PackageKind::Development, TierKind::Gold, en);
        assert_eq!(silver.to_string(), "70 USD");
        assert_eq!(gold.to_string(), "140 USD");
    }

    #[test]
    fn egypt_never_asks_for_rates() {
        let rate_calls = Cell::new(0);
        let context = block_on(resolve_with(
            || async { Ok::<_, FetchError>("EG".to_string()) },
            || {
                rate_calls.set(rate_calls.get() + 1);
                async { Ok::<_, FetchError>(rates(&[("EGP", 48.0)])) }
            },
        ));
        assert_eq!(context.currency, EGP);
        assert_eq!(rate_calls.get(), 0);
        assert_eq!(
            context.format_price(PackageKind::Development, TierKind::Gold, en).price,
            "2000"
        );
    }

    #[test]
    fn mapped_country_uses_the_fetched_rate() {
        let context = block_on(resolve_with(
            || async { Ok::<_, FetchError>("AE".to_string()) },
            || async { Ok::<_, FetchError>(rates(&[("AED", 3.6725), ("SAR", 3.75)])) },
        ));
        assert_eq!(context, PriceContext::converted("AE", "AED", 3.6725));
        // 140 * 3.6725 = 514.15
        assert_eq!(
            context.format_price(PackageKind::Development, TierKind::Gold, en).price,
            "514"
        );
    }

    #[test]
    fn missing_rate_falls_back_to_usd() {
        let context = block_on(resolve_with(
            || async { Ok::<_, FetchError>("QA".to_string()) },
            || async { Ok::<_, FetchError>(rates(&[("SAR", 3.75)])) },
        ));
        assert_eq!(context, PriceContext::usd("QA"));
    }

    #[test]
    fn failed_rate_lookup_falls_back_to_usd() {
        let context = block_on(resolve_with(
            || async { Ok::<_, FetchError>("KW".to_string()) },
            || async { Err::<RatesResponse, _>(FetchError::Decode("not json".into())) },
        ));
        assert_eq!(context, PriceContext::usd("KW"));
    }

    #[test]
    fn blank_country_code_counts_as_international() {
        let context = block_on(resolve_with(
            || async { Ok::<_, FetchError>("  ".to_string()) },
            || async { Ok::<_, FetchError>(rates(&[])) },
        ));
        assert_eq!(context.country_code.as_deref(), Some("INTL"));
    }

    #[test]
    fn retry_gives_up_after_the_last_attempt_with_linear_waits() {
        let calls = Cell::new(0);
        let waits = RefCell::new(Vec::new());
        let result: Result<(), FetchError> = block_on(retry_linear(
            3,
            500,
            || {
                calls.set(calls.get() + 1);
                async { Err::<(), _>(FetchError::Status(502)) }
            },
            |ms| {
                waits.borrow_mut().push(ms);
                async {}
            },
        ));
        assert!(matches!(result, Err(FetchError::Status(502))));
        assert_eq!(calls.get(), 3);
        assert_eq!(*waits.borrow(), vec![500, 1000]);
    }

    #[test]
    fn retry_stops_at_first_success() {
        let calls = Cell::new(0);
        let result = block_on(retry_linear(
            3,
            500,
            || {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt < 2 {
                        Err(FetchError::Network("reset".into()))
                    } else {
                        Ok("SA".to_string())
                    }
                }
            },
            |_| async {},
        ));
        assert_eq!(result.unwrap(), "SA");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let calls = Cell::new(0);
        let _ = block_on(retry_linear(
            0,
            500,
            || {
                calls.set(calls.get() + 1);
                async { Err::<(), _>(FetchError::Status(500)) }
            },
            |_| async {},
        ));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn only_the_latest_generation_is_current() {
        let generation = RequestGeneration::default();
        let first = generation.begin();
        let second = generation.begin();
        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));

        generation.invalidate();
        assert!(!generation.is_current(second));
    }

    #[test]
    fn clones_share_the_same_counter() {
        let generation = RequestGeneration::default();
        let handle = generation.clone();
        let ticket = generation.begin();
        assert!(handle.is_current(ticket));
        handle.invalidate();
        assert!(!generation.is_current(ticket));
    }

    #[test]
    fn rates_body_without_rates_decodes_empty() {
        let body: RatesResponse = serde_json::from_str(r#"{"base":"USD"}"#).unwrap();
        assert!(body.rates.is_empty());
        let body: LocationResponse = serde_json::from_str(r#"{"country_code":"INTL"}"#).unwrap();
        assert_eq!(body.country_code.as_deref(), Some("INTL"));
    }
}
