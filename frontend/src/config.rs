#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:3000"  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    ""  // Production URL
}

pub const SITE_TITLE: &str = "DR FARES COACHING";
pub const WHATSAPP_NUMBER: &str = "201099488562";
pub const EXCHANGE_RATE_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

pub const INSTAGRAM_URL: &str = "https://www.instagram.com/dr_fares_coaching";
pub const TIKTOK_URL: &str = "https://www.tiktok.com/@faresrezk94";
pub const YOUTUBE_URL: &str = "https://www.youtube.com/@drfaresrezq";

// Location lookup retries
pub const LOCATION_ATTEMPTS: u32 = 3;
pub const LOCATION_BACKOFF_MS: u32 = 500;

// Language switch overlay timings
pub const LANGUAGE_SWAP_DELAY_MS: u32 = 200;
pub const LANGUAGE_SETTLE_DELAY_MS: u32 = 300;

pub const SCROLL_SPY_OFFSET: f64 = 100.0;
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;
