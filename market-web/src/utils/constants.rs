//! Application constants

/// Remote endpoint, overridable at compile time.
pub const REMOTE_URL: &str = match option_env!("AGRIMARKET_REMOTE_URL") {
    Some(url) => url,
    None => "http://127.0.0.1:54321",
};

/// Publishable access key sent with every request.
pub const REMOTE_KEY: &str = match option_env!("AGRIMARKET_REMOTE_KEY") {
    Some(key) => key,
    None => "agrimarket-dev-anon-key",
};

/// Local storage key for the persisted auth session.
pub const SESSION_STORAGE_KEY: &str = "agrimarket.auth.session";

/// Regions offered at registration.
pub const REGIONS: &[&str] = &[
    "Punjab",
    "Sindh",
    "Khyber Pakhtunkhwa",
    "Balochistan",
    "Gilgit-Baltistan",
    "Azad Kashmir",
    "Islamabad Capital Territory",
];

/// Days of price history per chart and trend window.
pub const HISTORY_DAYS: usize = 7;

/// Rising/falling classification threshold, in percent.
pub const TREND_THRESHOLD_PCT: f64 = 5.0;

/// Items scanned when building the market trend list.
pub const TREND_ITEM_LIMIT: usize = 10;

/// Maximum items selectable in compare mode.
pub const COMPARE_LIMIT: usize = 3;

/// Most recent price rows shown in the admin table.
pub const RECENT_PRICE_LIMIT: usize = 50;
