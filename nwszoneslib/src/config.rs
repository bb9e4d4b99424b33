//! Fetch configuration.
//!
//! The endpoint URL and `User-Agent` value are explicit configuration passed
//! into [`fetch_zones`](crate::fetch::fetch_zones) rather than hidden module
//! state, so tests and callers can point the fetcher at a mock endpoint.

/// Production endpoint for the NWS zones listing.
pub const NWS_ZONES_URL: &str = "https://api.weather.gov/zones";

/// Default identifying client label. The NWS API rejects unidentified
/// clients, so every request carries a descriptive `User-Agent`.
const DEFAULT_USER_AGENT: &str = concat!(
    "nwszones/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/nwszones/nwszones)"
);

/// Where to fetch zone data from and how to identify the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Endpoint URL for the zones listing
    pub url: String,
    /// Value sent as the `User-Agent` header
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: NWS_ZONES_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    /// Create a config pointing at the production endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: override the endpoint URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Builder: override the `User-Agent` value
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
