//! HTTP fetcher for the NWS zones endpoint.
//!
//! One blocking GET per call, no retries, no explicit timeout (the client's
//! defaults apply). Transport failures, non-success statuses, and unparsable
//! bodies map to distinct [`ZonesError`] variants; a payload that parses but
//! lacks the `features` key is *not* an error — it simply yields zero
//! features.

use serde::Deserialize;

use crate::config::FetchConfig;
use crate::error::ZonesError;

/// Raw payload returned by the zones endpoint.
///
/// Only the fields the extractor reads are modeled; everything else in the
/// GeoJSON response is ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct ZonesPayload {
    /// Zone features; missing key deserializes to an empty list
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// One feature entry in the payload.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    /// Zone attributes; features without this mapping are skipped downstream
    pub properties: Option<ZoneProperties>,
}

/// The subset of zone attributes the table reports.
#[derive(Debug, Clone, Deserialize)]
pub struct ZoneProperties {
    /// Two-letter state/region code
    pub state: Option<String>,
    /// Human-readable zone name
    pub name: Option<String>,
    /// Unique zone identifier (e.g. "WAZ001")
    pub id: Option<String>,
}

/// Fetch the zone list from the configured endpoint.
///
/// Sends a single GET with the configured `User-Agent` and parses the body
/// as [`ZonesPayload`]. A non-success status becomes
/// [`ZonesError::Http`] carrying the status code and URL.
pub fn fetch_zones(config: &FetchConfig) -> Result<ZonesPayload, ZonesError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(&config.user_agent)
        .build()
        .map_err(ZonesError::Network)?;

    let response = client
        .get(&config.url)
        .send()
        .map_err(ZonesError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(ZonesError::Http {
            status: status.as_u16(),
            url: config.url.clone(),
        });
    }

    response.json::<ZonesPayload>().map_err(ZonesError::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_parses_features() {
        let payload: ZonesPayload = serde_json::from_str(
            r#"{
                "features": [
                    {"properties": {"state": "WA", "name": "Seattle", "id": "WAZ001"}},
                    {"properties": {"state": null, "name": "Nowhere", "id": "XXZ000"}}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(payload.features.len(), 2);
        let first = payload.features[0].properties.as_ref().unwrap();
        assert_eq!(first.state.as_deref(), Some("WA"));
        assert_eq!(first.id.as_deref(), Some("WAZ001"));
        let second = payload.features[1].properties.as_ref().unwrap();
        assert!(second.state.is_none());
    }

    #[test]
    fn test_payload_without_features_is_empty() {
        let payload: ZonesPayload = serde_json::from_str(r#"{"type": "FeatureCollection"}"#).unwrap();
        assert!(payload.features.is_empty());
    }

    #[test]
    fn test_payload_ignores_unknown_fields() {
        let payload: ZonesPayload = serde_json::from_str(
            r#"{
                "@context": {"version": "1.1"},
                "features": [
                    {"geometry": null, "properties": {"state": "OR", "name": "Portland", "id": "ORZ010"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(payload.features.len(), 1);
    }

    #[test]
    fn test_feature_without_properties_parses() {
        let payload: ZonesPayload =
            serde_json::from_str(r#"{"features": [{"id": "ignored"}]}"#).unwrap();
        assert_eq!(payload.features.len(), 1);
        assert!(payload.features[0].properties.is_none());
    }

    #[test]
    fn test_fetch_connection_refused_is_network_error() {
        // Port 9 (discard) is essentially never bound, so this fails locally
        // without touching the external network.
        let config = FetchConfig::new().url("http://127.0.0.1:9/zones");
        let result = fetch_zones(&config);
        assert!(matches!(result, Err(ZonesError::Network(_))));
    }

    #[test]
    #[ignore = "requires network access"]
    fn test_fetch_live_endpoint() {
        let config = FetchConfig::new();
        let payload = fetch_zones(&config)
            .unwrap_or_else(|e| panic!("live fetch failed (api.weather.gov unreachable?): {e}"));
        assert!(!payload.features.is_empty());
    }
}
