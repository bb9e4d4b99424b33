//! Normalized zone records.
//!
//! The extractor flattens the raw payload into [`ZoneRecord`]s, the sole
//! intermediate structure between the fetcher and the renderer. After
//! extraction every field is a plain non-null string, so the renderer never
//! deals with missing data.

use serde::{Deserialize, Serialize};

use crate::fetch::ZonesPayload;

/// Sentinel substituted when the API omits or nulls a field.
pub const MISSING_FIELD: &str = "N/A";

/// A normalized forecast zone row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRecord {
    /// Two-letter state/region code, or "N/A"
    pub state: String,
    /// Human-readable zone name, or "N/A"
    pub name: String,
    /// Unique zone identifier, or "N/A"
    pub zone_id: String,
}

/// Flatten payload features into records.
///
/// Features without a `properties` mapping are silently skipped — they do
/// not appear as "N/A" rows. Output order matches input order; sorting
/// happens in the renderer.
pub fn extract_records(payload: &ZonesPayload) -> Vec<ZoneRecord> {
    payload
        .features
        .iter()
        .filter_map(|feature| {
            let props = feature.properties.as_ref()?;
            Some(ZoneRecord {
                state: props
                    .state
                    .clone()
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                name: props
                    .name
                    .clone()
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
                zone_id: props
                    .id
                    .clone()
                    .unwrap_or_else(|| MISSING_FIELD.to_string()),
            })
        })
        .collect()
}
