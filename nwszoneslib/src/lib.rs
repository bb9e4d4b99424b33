//! # nwszoneslib
//!
//! A small client for the National Weather Service zones API with a
//! column-aligned text-table formatter.
//!
//! ## Overview
//!
//! The NWS publishes the list of geographic forecast zones at
//! `https://api.weather.gov/zones`. This library fetches that list with a
//! single blocking GET, flattens the GeoJSON features into normalized
//! [`ZoneRecord`]s, and renders them as an aligned table sorted by state
//! and name.
//!
//! The pipeline is three pure steps plus one network call:
//!
//! 1. [`fetch_zones`] — one GET with an identifying `User-Agent`, parsed
//!    into a [`ZonesPayload`]
//! 2. [`extract_records`] — features to [`ZoneRecord`]s, substituting
//!    `"N/A"` for missing fields
//! 3. [`render_table`] — stable sort plus width computation, producing the
//!    final string
//!
//! The library never prints and never decides process exit; it returns
//! `Result`s and strings for the caller to act on.
//!
//! ## Example
//!
//! ```rust
//! use nwszoneslib::{render_table, ZoneRecord};
//!
//! let records = vec![
//!     ZoneRecord {
//!         state: "WA".to_string(),
//!         name: "Seattle".to_string(),
//!         zone_id: "WAZ001".to_string(),
//!     },
//! ];
//!
//! let table = render_table(&records);
//! assert_eq!(table.lines().count(), 3); // header, separator, one row
//! assert!(table.contains("WAZ001"));
//! ```

pub mod config;
pub mod error;
pub mod fetch;
pub mod record;
pub mod table;

pub use config::{FetchConfig, NWS_ZONES_URL};
pub use error::ZonesError;
pub use fetch::{fetch_zones, Feature, ZoneProperties, ZonesPayload};
pub use record::{extract_records, ZoneRecord, MISSING_FIELD};
pub use table::{render_table, sort_records, EMPTY_MESSAGE};

/// Result type for nwszoneslib operations
pub type Result<T> = std::result::Result<T, ZonesError>;
