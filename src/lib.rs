//! Earthquake and plate-boundary map service.
//!
//! Fetches the USGS real-time earthquake feed and the PB2002 plate boundary
//! feed, encodes each quake by magnitude, and serves the result as a Leaflet
//! map with a time slider.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
