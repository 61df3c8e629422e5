//! Engine configuration.
//!
//! The page may pass a JSON object to override any subset of these fields;
//! missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CLICK_RADIUS, DEFAULT_MAX_DISTANCE, DEFAULT_MAX_NEIGHBORS, DEFAULT_SEED, DEFAULT_STAR_COUNT,
};
use crate::links::LinkParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkyConfig {
    /// Stars per tile.
    pub star_count: usize,
    /// Longest constellation line, in sky units.
    pub max_distance: f64,
    /// Neighbors each star may link to.
    pub max_neighbors: usize,
    /// Click tolerance around a star, in sky units.
    pub click_radius: f64,
    pub show_lines: bool,
    /// Seed used before the user enters one.
    pub default_seed: String,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            star_count: DEFAULT_STAR_COUNT,
            max_distance: DEFAULT_MAX_DISTANCE,
            max_neighbors: DEFAULT_MAX_NEIGHBORS,
            click_radius: DEFAULT_CLICK_RADIUS,
            show_lines: true,
            default_seed: DEFAULT_SEED.to_owned(),
        }
    }
}

impl SkyConfig {
    /// Parse a JSON override object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error for malformed JSON or mistyped fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn link_params(&self) -> LinkParams {
        LinkParams { max_distance: self.max_distance, max_neighbors: self.max_neighbors }
    }
}
