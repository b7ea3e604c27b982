// Tunables for the background field. Defaults reproduce the site's look.

use crate::color::{Color, FIELD_PALETTE};
use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    // Links are only drawn strictly below this distance
    pub link_distance: f64,
    // Link alpha at zero separation, fading linearly to 0 at link_distance
    pub link_alpha: f64,
    pub speed: Range<f64>,
    pub radius: Range<f64>,
    pub opacity: Range<f64>,
    pub palette: [Color; 3],
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 50;
    pub const LINK_DISTANCE: f64 = 150.0;
    pub const LINK_ALPHA: f64 = 0.2;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            link_distance: FieldConfig::LINK_DISTANCE,
            link_alpha: FieldConfig::LINK_ALPHA,
            speed: -1.0..1.0,
            radius: 1.0..3.0,
            opacity: 0.2..0.7,
            palette: FIELD_PALETTE,
        }
    }
}
