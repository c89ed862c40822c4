//! Proportions of the clock motif (fractions of the canvas size or the clock radius)

use crate::types::Dial;

/// Empty border on every side, as a fraction of the canvas size
pub const MARGIN: f64 = 0.10;
/// Drop-shadow offset on both axes, as a fraction of the canvas size
pub const SHADOW_OFFSET: f64 = 0.02;
/// Colored rim width, as a fraction of the clock radius
pub const RING_THICKNESS: f64 = 0.10;

pub const TICK_COUNT: usize = 12;
pub const TICK_OUTER: f64 = 0.85;
pub const TICK_INNER_MAJOR: f64 = 0.70;
pub const TICK_INNER_MINOR: f64 = 0.75;

pub const HOUR_HAND_HOUR: u32 = 10;
pub const HOUR_HAND_LENGTH: f64 = 0.5;
pub const MINUTE_HAND_HOUR: u32 = 2;
pub const MINUTE_HAND_LENGTH: f64 = 0.7;

pub const CENTER_DOT_RADIUS: f64 = 0.08;

pub const ARC_START: Dial = Dial(180.0);
pub const ARC_END: Dial = Dial(270.0);
pub const ARC_RADIUS: f64 = 0.85;
/// Sample points along the arc; the arc is drawn as `ARC_SAMPLES - 1` segments
pub const ARC_SAMPLES: usize = 20;

/// Arrowhead side length, as a fraction of the clock radius
pub const ARROWHEAD_SIZE: f64 = 0.15;
/// Dial offsets from the tip angle to the two base vertices
pub const ARROWHEAD_SPREAD: [f64; 2] = [150.0, 210.0];
