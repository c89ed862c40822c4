//! Icon composition
//!
//! This module is organized into submodules:
//! - `layers`: paint layers and the primitives they draw
//! - `surface`: the drawing-surface trait and its backends
//!
//! [`compose`] fixes the z-order of the motif; [`render`] paints that order
//! onto any [`Surface`]; [`render_icon`] runs the whole pipeline for one size.

pub mod layers;
pub mod surface;

pub use layers::{Draw, Ink, Layer, Part, Primitive};
pub use surface::{DrawCall, IconBitmap, PixmapSurface, RecordingSurface, Surface};

use crate::config::Palette;
use crate::errors::IconError;
use crate::geometry::{ClockGeometry, Segment, compute_geometry};
use crate::log::debug;
use layers::{Ellipse, Line, Polygon};

/// Ordered layers of the motif; later layers cover earlier ones.
///
/// Shadow, ring, face, the twelve ticks, hour hand, minute hand, center dot,
/// the arc segments, then the arrowhead. The center dot comes after both hands
/// so it is never hidden by them.
pub fn compose(geometry: &ClockGeometry) -> Vec<Layer> {
    let mut layers = Vec::with_capacity(8 + geometry.ticks.len() + geometry.arc_samples.len());

    layers.push(Layer::new(
        Part::Shadow,
        Ink::Shadow,
        Ellipse { bounds: geometry.shadow },
    ));
    layers.push(Layer::new(Part::Ring, Ink::Primary, Ellipse::from(geometry.ring)));
    layers.push(Layer::new(Part::Face, Ink::Face, Ellipse::from(geometry.face)));

    for tick in &geometry.ticks {
        layers.push(Layer::new(
            Part::Tick(tick.index),
            Ink::Primary,
            Line { segment: tick.segment },
        ));
    }

    layers.push(Layer::new(
        Part::HourHand,
        Ink::Primary,
        Line { segment: geometry.hour_hand },
    ));
    layers.push(Layer::new(
        Part::MinuteHand,
        Ink::Primary,
        Line { segment: geometry.minute_hand },
    ));
    layers.push(Layer::new(
        Part::CenterDot,
        Ink::Accent,
        Ellipse::from(geometry.center_dot),
    ));

    for (i, (from, to)) in geometry.arc_segments().enumerate() {
        let segment = Segment { from, to, width: geometry.arc_width };
        layers.push(Layer::new(Part::Arc(i), Ink::Accent, Line { segment }));
    }

    layers.push(Layer::new(
        Part::Arrowhead,
        Ink::Accent,
        Polygon { points: geometry.arrowhead.to_vec() },
    ));

    layers
}

/// Paint the motif onto `surface` in composition order.
///
/// Stops at the first surface error.
pub fn render(
    geometry: &ClockGeometry,
    palette: &Palette,
    surface: &mut dyn Surface,
) -> Result<(), IconError> {
    for layer in compose(geometry) {
        layer.paint(surface, palette)?;
    }
    Ok(())
}

/// Compute, allocate and paint the icon for a `size`×`size` canvas
pub fn render_icon(size: u32, palette: &Palette) -> Result<IconBitmap, IconError> {
    let geometry = compute_geometry(f64::from(size))?;
    let mut surface = PixmapSurface::new(size)?;
    render(&geometry, palette, &mut surface)?;
    debug!(size, "rendered icon");
    Ok(surface.into_bitmap())
}
