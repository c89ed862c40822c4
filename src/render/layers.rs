//! Paint layers: geometry primitives tagged with the palette slot they use

use enum_dispatch::enum_dispatch;
use glam::DVec2;

use crate::config::Palette;
use crate::errors::IconError;
use crate::geometry::{Disc, Segment};
use crate::types::{Bounds, Rgba};

use super::surface::Surface;

/// Something that can put itself on a surface in a single color
#[enum_dispatch]
pub trait Draw {
    fn draw(&self, surface: &mut dyn Surface, color: Rgba) -> Result<(), IconError>;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub bounds: Bounds,
}

impl From<Disc> for Ellipse {
    fn from(disc: Disc) -> Self {
        Ellipse { bounds: disc.bounds() }
    }
}

impl Draw for Ellipse {
    fn draw(&self, surface: &mut dyn Surface, color: Rgba) -> Result<(), IconError> {
        surface.fill_ellipse(self.bounds, color)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub segment: Segment,
}

impl Draw for Line {
    fn draw(&self, surface: &mut dyn Surface, color: Rgba) -> Result<(), IconError> {
        surface.draw_line(self.segment.from, self.segment.to, color, self.segment.width)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub points: Vec<DVec2>,
}

impl Draw for Polygon {
    fn draw(&self, surface: &mut dyn Surface, color: Rgba) -> Result<(), IconError> {
        surface.fill_polygon(&self.points, color)
    }
}

#[enum_dispatch(Draw)]
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Ellipse(Ellipse),
    Line(Line),
    Polygon(Polygon),
}

/// Palette slot a layer is painted with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Primary,
    Accent,
    Face,
    Shadow,
}

impl Ink {
    pub fn resolve(self, palette: &Palette) -> Rgba {
        match self {
            Ink::Primary => palette.primary,
            Ink::Accent => palette.accent,
            Ink::Face => palette.face,
            Ink::Shadow => palette.shadow,
        }
    }
}

/// Which element of the motif a layer belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    Shadow,
    Ring,
    Face,
    Tick(usize),
    HourHand,
    MinuteHand,
    CenterDot,
    Arc(usize),
    Arrowhead,
}

/// One draw call of the composition
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub part: Part,
    pub ink: Ink,
    pub primitive: Primitive,
}

impl Layer {
    pub fn new(part: Part, ink: Ink, primitive: impl Into<Primitive>) -> Self {
        Self {
            part,
            ink,
            primitive: primitive.into(),
        }
    }

    pub fn paint(&self, surface: &mut dyn Surface, palette: &Palette) -> Result<(), IconError> {
        self.primitive.draw(surface, self.ink.resolve(palette))
    }
}
