//! Drawing surfaces
//!
//! [`Surface`] is the narrow raster interface the composer paints through.
//! [`PixmapSurface`] rasterizes with tiny-skia; [`RecordingSurface`] only
//! remembers the calls it received.

use glam::DVec2;
use tiny_skia::{
    FillRule, LineCap, Paint, PathBuilder, Pixmap, PremultipliedColorU8, Rect, Stroke, Transform,
};

use crate::errors::IconError;
use crate::types::{Bounds, Px, Rgba};

/// Raster operations needed to paint the motif
pub trait Surface {
    /// Fill the ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Bounds, color: Rgba) -> Result<(), IconError>;

    /// Stroke a straight segment with butt ends
    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: Px) -> Result<(), IconError>;

    /// Fill a closed polygon
    fn fill_polygon(&mut self, points: &[DVec2], color: Rgba) -> Result<(), IconError>;
}

// ============================================================================
// tiny-skia backend
// ============================================================================

/// A transparent square canvas backed by a tiny-skia pixmap
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Allocate a fully transparent `size`×`size` canvas
    pub fn new(size: u32) -> Result<Self, IconError> {
        let pixmap = Pixmap::new(size, size).ok_or(IconError::CanvasAllocation { size })?;
        Ok(Self { pixmap })
    }

    pub fn into_bitmap(self) -> IconBitmap {
        IconBitmap { pixmap: self.pixmap }
    }
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint
}

impl Surface for PixmapSurface {
    fn fill_ellipse(&mut self, bounds: Bounds, color: Rgba) -> Result<(), IconError> {
        if bounds.is_empty() {
            return Err(IconError::InvalidShape { what: "ellipse" });
        }
        let path = Rect::from_ltrb(
            bounds.min.x as f32,
            bounds.min.y as f32,
            bounds.max.x as f32,
            bounds.max.y as f32,
        )
        .and_then(PathBuilder::from_oval)
        .ok_or(IconError::InvalidShape { what: "ellipse" })?;

        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: Px) -> Result<(), IconError> {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let path = pb.finish().ok_or(IconError::InvalidShape { what: "line" })?;

        let stroke = Stroke {
            width: width.raw() as f32,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint(color), &stroke, Transform::identity(), None);
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Rgba) -> Result<(), IconError> {
        let (first, rest) = points
            .split_first()
            .ok_or(IconError::InvalidShape { what: "polygon" })?;

        let mut pb = PathBuilder::new();
        pb.move_to(first.x as f32, first.y as f32);
        for p in rest {
            pb.line_to(p.x as f32, p.y as f32);
        }
        pb.close();
        let path = pb.finish().ok_or(IconError::InvalidShape { what: "polygon" })?;

        self.pixmap.fill_path(
            &path,
            &paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
        Ok(())
    }
}

/// A rendered icon, ready to be encoded
pub struct IconBitmap {
    pixmap: Pixmap,
}

impl IconBitmap {
    /// Edge length in pixels (bitmaps are always square)
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Straight-alpha color of one pixel, `None` outside the canvas
    pub fn color_at(&self, x: u32, y: u32) -> Option<Rgba> {
        let c = self.pixel(x, y)?.demultiply();
        Some(Rgba::new(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> Option<u8> {
        self.pixel(x, y).map(|c| c.alpha())
    }

    // Pixmap::pixel only checks the flat index, so x past the right edge
    // would wrap onto the next row.
    fn pixel(&self, x: u32, y: u32) -> Option<PremultipliedColorU8> {
        if x >= self.size() || y >= self.size() {
            return None;
        }
        self.pixmap.pixel(x, y)
    }

    /// Number of pixels with any coverage
    pub fn opaque_pixels(&self) -> usize {
        self.pixmap.pixels().iter().filter(|c| c.alpha() > 0).count()
    }

    /// Encode as an RGBA PNG
    pub fn encode_png(&self) -> Result<Vec<u8>, IconError> {
        self.pixmap.encode_png().map_err(|e| IconError::Encode {
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Recording backend
// ============================================================================

/// One call received by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Ellipse { bounds: Bounds, color: Rgba },
    Line { from: DVec2, to: DVec2, color: Rgba, width: Px },
    Polygon { points: Vec<DVec2>, color: Rgba },
}

impl DrawCall {
    pub fn color(&self) -> Rgba {
        match self {
            DrawCall::Ellipse { color, .. }
            | DrawCall::Line { color, .. }
            | DrawCall::Polygon { color, .. } => *color,
        }
    }
}

/// Surface that records draw calls in order instead of rasterizing them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Surface for RecordingSurface {
    fn fill_ellipse(&mut self, bounds: Bounds, color: Rgba) -> Result<(), IconError> {
        self.calls.push(DrawCall::Ellipse { bounds, color });
        Ok(())
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, color: Rgba, width: Px) -> Result<(), IconError> {
        self.calls.push(DrawCall::Line { from, to, color, width });
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[DVec2], color: Rgba) -> Result<(), IconError> {
        self.calls.push(DrawCall::Polygon {
            points: points.to_vec(),
            color,
        });
        Ok(())
    }
}
