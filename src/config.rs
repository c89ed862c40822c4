//! Immutable render configuration: palette, requested outputs and execution mode

use crate::types::Rgba;

/// Colors of the motif
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Ring, ticks and hands
    pub primary: Rgba,
    /// Declared for palette parity with downstream assets; not painted
    pub secondary: Rgba,
    /// Center dot, history arc and arrowhead
    pub accent: Rgba,
    /// Semi-transparent drop shadow under the ring
    pub shadow: Rgba,
    /// Inner clock face
    pub face: Rgba,
}

impl Palette {
    pub const DEFAULT: Palette = Palette {
        primary: Rgba::opaque(41, 128, 185),
        secondary: Rgba::opaque(52, 152, 219),
        accent: Rgba::opaque(231, 76, 60),
        shadow: Rgba::new(0, 0, 0, 50),
        face: Rgba::WHITE,
    };
}

impl Default for Palette {
    fn default() -> Self {
        Palette::DEFAULT
    }
}

/// One requested output: a file name inside the output directory and its pixel size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanvasSpec {
    pub filename: String,
    pub size: u32,
}

impl CanvasSpec {
    pub fn new(filename: impl Into<String>, size: u32) -> Self {
        Self {
            filename: filename.into(),
            size,
        }
    }

    /// The standard icon set of the add-on
    pub fn defaults() -> Vec<CanvasSpec> {
        [
            ("favicon.png", 96),
            ("favicon@0.5x.png", 48),
            ("icon-16.png", 16),
            ("icon-32.png", 32),
            ("icon-48.png", 48),
            ("icon-96.png", 96),
            ("icon-128.png", 128),
        ]
        .into_iter()
        .map(|(filename, size)| CanvasSpec::new(filename, size))
        .collect()
    }
}

/// How a batch schedules its specs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    /// One rayon task per spec; results are still reported in spec order
    Parallel,
}

/// Everything a batch needs; never mutated once handed to a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct IconConfig {
    pub palette: Palette,
    pub specs: Vec<CanvasSpec>,
    pub mode: ExecutionMode,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            palette: Palette::DEFAULT,
            specs: CanvasSpec::defaults(),
            mode: ExecutionMode::Sequential,
        }
    }
}

impl IconConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_specs(mut self, specs: impl IntoIterator<Item = CanvasSpec>) -> Self {
        self.specs = specs.into_iter().collect();
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_layout() {
        let listing: Vec<String> = CanvasSpec::defaults()
            .iter()
            .map(|spec| format!("{} -> {}", spec.filename, spec.size))
            .collect();
        insta::assert_snapshot!(listing.join("\n"), @r"
        favicon.png -> 96
        favicon@0.5x.png -> 48
        icon-16.png -> 16
        icon-32.png -> 32
        icon-48.png -> 48
        icon-96.png -> 96
        icon-128.png -> 128
        ");
    }

    #[test]
    fn default_palette() {
        let p = Palette::default();
        assert_eq!(p.primary, Rgba::opaque(41, 128, 185));
        assert_eq!(p.secondary, Rgba::opaque(52, 152, 219));
        assert_eq!(p.accent, Rgba::opaque(231, 76, 60));
        assert_eq!(p.shadow, Rgba::new(0, 0, 0, 50));
        assert_eq!(p.face, Rgba::WHITE);
    }

    #[test]
    fn builder() {
        let config = IconConfig::new()
            .with_specs([CanvasSpec::new("a.png", 8)])
            .with_mode(ExecutionMode::Parallel);
        assert_eq!(config.specs, vec![CanvasSpec::new("a.png", 8)]);
        assert_eq!(config.mode, ExecutionMode::Parallel);
        assert_eq!(config.palette, Palette::DEFAULT);
        assert_eq!(IconConfig::default().specs.len(), 7);
    }
}
