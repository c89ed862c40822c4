//! Parametric renderer for a clock-face "history" icon.
//!
//! The motif (a blue clock ring with ticks and hands, and a red arrow running
//! backwards around the dial) is computed from the canvas size alone, so the
//! same code produces a legible 16 px favicon and a 128 px app icon.
//!
//! ```no_run
//! use clockback::{BatchRenderer, IconConfig};
//!
//! let report = BatchRenderer::new(IconConfig::default()).render_all("icons")?;
//! assert!(report.is_success());
//! # Ok::<(), clockback::IconError>(())
//! ```

pub mod batch;
pub mod config;
pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod render;
pub mod types;

pub use batch::{BatchRenderer, BatchReport, DirSink, IconSink, SpecOutcome};
pub use config::{CanvasSpec, ExecutionMode, IconConfig, Palette};
pub use errors::IconError;
pub use geometry::{ClockGeometry, compute_geometry};
pub use render::{IconBitmap, compose, render, render_icon};
