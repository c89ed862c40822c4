//! Batch rendering: one PNG per requested spec
//!
//! Each spec is rendered and persisted independently. A failing spec is
//! recorded in the [`BatchReport`] and its siblings carry on; only a failure
//! to prepare the output directory aborts the batch.

use std::fmt;
use std::fs;
use std::io::Write;

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use tempfile::NamedTempFile;

use crate::config::{CanvasSpec, ExecutionMode, IconConfig};
use crate::errors::IconError;
use crate::log::{info, warn};
use crate::render::render_icon;

/// Destination for encoded icons
pub trait IconSink: Sync {
    /// Called once before any write; an error here aborts the batch
    fn prepare(&self) -> Result<(), IconError>;

    /// Persist one encoded icon, returning where it went
    fn write(&self, filename: &str, bytes: &[u8]) -> Result<Utf8PathBuf, IconError>;
}

/// Writes icons into a directory, creating it if missing
#[derive(Debug, Clone)]
pub struct DirSink {
    root: Utf8PathBuf,
}

impl DirSink {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

}

impl IconSink for DirSink {
    fn prepare(&self) -> Result<(), IconError> {
        fs::create_dir_all(&self.root).map_err(|source| IconError::DirectoryCreation {
            path: self.root.clone(),
            source,
        })
    }

    /// Writes go to a temporary file next to the target, renamed into place
    /// once complete, so a failed write never leaves a truncated icon behind.
    fn write(&self, filename: &str, bytes: &[u8]) -> Result<Utf8PathBuf, IconError> {
        let path = self.root.join(filename);
        let write_err = |source| IconError::Write {
            path: path.clone(),
            source,
        };

        let mut file = NamedTempFile::new_in(&self.root).map_err(write_err)?;
        file.write_all(bytes).map_err(write_err)?;
        file.persist(&path).map_err(|e| write_err(e.error))?;
        Ok(path)
    }
}

/// What happened to one spec
#[derive(Debug)]
pub struct SpecOutcome {
    pub spec: CanvasSpec,
    pub result: Result<Utf8PathBuf, IconError>,
}

impl SpecOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-spec results of a batch, in spec order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<SpecOutcome>,
}

impl BatchReport {
    /// Number of icons persisted
    pub fn written(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &SpecOutcome> {
        self.outcomes.iter().filter(|o| !o.is_ok())
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(SpecOutcome::is_ok)
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            let CanvasSpec { filename, size } = &outcome.spec;
            match &outcome.result {
                Ok(_) => writeln!(f, "ok   {filename} ({size}px)")?,
                Err(e) => writeln!(f, "FAIL {filename} ({size}px): {e}")?,
            }
        }
        write!(f, "{} of {} icons written", self.written(), self.outcomes.len())
    }
}

/// Renders every spec of an [`IconConfig`]
#[derive(Debug, Clone, Default)]
pub struct BatchRenderer {
    config: IconConfig,
}

impl BatchRenderer {
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    /// Render every spec into `out_dir`, creating it first if needed
    pub fn render_all(&self, out_dir: impl Into<Utf8PathBuf>) -> Result<BatchReport, IconError> {
        self.render_all_to(&DirSink::new(out_dir))
    }

    /// Render every spec into `sink`.
    ///
    /// Returns `Err` only when the sink cannot be prepared, in which case
    /// nothing was written.
    pub fn render_all_to(&self, sink: &dyn IconSink) -> Result<BatchReport, IconError> {
        sink.prepare()?;

        let specs = &self.config.specs;
        let outcomes = match self.config.mode {
            ExecutionMode::Sequential => specs.iter().map(|spec| self.render_one(spec, sink)).collect(),
            ExecutionMode::Parallel => specs.par_iter().map(|spec| self.render_one(spec, sink)).collect(),
        };

        Ok(BatchReport { outcomes })
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    fn render_one(&self, spec: &CanvasSpec, sink: &dyn IconSink) -> SpecOutcome {
        let result = check_filename(&spec.filename)
            .and_then(|()| render_icon(spec.size, &self.config.palette))
            .and_then(|bitmap| bitmap.encode_png())
            .and_then(|bytes| sink.write(&spec.filename, &bytes));

        match &result {
            Ok(path) => {
                info!(path = %path, size = spec.size, "created icon");
            }
            Err(e) => {
                warn!(filename = %spec.filename, error = %e, "icon failed");
            }
        }

        SpecOutcome {
            spec: spec.clone(),
            result,
        }
    }
}

/// Filenames name a file directly inside the output directory
fn check_filename(filename: &str) -> Result<(), IconError> {
    let mut components = Utf8Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(name)), None) if name == filename => Ok(()),
        _ => Err(IconError::InvalidFilename {
            filename: filename.to_string(),
        }),
    }
}
