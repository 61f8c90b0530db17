//! Mosaic composition - stitches tile images into a single canvas.
//!
//! Tiles arrive in the row-major order produced by
//! [`GridSpec::tile_centers`](crate::grid::GridSpec::tile_centers) and are
//! cropped, validated, and pasted at deterministic offsets. Two operating
//! modes exist: **direct** composes in memory as tiles arrive, **staged**
//! persists every fetched tile to a numbered file first and composes from
//! the reloaded set. Both produce byte-identical canvases for identical
//! tile bytes.
//!
//! A failed fetch is handled according to [`FetchErrorPolicy`]: skipped
//! with a logged warning (the canvas keeps its background color in that
//! region) or escalated into an error that aborts the run.

use std::fs;
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::geo::GeoPoint;
use crate::grid::GridSpec;
use crate::provider::{ProviderError, TileSource};

/// Canvas background, visible wherever a tile was skipped.
const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Crop applied to provider tiles before placement: keeps the top
/// 640x614 pixels, discarding the attribution strip at the bottom.
pub const DEFAULT_CROP: CropRect = CropRect {
    x: 0,
    y: 0,
    width: 640,
    height: 614,
};

/// Rectangle cut out of each fetched tile before placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// How tiles travel from fetch to canvas.
#[derive(Debug, Clone)]
pub enum ComposeMode {
    /// Fetch, crop, and paste each tile immediately; nothing touches disk.
    Direct,
    /// Persist every fetched tile as `<index>.png` under `dir`, then
    /// reload the full set and compose. The intermediate files are kept.
    Staged { dir: PathBuf },
}

/// What to do when a tile fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorPolicy {
    /// Log and leave the canvas background in that region.
    Skip,
    /// Abort the whole composition with [`MosaicError::TileFetch`].
    Abort,
}

/// Options for one composition run.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    pub mode: ComposeMode,
    pub crop: CropRect,
    pub on_fetch_error: FetchErrorPolicy,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            mode: ComposeMode::Direct,
            crop: DEFAULT_CROP,
            on_fetch_error: FetchErrorPolicy::Skip,
        }
    }
}

/// Errors that can occur during mosaic composition.
#[derive(Debug, Error)]
pub enum MosaicError {
    /// A tile's post-crop dimensions differ from the crop rectangle, so
    /// pasting it would misalign the grid.
    #[error(
        "tile {index}: {actual_width}x{actual_height} pixels after crop, \
         expected {expected_width}x{expected_height}"
    )]
    TileSizeMismatch {
        index: usize,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },

    /// A tile's bytes could not be decoded as an image.
    #[error("tile {index}: decode failed: {source}")]
    Decode {
        index: usize,
        source: image::ImageError,
    },

    /// A tile fetch failed under [`FetchErrorPolicy::Abort`].
    #[error("tile {index}: fetch failed: {source}")]
    TileFetch {
        index: usize,
        source: ProviderError,
    },

    /// Staging-file or output I/O failure.
    #[error("mosaic I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Canvas encoding failure on save.
    #[error("failed to encode mosaic: {0}")]
    Image(#[from] image::ImageError),
}

/// Compose the full grid into one canvas.
///
/// Tiles are fetched sequentially from `source` in row-major order and
/// placed at `(col * crop.width, row * crop.height)`. The canvas measures
/// `crop.width * cols` by `crop.height * rows` pixels.
pub fn compose<S: TileSource>(
    source: &S,
    spec: &GridSpec,
    options: &ComposeOptions,
) -> Result<RgbaImage, MosaicError> {
    info!(
        source = source.name(),
        rows = spec.rows,
        cols = spec.cols,
        tiles = spec.len(),
        "composing mosaic"
    );

    match &options.mode {
        ComposeMode::Direct => compose_direct(source, spec, options),
        ComposeMode::Staged { dir } => compose_staged(source, spec, options, dir),
    }
}

/// Persist the canvas as a lossless PNG, overwriting any existing file.
pub fn save(canvas: &RgbaImage, path: &Path) -> Result<(), MosaicError> {
    canvas.save_with_format(path, image::ImageFormat::Png)?;
    info!(path = %path.display(), "mosaic saved");
    Ok(())
}

fn compose_direct<S: TileSource>(
    source: &S,
    spec: &GridSpec,
    options: &ComposeOptions,
) -> Result<RgbaImage, MosaicError> {
    let mut canvas = new_canvas(spec, options.crop);

    for (index, center) in spec.tile_centers().enumerate() {
        match source.fetch_tile(center) {
            Ok(bytes) => place_tile(&mut canvas, &bytes, index, spec, options.crop)?,
            Err(error) => skip_or_abort(index, center, error, options.on_fetch_error)?,
        }
        log_row_progress(index, spec);
    }

    Ok(canvas)
}

fn compose_staged<S: TileSource>(
    source: &S,
    spec: &GridSpec,
    options: &ComposeOptions,
    dir: &Path,
) -> Result<RgbaImage, MosaicError> {
    fs::create_dir_all(dir)?;

    for (index, center) in spec.tile_centers().enumerate() {
        match source.fetch_tile(center) {
            Ok(bytes) => {
                let path = staged_tile_path(dir, index);
                fs::write(&path, &bytes)?;
                debug!(index, path = %path.display(), "tile staged");
            }
            Err(error) => skip_or_abort(index, center, error, options.on_fetch_error)?,
        }
        log_row_progress(index, spec);
    }

    let mut canvas = new_canvas(spec, options.crop);

    for index in 0..spec.len() {
        let path = staged_tile_path(dir, index);
        if !path.exists() {
            // Fetch was skipped; the region stays background-colored
            continue;
        }
        let bytes = fs::read(&path)?;
        place_tile(&mut canvas, &bytes, index, spec, options.crop)?;
    }

    Ok(canvas)
}

/// File name of the staged tile at `index` (row-major).
fn staged_tile_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(format!("{}.png", index))
}

fn new_canvas(spec: &GridSpec, crop: CropRect) -> RgbaImage {
    RgbaImage::from_pixel(crop.width * spec.cols, crop.height * spec.rows, BACKGROUND)
}

/// Decode, crop, validate, and paste one tile onto the canvas.
fn place_tile(
    canvas: &mut RgbaImage,
    bytes: &[u8],
    index: usize,
    spec: &GridSpec,
    crop: CropRect,
) -> Result<(), MosaicError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|source| MosaicError::Decode { index, source })?
        .to_rgba8();

    let cropped = image::imageops::crop_imm(&decoded, crop.x, crop.y, crop.width, crop.height)
        .to_image();

    // The crop rectangle is clamped to the source image, so an undersized
    // tile surfaces here instead of misaligning every later paste
    let (actual_width, actual_height) = cropped.dimensions();
    if (actual_width, actual_height) != (crop.width, crop.height) {
        return Err(MosaicError::TileSizeMismatch {
            index,
            expected_width: crop.width,
            expected_height: crop.height,
            actual_width,
            actual_height,
        });
    }

    let col = (index % spec.cols as usize) as u32;
    let row = (index / spec.cols as usize) as u32;
    paste(canvas, &cropped, col * crop.width, row * crop.height);
    debug!(index, row, col, "tile placed");

    Ok(())
}

/// Paste a tile onto the canvas at the given pixel offset, overwriting
/// whatever is there.
fn paste(canvas: &mut RgbaImage, tile: &RgbaImage, x_offset: u32, y_offset: u32) {
    for y in 0..tile.height() {
        for x in 0..tile.width() {
            canvas.put_pixel(x_offset + x, y_offset + y, *tile.get_pixel(x, y));
        }
    }
}

fn skip_or_abort(
    index: usize,
    center: GeoPoint,
    error: ProviderError,
    policy: FetchErrorPolicy,
) -> Result<(), MosaicError> {
    match policy {
        FetchErrorPolicy::Skip => {
            warn!(index, center = %center, error = %error, "tile fetch failed, leaving gap");
            Ok(())
        }
        FetchErrorPolicy::Abort => Err(MosaicError::TileFetch {
            index,
            source: error,
        }),
    }
}

fn log_row_progress(index: usize, spec: &GridSpec) {
    let cols = spec.cols as usize;
    if (index + 1) % cols == 0 {
        info!(
            row = index / cols + 1,
            rows = spec.rows,
            "row complete"
        );
    }
}
