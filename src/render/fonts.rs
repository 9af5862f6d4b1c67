//! Startup loading of the renderer's typeface pair.
//!
//! The layout needs a regular and a bold weight of one Unicode-capable
//! typeface. Both files are read once at startup; a missing or unparseable
//! font is a configuration error that must abort the server before it
//! accepts any request, not a per-request failure.

use std::fs;
use std::path::{Path, PathBuf};

use rusttype::{point, Font, Scale};
use thiserror::Error;

/// Directory searched for font files when `FONTS_DIR` is not set.
const DEFAULT_FONTS_DIR: &str = "./fonts";

/// Filenames looked up inside the fonts directory.
const REGULAR_FILE: &str = "regular.ttf";
const BOLD_FILE: &str = "bold.ttf";

/// Errors raised while loading font assets at startup.
#[derive(Debug, Error)]
pub enum FontError {
    #[error("failed to read font file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("font file {path} is not a parseable TTF/OTF")]
    Parse { path: PathBuf },
}

/// One loaded font weight: the raw bytes (embedded into each PDF) plus the
/// parsed face used for width measurement.
pub struct FontAsset {
    bytes: Vec<u8>,
    face: Font<'static>,
}

impl FontAsset {
    pub fn load(path: &Path) -> Result<Self, FontError> {
        let bytes = fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let face = Font::try_from_vec(bytes.clone()).ok_or_else(|| FontError::Parse {
            path: path.to_path_buf(),
        })?;
        Ok(Self { bytes, face })
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Width of `text` in millimetres when set at `size_pt` points.
    ///
    /// Used by the canvas to place right-aligned cell text. Glyph advance
    /// widths come from the parsed face, so the measurement matches what the
    /// embedded font will occupy on the page.
    pub fn text_width_mm(&self, text: &str, size_pt: f32) -> f32 {
        let scale = Scale::uniform(size_pt);
        let width_pt = self
            .face
            .layout(text, scale, point(0.0, 0.0))
            .last()
            .map(|glyph| glyph.position().x + glyph.unpositioned().h_metrics().advance_width)
            .unwrap_or(0.0);
        width_pt * 25.4 / 72.0
    }
}

/// The regular/bold pair used by the invoice layout.
pub struct FontSet {
    pub regular: FontAsset,
    pub bold: FontAsset,
}

impl FontSet {
    /// Load both weights from the configured fonts directory.
    pub fn load_from_env() -> Result<Self, FontError> {
        let dir = std::env::var("FONTS_DIR").unwrap_or_else(|_| DEFAULT_FONTS_DIR.to_string());
        Self::load_from_dir(Path::new(&dir))
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self, FontError> {
        let regular = FontAsset::load(&dir.join(REGULAR_FILE))?;
        let bold = FontAsset::load(&dir.join(BOLD_FILE))?;
        Ok(Self { regular, bold })
    }

    /// Load both weights from explicit file paths.
    pub fn load_from_files(regular: &Path, bold: &Path) -> Result<Self, FontError> {
        Ok(Self {
            regular: FontAsset::load(regular)?,
            bold: FontAsset::load(bold)?,
        })
    }

    pub fn asset(&self, weight: Weight) -> &FontAsset {
        match weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        }
    }
}

/// Font weight selector used by the canvas and layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}
