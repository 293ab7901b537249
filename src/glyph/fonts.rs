//! Best-effort font acquisition with a guaranteed built-in fallback
//!
//! Candidates are tried in order and the first one that loads wins. Load
//! failures are logged and skipped; when nothing loads, the built-in bitmap
//! font is used, so acquisition itself never fails.

use crate::glyph::bitmap::BitmapFont;
use crate::io::configuration::{
    FONT_FILE_CANDIDATES, FONT_PATH_CANDIDATES, FONT_SEARCH_DEPTH, SYSTEM_FONT_DIRS,
};
use ab_glyph::{Font, FontArc, PxScale};
use image::{GrayImage, Luma};
use imageproc::drawing::{draw_text_mut, text_size};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

// Parsed font files keyed by resolved path; failures are remembered too
static FONT_CACHE: LazyLock<Mutex<HashMap<PathBuf, Option<FontArc>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// A single font candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontSource {
    /// File name looked up in the working directory, then in the search directories
    File(String),
    /// Explicit filesystem path
    Path(PathBuf),
}

impl FontSource {
    fn resolve(&self, search_dirs: &[PathBuf]) -> Option<PathBuf> {
        match self {
            Self::Path(path) => path.is_file().then(|| path.clone()),
            Self::File(name) => {
                let direct = Path::new(name);
                if direct.is_file() {
                    return Some(direct.to_path_buf());
                }
                let wanted = name.to_lowercase();
                search_dirs
                    .iter()
                    .find_map(|dir| find_font_file(dir, &wanted, FONT_SEARCH_DEPTH))
            }
        }
    }
}

// Depth-limited, name-sorted walk so lookups are deterministic
fn find_font_file(dir: &Path, wanted: &str, depth: usize) -> Option<PathBuf> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    let mut subdirs = Vec::new();
    for path in entries {
        if path.is_dir() {
            subdirs.push(path);
        } else if path
            .file_name()
            .is_some_and(|n| n.to_string_lossy().to_lowercase() == wanted)
        {
            return Some(path);
        }
    }

    if depth == 0 {
        return None;
    }
    subdirs
        .iter()
        .find_map(|sub| find_font_file(sub, wanted, depth - 1))
}

fn load_cached(path: &Path) -> Option<FontArc> {
    let mut cache = FONT_CACHE.lock();
    cache
        .entry(path.to_path_buf())
        .or_insert_with(|| match std::fs::read(path) {
            Ok(bytes) => match FontArc::try_from_vec(bytes) {
                Ok(font) => Some(font),
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "font file did not parse");
                    None
                }
            },
            Err(e) => {
                debug!(path = %path.display(), error = %e, "font file could not be read");
                None
            }
        })
        .clone()
}

/// Ordered list of font candidates plus the directories used to resolve file names
#[derive(Debug, Clone, Default)]
pub struct FontChain {
    candidates: Vec<FontSource>,
    search_dirs: Vec<PathBuf>,
}

impl FontChain {
    /// Create a chain from explicit candidates and search directories
    pub const fn new(candidates: Vec<FontSource>, search_dirs: Vec<PathBuf>) -> Self {
        Self {
            candidates,
            search_dirs,
        }
    }

    /// Chain with no candidates; always yields the built-in bitmap font
    pub const fn builtin_only() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Bold sans candidates resolved against the platform font directories
    pub fn system_default() -> Self {
        let candidates = FONT_FILE_CANDIDATES
            .iter()
            .map(|name| FontSource::File((*name).to_string()))
            .chain(
                FONT_PATH_CANDIDATES
                    .iter()
                    .map(|path| FontSource::Path(PathBuf::from(path))),
            )
            .collect();

        let mut search_dirs: Vec<PathBuf> = directories::UserDirs::new()
            .and_then(|user| user.font_dir().map(Path::to_path_buf))
            .into_iter()
            .collect();
        if let Some(base) = directories::BaseDirs::new() {
            search_dirs.push(base.home_dir().join(".fonts"));
        }
        search_dirs.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));

        Self::new(candidates, search_dirs)
    }

    /// Put explicit font files ahead of the existing candidates
    #[must_use]
    pub fn with_preferred<I>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut candidates: Vec<FontSource> = paths.into_iter().map(FontSource::Path).collect();
        candidates.append(&mut self.candidates);
        self.candidates = candidates;
        self
    }

    /// Candidates in the order they are tried
    pub fn candidates(&self) -> &[FontSource] {
        &self.candidates
    }

    /// Directories searched for file-name candidates, in order
    pub fn search_dirs(&self) -> &[PathBuf] {
        &self.search_dirs
    }

    /// Load the first usable candidate at `pixel_size`
    ///
    /// A pixel size of zero cannot be rasterized by an outline font and goes
    /// straight to the built-in font.
    pub fn acquire(&self, pixel_size: u32) -> GlyphFont {
        let outline = (pixel_size > 0)
            .then(|| {
                self.candidates.iter().find_map(|candidate| {
                    let path = candidate.resolve(&self.search_dirs);
                    if path.is_none() {
                        debug!(?candidate, "font candidate not found");
                    }
                    path.as_deref().and_then(load_cached)
                })
            })
            .flatten();

        match outline {
            Some(font) => {
                let scale = em_scale(&font, pixel_size as f32);
                GlyphFont::Outline { font, scale }
            }
            None => {
                warn!(pixel_size, "no outline font available, using built-in bitmap font");
                GlyphFont::Bitmap(BitmapFont::with_pixel_size(pixel_size))
            }
        }
    }
}

/// Scale that renders `em_pixels` pixels per em
///
/// `PxScale` measures ascent to descent, which is taller than the em square
/// for most fonts, so the em size is converted through the font's metrics.
pub fn em_scale(font: &FontArc, em_pixels: f32) -> PxScale {
    font.units_per_em().map_or(PxScale::from(em_pixels), |units| {
        PxScale::from(em_pixels * font.height_unscaled() / units)
    })
}

/// A font ready to measure and draw text at a fixed size
#[derive(Clone)]
pub enum GlyphFont {
    /// TrueType/OpenType font at a pixel scale
    Outline {
        /// Parsed font
        font: FontArc,
        /// Ascent-to-descent pixel height, see [`em_scale`]
        scale: PxScale,
    },
    /// Built-in bitmap fallback
    Bitmap(BitmapFont),
}

impl std::fmt::Debug for GlyphFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outline { scale, .. } => f
                .debug_struct("Outline")
                .field("scale", &scale.y)
                .finish_non_exhaustive(),
            Self::Bitmap(bitmap) => f.debug_tuple("Bitmap").field(bitmap).finish(),
        }
    }
}

impl GlyphFont {
    /// Whether this is the built-in bitmap fallback
    pub const fn is_builtin(&self) -> bool {
        matches!(self, Self::Bitmap(_))
    }

    /// Rendered (width, height) of `text` in pixels
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            Self::Outline { font, scale } => text_size(*scale, font, text),
            Self::Bitmap(bitmap) => bitmap.measure(text),
        }
    }

    /// Draw `text` in `ink` with its top-left at (x, y); out-of-canvas parts are clipped
    pub fn draw(&self, canvas: &mut GrayImage, text: &str, x: i32, y: i32, ink: Luma<u8>) {
        match self {
            Self::Outline { font, scale } => draw_text_mut(canvas, ink, x, y, *scale, font, text),
            Self::Bitmap(bitmap) => bitmap.draw(canvas, text, x, y, ink),
        }
    }
}
