//! Pipeline constants and runtime configuration defaults

// Compositing
/// Mask values below this are treated as the masked region
pub const DEFAULT_MASK_THRESHOLD: f32 = 0.5;

// Mask synthesis
/// Fraction of the smaller canvas dimension used as the glyph pixel size
pub const DEFAULT_FONT_SIZE_RATIO: f32 = 0.9;
/// Smallest accepted glyph size ratio
pub const MIN_FONT_SIZE_RATIO: f32 = 0.1;
/// Largest accepted glyph size ratio
pub const MAX_FONT_SIZE_RATIO: f32 = 1.0;
/// Glyph drawn when the requested text is empty
pub const DEFAULT_GLYPH: char = 'S';
/// Canvas background intensity
pub const BACKGROUND_INTENSITY: u8 = 255;
/// Glyph ink intensity
pub const INK_INTENSITY: u8 = 0;

// Ordered font candidates, bold faces first
/// Font file names looked up in the font search directories
pub const FONT_FILE_CANDIDATES: [&str; 4] = [
    "DejaVuSans-Bold.ttf",
    "Arial Bold.ttf",
    "Arialbd.ttf",
    "Arial.ttf",
];
/// Absolute font paths tried after the file name candidates
pub const FONT_PATH_CANDIDATES: [&str; 2] = [
    r"C:\Windows\Fonts\arialbd.ttf",
    r"C:\Windows\Fonts\arial.ttf",
];
/// System-wide directories searched for font file names
pub const SYSTEM_FONT_DIRS: [&str; 5] = [
    "/usr/share/fonts",
    "/usr/local/share/fonts",
    "/Library/Fonts",
    "/System/Library/Fonts",
    r"C:\Windows\Fonts",
];
/// Directory depth limit when searching for font files
pub const FONT_SEARCH_DEPTH: usize = 6;

// Figure layout, in matplotlib units
/// Default output resolution
pub const DEFAULT_DPI: u32 = 150;
/// Figure size (width, height) in inches before tight cropping
pub const FIGURE_SIZE_INCHES: (f32, f32) = (14.0, 4.0);
/// Panel title size in points
pub const TITLE_FONT_POINTS: f32 = 12.0;
/// Gap between a panel title and its image in points
pub const TITLE_PAD_POINTS: f32 = 8.0;
/// Panel border line width in points
pub const BORDER_POINTS: f32 = 1.0;
/// Padding kept around the content after tight cropping, in inches
pub const TIGHT_PAD_INCHES: f32 = 0.1;
/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;
/// Default figure background colour
pub const DEFAULT_BACKGROUND: &str = "white";
/// Titles of the four meme panels, left to right
pub const PANEL_TITLES: [&str; 4] = ["Reality", "Your Model", "Selection Bias", "Estimate"];

// Output settings
/// Default output file for the rendered figure
pub const DEFAULT_OUTPUT: &str = "statistics_meme.png";
/// Number of tracked pipeline stages
pub const PIPELINE_STAGES: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
