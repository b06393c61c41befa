//! Parse configuration.

/// Default slide width in pixels.
pub const DEFAULT_SLIDE_WIDTH: u32 = 960;

/// Default slide height in pixels.
pub const DEFAULT_SLIDE_HEIGHT: u32 = 540;

/// Decks with fewer slides than this are always extracted sequentially.
pub const PARALLEL_THRESHOLD: usize = 4;

/// A position and size in slide pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Options for turning a package into a deck.
///
/// Shape geometry is not read from the package, so text blocks and
/// pictures are placed at the configured defaults.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Target slide width in pixels
    pub slide_width: u32,

    /// Target slide height in pixels
    pub slide_height: u32,

    /// Top-left corner of extracted text blocks
    pub text_origin: (f64, f64),

    /// Font size of extracted text blocks
    pub font_size: f64,

    /// Placement of extracted pictures
    pub picture_frame: Frame,

    /// Extract slides on the rayon thread pool
    pub parallel: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            slide_width: DEFAULT_SLIDE_WIDTH,
            slide_height: DEFAULT_SLIDE_HEIGHT,
            text_origin: (100.0, 100.0),
            font_size: 24.0,
            picture_frame: Frame {
                x: 200.0,
                y: 200.0,
                width: 300.0,
                height: 200.0,
            },
            parallel: true,
        }
    }
}

impl ParseOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target slide size.
    pub fn with_slide_size(mut self, width: u32, height: u32) -> Self {
        self.slide_width = width;
        self.slide_height = height;
        self
    }

    /// Set where text blocks are placed.
    pub fn with_text_origin(mut self, x: f64, y: f64) -> Self {
        self.text_origin = (x, y);
        self
    }

    /// Set the font size of text blocks.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set where pictures are placed.
    pub fn with_picture_frame(mut self, frame: Frame) -> Self {
        self.picture_frame = frame;
        self
    }

    /// Enable or disable parallel slide extraction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
