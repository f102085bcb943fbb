//! Terminal rendering of a [`BitMatrix`].
//!
//! Every module is drawn two characters wide, since a terminal cell is roughly twice as tall
//! as it is wide.
use crate::matrix::BitMatrix;

/// Glyph for a filled module.
pub const FILLED_GLYPH: &str = "\u{2588}\u{2588}";
/// Glyph for an empty module.
pub const EMPTY_GLYPH: &str = "  ";

/// Black background, bright white foreground.
pub const ANSI_NORMAL: &str = "\x1b[40m\x1b[97m";
/// Bright white foreground only, the background is left to the terminal.
pub const ANSI_INVERTED: &str = "\x1b[97m";
pub const ANSI_RESET: &str = "\x1b[0m";

/// Options controlling how a QR code is turned into text.
///
/// `size_multiplier` and `border` are handed to the [`MatrixSource`](crate::matrix::MatrixSource)
/// and are already part of the matrix by the time [`render`] sees it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RenderOptions {
    size_multiplier: u32,
    border: u32,
    invert: bool,
    use_color: bool,
}

impl RenderOptions {
    pub const DEFAULT_SIZE: u32 = 1;
    pub const DEFAULT_BORDER: u32 = 2;

    /// Creates options, clamping `size_multiplier` to at least 1 and `border` to at least 0.
    pub fn new(size_multiplier: i32, border: i32, invert: bool, use_color: bool) -> Self {
        Self {
            size_multiplier: size_multiplier.max(1).unsigned_abs(),
            border: border.max(0).unsigned_abs(),
            invert,
            use_color,
        }
    }

    pub fn size_multiplier(&self) -> u32 {
        self.size_multiplier
    }

    pub fn border(&self) -> u32 {
        self.border
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    fn color_codes(&self) -> (&'static str, &'static str) {
        match (self.use_color, self.invert) {
            (false, _) => ("", ""),
            (true, false) => (ANSI_NORMAL, ANSI_RESET),
            (true, true) => (ANSI_INVERTED, ANSI_RESET),
        }
    }

    fn glyph(&self, dark: bool) -> &'static str {
        if dark != self.invert {
            FILLED_GLYPH
        } else {
            EMPTY_GLYPH
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            size_multiplier: Self::DEFAULT_SIZE,
            border: Self::DEFAULT_BORDER,
            invert: false,
            use_color: true,
        }
    }
}

/// Renders `matrix` as lines of glyphs joined by `\n`, without a trailing newline.
///
/// With color enabled each line is wrapped in its own escape sequence and reset, so a line can
/// be printed on its own.
pub fn render(matrix: &BitMatrix, options: &RenderOptions) -> String {
    let (start, end) = options.color_codes();
    let line_len = start.len() + matrix.width() * FILLED_GLYPH.len() + end.len() + 1;
    let mut out = String::with_capacity(line_len * matrix.height());

    for (y, row) in matrix.rows().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        out.push_str(start);
        for &dark in row {
            out.push_str(options.glyph(dark));
        }
        out.push_str(end);
    }
    out
}
