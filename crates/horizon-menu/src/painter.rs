//! Rendering seam between menu items and the host's renderer.
//!
//! Menu items never talk to a GPU or a game engine directly. They measure text
//! through [`TextMetrics`] while laying out and issue draw calls through
//! [`MenuPainter`] when painted. Hosts implement both for their renderer;
//! [`RecordingPainter`] records draw calls for headless use and tests.

use horizon_menu_core::{Color, Point, Rect, Size};

/// Direction an arrow glyph points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowDirection {
    Left,
    Right,
}

/// Measures the rendered size of a text run.
pub trait TextMetrics: Send + Sync {
    /// Size of `text` when drawn on a single line.
    fn text_size(&self, text: &str) -> Size;
}

/// Fixed-advance text metrics.
///
/// Every character advances by `glyph_width`. Good enough for bitmap menu fonts
/// and for deterministic layout in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub glyph_width: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub const fn new(glyph_width: f32, line_height: f32) -> Self {
        Self {
            glyph_width,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn text_size(&self, text: &str) -> Size {
        Size::new(
            text.chars().count() as f32 * self.glyph_width,
            self.line_height,
        )
    }
}

/// Draw calls issued by menu items.
pub trait MenuPainter {
    /// Draw a single line of text with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, color: Color);

    /// Draw an arrow glyph filling `bounds`.
    fn draw_arrow(&mut self, direction: ArrowDirection, bounds: Rect, color: Color);
}

/// A draw call captured by [`RecordingPainter`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Text {
        text: String,
        origin: Point,
        color: Color,
    },
    Arrow {
        direction: ArrowDirection,
        bounds: Rect,
        color: Color,
    },
}

/// A painter that records every draw call instead of rendering it.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    commands: Vec<PaintCommand>,
}

impl RecordingPainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands recorded so far, in draw order.
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the painter empty.
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Recorded text runs, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PaintCommand::Text { text, .. } => Some(text.as_str()),
                PaintCommand::Arrow { .. } => None,
            })
            .collect()
    }

    /// Number of arrows recorded.
    pub fn arrow_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PaintCommand::Arrow { .. }))
            .count()
    }
}

impl MenuPainter for RecordingPainter {
    fn draw_text(&mut self, text: &str, origin: Point, color: Color) {
        self.commands.push(PaintCommand::Text {
            text: text.to_string(),
            origin,
            color,
        });
    }

    fn draw_arrow(&mut self, direction: ArrowDirection, bounds: Rect, color: Color) {
        self.commands.push(PaintCommand::Arrow {
            direction,
            bounds,
            color,
        });
    }
}
