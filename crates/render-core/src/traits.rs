use crate::error::RenderError;
use quire_style::{TextAlign, TextStyle};
use quire_types::{Color, Rect, Size};

/// The drawing primitives a backend must provide.
///
/// Coordinates are points with the origin at the top-left page corner; backends
/// with a bottom-left origin convert with [`crate::utils::flip_y`]. Every call
/// carries its complete style, so a surface never needs to remember state between
/// calls.
pub trait DrawingSurface {
    fn begin_page(&mut self, number: usize, size: Size) -> Result<(), RenderError>;

    /// Draws `text` on `baseline`. `x` is the anchor named by `align`.
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        baseline: f32,
        style: &TextStyle,
        align: TextAlign,
    ) -> Result<(), RenderError>;

    fn fill_rect(&mut self, rect: Rect, fill: &Color, corner_radius: f32)
    -> Result<(), RenderError>;

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        color: &Color,
        line_width: f32,
    ) -> Result<(), RenderError>;

    fn fill_circle(
        &mut self,
        center: (f32, f32),
        radius: f32,
        fill: &Color,
    ) -> Result<(), RenderError>;

    fn draw_image(&mut self, rect: Rect, data: &[u8], opacity: f32) -> Result<(), RenderError>;

    /// Registers a clickable region that jumps to an absolute (1-based) page.
    fn add_link(&mut self, rect: Rect, target_page: usize) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;

    fn finish(&mut self) -> Result<(), RenderError> {
        Ok(())
    }
}
