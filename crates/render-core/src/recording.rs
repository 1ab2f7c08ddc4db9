use crate::error::RenderError;
use crate::traits::DrawingSurface;
use quire_style::{TextAlign, TextStyle};
use quire_types::{Color, Rect, Size};

/// One recorded call on a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    BeginPage {
        number: usize,
        size: Size,
    },
    Text {
        text: String,
        x: f32,
        baseline: f32,
        style: TextStyle,
        align: TextAlign,
    },
    FillRect {
        rect: Rect,
        fill: Color,
        corner_radius: f32,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Color,
        line_width: f32,
    },
    Circle {
        center: (f32, f32),
        radius: f32,
        fill: Color,
    },
    Image {
        rect: Rect,
        bytes: usize,
        opacity: f32,
    },
    Link {
        rect: Rect,
        target_page: usize,
    },
    EndPage,
}

/// A surface that stores every call as a `DrawOp`.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
    finished: bool,
    open_page: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn page_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::BeginPage { .. }))
            .count()
    }

    /// Ops grouped per page, without the begin/end markers.
    pub fn pages(&self) -> Vec<&[DrawOp]> {
        let mut pages = Vec::new();
        let mut start = None;
        for (i, op) in self.ops.iter().enumerate() {
            match op {
                DrawOp::BeginPage { .. } => start = Some(i + 1),
                DrawOp::EndPage => {
                    if let Some(s) = start.take() {
                        pages.push(&self.ops[s..i]);
                    }
                }
                _ => {}
            }
        }
        pages
    }

    fn record(&mut self, op: DrawOp) -> Result<(), RenderError> {
        if !self.open_page {
            return Err(RenderError::Surface(format!(
                "draw call outside a page: {:?}",
                op
            )));
        }
        self.ops.push(op);
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_page(&mut self, number: usize, size: Size) -> Result<(), RenderError> {
        if self.open_page {
            return Err(RenderError::Surface(format!(
                "page {} begun before the previous page ended",
                number
            )));
        }
        self.open_page = true;
        self.ops.push(DrawOp::BeginPage { number, size });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        baseline: f32,
        style: &TextStyle,
        align: TextAlign,
    ) -> Result<(), RenderError> {
        self.record(DrawOp::Text {
            text: text.to_string(),
            x,
            baseline,
            style: style.clone(),
            align,
        })
    }

    fn fill_rect(
        &mut self,
        rect: Rect,
        fill: &Color,
        corner_radius: f32,
    ) -> Result<(), RenderError> {
        self.record(DrawOp::FillRect {
            rect,
            fill: fill.clone(),
            corner_radius,
        })
    }

    fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        color: &Color,
        line_width: f32,
    ) -> Result<(), RenderError> {
        self.record(DrawOp::Line {
            from,
            to,
            color: color.clone(),
            line_width,
        })
    }

    fn fill_circle(
        &mut self,
        center: (f32, f32),
        radius: f32,
        fill: &Color,
    ) -> Result<(), RenderError> {
        self.record(DrawOp::Circle {
            center,
            radius,
            fill: fill.clone(),
        })
    }

    fn draw_image(&mut self, rect: Rect, data: &[u8], opacity: f32) -> Result<(), RenderError> {
        self.record(DrawOp::Image {
            rect,
            bytes: data.len(),
            opacity,
        })
    }

    fn add_link(&mut self, rect: Rect, target_page: usize) -> Result<(), RenderError> {
        self.record(DrawOp::Link { rect, target_page })
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        if !self.open_page {
            return Err(RenderError::Surface("end_page without begin_page".into()));
        }
        self.open_page = false;
        self.ops.push(DrawOp::EndPage);
        Ok(())
    }

    fn finish(&mut self) -> Result<(), RenderError> {
        self.finished = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_outside_page_is_rejected() {
        let mut surface = RecordingSurface::new();
        let err = surface.add_link(Rect::default(), 3).unwrap_err();
        assert!(matches!(err, RenderError::Surface(_)));
    }

    #[test]
    fn test_pages_grouping() {
        let mut surface = RecordingSurface::new();
        surface.begin_page(1, Size::new(10.0, 10.0)).unwrap();
        surface.add_link(Rect::default(), 2).unwrap();
        surface.end_page().unwrap();
        surface.begin_page(2, Size::new(10.0, 10.0)).unwrap();
        surface.end_page().unwrap();

        let pages = surface.pages();
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].len(), 1);
        assert!(pages[1].is_empty());
        assert_eq!(surface.page_count(), 2);
    }
}
