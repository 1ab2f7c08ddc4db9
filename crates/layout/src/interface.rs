use crate::config::LayoutConfig;
use crate::{LayoutElement, PositionedElement, TextElement};
use quire_style::{FontFamily, TextAlign, TextStyle};
use quire_traits::TextMeasurer;
use quire_types::{Color, Labels, Rect, Size};

/// Read-only environment data shared across the layout pass.
pub struct LayoutEnvironment<'a> {
    pub config: &'a LayoutConfig,
    pub measurer: &'a dyn TextMeasurer,
    pub theme: Color,
    pub family: FontFamily,
    pub labels: Labels,
    /// Whether a decodable background texture is available.
    pub has_background: bool,
}

impl<'a> LayoutEnvironment<'a> {
    pub fn page_size(&self) -> Size {
        self.config.geometry.page_size()
    }

    pub fn content_rect(&self) -> Rect {
        self.config.geometry.content_rect()
    }

    /// Regular black text in the book's family.
    pub fn style(&self, size: f32) -> TextStyle {
        TextStyle::new(self.family.clone(), size)
    }

    pub fn body_style(&self) -> TextStyle {
        self.style(self.config.body_font_size)
    }

    pub fn measure(&self, text: &str, style: &TextStyle) -> f32 {
        self.measurer.measure(text, &style.font)
    }

    /// A one-line text element anchored at `anchor_x`.
    ///
    /// The element box is measured, so for `Right` its right edge sits on the
    /// anchor and for `Center` its midpoint does.
    pub fn text(
        &self,
        anchor_x: f32,
        top: f32,
        height: f32,
        content: impl Into<String>,
        style: &TextStyle,
        align: TextAlign,
    ) -> PositionedElement {
        let content = content.into();
        let width = self.measure(&content, style);
        let x = match align {
            TextAlign::Left => anchor_x,
            TextAlign::Right => anchor_x - width,
            TextAlign::Center => anchor_x - width / 2.0,
        };
        PositionedElement::new(
            Rect::new(x, top, width, height),
            LayoutElement::Text(TextElement {
                content,
                style: style.clone(),
                align,
            }),
        )
    }
}
