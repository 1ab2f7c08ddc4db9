//! Stateless constructors for the non-text primitives.

use crate::elements::{CircleElement, ImageElement, LinkElement, RectElement, RuleElement};
use crate::{ImageKey, LayoutElement, PositionedElement};
use quire_types::{Color, Rect, Size};

pub fn filled_rect(bounds: Rect, fill: Color, corner_radius: f32) -> PositionedElement {
    PositionedElement::new(
        bounds,
        LayoutElement::Rectangle(RectElement {
            fill,
            corner_radius,
        }),
    )
}

/// A horizontal rule from `x1` to `x2` at `y`.
pub fn rule(x1: f32, x2: f32, y: f32, color: Color, line_width: f32) -> PositionedElement {
    PositionedElement::new(
        Rect::new(x1, y, x2 - x1, 0.0),
        LayoutElement::Rule(RuleElement { color, line_width }),
    )
}

pub fn dot(center_x: f32, center_y: f32, radius: f32, fill: Color) -> PositionedElement {
    PositionedElement::new(
        Rect::new(center_x - radius, center_y - radius, radius * 2.0, radius * 2.0),
        LayoutElement::Circle(CircleElement { fill }),
    )
}

pub fn image(bounds: Rect, key: ImageKey, opacity: f32) -> PositionedElement {
    PositionedElement::new(bounds, LayoutElement::Image(ImageElement { key, opacity }))
}

/// An image covering the whole page.
pub fn full_bleed(page: Size, key: ImageKey, opacity: f32) -> PositionedElement {
    image(Rect::new(0.0, 0.0, page.width, page.height), key, opacity)
}

pub fn link(bounds: Rect, target_page: usize) -> PositionedElement {
    PositionedElement::new(bounds, LayoutElement::Link(LinkElement { target_page }))
}
