use quire_style::{TextAlign, TextStyle};
use quire_types::{Color, ImageTag, Rect};
use std::fmt;

/// A drawable element with its absolute position on the page.
///
/// `x`/`y` are the top-left corner in points, measured from the top-left page corner.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn new(rect: Rect, element: LayoutElement) -> Self {
        Self {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            element,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Drawable elements. Each variant carries its complete style.
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rectangle(RectElement),
    Rule(RuleElement),
    Circle(CircleElement),
    Image(ImageElement),
    Link(LinkElement),
}

/// A single run of text. The element box is one line tall.
///
/// `align` says which edge of the box the text is anchored to: for `Right` the
/// box's right edge is the anchor, for `Center` its midpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub style: TextStyle,
    pub align: TextAlign,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RectElement {
    pub fill: Color,
    pub corner_radius: f32,
}

/// A horizontal stroke from `x` to `x + width` at `y`.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleElement {
    pub color: Color,
    pub line_width: f32,
}

/// A filled circle inscribed in the element box.
#[derive(Clone, Debug, PartialEq)]
pub struct CircleElement {
    pub fill: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageElement {
    pub key: ImageKey,
    pub opacity: f32,
}

/// A clickable region that jumps to an absolute (1-based) page.
#[derive(Clone, Debug, PartialEq)]
pub struct LinkElement {
    pub target_page: usize,
}

/// Identifies an image payload in the document's resource map.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ImageKey {
    Background,
    Cover,
    Content(ImageTag),
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageKey::Background => f.write_str("background"),
            ImageKey::Cover => f.write_str("cover"),
            ImageKey::Content(tag) => write!(f, "content:{}", tag),
        }
    }
}
