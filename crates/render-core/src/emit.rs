use crate::error::RenderError;
use crate::traits::DrawingSurface;
use crate::utils::{anchor_x, baseline};
use quire_layout::{LaidOutDocument, LayoutElement, Page, PositionedElement};

/// Replays every page of `doc`, in order, onto `surface`.
///
/// Visible elements are drawn in paint order, then each page's link regions. The
/// pass is a pure function of the document: the same document always produces the
/// same sequence of calls. An image the surface rejects is skipped; it never stops
/// the rest of the document.
pub fn emit_document(
    doc: &LaidOutDocument,
    surface: &mut dyn DrawingSurface,
) -> Result<(), RenderError> {
    for page in &doc.pages {
        emit_page(doc, page, surface)?;
    }
    surface.finish()?;
    log::debug!("Emitted {} pages", doc.pages.len());
    Ok(())
}

fn emit_page(
    doc: &LaidOutDocument,
    page: &Page,
    surface: &mut dyn DrawingSurface,
) -> Result<(), RenderError> {
    surface.begin_page(page.number, page.size)?;
    let (links, visible): (Vec<_>, Vec<_>) = page
        .elements
        .iter()
        .partition(|el| matches!(el.element, LayoutElement::Link(_)));
    for element in visible.into_iter().chain(links) {
        emit_element(doc, element, surface)?;
    }
    surface.end_page()
}

fn emit_element(
    doc: &LaidOutDocument,
    el: &PositionedElement,
    surface: &mut dyn DrawingSurface,
) -> Result<(), RenderError> {
    match &el.element {
        LayoutElement::Text(text) => surface.draw_text(
            &text.content,
            anchor_x(el.x, el.width, text.align),
            baseline(el.y, el.height, text.style.font.size),
            &text.style,
            text.align,
        ),
        LayoutElement::Rectangle(rect) => {
            surface.fill_rect(el.rect(), &rect.fill, rect.corner_radius)
        }
        LayoutElement::Rule(rule) => surface.stroke_line(
            (el.x, el.y),
            (el.x + el.width, el.y),
            &rule.color,
            rule.line_width,
        ),
        LayoutElement::Circle(circle) => surface.fill_circle(
            (el.x + el.width / 2.0, el.y + el.height / 2.0),
            el.width / 2.0,
            &circle.fill,
        ),
        LayoutElement::Image(image) => {
            let data = doc
                .resources
                .get(&image.key)
                .ok_or_else(|| RenderError::MissingResource(image.key.to_string()))?;
            if let Err(e) = surface.draw_image(el.rect(), data, image.opacity) {
                log::warn!("Skipping image '{}' the surface could not draw: {}", image.key, e);
            }
            Ok(())
        }
        LayoutElement::Link(link) => surface.add_link(el.rect(), link.target_page),
    }
}
