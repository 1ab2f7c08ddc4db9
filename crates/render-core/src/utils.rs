use quire_style::{FontFamily, FontWeight, TextAlign};

/// Base-14 style font name with weight suffix (e.g. `Helvetica-Bold`, `Times-Bold`).
pub fn get_styled_font_name(family: &FontFamily, weight: FontWeight) -> String {
    let base = match family {
        FontFamily::Times => "Times-Roman",
        other => other.name(),
    };
    match (family, weight) {
        (FontFamily::Times, FontWeight::Bold) => "Times-Bold".to_string(),
        (_, FontWeight::Bold) => format!("{}-Bold", base),
        _ => base.to_string(),
    }
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Baseline of a single line of `font_size` text vertically centred in a box
/// starting at `top` with `height`.
pub fn baseline(top: f32, height: f32, font_size: f32) -> f32 {
    const ASCENT: f32 = 0.8;
    top + (height - font_size) / 2.0 + font_size * ASCENT
}

/// The x coordinate a text draw should be anchored at for a box of `width`.
pub fn anchor_x(x: f32, width: f32, align: TextAlign) -> f32 {
    match align {
        TextAlign::Left => x,
        TextAlign::Right => x + width,
        TextAlign::Center => x + width / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styled_font_names() {
        assert_eq!(get_styled_font_name(&FontFamily::Helvetica, FontWeight::Regular), "Helvetica");
        assert_eq!(get_styled_font_name(&FontFamily::Helvetica, FontWeight::Bold), "Helvetica-Bold");
        assert_eq!(get_styled_font_name(&FontFamily::Times, FontWeight::Regular), "Times-Roman");
        assert_eq!(get_styled_font_name(&FontFamily::Times, FontWeight::Bold), "Times-Bold");
        assert_eq!(
            get_styled_font_name(&FontFamily::Named("Inter".into()), FontWeight::Bold),
            "Inter-Bold"
        );
    }

    #[test]
    fn test_flip_and_baseline() {
        assert_eq!(flip_y(100.0, 800.0), 700.0);
        // A 10pt line in a 10pt box: baseline at 80% of the size.
        assert!((baseline(50.0, 10.0, 10.0) - 58.0).abs() < 1e-4);
    }

    #[test]
    fn test_anchor_x() {
        assert_eq!(anchor_x(10.0, 40.0, TextAlign::Left), 10.0);
        assert_eq!(anchor_x(10.0, 40.0, TextAlign::Right), 50.0);
        assert_eq!(anchor_x(10.0, 40.0, TextAlign::Center), 30.0);
    }
}
