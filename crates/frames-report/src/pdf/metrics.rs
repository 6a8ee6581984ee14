//! Glyph advance widths for the base-14 Helvetica faces (1/1000 em, WinAnsi).

use super::writer::Font;

/// Widths for code points 32..=126.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // '0'..'?'
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // '@'..'O'
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 'P'..'_'
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // '`'..'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 'p'..'~'
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, //
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, //
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, //
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, //
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, //
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Used for Latin-1 supplement glyphs and substitutions.
const FALLBACK_WIDTH: u16 = 556;

const MM_PER_POINT: f64 = 25.4 / 72.0;

/// Advance width of one character in 1/1000 em.
#[must_use]
pub(crate) fn char_width(font: Font, ch: char) -> u16 {
    let table = match font {
        Font::Regular => &HELVETICA,
        Font::Bold => &HELVETICA_BOLD,
    };
    let code = u32::from(ch);
    if (32..=126).contains(&code) {
        usize::try_from(code - 32)
            .ok()
            .and_then(|index| table.get(index))
            .copied()
            .unwrap_or(FALLBACK_WIDTH)
    } else {
        FALLBACK_WIDTH
    }
}

/// Rendered width of `text` in millimetres at `size` points.
#[must_use]
pub(crate) fn text_width_mm(font: Font, size: f64, text: &str) -> f64 {
    let units: u32 = text.chars().map(|ch| u32::from(char_width(font, ch))).sum();
    f64::from(units) / 1000.0 * size * MM_PER_POINT
}

/// Font size in points expressed in millimetres.
#[must_use]
pub(crate) fn points_to_mm(points: f64) -> f64 {
    points * MM_PER_POINT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_glyph_widths() {
        assert_eq!(char_width(Font::Regular, ' '), 278);
        assert_eq!(char_width(Font::Regular, 'W'), 944);
        assert_eq!(char_width(Font::Bold, 'i'), 278);
        assert_eq!(char_width(Font::Regular, '~'), 584);
        assert_eq!(char_width(Font::Regular, 'é'), FALLBACK_WIDTH);
    }

    #[test]
    fn width_scales_with_size() {
        let small = text_width_mm(Font::Regular, 10.0, "FRAMES");
        let large = text_width_mm(Font::Regular, 20.0, "FRAMES");
        assert!((large - small * 2.0).abs() < 1e-9);
    }
}
