//! Glyph metrics of the standard fonts used by the reports.
//!
//! The PDF standard fonts are not embedded, so their advance widths are
//! needed here to wrap cell text before anything is drawn.

/// Fonts available without embedding (PDF base-14 subset)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Regular,
    Bold,
    Italic,
}

impl Font {
    /// Width of `text` in points at `size_pt`.
    pub fn text_width_pt(self, text: &str, size_pt: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.glyph_width(c)).sum();
        units as f32 * size_pt / 1000.0
    }

    /// Advance width in 1/1000 em. Oblique shares the regular metrics.
    fn glyph_width(self, c: char) -> u32 {
        match self {
            Font::Bold => bold_width(c),
            Font::Regular | Font::Italic => regular_width(c),
        }
    }
}

// Helvetica AFM widths for ASCII 0x20..=0x7E.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a..m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n..z
    334, 260, 334, 584, // {..~
];

// Helvetica-Bold AFM widths for ASCII 0x20..=0x7E.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0..9
    333, 333, 584, 584, 584, 611, 975, // :..@
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // A..M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N..Z
    333, 278, 333, 584, 556, 333, // [..`
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // a..m
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // n..z
    389, 280, 389, 584, // {..~
];

fn regular_width(c: char) -> u32 {
    table_width(&HELVETICA, c)
}

fn bold_width(c: char) -> u32 {
    table_width(&HELVETICA_BOLD, c)
}

fn table_width(table: &[u16; 95], c: char) -> u32 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize] as u32
    } else {
        // Latin-1 letters and the '?' substitute are close to a digit width.
        556
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(Font::Regular.text_width_pt("0", 1000.0), 556.0);
        assert_eq!(Font::Regular.text_width_pt("W", 1000.0), 944.0);
        assert_eq!(Font::Regular.text_width_pt("i", 1000.0), 222.0);
        assert_eq!(Font::Bold.text_width_pt("i", 1000.0), 278.0);
        assert_eq!(Font::Regular.text_width_pt("~", 1000.0), 584.0);
    }

    #[test]
    fn test_width_scales_with_size() {
        let w10 = Font::Regular.text_width_pt("Saloon", 10.0);
        let w20 = Font::Regular.text_width_pt("Saloon", 20.0);
        assert!((w20 - 2.0 * w10).abs() < 1e-4);
    }
}
