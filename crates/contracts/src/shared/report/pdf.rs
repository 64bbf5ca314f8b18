//! Renders laid-out report pages into a PDF document with `printpdf`.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect,
};

use super::fonts::Font;
use super::layout::{DrawOp, PageLayout, Rgb, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use super::ReportError;

const MM_TO_PT: f32 = 72.0 / 25.4;
const LAYER_NAME: &str = "Report";

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    italic: IndirectFontRef,
}

impl Fonts {
    fn get(&self, font: Font) -> &IndirectFontRef {
        match font {
            Font::Regular => &self.regular,
            Font::Bold => &self.bold,
            Font::Italic => &self.italic,
        }
    }
}

fn render_error(e: impl std::fmt::Debug) -> ReportError {
    ReportError::Render(format!("{:?}", e))
}

/// One PDF page per layout page, A4 portrait.
pub fn render_pdf(title: &str, pages: &[PageLayout]) -> Result<Vec<u8>, ReportError> {
    let (doc, first_page, first_layer) =
        PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME);

    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(render_error)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(render_error)?,
        italic: doc.add_builtin_font(BuiltinFont::HelveticaOblique).map_err(render_error)?,
    };

    for (i, page) in pages.iter().enumerate() {
        let (page_index, layer_index) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), LAYER_NAME)
        };
        let layer = doc.get_page(page_index).get_layer(layer_index);
        draw(&layer, &fonts, &page.ops);
    }

    doc.save_to_bytes().map_err(render_error)
}

/// Layout uses a top-left origin, PDF a bottom-left one.
fn flip(y: f32) -> Mm {
    Mm(PAGE_HEIGHT_MM - y)
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(printpdf::Rgb::new(
        rgb.0 as f32 / 255.0,
        rgb.1 as f32 / 255.0,
        rgb.2 as f32 / 255.0,
        None,
    ))
}

fn draw(layer: &PdfLayerReference, fonts: &Fonts, ops: &[DrawOp]) {
    for op in ops {
        match op {
            DrawOp::FillRect { x, y, w, h, color: fill } => {
                layer.set_fill_color(color(*fill));
                let rect = Rect::new(Mm(*x), flip(y + h), Mm(x + w), flip(*y))
                    .with_mode(PaintMode::Fill);
                layer.add_rect(rect);
            }
            DrawOp::Line {
                x1,
                y1,
                x2,
                y2,
                width,
                color: stroke,
            } => {
                layer.set_outline_color(color(*stroke));
                layer.set_outline_thickness(width * MM_TO_PT);
                layer.add_line(Line {
                    points: vec![
                        (Point::new(Mm(*x1), flip(*y1)), false),
                        (Point::new(Mm(*x2), flip(*y2)), false),
                    ],
                    is_closed: false,
                });
            }
            DrawOp::Text {
                x,
                y,
                size_pt,
                font,
                color: fill,
                text,
            } => {
                layer.set_fill_color(color(*fill));
                layer.use_text(text.as_str(), *size_pt, Mm(*x), flip(*y), fonts.get(*font));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(text: &str) -> PageLayout {
        PageLayout {
            ops: vec![
                DrawOp::FillRect {
                    x: 10.0,
                    y: 10.0,
                    w: 50.0,
                    h: 8.0,
                    color: Rgb(44, 62, 80),
                },
                DrawOp::Line {
                    x1: 10.0,
                    y1: 20.0,
                    x2: 200.0,
                    y2: 20.0,
                    width: 0.5,
                    color: Rgb::BLACK,
                },
                DrawOp::Text {
                    x: 12.0,
                    y: 15.0,
                    size_pt: 10.0,
                    font: Font::Bold,
                    color: Rgb::WHITE,
                    text: text.to_string(),
                },
            ],
            ..PageLayout::default()
        }
    }

    #[test]
    fn test_renders_a_pdf_document() {
        let bytes = render_pdf("Employee Details Report", &[page_with("Hello")]).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 200);
    }

    #[test]
    fn test_more_pages_make_a_bigger_document() {
        let one = render_pdf("r", &[page_with("a")]).unwrap();
        let three = render_pdf("r", &[page_with("a"), page_with("b"), page_with("c")]).unwrap();
        assert!(three.len() > one.len());
    }

    #[test]
    fn test_flip_to_pdf_origin() {
        assert_eq!(flip(0.0), Mm(PAGE_HEIGHT_MM));
        assert_eq!(flip(PAGE_HEIGHT_MM), Mm(0.0));
    }
}
