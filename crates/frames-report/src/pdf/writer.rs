//! Minimal PDF 1.4 writer.
//!
//! # Design
//! - Callers work in millimetres from the top-left corner; the writer flips to
//!   PDF user space (points from the bottom-left) when emitting operators.
//! - Only the base-14 Helvetica faces are used, so no font programs are
//!   embedded. Text is WinAnsi-encoded; characters outside Latin-1 become `?`.
//! - Content streams are uncompressed and the xref table is computed from the
//!   exact byte offsets of each object.

use std::fmt::Write as _;

/// A4 portrait width in millimetres.
pub(crate) const PAGE_WIDTH_MM: f64 = 210.0;
/// A4 portrait height in millimetres.
pub(crate) const PAGE_HEIGHT_MM: f64 = 297.0;

const POINTS_PER_MM: f64 = 72.0 / 25.4;
const BEZIER_KAPPA: f64 = 0.552_284_75;

/// Font face selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Font {
    /// Helvetica.
    Regular,
    /// Helvetica-Bold.
    Bold,
}

impl Font {
    const fn resource(self) -> &'static str {
        match self {
            Self::Regular => "F1",
            Self::Bold => "F2",
        }
    }
}

/// 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Rgb(pub(crate) u8, pub(crate) u8, pub(crate) u8);

impl Rgb {
    fn components(self) -> String {
        format!(
            "{} {} {}",
            num(f64::from(self.0) / 255.0),
            num(f64::from(self.1) / 255.0),
            num(f64::from(self.2) / 255.0)
        )
    }
}

/// Drawing operations for a single page.
#[derive(Debug, Default)]
pub(crate) struct Page {
    ops: Vec<u8>,
}

impl Page {
    fn push(&mut self, line: &str) {
        self.ops.extend_from_slice(line.as_bytes());
        self.ops.push(b'\n');
    }

    /// Filled rectangle; `y` is the top edge.
    pub(crate) fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Rgb) {
        let (px, py) = to_user_space(x, y + height);
        self.push(&format!(
            "{} rg {} {} {} {} re f",
            fill.components(),
            num(px),
            num(py),
            num(width * POINTS_PER_MM),
            num(height * POINTS_PER_MM)
        ));
    }

    /// Stroked rectangle outline.
    pub(crate) fn stroke_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        stroke: Rgb,
        line_width: f64,
    ) {
        let (px, py) = to_user_space(x, y + height);
        self.push(&format!(
            "{} RG {} w {} {} {} {} re S",
            stroke.components(),
            num(line_width * POINTS_PER_MM),
            num(px),
            num(py),
            num(width * POINTS_PER_MM),
            num(height * POINTS_PER_MM)
        ));
    }

    /// Filled rectangle with circular corners of `radius`.
    pub(crate) fn fill_rounded_rect(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        radius: f64,
        fill: Rgb,
    ) {
        let (x0, y0) = to_user_space(x, y + height);
        let x1 = x0 + width * POINTS_PER_MM;
        let y1 = y0 + height * POINTS_PER_MM;
        let r = radius * POINTS_PER_MM;
        let k = r * BEZIER_KAPPA;

        let mut path = format!("{} rg ", fill.components());
        let _ = write!(path, "{} {} m ", num(x0 + r), num(y0));
        let _ = write!(path, "{} {} l ", num(x1 - r), num(y0));
        let _ = write!(
            path,
            "{} {} {} {} {} {} c ",
            num(x1 - r + k),
            num(y0),
            num(x1),
            num(y0 + r - k),
            num(x1),
            num(y0 + r)
        );
        let _ = write!(path, "{} {} l ", num(x1), num(y1 - r));
        let _ = write!(
            path,
            "{} {} {} {} {} {} c ",
            num(x1),
            num(y1 - r + k),
            num(x1 - r + k),
            num(y1),
            num(x1 - r),
            num(y1)
        );
        let _ = write!(path, "{} {} l ", num(x0 + r), num(y1));
        let _ = write!(
            path,
            "{} {} {} {} {} {} c ",
            num(x0 + r - k),
            num(y1),
            num(x0),
            num(y1 - r + k),
            num(x0),
            num(y1 - r)
        );
        let _ = write!(path, "{} {} l ", num(x0), num(y0 + r));
        let _ = write!(
            path,
            "{} {} {} {} {} {} c h f",
            num(x0),
            num(y0 + r - k),
            num(x0 + r - k),
            num(y0),
            num(x0 + r),
            num(y0)
        );
        self.push(&path);
    }

    /// Text with its baseline at `y`.
    pub(crate) fn text(&mut self, x: f64, y: f64, text: &str, font: Font, size: f64, color: Rgb) {
        let (px, py) = to_user_space(x, y);
        let head = format!(
            "BT {} rg /{} {} Tf {} {} Td (",
            color.components(),
            font.resource(),
            num(size),
            num(px),
            num(py)
        );
        self.ops.extend_from_slice(head.as_bytes());
        self.ops.extend(encode_text(text));
        self.ops.extend_from_slice(b") Tj ET\n");
    }
}

/// Multi-page document under construction.
#[derive(Debug, Default)]
pub(crate) struct PdfDocument {
    title: String,
    pages: Vec<Page>,
}

impl PdfDocument {
    pub(crate) fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            pages: vec![Page::default()],
        }
    }

    /// Page currently being drawn.
    pub(crate) fn current(&mut self) -> &mut Page {
        if self.pages.is_empty() {
            self.pages.push(Page::default());
        }
        let last = self.pages.len() - 1;
        &mut self.pages[last]
    }

    /// Start a new page and return it.
    pub(crate) fn add_page(&mut self) -> &mut Page {
        self.pages.push(Page::default());
        self.current()
    }

    /// All pages, for decorations applied after layout.
    pub(crate) fn pages_mut(&mut self) -> impl Iterator<Item = &mut Page> {
        self.pages.iter_mut()
    }

    /// Serialise the document.
    pub(crate) fn finish(self) -> Vec<u8> {
        // 1 catalog, 2 page tree, 3-4 fonts, 5 info, then page/content pairs.
        const FIRST_PAGE_ID: usize = 6;
        let page_ids: Vec<usize> = (0..self.pages.len())
            .map(|index| FIRST_PAGE_ID + index * 2)
            .collect();

        let mut out: Vec<u8> = Vec::new();
        out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");
        let mut offsets: Vec<usize> = Vec::new();

        let mut object = |out: &mut Vec<u8>, body: &[u8]| {
            let id = offsets.len() + 1;
            offsets.push(out.len());
            out.extend_from_slice(format!("{id} 0 obj\n").as_bytes());
            out.extend_from_slice(body);
            out.extend_from_slice(b"\nendobj\n");
        };

        object(&mut out, b"<< /Type /Catalog /Pages 2 0 R >>");
        let kids: Vec<String> = page_ids.iter().map(|id| format!("{id} 0 R")).collect();
        object(
            &mut out,
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                page_ids.len()
            )
            .as_bytes(),
        );
        object(
            &mut out,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
        );
        object(
            &mut out,
            b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>",
        );
        let mut info = b"<< /Producer (FRAMES) /Title (".to_vec();
        info.extend(encode_text(&self.title));
        info.extend_from_slice(b") >>");
        object(&mut out, &info);

        let media_box = format!(
            "[0 0 {} {}]",
            num(PAGE_WIDTH_MM * POINTS_PER_MM),
            num(PAGE_HEIGHT_MM * POINTS_PER_MM)
        );
        for (page, id) in self.pages.iter().zip(&page_ids) {
            object(
                &mut out,
                format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox {media_box} /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> /Contents {} 0 R >>",
                    id + 1
                )
                .as_bytes(),
            );
            let mut stream = format!("<< /Length {} >>\nstream\n", page.ops.len()).into_bytes();
            stream.extend_from_slice(&page.ops);
            stream.extend_from_slice(b"endstream");
            object(&mut out, &stream);
        }

        let xref_offset = out.len();
        let count = offsets.len() + 1;
        out.extend_from_slice(format!("xref\n0 {count}\n0000000000 65535 f \n").as_bytes());
        for offset in &offsets {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }
        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {count} /Root 1 0 R /Info 5 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n"
            )
            .as_bytes(),
        );
        out
    }
}

fn to_user_space(x_mm: f64, y_mm: f64) -> (f64, f64) {
    (
        x_mm * POINTS_PER_MM,
        (PAGE_HEIGHT_MM - y_mm) * POINTS_PER_MM,
    )
}

/// Compact decimal: two places, trailing zeros trimmed.
fn num(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" || trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// WinAnsi bytes for a PDF literal string, with delimiters escaped.
fn encode_text(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = match ch {
            '\n' | '\r' | '\t' => b' ',
            _ => u8::try_from(ch)
                .ok()
                .filter(|byte| (0x20..=0x7E).contains(byte) || *byte >= 0xA0)
                .unwrap_or(b'?'),
        };
        if matches!(byte, b'(' | b')' | b'\\') {
            bytes.push(b'\\');
        }
        bytes.push(byte);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
        haystack
            .windows(needle.len())
            .position(|window| window == needle)
    }

    #[test]
    fn numbers_are_compact() {
        assert_eq!(num(12.0), "12");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(-0.001), "0");
        assert_eq!(num(595.275_6), "595.28");
    }

    #[test]
    fn text_is_escaped_and_latin1_encoded() {
        assert_eq!(encode_text("a(b)\\"), b"a\\(b\\)\\\\".to_vec());
        assert_eq!(encode_text("Ñ→"), vec![0xD1, b'?']);
    }

    #[test]
    fn xref_offsets_point_at_objects() {
        let mut doc = PdfDocument::new("Test");
        doc.current()
            .text(20.0, 30.0, "Hello", Font::Bold, 12.0, Rgb(0, 0, 0));
        doc.add_page()
            .fill_rect(0.0, 0.0, 10.0, 10.0, Rgb(255, 0, 0));
        let bytes = doc.finish();

        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert!(bytes.ends_with(b"%%EOF\n"));

        let xref_at = find(&bytes, b"\nxref\n").expect("xref present") + 1;
        let startxref = find(&bytes, b"startxref\n").expect("startxref present");
        let declared: usize = String::from_utf8_lossy(&bytes[startxref + 10..])
            .lines()
            .next()
            .and_then(|line| line.trim().parse().ok())
            .expect("numeric offset");
        assert_eq!(declared, xref_at);

        let table = String::from_utf8_lossy(&bytes[xref_at..]).to_string();
        let entries: Vec<&str> = table
            .lines()
            .skip(3)
            .take_while(|line| line.ends_with(" n "))
            .collect();
        // catalog, pages, two fonts, info, two pages with content
        assert_eq!(entries.len(), 9);
        for (index, entry) in entries.iter().enumerate() {
            let offset: usize = entry[..10].parse().expect("offset");
            let expected = format!("{} 0 obj", index + 1);
            assert!(bytes[offset..].starts_with(expected.as_bytes()));
        }
        assert!(find(&bytes, b"/Count 2").is_some());
    }
}
