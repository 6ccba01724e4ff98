//! Single message PDF pages
//!
//! Writes a minimal PDF 1.4 document: one page sized tightly around the
//! message, set in Helvetica-Bold 13pt and centered. Uses the standard
//! Type1 font with `WinAnsiEncoding`, so no font data is embedded.

use std::fmt::Write as _;

use super::Emitter;

/// Font size in points
pub const FONT_SIZE: f64 = 13.0;

/// Horizontal padding added to the text width, in millimeters
pub const PADDING_MM: f64 = 20.0;

/// Page height in millimeters
pub const PAGE_HEIGHT_MM: f64 = 22.0;

const PT_PER_MM: f64 = 72.0 / 25.4;

/// Helvetica-Bold cap height in glyph units
const CAP_HEIGHT: f64 = 718.0;

/// Helvetica-Bold advance widths for `' '..='~'`, in 1/1000 em
const ASCII_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Helvetica-Bold advance widths for `0xA0..=0xFF`, in 1/1000 em
const LATIN1_WIDTHS: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333, // 0xA0
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611, // 0xB0
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278, // 0xC0
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611, // 0xD0
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278, // 0xE0
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556, // 0xF0
];

/// Renders each message as a one page PDF
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfEmitter;

impl Emitter for PdfEmitter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, message: &str) -> Vec<u8> {
        render_pdf(message)
    }
}

/// Page size in points for a message: text width plus padding by a fixed height.
///
/// The width is truncated to whole millimeters before padding.
#[must_use]
pub fn page_size(message: &str) -> (f64, f64) {
    let text_mm = text_width(message) / PT_PER_MM;
    let width_mm = text_mm.trunc() + PADDING_MM;
    (width_mm * PT_PER_MM, PAGE_HEIGHT_MM * PT_PER_MM)
}

/// Width of `message` in points at [`FONT_SIZE`]
#[must_use]
pub fn text_width(message: &str) -> f64 {
    let units: u32 = message.chars().map(|c| u32::from(glyph_width(c))).sum();
    f64::from(units) * FONT_SIZE / 1000.0
}

/// Build the complete PDF document for one message
#[must_use]
pub fn render_pdf(message: &str) -> Vec<u8> {
    let (width, height) = page_size(message);
    let x = (width - text_width(message)) / 2.0;
    let y = (height - CAP_HEIGHT * FONT_SIZE / 1000.0) / 2.0;

    let mut content = format!("BT\n/F1 {FONT_SIZE:.0} Tf\n{x:.2} {y:.2} Td\n(").into_bytes();
    content.extend(encode_text(message));
    content.extend_from_slice(b") Tj\nET\n");

    let mut stream = format!("<< /Length {} >>\nstream\n", content.len()).into_bytes();
    stream.extend(content);
    stream.extend_from_slice(b"endstream");

    let objects: Vec<Vec<u8>> = vec![
        b"<< /Type /Catalog /Pages 2 0 R >>".to_vec(),
        b"<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_vec(),
        format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {width:.2} {height:.2}] \
             /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
        )
        .into_bytes(),
        b"<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold /Encoding /WinAnsiEncoding >>"
            .to_vec(),
        stream,
    ];

    let mut out = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (index, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend(format!("{} 0 obj\n", index + 1).into_bytes());
        out.extend_from_slice(body);
        out.extend_from_slice(b"\nendobj\n");
    }

    let xref_offset = out.len();
    let mut trailer = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = write!(trailer, "{offset:010} 00000 n \n");
    }
    let _ = write!(
        trailer,
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
        objects.len() + 1
    );
    out.extend(trailer.into_bytes());
    out
}

/// Encode text as a WinAnsi PDF string body, escaping delimiters.
///
/// Characters outside Latin-1 become `?`.
fn encode_text(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len());
    for c in text.chars() {
        match win_ansi(c) {
            Some(b @ (b'(' | b')' | b'\\')) => bytes.extend_from_slice(&[b'\\', b]),
            Some(b) => bytes.push(b),
            None => bytes.push(b'?'),
        }
    }
    bytes
}

/// WinAnsi agrees with Latin-1 on printable ASCII and `0xA0..=0xFF`
fn win_ansi(c: char) -> Option<u8> {
    let code = u32::from(c);
    if (0x20..=0x7E).contains(&code) || (0xA0..=0xFF).contains(&code) {
        u8::try_from(code).ok()
    } else {
        None
    }
}

fn glyph_width(c: char) -> u16 {
    match win_ansi(c) {
        Some(code @ 0x20..=0x7E) => ASCII_WIDTHS[usize::from(code - 0x20)],
        Some(code @ 0xA0..=0xFF) => LATIN1_WIDTHS[usize::from(code - 0xA0)],
        // Rendered as '?'
        _ => ASCII_WIDTHS[usize::from(b'?' - 0x20)],
    }
}
