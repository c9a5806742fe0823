//! Built-in text extraction observer.

use super::operators::PageObserver;
use crate::document::page::Page;
use crate::font::FontDecoder;
use crate::model::objects::PDFObject;
use std::collections::HashMap;

/// `TJ` adjustment (thousandths of an em) treated as a word gap.
const WORD_GAP: f64 = -250.0;

/// Baselines closer than this are the same line.
const SAME_LINE_EPSILON: f64 = 0.01;

/// Accumulates the text shown on a page.
///
/// Strings are decoded with the font selected by `Tf`. Breaks are decided
/// when text is shown: a baseline different from the one the previous text
/// was shown on starts a new line, even across `BT`/`ET` blocks, and a
/// horizontal line move on the same baseline becomes a space. Wide `TJ`
/// gaps become spaces too; no layout analysis is done beyond that.
#[derive(Debug)]
pub struct TextObserver {
    replacement: char,
    fonts: HashMap<String, FontDecoder>,
    current_font: Option<String>,
    /// Origin of the text line matrix, reset by `BT`
    line_origin: (f64, f64),
    leading: f64,
    /// Line origin the previous text was shown at
    last_shown: Option<(f64, f64)>,
    text: String,
}

impl TextObserver {
    pub fn new(replacement: char) -> Self {
        Self {
            replacement,
            fonts: HashMap::new(),
            current_font: None,
            line_origin: (0.0, 0.0),
            leading: 0.0,
            last_shown: None,
            text: String::new(),
        }
    }

    /// Text collected so far.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    fn show(&mut self, operand: Option<&PDFObject>) {
        let Some(PDFObject::String(bytes)) = operand else {
            return;
        };
        self.break_before_show();
        let decoder = self.current_font.as_ref().and_then(|name| self.fonts.get(name));
        match decoder {
            Some(decoder) => decoder.decode_into(bytes, self.replacement, &mut self.text),
            None => {
                tracing::debug!(font = ?self.current_font, "showing text without a known font");
                FontDecoder::missing().decode_into(bytes, self.replacement, &mut self.text);
            }
        }
    }

    fn break_before_show(&mut self) {
        let (x, y) = self.line_origin;
        if let Some((last_x, last_y)) = self.last_shown {
            if (y - last_y).abs() > SAME_LINE_EPSILON {
                self.newline();
            } else if (x - last_x).abs() > SAME_LINE_EPSILON {
                self.space();
            }
        }
        self.last_shown = Some(self.line_origin);
    }

    fn newline(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
    }

    fn space(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with([' ', '\n']) {
            self.text.push(' ');
        }
    }

    fn move_line(&mut self, tx: f64, ty: f64) {
        self.line_origin.0 += tx;
        self.line_origin.1 += ty;
    }

    fn next_line(&mut self) {
        self.move_line(0.0, -self.leading);
        self.newline();
    }
}

fn number(operands: &[PDFObject], idx: usize) -> Option<f64> {
    operands.get(idx).and_then(|o| o.as_num().ok())
}

impl PageObserver for TextObserver {
    fn page_begin(&mut self, page: &Page<'_>) {
        self.fonts.clear();
        self.current_font = None;
        self.line_origin = (0.0, 0.0);
        self.leading = 0.0;
        self.last_shown = None;
        let fonts = match page.fonts() {
            Ok(fonts) => fonts,
            Err(err) => {
                tracing::warn!(page = page.number(), %err, "no fonts for text extraction");
                return;
            }
        };
        let store = page.store();
        for (name, obj) in fonts {
            if let Some(font) = store.resolve_dict(obj) {
                self.fonts
                    .insert(name.clone(), FontDecoder::from_font_dict(store, font));
            }
        }
    }

    fn begin_text_object(&mut self, _operands: &[PDFObject]) {
        self.line_origin = (0.0, 0.0);
    }

    fn set_text_font_and_size(&mut self, operands: &[PDFObject]) {
        if let Some(name) = operands.first().and_then(|o| o.as_name().ok()) {
            self.current_font = Some(name.to_string());
        }
    }

    fn set_text_leading(&mut self, operands: &[PDFObject]) {
        if let Some(leading) = number(operands, 0) {
            self.leading = leading;
        }
    }

    fn move_text_position(&mut self, operands: &[PDFObject]) {
        self.move_line(
            number(operands, 0).unwrap_or(0.0),
            number(operands, 1).unwrap_or(0.0),
        );
    }

    fn move_text_position_and_set_leading(&mut self, operands: &[PDFObject]) {
        let ty = number(operands, 1).unwrap_or(0.0);
        self.leading = -ty;
        self.move_line(number(operands, 0).unwrap_or(0.0), ty);
    }

    fn set_text_matrix_and_text_line_matrix(&mut self, operands: &[PDFObject]) {
        if let (Some(x), Some(y)) = (number(operands, 4), number(operands, 5)) {
            self.line_origin = (x, y);
        }
    }

    fn move_to_start_of_next_line(&mut self, _operands: &[PDFObject]) {
        self.next_line();
    }

    fn show_text(&mut self, operands: &[PDFObject]) {
        self.show(operands.first());
    }

    fn show_text_with_positioning(&mut self, operands: &[PDFObject]) {
        let Some(PDFObject::Array(items)) = operands.first() else {
            return;
        };
        for item in items {
            match item {
                PDFObject::String(_) => self.show(Some(item)),
                PDFObject::Int(_) | PDFObject::Real(_) => {
                    if item.as_num().is_ok_and(|n| n < WORD_GAP) {
                        self.space();
                    }
                }
                _ => {}
            }
        }
    }

    fn move_to_next_line_and_show_text(&mut self, operands: &[PDFObject]) {
        self.next_line();
        self.show(operands.first());
    }

    fn set_spacing_next_line_show_text(&mut self, operands: &[PDFObject]) {
        self.next_line();
        self.show(operands.get(2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::options::{PageOptions, REPLACEMENT_CHAR};
    use crate::interp::walker::walk;

    fn run(content: &[u8]) -> String {
        let mut observer = TextObserver::new(REPLACEMENT_CHAR);
        walk(content, &mut [&mut observer], &PageOptions::default()).unwrap();
        observer.into_text()
    }

    #[test]
    fn test_without_fonts_every_code_is_replaced() {
        assert_eq!(run(b"BT (ab) Tj ET"), "\u{25af}\u{25af}");
    }

    #[test]
    fn test_line_moves_insert_newlines() {
        let text = run(b"BT (a) Tj 0 -14 Td (b) Tj T* (c) Tj ET");
        assert_eq!(text, "\u{25af}\n\u{25af}\n\u{25af}");
    }

    #[test]
    fn test_horizontal_move_inserts_space() {
        let text = run(b"BT (a) Tj 10 0 Td (b) Tj 0 0 Td (c) Tj -30 0 Td (d) Tj ET");
        assert_eq!(text, "\u{25af} \u{25af}\u{25af} \u{25af}");
    }

    #[test]
    fn test_next_line_uses_leading() {
        let text = run(b"BT 0 700 Td 12 TL (a) Tj T* (b) Tj 0 -12 Td (c) Tj ET");
        assert_eq!(text, "\u{25af}\n\u{25af}\n\u{25af}");
    }

    #[test]
    fn test_tj_gap_becomes_space() {
        let text = run(b"BT [(a) -300 (b) -20 (c)] TJ ET");
        assert_eq!(text, "\u{25af} \u{25af}\u{25af}");
    }

    #[test]
    fn test_text_matrix_baseline_change() {
        let text = run(b"BT 1 0 0 1 72 700 Tm (a) Tj 1 0 0 1 90 700 Tm (b) Tj 1 0 0 1 72 680 Tm (c) Tj ET");
        assert_eq!(text, "\u{25af} \u{25af}\n\u{25af}");
    }

    #[test]
    fn test_baseline_survives_text_objects() {
        let text = run(b"BT 1 0 0 1 72 700 Tm (a) Tj ET BT 1 0 0 1 72 680 Tm (b) Tj ET \
            BT 72 680 Td (c) Tj ET");
        assert_eq!(text, "\u{25af}\n\u{25af}\u{25af}");
    }
}
