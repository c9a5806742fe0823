mod common;

use common::{content_doc, dict};
use pagewalk_core::{Dict, PDFObject, PDFStream, Page, PageOptions};

fn winansi_font() -> PDFObject {
    dict(&[
        ("Type", PDFObject::name("Font")),
        ("Subtype", PDFObject::name("Type1")),
        ("BaseFont", PDFObject::name("Helvetica")),
        ("Encoding", PDFObject::name("WinAnsiEncoding")),
    ])
    .into()
}

fn fonts(entries: &[(&str, PDFObject)]) -> Dict {
    dict(&[("Font", dict(entries).into())])
}

#[test]
fn test_simple_font_text() {
    let store = content_doc(
        b"BT /F1 12 Tf 72 700 Td (Caf\\351 menu) Tj 0 -14 Td (second line) Tj ET",
        fonts(&[("F1", winansi_font())]),
    );
    let page = Page::open(&store, 1).unwrap();
    assert_eq!(page.text().unwrap(), "Caf\u{e9} menu\nsecond line");
}

#[test]
fn test_font_switch_and_differences() {
    let custom: PDFObject = dict(&[
        ("Subtype", PDFObject::name("Type1")),
        (
            "Encoding",
            dict(&[
                ("BaseEncoding", PDFObject::name("WinAnsiEncoding")),
                (
                    "Differences",
                    PDFObject::Array(vec![PDFObject::Int(1), PDFObject::name("f_i")]),
                ),
            ])
            .into(),
        ),
    ])
    .into();
    let store = content_doc(
        b"BT /F1 10 Tf (plain) Tj /F2 10 Tf [(\\001ne) -400 (print)] TJ ET",
        fonts(&[("F1", winansi_font()), ("F2", custom)]),
    );
    let page = Page::open(&store, 1).unwrap();
    assert_eq!(page.text().unwrap(), "plainfine print");
}

#[test]
fn test_to_unicode_composite_font() {
    let cmap = b"/CIDInit /ProcSet findresource begin\n\
        begincmap\n\
        1 begincodespacerange <0000> <FFFF> endcodespacerange\n\
        1 beginbfrange <0010> <0012> <0061> endbfrange\n\
        1 beginbfchar <0020> <00210021> endbfchar\n\
        endcmap end";
    let mut store = content_doc(
        b"BT /F0 9 Tf <001000110012> Tj T* <00200099> Tj ET",
        fonts(&[(
            "F0",
            dict(&[
                ("Subtype", PDFObject::name("Type0")),
                ("Encoding", PDFObject::name("Identity-H")),
                ("ToUnicode", PDFObject::reference(30)),
            ])
            .into(),
        )]),
    );
    store.insert(30, PDFStream::new(Dict::new(), cmap.to_vec()));
    let page = Page::open(&store, 1).unwrap();
    assert_eq!(page.text().unwrap(), "abc\n!!\u{25af}");
}

#[test]
fn test_quote_operators_break_lines() {
    let store = content_doc(
        b"BT /F1 12 Tf 14 TL (one) Tj (two) ' 1 2 (three) \" ET",
        fonts(&[("F1", winansi_font())]),
    );
    let page = Page::open(&store, 1).unwrap();
    assert_eq!(page.text().unwrap(), "one\ntwo\nthree");
}

#[test]
fn test_unknown_font_uses_configured_replacement() {
    let store = content_doc(b"BT /Missing 12 Tf (ab) Tj ET", Dict::new());
    let options = PageOptions::default().replacement_char('?');
    let page = Page::open_with_options(&store, 1, options).unwrap();
    assert_eq!(page.text().unwrap(), "??");
}

#[test]
fn test_page_without_content_has_no_text() {
    let store = common::one_page_doc(&[], &[]);
    let page = Page::open(&store, 1).unwrap();
    assert_eq!(page.text().unwrap(), "");
}

#[test]
fn test_lines_in_separate_text_objects() {
    let store = content_doc(
        b"BT /F1 12 Tf 1 0 0 1 72 700 Tm (first) Tj ET\n\
          BT /F1 12 Tf 1 0 0 1 72 680 Tm (second) Tj ET",
        fonts(&[("F1", winansi_font())]),
    );
    let page = Page::open(&store, 1).unwrap();
    assert_eq!(page.text().unwrap(), "first\nsecond");
}

#[test]
fn test_word_by_word_placement_gets_spaces() {
    let store = content_doc(
        b"BT /F1 12 Tf 72 700 Td (Hello) Tj 40 0 Td (world) Tj ET\n\
          BT /F1 12 Tf 1 0 0 1 72 680 Tm (next) Tj 1 0 0 1 110 680 Tm (line) Tj ET",
        fonts(&[("F1", winansi_font())]),
    );
    let page = Page::open(&store, 1).unwrap();
    assert_eq!(page.text().unwrap(), "Hello world\nnext line");
}
