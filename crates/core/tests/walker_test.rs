mod common;

use common::content_doc;
use pagewalk_core::{
    Dict, Instruction, InstructionLog, Operator, PDFObject, Page, PageObserver, PageOptions,
    PdfError,
};

fn instructions(content: &[u8]) -> Vec<Instruction> {
    let store = content_doc(content, Dict::new());
    let page = Page::open(&store, 1).unwrap();
    let mut log = InstructionLog::new();
    page.walk(&mut [&mut log]).unwrap();
    log.instructions
}

/// Records only subpath starts.
#[derive(Default)]
struct MoveRecorder {
    calls: Vec<Vec<PDFObject>>,
}

impl PageObserver for MoveRecorder {
    fn begin_new_subpath(&mut self, operands: &[PDFObject]) {
        self.calls.push(operands.to_vec());
    }
}

/// Notes the order in which `page_begin` and instructions arrive.
#[derive(Default)]
struct EventOrder {
    events: Vec<String>,
}

impl PageObserver for EventOrder {
    fn page_begin(&mut self, page: &Page<'_>) {
        self.events.push(format!("page_begin {}", page.number()));
    }

    fn on_instruction(&mut self, op: Operator, operands: &[PDFObject]) {
        self.events.push(op.callback_name().to_string());
        pagewalk_core::interp::dispatch(self, op, operands);
    }
}

#[test]
fn test_operand_operator_pairing() {
    assert_eq!(
        instructions(b"100 200 m 300 400 l"),
        vec![
            Instruction {
                operator: Operator::MoveTo,
                operands: vec![PDFObject::Int(100), PDFObject::Int(200)],
            },
            Instruction {
                operator: Operator::LineTo,
                operands: vec![PDFObject::Int(300), PDFObject::Int(400)],
            },
        ]
    );
}

#[test]
fn test_trailing_operands_are_discarded() {
    let log = instructions(b"10 20 m 50 60");
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].operator, Operator::MoveTo);
}

#[test]
fn test_trailing_operands_strict() {
    let store = content_doc(b"10 20 m 50 60", Dict::new());
    let options = PageOptions::default().strict_operands(true);
    let page = Page::open_with_options(&store, 1, options).unwrap();
    let mut log = InstructionLog::new();
    let err = page.walk(&mut [&mut log]).unwrap_err();
    assert!(matches!(err, PdfError::MalformedContentStream(_)));
    assert_eq!(log.instructions.len(), 1);
}

#[test]
fn test_missing_callback_tolerance() {
    let store = content_doc(b"1 2 m 3 4 l h 5 6 m", Dict::new());
    let page = Page::open(&store, 1).unwrap();
    let mut recorder = MoveRecorder::default();
    assert_eq!(page.walk(&mut [&mut recorder]).unwrap(), 4);
    assert_eq!(
        recorder.calls,
        vec![
            vec![PDFObject::Int(1), PDFObject::Int(2)],
            vec![PDFObject::Int(5), PDFObject::Int(6)],
        ]
    );
}

#[test]
fn test_multi_observer_fan_out() {
    let store = content_doc(b"q 1 0 0 1 5 5 cm 0 0 m 1 1 l S Q", Dict::new());
    let page = Page::open(&store, 1).unwrap();
    let mut first = InstructionLog::new();
    let mut second = InstructionLog::new();
    let mut moves = MoveRecorder::default();
    page.walk(&mut [&mut first, &mut moves, &mut second]).unwrap();

    assert_eq!(first.instructions.len(), 6);
    assert_eq!(first.instructions, second.instructions);
    assert_eq!(moves.calls.len(), 1);
}

#[test]
fn test_page_begin_precedes_instructions() {
    let store = content_doc(b"BT ET", Dict::new());
    let page = Page::open(&store, 1).unwrap();
    let mut order = EventOrder::default();
    page.walk(&mut [&mut order]).unwrap();
    assert_eq!(
        order.events,
        vec!["page_begin 1", "begin_text_object", "end_text_object"]
    );
}

#[test]
fn test_each_walk_starts_fresh() {
    let store = content_doc(b"q Q", Dict::new());
    let page = Page::open(&store, 1).unwrap();
    let mut order = EventOrder::default();
    page.walk(&mut [&mut order]).unwrap();
    page.walk(&mut [&mut order]).unwrap();
    assert_eq!(order.events.len(), 6);
    assert_eq!(order.events[3], "page_begin 1");
}

#[test]
fn test_malformed_stream_keeps_dispatched_instructions() {
    let store = content_doc(b"q 0 0 m [1 2", Dict::new());
    let page = Page::open(&store, 1).unwrap();
    let mut log = InstructionLog::new();
    let err = page.walk(&mut [&mut log]).unwrap_err();
    assert!(matches!(err, PdfError::MalformedContentStream(_)));
    assert_eq!(log.instructions.len(), 2);
}

#[test]
fn test_unterminated_dict_and_hex_string() {
    for content in [&b"<</A 1"[..], &b"<414243"[..], &b"BI /W 1 ID \x00\x01"[..]] {
        let store = content_doc(content, Dict::new());
        let page = Page::open(&store, 1).unwrap();
        let err = page.walk(&mut [&mut InstructionLog::new()]).unwrap_err();
        assert!(matches!(err, PdfError::MalformedContentStream(_)), "{content:?}");
    }
}

#[test]
fn test_inline_image_dispatch() {
    let log = instructions(b"q BI /W 2 /H 1 /BPC 8 /CS /G ID \x10\x20 EI Q");
    let ops: Vec<Operator> = log.iter().map(|i| i.operator).collect();
    assert_eq!(
        ops,
        vec![
            Operator::SaveState,
            Operator::BeginInlineImage,
            Operator::BeginInlineImageData,
            Operator::EndInlineImage,
            Operator::RestoreState,
        ]
    );
    assert_eq!(log[2].operands.len(), 8);
    assert_eq!(log[3].operands, vec![PDFObject::String(vec![0x10, 0x20])]);
}

#[test]
fn test_instruction_dump_snapshot() {
    let log = instructions(
        b"/OC /MC0 BDC\n\
          BT /F1 12 Tf 72 700 Td [(Hi) -120 (there)] TJ ET\n\
          0.5 g 10 10 50 50 re f\n\
          EMC",
    );
    let dump: Vec<String> = log
        .iter()
        .map(|ins| {
            let operands: Vec<String> = ins.operands.iter().map(ToString::to_string).collect();
            format!("{} {}", ins.operator.callback_name(), operands.join(" "))
                .trim_end()
                .to_string()
        })
        .collect();
    insta::assert_snapshot!(dump.join("\n"), @r"
    begin_marked_content_with_pl /OC /MC0
    begin_text_object
    set_text_font_and_size /F1 12
    move_text_position 72 700
    show_text_with_positioning [(Hi) -120 (there)]
    end_text_object
    set_gray_for_nonstroking 0.5
    append_rectangle 10 10 50 50
    fill_path_with_nonzero
    end_marked_content
    ");
}
