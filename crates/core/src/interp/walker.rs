//! Instruction walker.
//!
//! Groups the operands of a content stream with the operator that follows
//! them and hands each resulting instruction to every observer, in
//! registration order.

use super::operators::PageObserver;
use crate::document::options::PageOptions;
use crate::error::{PdfError, Result};
use crate::model::objects::PDFObject;
use crate::parser::content::{ContentParser, ContentToken};

/// Walk `content`, dispatching each instruction to `observers`.
///
/// Returns the number of instructions dispatched. Input that ends inside
/// a string, array, dictionary or inline image is a
/// `MalformedContentStream`. Operands left over after the last operator
/// are dropped, or rejected when `options.strict_operands` is set.
pub fn walk(
    content: &[u8],
    observers: &mut [&mut dyn PageObserver],
    options: &PageOptions,
) -> Result<usize> {
    let mut parser = ContentParser::new(content);
    let mut operands: Vec<PDFObject> = Vec::new();
    let mut count = 0usize;

    loop {
        let token = match parser.next_token() {
            Ok(Some(token)) => token,
            Ok(None) => break,
            Err(PdfError::UnexpectedEof) => {
                return Err(PdfError::MalformedContentStream(format!(
                    "unterminated object at offset {} after {count} instructions",
                    parser.tell()
                )));
            }
            Err(err) => return Err(err),
        };

        match token {
            ContentToken::Operand(obj) => operands.push(obj),
            ContentToken::Operator(op) => {
                for observer in observers.iter_mut() {
                    observer.on_instruction(op, &operands);
                }
                operands.clear();
                count += 1;
            }
        }
    }

    if !operands.is_empty() {
        if options.strict_operands {
            return Err(PdfError::MalformedContentStream(format!(
                "{} operands without an operator at end of stream",
                operands.len()
            )));
        }
        tracing::debug!(count = operands.len(), "discarding trailing operands");
    }

    tracing::trace!(instructions = count, "content walk finished");
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interp::operators::{Instruction, InstructionLog, Operator};

    fn log(content: &[u8]) -> Vec<Instruction> {
        let mut log = InstructionLog::new();
        walk(content, &mut [&mut log], &PageOptions::default()).unwrap();
        log.instructions
    }

    #[test]
    fn test_operands_are_grouped_with_their_operator() {
        let instructions = log(b"10 20 m 30 40 l h");
        assert_eq!(
            instructions,
            vec![
                Instruction {
                    operator: Operator::MoveTo,
                    operands: vec![PDFObject::Int(10), PDFObject::Int(20)],
                },
                Instruction {
                    operator: Operator::LineTo,
                    operands: vec![PDFObject::Int(30), PDFObject::Int(40)],
                },
                Instruction {
                    operator: Operator::ClosePath,
                    operands: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_empty_stream_dispatches_nothing() {
        assert!(log(b"").is_empty());
        assert!(log(b"  % only a comment\n").is_empty());
    }

    #[test]
    fn test_trailing_operands() {
        assert_eq!(log(b"q 1 2 3").len(), 1);

        let mut sink = InstructionLog::new();
        let strict = PageOptions::default().strict_operands(true);
        let err = walk(b"q 1 2 3", &mut [&mut sink], &strict).unwrap_err();
        assert!(matches!(err, PdfError::MalformedContentStream(_)));
    }

    #[test]
    fn test_unterminated_string_is_malformed() {
        let mut sink = InstructionLog::new();
        let err = walk(b"BT (abc Tj ET", &mut [&mut sink], &PageOptions::default()).unwrap_err();
        assert!(matches!(err, PdfError::MalformedContentStream(_)));
        assert_eq!(sink.instructions.len(), 1);
    }
}
