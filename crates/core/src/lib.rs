//! pagewalk - page tree inheritance and content stream walking for PDF.
//!
//! A [`Page`] is opened from an [`ObjectStore`] by number. Its attributes
//! are resolved through the page tree, and its content streams are walked
//! instruction by instruction, each instruction going to every registered
//! [`PageObserver`].

pub mod codec;
pub mod document;
pub mod error;
pub mod font;
pub mod interp;
pub mod model;
pub mod parser;

pub use document::{
    EffectiveAttributes, MemoryStore, ObjectStore, Orientation, Page, PageOptions, ResourceCategory,
};
pub use error::{PdfError, Result};
pub use interp::{Instruction, InstructionLog, Operator, PageObserver, TextObserver};
pub use model::{Dict, PDFObjRef, PDFObject, PDFStream};
