//! PDF object model.

pub mod objects;

pub use objects::{Dict, PDFObjRef, PDFObject, PDFStream};
