//! Content stream interpretation.
//!
//! This module contains:
//! - `operators`: operator vocabulary and the `PageObserver` protocol
//! - `walker`: groups operands with operators and fans instructions out
//! - `text`: the built-in text extraction observer

pub mod operators;
pub mod text;
pub mod walker;

pub use operators::{Instruction, InstructionLog, Operator, PageObserver, dispatch};
pub use text::TextObserver;
pub use walker::walk;
