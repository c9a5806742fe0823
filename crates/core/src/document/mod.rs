//! Document access - object store, page tree inheritance and pages.
//!
//! This module contains:
//! - `store` - the `ObjectStore` trait and the in-memory `MemoryStore`
//! - `attributes` - inherited page attributes and resource tables
//! - `options` - `PageOptions`
//! - `page` - the `Page` facade

pub mod attributes;
pub mod options;
pub mod page;
pub mod store;

pub use attributes::{EffectiveAttributes, InheritableKey, ResourceCategory};
pub use options::{PageOptions, REPLACEMENT_CHAR};
pub use page::{DEFAULT_MEDIA_BOX, Orientation, Page, PageBox, PageBoxes};
pub use store::{MemoryStore, ObjectStore};
