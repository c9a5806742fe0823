//! Object store - resolves indirect references to concrete objects.
//!
//! The page facade only needs three things from a document: reference
//! resolution, the ordered list of page references and the trailer. The
//! [`ObjectStore`] trait captures exactly that, and [`MemoryStore`] is the
//! in-memory implementation used by the CLI loader and the tests.

use crate::error::{PdfError, Result};
use crate::model::objects::{Dict, PDFObjRef, PDFObject};
use std::collections::HashMap;

/// Longest chain of references-to-references followed before giving up.
const MAX_REF_CHAIN: usize = 32;

/// Read access to the objects of one document.
pub trait ObjectStore {
    /// Look up an indirect object by number.
    fn get(&self, objref: &PDFObjRef) -> Option<&PDFObject>;

    /// Page references in canonical document order.
    fn page_references(&self) -> &[PDFObject];

    /// The document trailer dictionary.
    fn trailer(&self) -> &Dict;

    /// Resolve `obj` to a concrete value.
    ///
    /// Non-reference input is returned unchanged. References to references
    /// are followed; a dangling reference is `ObjectNotFound`.
    fn resolve<'a>(&'a self, obj: &'a PDFObject) -> Result<&'a PDFObject> {
        let mut current = obj;
        for _ in 0..MAX_REF_CHAIN {
            match current {
                PDFObject::Ref(r) => {
                    current = self.get(r).ok_or(PdfError::ObjectNotFound(r.objid))?;
                }
                other => return Ok(other),
            }
        }
        match current {
            PDFObject::Ref(r) => Err(PdfError::ObjectNotFound(r.objid)),
            other => Ok(other),
        }
    }

    /// Resolve `obj` and view it as a dictionary, if it is one.
    fn resolve_dict<'a>(&'a self, obj: &'a PDFObject) -> Option<&'a Dict> {
        self.resolve(obj).ok().and_then(|o| o.as_dict().ok())
    }
}

/// An immutable, fully in-memory document.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    objects: HashMap<u32, PDFObject>,
    pages: Vec<PDFObject>,
    trailer: Dict,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert (or replace) indirect object `objid`.
    pub fn insert(&mut self, objid: u32, obj: impl Into<PDFObject>) -> PDFObject {
        self.objects.insert(objid, obj.into());
        PDFObject::reference(objid)
    }

    /// Append a page reference to the page order.
    pub fn push_page(&mut self, page: PDFObject) {
        self.pages.push(page);
    }

    /// Replace the page order.
    pub fn set_pages(&mut self, pages: Vec<PDFObject>) {
        self.pages = pages;
    }

    /// Replace the trailer dictionary.
    pub fn set_trailer(&mut self, trailer: Dict) {
        self.trailer = trailer;
    }

    /// Number of indirect objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Rebuild the page order by walking `/Root /Pages /Kids` depth first.
    ///
    /// Nodes that were already visited are skipped, so a looping tree still
    /// yields each page once.
    pub fn collect_pages_from_tree(&mut self) {
        self.pages = self.page_tree_order();
    }

    fn page_tree_order(&self) -> Vec<PDFObject> {
        let mut pages = Vec::new();
        let Some(root) = self.trailer.get("Root").and_then(|r| self.resolve_dict(r)) else {
            return pages;
        };
        let mut stack: Vec<PDFObject> = root.get("Pages").cloned().into_iter().collect();
        let mut visited = rustc_hash::FxHashSet::default();

        while let Some(node_ref) = stack.pop() {
            if let PDFObject::Ref(r) = &node_ref
                && !visited.insert(r.objid)
            {
                continue;
            }
            let Some(node) = self.resolve_dict(&node_ref) else {
                continue;
            };
            match node.get("Type").and_then(|t| t.as_name().ok()) {
                Some("Pages") => {
                    if let Some(kids) = node.get("Kids").and_then(|k| self.resolve(k).ok())
                        && let Ok(kids) = kids.as_array()
                    {
                        stack.extend(kids.iter().rev().cloned());
                    }
                }
                Some("Page") => pages.push(node_ref.clone()),
                _ => {}
            }
        }
        pages
    }
}

impl ObjectStore for MemoryStore {
    fn get(&self, objref: &PDFObjRef) -> Option<&PDFObject> {
        self.objects.get(&objref.objid)
    }

    fn page_references(&self) -> &[PDFObject] {
        &self.pages
    }

    fn trailer(&self) -> &Dict {
        &self.trailer
    }
}
