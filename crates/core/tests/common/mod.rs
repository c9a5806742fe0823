//! Shared fixtures for integration tests.

#![allow(dead_code)]

use pagewalk_core::{Dict, MemoryStore, PDFObject, PDFStream};

pub fn dict(entries: &[(&str, PDFObject)]) -> Dict {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

pub fn stream(data: &[u8]) -> PDFObject {
    PDFStream::new(Dict::new(), data.to_vec()).into()
}

/// One page (object 3) under a root `Pages` node (object 2).
///
/// `page_entries` go into the page dictionary, `root_entries` into the
/// root node.
pub fn one_page_doc(page_entries: &[(&str, PDFObject)], root_entries: &[(&str, PDFObject)]) -> MemoryStore {
    let mut store = MemoryStore::new();
    let mut root = dict(&[
        ("Type", PDFObject::name("Pages")),
        ("Kids", PDFObject::Array(vec![PDFObject::reference(3)])),
        ("Count", PDFObject::Int(1)),
    ]);
    root.extend(dict(root_entries));
    store.insert(2, root);

    let mut page = dict(&[
        ("Type", PDFObject::name("Page")),
        ("Parent", PDFObject::reference(2)),
    ]);
    page.extend(dict(page_entries));
    let page_ref = store.insert(3, page);
    let catalog = store.insert(1, dict(&[("Type", PDFObject::name("Catalog")), ("Pages", PDFObject::reference(2))]));
    store.set_trailer(dict(&[("Root", catalog)]));
    store.push_page(page_ref);
    store
}

/// A single page whose content is `content`, with `resources` inherited
/// from the root node.
pub fn content_doc(content: &[u8], resources: Dict) -> MemoryStore {
    let mut store = one_page_doc(
        &[("Contents", PDFObject::reference(10))],
        &[("Resources", PDFObject::Dict(resources))],
    );
    store.insert(10, stream(content));
    store
}
