//! JSON document loader.
//!
//! A document is a JSON object:
//!
//! ```json
//! {
//!   "trailer": {"Root": {"ref": 1}},
//!   "pages": [{"ref": 3}],
//!   "objects": {
//!     "1": {"Type": "/Catalog", "Pages": {"ref": 2}},
//!     "10": {"stream": {"Filter": "/ASCIIHexDecode"}, "data": "42 54 20 45 54"}
//!   }
//! }
//! ```
//!
//! Strings starting with `/` are names, other strings are byte strings.
//! `{"ref": n}` is an indirect reference and `{"stream": {...}, "data": ...}`
//! a stream (`"hex"` may replace `"data"` for binary payloads). When
//! `pages` is omitted the page order is read from the page tree.

use anyhow::{Context, Result, anyhow, bail};
use memmap2::Mmap;
use pagewalk_core::{Dict, MemoryStore, ObjectStore, PDFObject, PDFStream};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct DocumentJson {
    #[serde(default)]
    trailer: Map<String, Value>,
    #[serde(default)]
    pages: Option<Vec<Value>>,
    #[serde(default)]
    objects: BTreeMap<u32, Value>,
}

/// Load a JSON document from disk.
pub fn load_document(path: &Path) -> Result<MemoryStore> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    // SAFETY: the mapping is read-only and dropped before this function returns.
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("cannot map {}", path.display()))?;
    parse_document(&mmap).with_context(|| format!("invalid document {}", path.display()))
}

/// Build a store from JSON bytes.
pub fn parse_document(bytes: &[u8]) -> Result<MemoryStore> {
    let doc: DocumentJson = serde_json::from_slice(bytes)?;
    let mut store = MemoryStore::new();
    for (objid, value) in &doc.objects {
        let obj = to_object(value).with_context(|| format!("object {objid}"))?;
        store.insert(*objid, obj);
    }
    store.set_trailer(to_dict(&doc.trailer).context("trailer")?);

    match &doc.pages {
        Some(pages) => {
            let pages = pages
                .iter()
                .map(to_object)
                .collect::<Result<Vec<_>>>()
                .context("pages")?;
            store.set_pages(pages);
        }
        None => store.collect_pages_from_tree(),
    }
    tracing::debug!(
        objects = store.len(),
        pages = store.page_references().len(),
        "loaded document"
    );
    Ok(store)
}

fn to_dict(map: &Map<String, Value>) -> Result<Dict> {
    map.iter()
        .map(|(key, value)| Ok((key.clone(), to_object(value)?)))
        .collect()
}

fn to_object(value: &Value) -> Result<PDFObject> {
    Ok(match value {
        Value::Null => PDFObject::Null,
        Value::Bool(b) => PDFObject::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => PDFObject::Int(i),
            None => PDFObject::Real(n.as_f64().ok_or_else(|| anyhow!("bad number {n}"))?),
        },
        Value::String(s) => match s.strip_prefix('/') {
            Some(name) => PDFObject::Name(name.to_string()),
            None => PDFObject::String(s.as_bytes().to_vec()),
        },
        Value::Array(items) => PDFObject::Array(items.iter().map(to_object).collect::<Result<_>>()?),
        Value::Object(map) => {
            if let Some(objid) = map.get("ref") {
                if map.len() != 1 {
                    bail!("reference object has extra keys");
                }
                let objid = objid
                    .as_u64()
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or_else(|| anyhow!("bad reference {objid}"))?;
                PDFObject::reference(objid)
            } else if let Some(attrs) = map.get("stream") {
                let attrs = match attrs {
                    Value::Object(attrs) => to_dict(attrs)?,
                    other => bail!("stream dictionary must be an object, got {other}"),
                };
                PDFStream::new(attrs, stream_data(map)?).into()
            } else {
                PDFObject::Dict(to_dict(map)?)
            }
        }
    })
}

fn stream_data(map: &Map<String, Value>) -> Result<Vec<u8>> {
    match (map.get("data"), map.get("hex")) {
        (Some(Value::String(text)), None) => Ok(text.as_bytes().to_vec()),
        (None, Some(Value::String(hex))) => decode_hex(hex),
        (None, None) => Ok(Vec::new()),
        _ => bail!("stream needs a string \"data\" or \"hex\", not both"),
    }
}

fn decode_hex(hex: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = hex.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    if digits.len() % 2 != 0 {
        bail!("odd number of hex digits");
    }
    digits
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| anyhow!("invalid hex digits {:?}", String::from_utf8_lossy(pair)))
        })
        .collect()
}
