//! PDF object types.

use crate::codec;
use crate::error::{PdfError, Result};
use bytes::Bytes;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// A PDF dictionary (name -> object mapping).
pub type Dict = HashMap<String, PDFObject>;

/// PDF Object types - the fundamental value type in PDF.
#[derive(Debug, Clone, PartialEq)]
pub enum PDFObject {
    /// Null object
    Null,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Real (floating point) value
    Real(f64),
    /// Name object (e.g., /Type, /Font)
    Name(String),
    /// String (byte array)
    String(Vec<u8>),
    /// Array of objects
    Array(Vec<Self>),
    /// Dictionary (name -> object mapping)
    Dict(Dict),
    /// Stream (dictionary + binary data)
    Stream(Box<PDFStream>),
    /// Indirect object reference
    Ref(PDFObjRef),
    /// Bare content stream token that is not in the operator vocabulary
    Keyword(String),
}

impl PDFObject {
    /// Shorthand for an indirect reference with generation 0.
    pub const fn reference(objid: u32) -> Self {
        Self::Ref(PDFObjRef::new(objid, 0))
    }

    /// Shorthand for a name object.
    pub fn name(name: &str) -> Self {
        Self::Name(name.to_string())
    }

    /// Check if this is a null object
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get as boolean
    pub const fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            _ => Err(self.type_error("bool")),
        }
    }

    /// Get as integer
    pub const fn as_int(&self) -> Result<i64> {
        match self {
            Self::Int(n) => Ok(*n),
            _ => Err(self.type_error("int")),
        }
    }

    /// Get numeric value (int or real coerced to f64)
    pub const fn as_num(&self) -> Result<f64> {
        match self {
            Self::Int(n) => Ok(*n as f64),
            Self::Real(n) => Ok(*n),
            _ => Err(self.type_error("number")),
        }
    }

    /// Get as name string
    pub fn as_name(&self) -> Result<&str> {
        match self {
            Self::Name(s) => Ok(s),
            _ => Err(self.type_error("name")),
        }
    }

    /// Get as byte string
    pub fn as_string(&self) -> Result<&[u8]> {
        match self {
            Self::String(s) => Ok(s),
            _ => Err(self.type_error("string")),
        }
    }

    /// Get as array
    pub const fn as_array(&self) -> Result<&Vec<Self>> {
        match self {
            Self::Array(arr) => Ok(arr),
            _ => Err(self.type_error("array")),
        }
    }

    /// Get as dictionary.
    ///
    /// A stream answers with its attribute dictionary, since page tree
    /// nodes and resources are looked up the same way on both.
    pub fn as_dict(&self) -> Result<&Dict> {
        match self {
            Self::Dict(d) => Ok(d),
            Self::Stream(s) => Ok(&s.attrs),
            _ => Err(self.type_error("dict")),
        }
    }

    /// Get as stream
    pub fn as_stream(&self) -> Result<&PDFStream> {
        match self {
            Self::Stream(s) => Ok(s),
            _ => Err(self.type_error("stream")),
        }
    }

    /// Get as object reference
    pub const fn as_ref(&self) -> Result<&PDFObjRef> {
        match self {
            Self::Ref(r) => Ok(r),
            _ => Err(self.type_error("ref")),
        }
    }

    const fn type_error(&self, expected: &'static str) -> PdfError {
        PdfError::TypeError {
            expected,
            got: self.type_name(),
        }
    }

    /// Get type name for error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Real(_) => "real",
            Self::Name(_) => "name",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Dict(_) => "dict",
            Self::Stream(_) => "stream",
            Self::Ref(_) => "ref",
            Self::Keyword(_) => "keyword",
        }
    }
}

/// PDF-like text form, dictionary keys sorted.
impl fmt::Display for PDFObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Real(n) => write!(f, "{n}"),
            Self::Name(name) => write!(f, "/{name}"),
            Self::String(bytes) => {
                if bytes.iter().all(|b| (0x20..0x7f).contains(b)) {
                    f.write_str("(")?;
                    for &b in bytes {
                        if matches!(b, b'(' | b')' | b'\\') {
                            f.write_str("\\")?;
                        }
                        write!(f, "{}", b as char)?;
                    }
                    f.write_str(")")
                } else {
                    f.write_str("<")?;
                    for b in bytes {
                        write!(f, "{b:02x}")?;
                    }
                    f.write_str(">")
                }
            }
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Dict(dict) => fmt_dict(f, dict),
            Self::Stream(stream) => {
                fmt_dict(f, &stream.attrs)?;
                write!(f, " stream[{} bytes]", stream.get_rawdata().len())
            }
            Self::Ref(r) => write!(f, "{} {} R", r.objid, r.genno),
            Self::Keyword(kw) => f.write_str(kw),
        }
    }
}

fn fmt_dict(f: &mut fmt::Formatter<'_>, dict: &Dict) -> fmt::Result {
    let mut keys: Vec<&String> = dict.keys().collect();
    keys.sort();
    f.write_str("<<")?;
    for (i, key) in keys.into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "/{key} {}", dict[key])?;
    }
    f.write_str(">>")
}

impl From<i64> for PDFObject {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for PDFObject {
    fn from(n: f64) -> Self {
        Self::Real(n)
    }
}

impl From<bool> for PDFObject {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<Dict> for PDFObject {
    fn from(d: Dict) -> Self {
        Self::Dict(d)
    }
}

impl From<Vec<PDFObject>> for PDFObject {
    fn from(arr: Vec<PDFObject>) -> Self {
        Self::Array(arr)
    }
}

impl From<PDFStream> for PDFObject {
    fn from(s: PDFStream) -> Self {
        Self::Stream(Box::new(s))
    }
}

/// PDF indirect object reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PDFObjRef {
    /// Object ID
    pub objid: u32,
    /// Generation number
    pub genno: u32,
}

impl PDFObjRef {
    /// Create a new object reference.
    pub const fn new(objid: u32, genno: u32) -> Self {
        Self { objid, genno }
    }
}

/// PDF Stream - dictionary attributes + binary data.
#[derive(Debug, Clone, PartialEq)]
pub struct PDFStream {
    /// Stream dictionary attributes
    pub attrs: Dict,
    /// Raw (possibly encoded) data
    rawdata: Bytes,
}

impl PDFStream {
    /// Create a new stream.
    pub fn new(attrs: Dict, rawdata: impl Into<Bytes>) -> Self {
        Self {
            attrs,
            rawdata: rawdata.into(),
        }
    }

    /// Get raw (undecoded) data.
    pub fn get_rawdata(&self) -> &[u8] {
        self.rawdata.as_ref()
    }

    /// Get attribute by name.
    pub fn get(&self, name: &str) -> Option<&PDFObject> {
        self.attrs.get(name)
    }

    /// Names of the filters applied to this stream, in decoding order.
    ///
    /// Only `/Filter` is read; in a stream dictionary `/F` names an
    /// external file, not a filter.
    pub fn filters(&self) -> Vec<&str> {
        match self.get("Filter") {
            Some(PDFObject::Name(name)) => vec![name.as_str()],
            Some(PDFObject::Array(arr)) => arr.iter().filter_map(|f| f.as_name().ok()).collect(),
            _ => Vec::new(),
        }
    }

    /// Decode parameters paired with [`filters`](Self::filters) by position.
    pub fn filter_params(&self) -> Vec<Option<&Dict>> {
        let count = self.filters().len();
        let mut params = match self.get("DecodeParms") {
            Some(PDFObject::Dict(dict)) => vec![Some(dict)],
            Some(PDFObject::Array(arr)) => arr.iter().map(|p| p.as_dict().ok()).collect(),
            _ => Vec::new(),
        };
        params.resize(count, None);
        params
    }

    /// Get the payload with every filter in `/Filter` undone.
    ///
    /// Borrows the raw data when the stream is unfiltered.
    pub fn unfiltered_data(&self) -> Result<Cow<'_, [u8]>> {
        let filters = self.filters();
        if filters.is_empty() {
            return Ok(Cow::Borrowed(self.get_rawdata()));
        }
        let params = self.filter_params();
        let mut data = self.get_rawdata().to_vec();
        for (filter, parms) in filters.into_iter().zip(params) {
            data = codec::decode(filter, &data, parms)?;
        }
        Ok(Cow::Owned(data))
    }
}
