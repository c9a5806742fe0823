//! Page facade - one page of a document, its attributes and its content.

use super::attributes::{self, EffectiveAttributes, InheritableKey, ResourceCategory};
use super::options::PageOptions;
use super::store::ObjectStore;
use crate::error::{PdfError, Result};
use crate::interp::operators::PageObserver;
use crate::interp::text::TextObserver;
use crate::interp::walker;
use crate::model::objects::{Dict, PDFObject};
use once_cell::unsync::OnceCell;
use std::fmt;

/// Page box as `[x0, y0, x1, y1]`.
pub type PageBox = [f64; 4];

/// Media box assumed when a page tree defines none (US Letter).
pub const DEFAULT_MEDIA_BOX: PageBox = [0.0, 0.0, 612.0, 792.0];

/// The five page boundary boxes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageBoxes {
    pub media: PageBox,
    pub crop: PageBox,
    pub bleed: PageBox,
    pub trim: PageBox,
    pub art: PageBox,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// A single page, opened by its 1-based number.
///
/// Attributes, resources and resource tables are computed on first use
/// and cached for the lifetime of the value.
pub struct Page<'a> {
    store: &'a dyn ObjectStore,
    number: usize,
    node: &'a Dict,
    node_id: Option<u32>,
    options: PageOptions,
    attrs: OnceCell<EffectiveAttributes>,
    resources: OnceCell<Dict>,
    tables: [OnceCell<Dict>; ResourceCategory::COUNT],
    procedure_sets: OnceCell<Vec<PDFObject>>,
}

impl fmt::Debug for Page<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page")
            .field("number", &self.number)
            .field("node_id", &self.node_id)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> Page<'a> {
    /// Open page `number` (1-based) with default options.
    pub fn open(store: &'a dyn ObjectStore, number: usize) -> Result<Self> {
        Self::open_with_options(store, number, PageOptions::default())
    }

    pub fn open_with_options(
        store: &'a dyn ObjectStore,
        number: usize,
        options: PageOptions,
    ) -> Result<Self> {
        let pages = store.page_references();
        let page_ref = number
            .checked_sub(1)
            .and_then(|idx| pages.get(idx))
            .ok_or_else(|| {
                PdfError::InvalidPage(format!(
                    "page {number} out of range (document has {})",
                    pages.len()
                ))
            })?;
        let resolved = store
            .resolve(page_ref)
            .map_err(|err| PdfError::InvalidPage(format!("page {number}: {err}")))?;
        let PDFObject::Dict(node) = resolved else {
            return Err(PdfError::InvalidPage(format!(
                "page {number} is a {}, not a dictionary",
                resolved.type_name()
            )));
        };
        let node_id = match page_ref {
            PDFObject::Ref(r) => Some(r.objid),
            _ => None,
        };

        Ok(Self {
            store,
            number,
            node,
            node_id,
            options,
            attrs: OnceCell::new(),
            resources: OnceCell::new(),
            tables: [const { OnceCell::new() }; ResourceCategory::COUNT],
            procedure_sets: OnceCell::new(),
        })
    }

    /// The 1-based page number this page was opened with.
    pub const fn number(&self) -> usize {
        self.number
    }

    pub fn store(&self) -> &'a dyn ObjectStore {
        self.store
    }

    pub const fn options(&self) -> &PageOptions {
        &self.options
    }

    /// The page dictionary as stored, before inheritance.
    pub const fn node(&self) -> &'a Dict {
        self.node
    }

    /// Attributes after inheritance from the page tree.
    pub fn attributes(&self) -> Result<&EffectiveAttributes> {
        self.attrs.get_or_try_init(|| {
            attributes::resolve(self.store, self.node, self.node_id, &self.options)
        })
    }

    /// The dereferenced `Resources` dictionary, empty when absent.
    pub fn resources(&self) -> Result<&Dict> {
        let attrs = self.attributes()?;
        Ok(self
            .resources
            .get_or_init(|| attributes::resources(self.store, attrs)))
    }

    /// One category of the resource dictionary, empty when absent.
    pub fn resource_table(&self, category: ResourceCategory) -> Result<&Dict> {
        let resources = self.resources()?;
        let slot = &self.tables[category as usize];
        Ok(slot.get_or_init(|| attributes::resource_table(self.store, resources, category)))
    }

    pub fn color_spaces(&self) -> Result<&Dict> {
        self.resource_table(ResourceCategory::ColorSpace)
    }

    pub fn fonts(&self) -> Result<&Dict> {
        self.resource_table(ResourceCategory::Font)
    }

    pub fn graphic_states(&self) -> Result<&Dict> {
        self.resource_table(ResourceCategory::ExtGState)
    }

    pub fn patterns(&self) -> Result<&Dict> {
        self.resource_table(ResourceCategory::Pattern)
    }

    /// Entries of the `ProcSet` array, empty when absent.
    pub fn procedure_sets(&self) -> Result<&[PDFObject]> {
        let resources = self.resources()?;
        Ok(self
            .procedure_sets
            .get_or_init(|| attributes::procedure_sets(self.store, resources))
            .as_slice())
    }

    pub fn properties(&self) -> Result<&Dict> {
        self.resource_table(ResourceCategory::Properties)
    }

    pub fn shadings(&self) -> Result<&Dict> {
        self.resource_table(ResourceCategory::Shading)
    }

    pub fn xobjects(&self) -> Result<&Dict> {
        self.resource_table(ResourceCategory::XObject)
    }

    /// Decoded bytes of every content stream of the page, in order.
    ///
    /// Streams are separated by a newline so tokens never merge across a
    /// stream boundary. Missing, dangling and undecodable entries are
    /// skipped.
    pub fn raw_content(&self) -> Vec<u8> {
        let Some(contents) = self.node.get("Contents") else {
            return Vec::new();
        };
        let resolved = match self.store.resolve(contents) {
            Ok(obj) => obj,
            Err(err) => {
                tracing::debug!(page = self.number, %err, "unresolvable Contents");
                return Vec::new();
            }
        };
        let parts: Vec<&PDFObject> = match resolved {
            PDFObject::Array(items) => items.iter().collect(),
            other => vec![other],
        };

        let mut out = Vec::new();
        for part in parts {
            let stream = match self.store.resolve(part).and_then(PDFObject::as_stream) {
                Ok(stream) => stream,
                Err(err) => {
                    tracing::debug!(page = self.number, %err, "skipping content entry");
                    continue;
                }
            };
            match stream.unfiltered_data() {
                Ok(data) => {
                    if !out.is_empty() {
                        out.push(b'\n');
                    }
                    out.extend_from_slice(&data);
                }
                Err(err) => {
                    tracing::warn!(page = self.number, %err, "skipping undecodable content stream");
                }
            }
        }
        out
    }

    /// Run the page content through `observers`.
    ///
    /// Each observer gets `page_begin` first, then every instruction in
    /// stream order. Returns the number of instructions dispatched.
    pub fn walk(&self, observers: &mut [&mut dyn PageObserver]) -> Result<usize> {
        let content = self.raw_content();
        for observer in observers.iter_mut() {
            observer.page_begin(self);
        }
        walker::walk(&content, observers, &self.options)
    }

    /// Extract the page text.
    pub fn text(&self) -> Result<String> {
        let mut observer = TextObserver::new(self.options.replacement_char);
        self.walk(&mut [&mut observer])?;
        Ok(observer.into_text())
    }

    fn page_box(&self, key: &str) -> Result<Option<PageBox>> {
        let attrs = self.attributes()?;
        Ok(attrs.get(key).and_then(|obj| parse_box(self.store, obj)))
    }

    /// `MediaBox`, or US Letter when the tree defines none.
    pub fn media_box(&self) -> Result<PageBox> {
        Ok(self
            .page_box(InheritableKey::MediaBox.as_str())?
            .unwrap_or(DEFAULT_MEDIA_BOX))
    }

    /// `CropBox`, defaulting to the media box.
    pub fn crop_box(&self) -> Result<PageBox> {
        match self.page_box(InheritableKey::CropBox.as_str())? {
            Some(crop) => Ok(crop),
            None => self.media_box(),
        }
    }

    /// All boundary boxes; bleed, trim and art default to the crop box.
    pub fn rectangles(&self) -> Result<PageBoxes> {
        let media = self.media_box()?;
        let crop = self.crop_box()?;
        Ok(PageBoxes {
            media,
            crop,
            bleed: self.page_box("BleedBox")?.unwrap_or(crop),
            trim: self.page_box("TrimBox")?.unwrap_or(crop),
            art: self.page_box("ArtBox")?.unwrap_or(crop),
        })
    }

    /// Rotation in degrees: 0, 90, 180 or 270.
    pub fn rotate(&self) -> Result<u16> {
        let attrs = self.attributes()?;
        let raw = attrs
            .get_inherited(InheritableKey::Rotate)
            .and_then(|r| self.store.resolve(r).ok())
            .and_then(|r| r.as_num().ok())
            .unwrap_or(0.0) as i64;
        let normalized = raw.rem_euclid(360);
        if normalized % 90 != 0 {
            tracing::debug!(page = self.number, rotate = raw, "ignoring non-quarter rotation");
            return Ok(0);
        }
        Ok(normalized as u16)
    }

    /// Width of the media box as displayed, rotation applied.
    pub fn width(&self) -> Result<f64> {
        let [x0, y0, x1, y1] = self.media_box()?;
        Ok(if self.rotate()? % 180 == 0 { x1 - x0 } else { y1 - y0 })
    }

    /// Height of the media box as displayed, rotation applied.
    pub fn height(&self) -> Result<f64> {
        let [x0, y0, x1, y1] = self.media_box()?;
        Ok(if self.rotate()? % 180 == 0 { y1 - y0 } else { x1 - x0 })
    }

    /// Lower-left corner of the media box.
    pub fn origin(&self) -> Result<(f64, f64)> {
        let [x0, y0, _, _] = self.media_box()?;
        Ok((x0, y0))
    }

    pub fn orientation(&self) -> Result<Orientation> {
        Ok(if self.width()? > self.height()? {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        })
    }
}

/// Read a four-number rectangle, normalising corner order.
fn parse_box(store: &dyn ObjectStore, obj: &PDFObject) -> Option<PageBox> {
    let arr = store.resolve(obj).ok()?.as_array().ok()?;
    if arr.len() != 4 {
        return None;
    }
    let mut nums = [0.0; 4];
    for (slot, item) in nums.iter_mut().zip(arr) {
        *slot = store.resolve(item).ok()?.as_num().ok()?;
    }
    let [a, b, c, d] = nums;
    Some([a.min(c), b.min(d), a.max(c), b.max(d)])
}
