//! Page attribute inheritance.
//!
//! A page dictionary only carries the attributes it overrides; the rest
//! (resources, boxes, rotation) come from the nearest `Pages` node above
//! it that defines them. [`resolve`] walks the `Parent` chain and merges the
//! levels with first-write-wins precedence, so the value closest to the
//! leaf is the one that sticks.

use super::options::PageOptions;
use super::store::ObjectStore;
use crate::error::{PdfError, Result};
use crate::model::objects::{Dict, PDFObject};
use rustc_hash::FxHashSet;
use std::collections::hash_map::Entry;

/// Attribute keys a page inherits from its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InheritableKey {
    Resources,
    MediaBox,
    CropBox,
    Rotate,
    Parent,
}

impl InheritableKey {
    pub const ALL: [Self; 5] = [
        Self::Resources,
        Self::MediaBox,
        Self::CropBox,
        Self::Rotate,
        Self::Parent,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Resources => "Resources",
            Self::MediaBox => "MediaBox",
            Self::CropBox => "CropBox",
            Self::Rotate => "Rotate",
            Self::Parent => "Parent",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == key)
    }
}

/// Check whether an ancestor's value for `key` flows down to its pages.
pub fn is_inheritable(key: &str) -> bool {
    InheritableKey::from_key(key).is_some()
}

/// Named categories of the `Resources` dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceCategory {
    ColorSpace,
    Font,
    ExtGState,
    Pattern,
    ProcSet,
    Properties,
    Shading,
    XObject,
}

impl ResourceCategory {
    pub const COUNT: usize = 8;

    pub const ALL: [Self; Self::COUNT] = [
        Self::ColorSpace,
        Self::Font,
        Self::ExtGState,
        Self::Pattern,
        Self::ProcSet,
        Self::Properties,
        Self::Shading,
        Self::XObject,
    ];

    /// Key of this category in the `Resources` dictionary.
    pub const fn key(self) -> &'static str {
        match self {
            Self::ColorSpace => "ColorSpace",
            Self::Font => "Font",
            Self::ExtGState => "ExtGState",
            Self::Pattern => "Pattern",
            Self::ProcSet => "ProcSet",
            Self::Properties => "Properties",
            Self::Shading => "Shading",
            Self::XObject => "XObject",
        }
    }
}

/// The flattened attributes of one page after inheritance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveAttributes {
    attrs: Dict,
}

impl EffectiveAttributes {
    pub fn get(&self, key: &str) -> Option<&PDFObject> {
        self.attrs.get(key)
    }

    pub fn get_inherited(&self, key: InheritableKey) -> Option<&PDFObject> {
        self.attrs.get(key.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.attrs.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PDFObject)> {
        self.attrs.iter()
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn as_dict(&self) -> &Dict {
        &self.attrs
    }

    /// Merge one level of the chain. Keys already present win.
    fn merge_from(&mut self, level: &Dict, leaf: bool) {
        for (key, value) in level {
            if !leaf && !is_inheritable(key) {
                continue;
            }
            if let Entry::Vacant(slot) = self.attrs.entry(key.clone()) {
                slot.insert(value.clone());
            }
        }
    }
}

/// Collect `node` followed by each of its ancestors, leaf first.
///
/// `node_id` is the object number of the page itself, if it has one, so a
/// `Parent` pointing back at the page is detected on the first step. A
/// `Parent` that is missing, dangling or not a dictionary ends the chain.
pub fn ancestor_chain<'a>(
    store: &'a dyn ObjectStore,
    node: &'a Dict,
    node_id: Option<u32>,
    options: &PageOptions,
) -> Result<Vec<&'a Dict>> {
    let mut visited = FxHashSet::default();
    visited.extend(node_id);
    let mut chain = vec![node];
    let mut current = node;

    while let Some(parent) = current.get(InheritableKey::Parent.as_str()) {
        if let PDFObject::Ref(r) = parent
            && !visited.insert(r.objid)
        {
            return Err(PdfError::MalformedHierarchy(format!(
                "Parent chain loops back to object {}",
                r.objid
            )));
        }
        if chain.len() >= options.max_tree_depth {
            return Err(PdfError::MalformedHierarchy(format!(
                "Parent chain deeper than {} nodes",
                options.max_tree_depth
            )));
        }
        let resolved = match store.resolve(parent) {
            Ok(obj) => obj,
            Err(err) => {
                tracing::debug!(%err, "unresolvable Parent ends the ancestor chain");
                break;
            }
        };
        let Ok(parent_dict) = resolved.as_dict() else {
            tracing::debug!(got = resolved.type_name(), "Parent is not a dictionary");
            break;
        };
        chain.push(parent_dict);
        current = parent_dict;
    }

    Ok(chain)
}

/// Compute the effective attributes of `node`.
///
/// The leaf contributes every key; each ancestor contributes only the
/// inheritable ones, and only where nothing closer to the leaf already
/// defined them.
pub fn resolve(
    store: &dyn ObjectStore,
    node: &Dict,
    node_id: Option<u32>,
    options: &PageOptions,
) -> Result<EffectiveAttributes> {
    let chain = ancestor_chain(store, node, node_id, options)?;
    let mut attrs = EffectiveAttributes::default();
    for (depth, level) in chain.into_iter().enumerate() {
        attrs.merge_from(level, depth == 0);
    }
    Ok(attrs)
}

/// Dereference the `Resources` entry; empty when absent or unusable.
pub fn resources(store: &dyn ObjectStore, attrs: &EffectiveAttributes) -> Dict {
    attrs
        .get_inherited(InheritableKey::Resources)
        .and_then(|r| store.resolve_dict(r))
        .cloned()
        .unwrap_or_default()
}

/// Dereference one category of a resource dictionary.
///
/// A missing category is an empty table, never an error.
pub fn resource_table(store: &dyn ObjectStore, resources: &Dict, category: ResourceCategory) -> Dict {
    resources
        .get(category.key())
        .and_then(|t| store.resolve_dict(t))
        .cloned()
        .unwrap_or_default()
}

/// Dereference the `ProcSet` array; empty when absent.
pub fn procedure_sets(store: &dyn ObjectStore, resources: &Dict) -> Vec<PDFObject> {
    resources
        .get(ResourceCategory::ProcSet.key())
        .and_then(|p| store.resolve(p).ok())
        .and_then(|p| p.as_array().ok())
        .map(|arr| {
            arr.iter()
                .map(|item| store.resolve(item).cloned().unwrap_or_else(|_| item.clone()))
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::store::MemoryStore;

    fn dict(entries: &[(&str, PDFObject)]) -> Dict {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_leaf_keeps_non_inheritable_keys_but_ancestors_do_not() {
        let mut store = MemoryStore::new();
        let parent = store.insert(
            1,
            dict(&[
                ("Type", PDFObject::name("Pages")),
                ("Count", PDFObject::Int(1)),
                ("Rotate", PDFObject::Int(90)),
            ]),
        );
        let leaf = dict(&[
            ("Type", PDFObject::name("Page")),
            ("Parent", parent.clone()),
            ("Contents", PDFObject::reference(5)),
        ]);

        let attrs = resolve(&store, &leaf, Some(2), &PageOptions::default()).unwrap();
        assert_eq!(attrs.get("Type"), Some(&PDFObject::name("Page")));
        assert_eq!(attrs.get("Contents"), Some(&PDFObject::reference(5)));
        assert_eq!(attrs.get("Rotate"), Some(&PDFObject::Int(90)));
        assert_eq!(attrs.get("Parent"), Some(&parent));
        assert!(!attrs.contains_key("Count"));
    }

    #[test]
    fn test_direct_parent_chain_is_bounded_by_depth() {
        let store = MemoryStore::new();
        let mut node = dict(&[("Rotate", PDFObject::Int(0))]);
        for _ in 0..10 {
            node = dict(&[("Parent", PDFObject::Dict(node))]);
        }
        let options = PageOptions::default().max_tree_depth(4);
        let err = resolve(&store, &node, None, &options).unwrap_err();
        assert!(matches!(err, PdfError::MalformedHierarchy(_)));

        let attrs = resolve(&store, &node, None, &PageOptions::default()).unwrap();
        assert_eq!(attrs.get("Rotate"), Some(&PDFObject::Int(0)));
    }

    #[test]
    fn test_dangling_parent_ends_chain() {
        let store = MemoryStore::new();
        let leaf = dict(&[("Parent", PDFObject::reference(40))]);
        let attrs = resolve(&store, &leaf, Some(1), &PageOptions::default()).unwrap();
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn test_procedure_sets_resolve_members() {
        let mut store = MemoryStore::new();
        let text = store.insert(7, PDFObject::name("Text"));
        let resources = dict(&[(
            "ProcSet",
            PDFObject::Array(vec![PDFObject::name("PDF"), text]),
        )]);
        assert_eq!(
            procedure_sets(&store, &resources),
            vec![PDFObject::name("PDF"), PDFObject::name("Text")]
        );
        assert!(procedure_sets(&store, &Dict::new()).is_empty());
    }
}
