//! Options controlling page resolution and content walking.

/// Placeholder used for characters the active font cannot decode (▯).
pub const REPLACEMENT_CHAR: char = '\u{25AF}';

/// Knobs for [`Page`](super::page::Page).
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Maximum number of nodes in a page's ancestor chain, the page
    /// itself included. Longer chains are a `MalformedHierarchy`.
    pub max_tree_depth: usize,

    /// Reject operands left over at the end of a content stream instead
    /// of discarding them.
    pub strict_operands: bool,

    /// Character substituted for undecodable text.
    pub replacement_char: char,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            max_tree_depth: 256,
            strict_operands: false,
            replacement_char: REPLACEMENT_CHAR,
        }
    }
}

impl PageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ancestor chain bound.
    pub fn max_tree_depth(mut self, depth: usize) -> Self {
        self.max_tree_depth = depth;
        self
    }

    /// Sets whether trailing operands are an error.
    pub fn strict_operands(mut self, strict: bool) -> Self {
        self.strict_operands = strict;
        self
    }

    /// Sets the placeholder for undecodable text.
    pub fn replacement_char(mut self, ch: char) -> Self {
        self.replacement_char = ch;
        self
    }
}
