//! The parsed block tree.
//!
//! A [`Block`] is one bracketed region of a Wirebox document. The scanner
//! builds the tree and collects each block's own characters into its raw
//! body; the extractor later normalizes the body into [`Content`].
//!
//! # Example
//!
//! ```
//! # use wirebox_core::{block::Block, cell::Cell};
//! let mut root = Block::new(Cell::new(0, 0), 0);
//! root.push_body("lightgray: Frame");
//! root.push_child(Block::new(Cell::new(1, 0), 1));
//!
//! assert_eq!(root.children().len(), 1);
//! assert_eq!(root.iter().count(), 2);
//! ```

use std::ops::Range;

use crate::{
    cell::Cell,
    tag::{Tag, TagSet},
};

/// Extracted leaf content: fill color, display text and tags.
///
/// The default value (empty color and text, no tags) doubles as the
/// placeholder content of grid cells the tree never assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Content {
    color: String,
    text: String,
    tags: TagSet,
}

impl Content {
    /// Creates content from its parts.
    pub fn new(color: impl Into<String>, text: impl Into<String>, tags: TagSet) -> Self {
        Self {
            color: color.into(),
            text: text.into(),
            tags,
        }
    }

    /// Returns the color: a bare identifier, a `#rrggbb` literal, or empty.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Returns the display text with tag tokens removed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the tags in first-occurrence order.
    pub fn tags(&self) -> &TagSet {
        &self.tags
    }

    /// Returns `true` if the content carries the given tag.
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    /// Returns `true` if both color and text are empty.
    pub fn is_blank(&self) -> bool {
        self.color.is_empty() && self.text.is_empty()
    }
}

/// A node of the parsed tree.
///
/// Children are kept in source order. Every child sits exactly one level
/// deeper than its parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    body: String,
    content: Content,
    cell: Cell,
    depth: usize,
    source_range: Range<usize>,
    children: Vec<Block>,
}

impl Block {
    /// Creates an empty block anchored at `cell`, at nesting `depth`.
    pub fn new(cell: Cell, depth: usize) -> Self {
        Self {
            cell,
            depth,
            ..Self::default()
        }
    }

    /// Returns the characters collected for this block, children excluded.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the extracted content.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the extracted color.
    pub fn color(&self) -> &str {
        self.content.color()
    }

    /// Returns the extracted display text.
    pub fn text(&self) -> &str {
        self.content.text()
    }

    /// Returns the extracted tags.
    pub fn tags(&self) -> &TagSet {
        self.content.tags()
    }

    /// Returns the cell this block is anchored at.
    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Returns the nesting depth; the outermost block has depth 0.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the byte range of the block in its source document, from the
    /// opening bracket up to and including the closing one.
    ///
    /// For a block cut short by the end of input the range ends at the end
    /// of the buffer.
    pub fn source_range(&self) -> Range<usize> {
        self.source_range.clone()
    }

    /// Records the byte range of the block in its source document.
    pub fn set_source_range(&mut self, range: Range<usize>) {
        self.source_range = range;
    }

    /// Returns the children in source order.
    pub fn children(&self) -> &[Block] {
        &self.children
    }

    /// Mutable access to the children, for post-processing passes.
    pub fn children_mut(&mut self) -> &mut [Block] {
        &mut self.children
    }

    /// Appends a character to the raw body.
    pub fn push_char(&mut self, ch: char) {
        self.body.push(ch);
    }

    /// Appends a string to the raw body.
    pub fn push_body(&mut self, text: &str) {
        self.body.push_str(text);
    }

    /// Appends a child block.
    pub fn push_child(&mut self, child: Block) {
        debug_assert_eq!(child.depth, self.depth + 1, "child depth must follow parent");
        self.children.push(child);
    }

    /// Replaces the extracted content.
    pub fn set_content(&mut self, content: Content) {
        self.content = content;
    }

    /// Iterates over this block and all descendants, depth-first in source
    /// order.
    pub fn iter(&self) -> Iter<'_> {
        Iter { stack: vec![self] }
    }
}

/// Depth-first, pre-order iterator over a block tree.
pub struct Iter<'a> {
    stack: Vec<&'a Block>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Block;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.stack.pop()?;
        self.stack.extend(block.children.iter().rev());
        Some(block)
    }
}

impl<'a> IntoIterator for &'a Block {
    type Item = &'a Block;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(row: usize, column: usize, depth: usize, body: &str) -> Block {
        let mut block = Block::new(Cell::new(row, column), depth);
        block.push_body(body);
        block
    }

    #[test]
    fn test_iter_is_preorder_in_source_order() {
        let mut root = leaf(0, 0, 0, "root");
        let mut first = leaf(1, 0, 1, "first");
        first.push_child(leaf(2, 0, 2, "nested"));
        root.push_child(first);
        root.push_child(leaf(1, 1, 1, "second"));

        let bodies: Vec<_> = root.iter().map(Block::body).collect();
        assert_eq!(bodies, vec!["root", "first", "nested", "second"]);
    }

    #[test]
    fn test_content_accessors() {
        let mut tags = TagSet::new();
        tags.insert(Tag::Center);
        let mut block = Block::new(Cell::default(), 0);
        block.set_content(Content::new("White", "Message", tags));

        assert_eq!(block.color(), "White");
        assert_eq!(block.text(), "Message");
        assert!(block.content().has_tag(Tag::Center));
        assert!(!block.content().has_tag(Tag::NoStroke));
        assert!(!block.content().is_blank());
    }

    #[test]
    fn test_default_content_is_blank() {
        assert!(Content::default().is_blank());
        assert!(Block::default().content().is_blank());
    }
}
