//! Dense 2-D projection of a block tree.
//!
//! [`project`] walks a [`Block`] tree depth-first in source order and writes
//! every block into the [`Grid`] slot named by its cell. Rows are appended as
//! needed and skipped columns are padded with placeholder nodes, so every row
//! is dense from column 0 up to its widest occupied column.
//!
//! A placeholder node has empty color and text, exactly like an explicitly
//! empty block (`[]`). The two are not distinguished.
//!
//! # Example
//!
//! ```
//! # use wirebox_core::{block::Block, cell::Cell, grid};
//! let mut root = Block::new(Cell::new(0, 0), 0);
//! root.push_child(Block::new(Cell::new(2, 1), 1));
//!
//! let grid = grid::project(&root);
//! assert_eq!(grid.rows().len(), 3);
//! assert_eq!(grid.rows()[1].len(), 0);
//! assert_eq!(grid.rows()[2].len(), 2);
//! ```

use log::{debug, trace};

use crate::{
    block::{Block, Content},
    cell::Cell,
};

/// One slot of the grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    row: usize,
    column: usize,
    depth: usize,
    content: Content,
}

impl Node {
    /// Creates a placeholder node for a cell the tree never assigned.
    pub fn placeholder(row: usize, column: usize) -> Self {
        Self {
            row,
            column,
            ..Self::default()
        }
    }

    fn from_block(block: &Block) -> Self {
        let cell = block.cell();
        Self {
            row: cell.row(),
            column: cell.column(),
            depth: block.depth(),
            content: block.content().clone(),
        }
    }

    /// Returns the 0-based row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Returns the 0-based column.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the nesting depth of the originating block.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns the node content.
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the fill color.
    pub fn color(&self) -> &str {
        self.content.color()
    }

    /// Returns the display text.
    pub fn text(&self) -> &str {
        self.content.text()
    }
}

/// Grid dimensions: number of rows and width of the widest row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSize {
    pub rows: usize,
    pub columns: usize,
}

/// Rows of dense, 0-indexed nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Node>>,
}

impl Grid {
    /// Returns all rows.
    pub fn rows(&self) -> &[Vec<Node>] {
        &self.rows
    }

    /// Returns the node at `(row, column)`, if the row reaches that far.
    pub fn get(&self, row: usize, column: usize) -> Option<&Node> {
        self.rows.get(row).and_then(|nodes| nodes.get(column))
    }

    /// Returns the row count and the length of the widest row.
    pub fn size(&self) -> GridSize {
        GridSize {
            rows: self.rows.len(),
            columns: self.rows.iter().map(Vec::len).max().unwrap_or(0),
        }
    }

    /// Iterates over all nodes, row by row.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.rows.iter().flatten()
    }

    /// Returns `true` if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn place(&mut self, cell: Cell, node: Node) {
        let (row, column) = (cell.row(), cell.column());
        while self.rows.len() <= row {
            self.rows.push(Vec::new());
        }

        let nodes = &mut self.rows[row];
        while nodes.len() <= column {
            nodes.push(Node::placeholder(row, nodes.len()));
        }
        nodes[column] = node;
    }
}

/// Projects a block tree onto a dense grid.
///
/// The root lands at its own cell (normally `(0, 0)`); descendants follow
/// depth-first in source order.
pub fn project(root: &Block) -> Grid {
    let mut grid = Grid::default();
    for block in root {
        trace!(cell:? = block.cell(), depth = block.depth(); "Placing block");
        grid.place(block.cell(), Node::from_block(block));
    }

    let size = grid.size();
    debug!(rows = size.rows, columns = size.columns; "Grid projected");
    grid
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::tag::TagSet;

    fn block(row: usize, column: usize, depth: usize, color: &str, text: &str) -> Block {
        let mut block = Block::new(Cell::new(row, column), depth);
        block.set_content(Content::new(color, text, TagSet::new()));
        block
    }

    #[test]
    fn test_project_root_only() {
        let grid = project(&block(0, 0, 0, "lightgray", "Frame"));

        assert_eq!(grid.size(), GridSize { rows: 1, columns: 1 });
        assert_eq!(grid.get(0, 0).map(Node::color), Some("lightgray"));
    }

    #[test]
    fn test_project_pads_rows_and_columns() {
        let mut root = block(0, 0, 0, "lightgray", "Frame");
        root.push_child(block(1, 1, 1, "White", "Message text"));
        root.push_child(block(3, 2, 1, "#ff0505", "Cancel"));

        let grid = project(&root);

        assert_eq!(grid.rows().len(), 4);
        assert_eq!(grid.rows()[1].len(), 2);
        assert!(grid.rows()[2].is_empty());
        assert_eq!(grid.rows()[3].len(), 3);

        let padding = grid.get(1, 0).unwrap();
        assert_eq!((padding.row(), padding.column()), (1, 0));
        assert!(padding.content().is_blank());

        let cancel = grid.get(3, 2).unwrap();
        assert_eq!(cancel.text(), "Cancel");
        assert_eq!(cancel.depth(), 1);
    }

    #[test]
    fn test_project_placeholder_matches_empty_block() {
        let mut root = block(0, 0, 0, "", "");
        root.push_child(block(1, 1, 1, "", ""));

        let grid = project(&root);
        let placeholder = grid.get(1, 0).unwrap();
        let explicit = grid.get(1, 1).unwrap();

        assert_eq!(placeholder.color(), explicit.color());
        assert_eq!(placeholder.text(), explicit.text());
    }

    #[test]
    fn test_size_uses_widest_row() {
        let mut root = block(0, 0, 0, "a", "x");
        root.push_child(block(1, 4, 1, "b", "y"));
        root.push_child(block(2, 0, 1, "c", "z"));

        assert_eq!(project(&root).size(), GridSize { rows: 3, columns: 5 });
    }

    proptest! {
        #[test]
        fn prop_rows_are_dense(cells in prop::collection::vec((0usize..8, 0usize..8), 0..20)) {
            let mut root = block(0, 0, 0, "root", "root");
            for (row, column) in &cells {
                root.push_child(block(*row, *column, 1, "c", "t"));
            }

            let grid = project(&root);

            let max_row = cells.iter().map(|(row, _)| *row).max().unwrap_or(0);
            prop_assert_eq!(grid.rows().len(), max_row + 1);

            for (index, nodes) in grid.rows().iter().enumerate() {
                for (column, node) in nodes.iter().enumerate() {
                    prop_assert_eq!(node.row(), index);
                    prop_assert_eq!(node.column(), column);
                }
            }
            for (row, column) in &cells {
                prop_assert!(grid.rows()[*row].len() > *column);
            }
        }
    }
}
