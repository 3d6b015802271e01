//! Plain-text dumps of the block tree and the projected grid.

use std::fmt::Write;

use wirebox::{
    block::{Block, Content},
    grid::Grid,
};

/// Formats the tree one block per line, indented by depth.
///
/// ```text
/// (0, 0) lightgray "Frame"
///   (1, 0) -
///   (1, 1) White "Message text"
/// ```
pub fn format_tree(root: &Block) -> String {
    let mut out = String::new();
    for block in root {
        let indent = "  ".repeat(block.depth());
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{indent}{} {}", block.cell(), describe(block.content()));
    }
    out
}

/// Formats the grid one row per line, nodes separated by ` | `.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::new();
    for (index, row) in grid.rows().iter().enumerate() {
        let _ = write!(out, "row {index}:");
        if !row.is_empty() {
            let nodes: Vec<String> = row.iter().map(|node| describe(node.content())).collect();
            let _ = write!(out, " {}", nodes.join(" | "));
        }
        out.push('\n');
    }
    out
}

fn describe(content: &Content) -> String {
    if content.is_blank() {
        return "-".to_string();
    }
    let mut line = format!("{} {:?}", content.color(), content.text());
    for tag in content.tags() {
        let _ = write!(line, " {tag}");
    }
    line
}

#[cfg(test)]
mod tests {
    use wirebox::DiagramBuilder;

    use super::*;

    const FRAME: &str = "\
[lightgray: Frame
    [] [White: Message text]
    //
    [goldenrod: OK Button :center]
]
";

    #[test]
    fn test_format_tree() {
        let builder = DiagramBuilder::default();
        let diagram = builder.parse(FRAME).unwrap();

        assert_eq!(
            format_tree(diagram.root()),
            "(0, 0) lightgray \"Frame\"\n\
             \x20 (1, 0) -\n\
             \x20 (1, 1) White \"Message text\"\n\
             \x20 (3, 0) goldenrod \"OK Button\" :center\n"
        );
    }

    #[test]
    fn test_format_grid_keeps_empty_rows() {
        let builder = DiagramBuilder::default();
        let diagram = builder.parse(FRAME).unwrap();
        let grid = builder.project(&diagram);

        assert_eq!(
            format_grid(&grid),
            "row 0: lightgray \"Frame\"\n\
             row 1: - | White \"Message text\"\n\
             row 2:\n\
             row 3: goldenrod \"OK Button\" :center\n"
        );
    }
}
