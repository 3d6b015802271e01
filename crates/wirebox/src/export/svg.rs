//! SVG rendering of projected grids.
//!
//! Every grid cell becomes a rectangle with a centered text label. Cells are
//! laid out on a fixed pitch: with stroke thickness `v`, cell width `w` and
//! height `h`, the cell at `(row, column)` starts at
//! `(column * (w + 2v) + v, row * (h + 2v) + v)`.
//!
//! Cells a row does not reach, and nodes without a color, use the
//! placeholder fill. Cells without text, or tagged `:nostroke`, have no
//! outline. A node tagged `:center` is drawn alone across the full width of
//! its row; with `stretch_single_node_rows` so is the only node of a row.
//!
//! Coordinates are `u32`. Geometry queries return `None` when a coordinate
//! does not fit, and rendering such a grid fails with
//! [`export::Error::Render`].

use std::io::Write;

use log::{debug, info, warn};
use svg::{Document, node::element as svg_element};

use wirebox_core::{
    grid::{Grid, GridSize, Node},
    tag::Tag,
};

use crate::{color::Color, config::StyleConfig, export};

/// Fixed cell pitch of the SVG layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    width: u32,
    height: u32,
    stroke: u32,
}

impl CellGeometry {
    /// Creates the geometry for cells of `width` x `height` separated by a
    /// `stroke` wide gap on every side.
    pub fn new(width: u32, height: u32, stroke: u32) -> Self {
        Self {
            width,
            height,
            stroke,
        }
    }

    /// Returns the cell width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the cell height.
    pub fn height(&self) -> u32 {
        self.height
    }

    fn pitch(&self) -> Option<(u32, u32)> {
        let gap = self.stroke.checked_mul(2)?;
        Some((self.width.checked_add(gap)?, self.height.checked_add(gap)?))
    }

    /// Returns the top-left corner of a cell.
    pub fn origin(&self, row: usize, column: usize) -> Option<(u32, u32)> {
        let (pitch_x, pitch_y) = self.pitch()?;
        Some((
            scaled(column, pitch_x)?.checked_add(self.stroke)?,
            scaled(row, pitch_y)?.checked_add(self.stroke)?,
        ))
    }

    /// Returns the point just past the bottom-right corner of a cell,
    /// including its stroke.
    pub fn end(&self, row: usize, column: usize) -> Option<(u32, u32)> {
        let (x, y) = self.origin(row, column)?;
        Some((
            x.checked_add(self.width)?.checked_add(self.stroke)?,
            y.checked_add(self.height)?.checked_add(self.stroke)?,
        ))
    }

    /// Returns the view size of a grid of `size`.
    pub fn view_size(&self, size: GridSize) -> Option<(u32, u32)> {
        let (pitch_x, pitch_y) = self.pitch()?;
        Some((scaled(size.columns, pitch_x)?, scaled(size.rows, pitch_y)?))
    }

    /// Returns the width of a cell stretched across `columns` columns.
    pub fn span_width(&self, columns: usize) -> Option<u32> {
        let (pitch_x, _) = self.pitch()?;
        Some(scaled(columns, pitch_x)?.saturating_sub(2 * self.stroke))
    }
}

/// `count * pitch`, or `None` if it does not fit in `u32`.
fn scaled(count: usize, pitch: u32) -> Option<u32> {
    u32::try_from(count).ok()?.checked_mul(pitch)
}

/// Builder for [`Svg`].
#[derive(Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    /// Creates a builder using the default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style configuration.
    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Validates the style and creates the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg, export::Error> {
        let default_style = StyleConfig::default();
        let style = self.style.unwrap_or(&default_style);

        Ok(Svg {
            geometry: CellGeometry::new(
                style.rect_width(),
                style.rect_height(),
                style.stroke_thickness(),
            ),
            background: style.background_color().map_err(export::Error::Render)?,
            placeholder: style.placeholder_fill().map_err(export::Error::Render)?,
            stroke: style.stroke_color().map_err(export::Error::Render)?,
            font_size: style.font_size(),
            scale: style.scale(),
            stretch_single_node_rows: style.stretch_single_node_rows(),
        })
    }
}

/// SVG renderer for grids.
#[derive(Debug, Clone)]
pub struct Svg {
    geometry: CellGeometry,
    background: Color,
    placeholder: Color,
    stroke: Color,
    font_size: u32,
    scale: u32,
    stretch_single_node_rows: bool,
}

impl Svg {
    /// Returns the cell geometry.
    pub fn geometry(&self) -> CellGeometry {
        self.geometry
    }

    /// Renders the grid to an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the grid's coordinates do not
    /// fit in `u32`.
    pub fn render_grid(&self, grid: &Grid) -> Result<Document, export::Error> {
        let size = grid.size();
        let too_large = || {
            export::Error::Render(format!(
                "grid of {} rows and {} columns is too large to render",
                size.rows, size.columns
            ))
        };

        // Cells lie inside the view, so its size bounds every coordinate.
        let (view_width, view_height) = self.geometry.view_size(size).ok_or_else(too_large)?;
        let span_width = self.geometry.span_width(size.columns).ok_or_else(too_large)?;
        let physical_width = view_width.checked_mul(self.scale).ok_or_else(too_large)?;
        let physical_height = view_height.checked_mul(self.scale).ok_or_else(too_large)?;
        debug!(rows = size.rows, columns = size.columns; "Rendering grid");

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {view_width} {view_height}"))
            .set("width", physical_width)
            .set("height", physical_height)
            .add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", view_width)
                    .set("height", view_height)
                    .set("fill", &self.background),
            );

        for (row, nodes) in grid.rows().iter().enumerate() {
            if let Some(node) = self.spanning_node(nodes) {
                let (x, y) = self.geometry.origin(row, 0).ok_or_else(too_large)?;
                doc = self.add_cell(doc, x, y, span_width, Some(node));
                continue;
            }

            for column in 0..size.columns {
                let (x, y) = self.geometry.origin(row, column).ok_or_else(too_large)?;
                doc = self.add_cell(doc, x, y, self.geometry.width(), nodes.get(column));
            }
        }
        Ok(doc)
    }

    fn spanning_node<'n>(&self, nodes: &'n [Node]) -> Option<&'n Node> {
        nodes
            .iter()
            .find(|node| node.content().has_tag(Tag::Center))
            .or_else(|| match nodes {
                [only] if self.stretch_single_node_rows => Some(only),
                _ => None,
            })
    }

    fn add_cell(&self, doc: Document, x: u32, y: u32, width: u32, node: Option<&Node>) -> Document {
        let text = node.map(Node::text).unwrap_or_default();
        let outlined = node.is_some_and(|node| {
            !text.trim().is_empty() && !node.content().has_tag(Tag::NoStroke)
        });

        let rect = svg_element::Rectangle::new()
            .set("x", x)
            .set("y", y)
            .set("width", width)
            .set("height", self.geometry.height())
            .set("fill", self.fill(node))
            .set(
                "stroke",
                if outlined {
                    self.stroke.as_str()
                } else {
                    "none"
                },
            );

        let label = svg_element::Text::new(text)
            .set("x", x + width / 2)
            .set("y", y + self.geometry.height().saturating_sub(3))
            .set("text-anchor", "middle")
            .set("font-size", self.font_size);

        doc.add(rect).add(label)
    }

    fn fill(&self, node: Option<&Node>) -> String {
        let color = node.map(Node::color).unwrap_or_default();
        if color.is_empty() {
            return self.placeholder.to_string();
        }

        match Color::new(color) {
            Ok(color) => color.to_string(),
            Err(err) => {
                warn!(err:%; "Using placeholder fill");
                self.placeholder.to_string()
            }
        }
    }
}

impl export::Exporter for Svg {
    fn export_grid(&mut self, grid: &Grid, out: &mut dyn Write) -> Result<(), export::Error> {
        let doc = self.render_grid(grid)?;
        debug!("SVG document rendered");

        write!(out, "{doc}").map_err(export::Error::Io)?;
        info!("SVG written");
        Ok(())
    }
}
