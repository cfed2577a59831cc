//! Figure (canvas) assembly.
//!
//! A figure owns its axes and drives the compiler over each of them,
//! wrapping the results in a root `svg` node. An axis that fails to
//! compile (degenerate limits) is reported and skipped; sibling axes
//! still render.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::error;

use crate::axes::Axis;
use crate::compile::compile_axis;
use crate::error::PlotResult;
use crate::markup::MarkupNode;

/// A figure containing one or more axes.
#[derive(Debug, Clone)]
pub struct Figure {
    /// Figure width in pixels.
    pub width: u32,
    /// Figure height in pixels.
    pub height: u32,
    axes: Vec<Axis>,
}

impl Figure {
    /// Create a new figure with the given pixel dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Figure {
            width,
            height,
            axes: Vec::new(),
        }
    }

    /// Append an axis at the given placement and return it for
    /// configuration. Axes are never removed.
    pub fn add_axis(
        &mut self,
        origin: (f64, f64),
        size: (f64, f64),
        limits: (f64, f64, f64, f64),
    ) -> &mut Axis {
        self.axes.push(Axis::new(origin, size, limits));
        self.axes.last_mut().expect("axis was just pushed")
    }

    /// All axes, in insertion order.
    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Compile every axis into the root markup node.
    pub fn to_markup(&self) -> MarkupNode {
        let figure = (f64::from(self.width), f64::from(self.height));
        let mut root = MarkupNode::element("svg")
            .attr("width", self.width.to_string())
            .attr("height", self.height.to_string())
            .attr("viewBox", format!("0 0 {} {}", self.width, self.height));

        for (index, axis) in self.axes.iter().enumerate() {
            match compile_axis(axis, figure) {
                Ok(nodes) => {
                    for node in nodes {
                        root.push_child(node);
                    }
                }
                Err(e) => error!("skipping axis {}: {}", index, e),
            }
        }
        root
    }

    /// Render the figure to markup text.
    pub fn render(&self) -> String {
        self.to_markup().serialize()
    }

    /// Save the rendered figure to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> PlotResult<()> {
        let markup = self.render();
        let mut file = File::create(path)?;
        file.write_all(markup.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_node_shape() {
        let fig = Figure::new(800, 600);
        let root = fig.to_markup();
        assert_eq!(root.tag, "svg");
        assert_eq!(root.attributes.get("width").unwrap(), "800");
        assert_eq!(root.attributes.get("height").unwrap(), "600");
        assert_eq!(root.attributes.get("viewBox").unwrap(), "0 0 800 600");
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_axis_background_is_rendered() {
        let mut fig = Figure::new(100, 100);
        fig.add_axis((0.1, 0.1), (0.8, 0.8), (0.0, 1.0, 0.0, 1.0));
        let rendered = fig.render();
        assert!(rendered.starts_with("<svg "));
        assert!(rendered.contains("<rect "));
        assert!(rendered.ends_with("</svg>"));
    }

    #[test]
    fn test_degenerate_axis_is_skipped_not_fatal() {
        let mut fig = Figure::new(100, 100);
        fig.add_axis((0.0, 0.0), (0.5, 1.0), (0.0, 0.0, 0.0, 1.0)); // zero x span
        let ax = fig.add_axis((0.5, 0.0), (0.5, 1.0), (0.0, 1.0, 0.0, 1.0));
        ax.scatter(vec![0.5], vec![0.5], Default::default());
        let root = fig.to_markup();
        // Only the healthy axis contributes: background + marker.
        assert_eq!(root.children.len(), 2);
    }

    #[test]
    fn test_full_pipeline_smoke() {
        let mut fig = Figure::new(400, 300);
        let ax = fig.add_axis((0.1, 0.1), (0.8, 0.8), (0.0, 10.0, 0.0, 10.0));
        ax.line(vec![-5.0, 15.0], vec![5.0, 5.0], Default::default())
            .auto_xticks(5)
            .auto_yticks(5)
            .text("demo", 5.0, 9.0);
        let rendered = fig.render();
        assert!(rendered.contains("<polyline "));
        assert!(rendered.contains("<line "));
        assert!(rendered.contains(">demo</text>"));
    }
}
