//! Declarative chart rendering to SVG markup.
//!
//! Builds figures from axes holding line, bar, scatter, tick and text
//! elements, maps data through each axis's normalized placement into
//! image coordinates, clips line plots against the visible data
//! rectangle, and serializes everything as a vector-image markup tree.
//!
//! ```
//! use rustplot::prelude::*;
//!
//! let mut fig = Figure::new(640, 480);
//! let ax = fig.add_axis((0.1, 0.1), (0.8, 0.8), (0.0, 10.0, 0.0, 10.0));
//! ax.line(vec![0.0, 5.0, 10.0], vec![2.0, 8.0, 3.0], style([("stroke", "steelblue")]))
//!     .auto_xticks(5)
//!     .auto_yticks(5);
//! let svg = fig.render();
//! assert!(svg.starts_with("<svg "));
//! ```

pub mod axes;
pub mod clip;
pub mod compile;
pub mod element;
pub mod error;
pub mod figure;
pub mod markup;
pub mod style;
pub mod ticks;
pub mod transform;

pub use axes::Axis;
pub use clip::clip_polyline;
pub use element::{BarPlot, Element, LinePlot, ScatterPlot, Text, Ticks};
pub use error::{PlotError, PlotResult};
pub use figure::Figure;
pub use markup::{Child, MarkupNode};
pub use style::{merge_style, style, StyleMap};
pub use ticks::{histogram, nice_ticks};
pub use transform::AxisTransform;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::axes::Axis;
    pub use crate::element::{BarPlot, Element, LinePlot, ScatterPlot, Text, Ticks};
    pub use crate::error::{PlotError, PlotResult};
    pub use crate::figure::Figure;
    pub use crate::markup::MarkupNode;
    pub use crate::style::{style, StyleMap};
}
