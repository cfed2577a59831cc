//! Plottable elements.
//!
//! A closed set of variants dispatched by the compiler. Elements hold
//! only data and a style map; the owning axis supplies the coordinate
//! context at compile time, so there are no back-references here.

use crate::style::StyleMap;

/// A text label placed at a data-space position.
#[derive(Debug, Clone)]
pub struct Text {
    pub content: String,
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees, applied to the transformed pixel position
    /// and emitted as a rotation attribute for the glyph itself.
    pub angle: f64,
    pub style: StyleMap,
}

impl Text {
    pub fn new(content: impl Into<String>, x: f64, y: f64) -> Self {
        Text {
            content: content.into(),
            x,
            y,
            angle: 0.0,
            style: StyleMap::new(),
        }
    }

    pub fn angle(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// Tick marks along one axis direction.
///
/// Positions may be replaced wholesale by auto-scaling before the
/// figure is compiled; they are never mutated during compilation.
#[derive(Debug, Clone)]
pub struct Ticks {
    pub positions: Vec<f64>,
    pub style: StyleMap,
}

impl Ticks {
    pub fn new(positions: Vec<f64>) -> Self {
        Ticks {
            positions,
            style: StyleMap::new(),
        }
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// A line plot connecting data points, clipped to the axis rectangle.
#[derive(Debug, Clone)]
pub struct LinePlot {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub style: StyleMap,
}

impl LinePlot {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        LinePlot {
            xs,
            ys,
            style: StyleMap::new(),
        }
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// Discrete markers at data points inside the axis rectangle.
#[derive(Debug, Clone)]
pub struct ScatterPlot {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Marker radius in pixels.
    pub radius: f64,
    pub style: StyleMap,
}

impl ScatterPlot {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        ScatterPlot {
            xs,
            ys,
            radius: 2.0,
            style: StyleMap::new(),
        }
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// Vertical bars from the zero baseline to each y value.
#[derive(Debug, Clone)]
pub struct BarPlot {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// Bar width in data units, centered on each x.
    pub width: f64,
    pub style: StyleMap,
}

impl BarPlot {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Self {
        BarPlot {
            xs,
            ys,
            width: 1.0,
            style: StyleMap::new(),
        }
    }

    pub fn width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }
}

/// A plottable element owned by an axis.
#[derive(Debug, Clone)]
pub enum Element {
    Text(Text),
    TickX(Ticks),
    TickY(Ticks),
    Line(LinePlot),
    Bar(BarPlot),
    Scatter(ScatterPlot),
}

impl Element {
    /// Short name for log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Element::Text(_) => "text",
            Element::TickX(_) => "xticks",
            Element::TickY(_) => "yticks",
            Element::Line(_) => "line",
            Element::Bar(_) => "bar",
            Element::Scatter(_) => "scatter",
        }
    }
}
