//! Axis (subplot) implementation.
//!
//! An axis is a normalized sub-rectangle of the figure with a visible
//! data rectangle and an ordered list of elements. Elements are
//! appended during construction and compiled in insertion order; the
//! only post-construction mutations are tick auto-scaling and
//! histogram limit widening, both of which happen strictly before
//! compilation.

use crate::element::{BarPlot, Element, LinePlot, ScatterPlot, Text, Ticks};
use crate::style::StyleMap;
use crate::ticks::{bin_width, histogram, nice_ticks};

/// A single plot area within a figure.
#[derive(Debug, Clone)]
pub struct Axis {
    /// Top-left corner in figure-normalized coordinates.
    pub origin: (f64, f64),
    /// Extent as a fraction of the figure, in `(0, 1]`.
    pub size: (f64, f64),
    /// Visible data rectangle `(x_min, x_max, y_min, y_max)`.
    /// `min > max` is permitted and reverses the axis direction;
    /// `min == max` makes the axis degenerate and fails compilation.
    pub limits: (f64, f64, f64, f64),
    /// Elements in insertion order.
    pub elements: Vec<Element>,
    /// Style properties merged into the background rectangle.
    pub style: StyleMap,
}

impl Axis {
    /// Create an axis with the given placement and data limits.
    pub fn new(origin: (f64, f64), size: (f64, f64), limits: (f64, f64, f64, f64)) -> Self {
        Axis {
            origin,
            size,
            limits,
            elements: Vec::new(),
            style: StyleMap::new(),
        }
    }

    /// Set the background style properties.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = style;
        self
    }

    /// Add a line plot.
    pub fn line(&mut self, xs: Vec<f64>, ys: Vec<f64>, style: StyleMap) -> &mut Self {
        self.elements
            .push(Element::Line(LinePlot::new(xs, ys).style(style)));
        self
    }

    /// Add a scatter plot.
    pub fn scatter(&mut self, xs: Vec<f64>, ys: Vec<f64>, style: StyleMap) -> &mut Self {
        self.elements
            .push(Element::Scatter(ScatterPlot::new(xs, ys).style(style)));
        self
    }

    /// Add a bar plot with the given bar width in data units.
    pub fn bar(&mut self, xs: Vec<f64>, ys: Vec<f64>, width: f64, style: StyleMap) -> &mut Self {
        self.elements
            .push(Element::Bar(BarPlot::new(xs, ys).width(width).style(style)));
        self
    }

    /// Add a text label at a data-space position.
    pub fn text(&mut self, content: impl Into<String>, x: f64, y: f64) -> &mut Self {
        self.elements.push(Element::Text(Text::new(content, x, y)));
        self
    }

    /// Add a rotated, styled text label.
    pub fn text_styled(
        &mut self,
        content: impl Into<String>,
        x: f64,
        y: f64,
        angle: f64,
        style: StyleMap,
    ) -> &mut Self {
        self.elements
            .push(Element::Text(Text::new(content, x, y).angle(angle).style(style)));
        self
    }

    /// Add explicit x tick positions.
    pub fn xticks(&mut self, positions: Vec<f64>) -> &mut Self {
        self.elements.push(Element::TickX(Ticks::new(positions)));
        self
    }

    /// Add explicit y tick positions.
    pub fn yticks(&mut self, positions: Vec<f64>) -> &mut Self {
        self.elements.push(Element::TickY(Ticks::new(positions)));
        self
    }

    /// Add auto-scaled x ticks covering the current x limits.
    pub fn auto_xticks(&mut self, num_ticks: usize) -> &mut Self {
        let positions = nice_ticks(self.limits.0, self.limits.1, num_ticks);
        self.xticks(positions)
    }

    /// Add auto-scaled y ticks covering the current y limits.
    pub fn auto_yticks(&mut self, num_ticks: usize) -> &mut Self {
        let positions = nice_ticks(self.limits.2, self.limits.3, num_ticks);
        self.yticks(positions)
    }

    /// Bin values into a histogram and add it as a bar plot.
    ///
    /// Widens the axis limits in place so the whole histogram is
    /// visible: x spans the outer bin edges, y spans the frequencies
    /// with 10% headroom above the tallest bar.
    pub fn hist(&mut self, values: &[f64], bins: usize, style: StyleMap) -> &mut Self {
        let (centers, frequencies) = histogram(values, bins);
        if centers.is_empty() {
            return self;
        }
        let width = bin_width(values, bins);

        self.limits.0 = self.limits.0.min(centers[0] - width / 2.0);
        self.limits.1 = self.limits.1.max(centers[centers.len() - 1] + width / 2.0);
        let tallest = frequencies.iter().cloned().fold(0.0, f64::max);
        self.limits.2 = self.limits.2.min(0.0);
        self.limits.3 = self.limits.3.max(tallest * 1.1);

        self.bar(centers, frequencies, width, style)
    }
}
