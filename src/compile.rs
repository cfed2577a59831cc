//! Element-to-markup compilation.
//!
//! A pure mapping from plottable elements to markup nodes, dispatched
//! on the element variant. Failures are isolated per element: a bad
//! element is reported and skipped without aborting its siblings.

use log::error;

use crate::axes::Axis;
use crate::clip::clip_polyline;
use crate::element::{BarPlot, Element, LinePlot, ScatterPlot, Text, Ticks};
use crate::error::{PlotError, PlotResult};
use crate::markup::MarkupNode;
use crate::style::merge_style;
use crate::transform::AxisTransform;

/// Tick mark length in pixels, drawn outward from the axis edge.
const TICK_LENGTH: f64 = 5.0;
/// Gap between a tick mark and its label, in pixels.
const TICK_LABEL_GAP: f64 = 3.0;
/// Nominal label font height used to place x tick labels below ticks.
const TICK_FONT_SIZE: f64 = 10.0;

fn fmt(v: f64) -> String {
    format!("{:.2}", v)
}

/// Compile one axis: its background rectangle followed by every child
/// element in insertion order. A degenerate axis range fails the whole
/// axis; individual element failures are logged and skipped.
pub fn compile_axis(axis: &Axis, figure: (f64, f64)) -> PlotResult<Vec<MarkupNode>> {
    let transform = AxisTransform::new(
        axis.origin,
        axis.size,
        figure,
        (axis.limits.0, axis.limits.1),
        (axis.limits.2, axis.limits.3),
    )?;

    let mut nodes = Vec::new();

    let mut background = MarkupNode::leaf("rect")
        .attr("x", fmt(transform.to_image_x(0.0)))
        .attr("y", fmt(transform.to_image_y(0.0)))
        .attr("width", fmt(figure.0 * axis.size.0))
        .attr("height", fmt(figure.1 * axis.size.1))
        .attr("fill", "white");
    merge_style(&mut background.attributes, &axis.style);
    nodes.push(background);

    for (index, element) in axis.elements.iter().enumerate() {
        match compile_element(element, &transform) {
            Ok(mut compiled) => nodes.append(&mut compiled),
            Err(e) => error!("skipping {} element {}: {}", element.kind(), index, e),
        }
    }

    Ok(nodes)
}

/// Compile a single element into zero or more markup nodes.
pub fn compile_element(element: &Element, t: &AxisTransform) -> PlotResult<Vec<MarkupNode>> {
    match element {
        Element::Text(text) => compile_text(text, t),
        Element::Line(line) => compile_line(line, t),
        Element::Scatter(scatter) => compile_scatter(scatter, t),
        Element::Bar(bar) => compile_bar(bar, t),
        Element::TickX(ticks) => compile_xticks(ticks, t),
        Element::TickY(ticks) => compile_yticks(ticks, t),
    }
}

fn check_lengths(xs: &[f64], ys: &[f64]) -> PlotResult<()> {
    if xs.len() != ys.len() {
        return Err(PlotError::InvalidData(format!(
            "x and y data lengths differ: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    Ok(())
}

fn compile_text(text: &Text, t: &AxisTransform) -> PlotResult<Vec<MarkupNode>> {
    let (px, py) = t.pixel(text.x, text.y);
    // Rotation multiplies the already-transformed pixel point by the
    // 2D rotation matrix; the rotate attribute additionally spins the
    // glyph itself around the image origin.
    let (px, py) = if text.angle != 0.0 {
        let theta = text.angle.to_radians();
        let (cos, sin) = (theta.cos(), theta.sin());
        (px * cos - py * sin, px * sin + py * cos)
    } else {
        (px, py)
    };

    let mut node = MarkupNode::element("text")
        .attr("x", fmt(px))
        .attr("y", fmt(py))
        .attr("font-size", fmt(TICK_FONT_SIZE));
    if text.angle != 0.0 {
        node.set_attr("transform", format!("rotate({})", text.angle));
    }
    merge_style(&mut node.attributes, &text.style);
    node.push_text(text.content.clone());
    Ok(vec![node])
}

fn compile_line(line: &LinePlot, t: &AxisTransform) -> PlotResult<Vec<MarkupNode>> {
    check_lengths(&line.xs, &line.ys)?;

    let mut nodes = Vec::new();
    for segment in clip_polyline(&line.xs, &line.ys, t.limits()) {
        // Sub-2-point segments carry no visible stroke.
        if segment.len() < 2 {
            continue;
        }
        let points = segment
            .iter()
            .map(|&(x, y)| {
                let (px, py) = t.pixel(x, y);
                format!("{:.2},{:.2}", px, py)
            })
            .collect::<Vec<_>>()
            .join(" ");
        let mut node = MarkupNode::leaf("polyline")
            .attr("points", points)
            .attr("fill", "none")
            .attr("stroke", "black");
        merge_style(&mut node.attributes, &line.style);
        nodes.push(node);
    }
    Ok(nodes)
}

fn compile_scatter(scatter: &ScatterPlot, t: &AxisTransform) -> PlotResult<Vec<MarkupNode>> {
    check_lengths(&scatter.xs, &scatter.ys)?;

    let (x_min, x_max, y_min, y_max) = t.limits();
    let (x_lo, x_hi) = ordered(x_min, x_max);
    let (y_lo, y_hi) = ordered(y_min, y_max);

    let mut nodes = Vec::new();
    for (&x, &y) in scatter.xs.iter().zip(scatter.ys.iter()) {
        // Discrete markers have no interior to clip; points outside
        // the axis rectangle are dropped.
        if x < x_lo || x > x_hi || y < y_lo || y > y_hi {
            continue;
        }
        let (px, py) = t.pixel(x, y);
        let mut node = MarkupNode::leaf("circle")
            .attr("cx", fmt(px))
            .attr("cy", fmt(py))
            .attr("r", fmt(scatter.radius))
            .attr("fill", "black");
        merge_style(&mut node.attributes, &scatter.style);
        nodes.push(node);
    }
    Ok(nodes)
}

fn compile_bar(bar: &BarPlot, t: &AxisTransform) -> PlotResult<Vec<MarkupNode>> {
    check_lengths(&bar.xs, &bar.ys)?;

    let (x_min, x_max, y_min, y_max) = t.limits();
    let (x_lo, x_hi) = ordered(x_min, x_max);
    let (y_lo, y_hi) = ordered(y_min, y_max);

    let mut nodes = Vec::new();
    for (&x, &y) in bar.xs.iter().zip(bar.ys.iter()) {
        if x < x_lo || x > x_hi {
            continue;
        }
        // The bar spans the zero baseline to y; reject only when that
        // whole extent lies outside the visible y range.
        let (extent_lo, extent_hi) = ordered(0.0, y);
        if extent_hi < y_lo || extent_lo > y_hi {
            continue;
        }
        // A bar poking past one boundary is clamped, never dropped.
        let clamped_lo = extent_lo.max(y_lo);
        let clamped_hi = extent_hi.min(y_hi);

        let (left, _) = t.pixel(x - bar.width / 2.0, clamped_hi);
        let (right, _) = t.pixel(x + bar.width / 2.0, clamped_hi);
        let (_, top) = t.pixel(x, clamped_hi);
        let (_, bottom) = t.pixel(x, clamped_lo);

        let mut node = MarkupNode::leaf("rect")
            .attr("x", fmt(left.min(right)))
            .attr("y", fmt(top.min(bottom)))
            .attr("width", fmt((right - left).abs()))
            .attr("height", fmt((bottom - top).abs()))
            .attr("fill", "white")
            .attr("stroke", "black");
        merge_style(&mut node.attributes, &bar.style);
        nodes.push(node);
    }
    Ok(nodes)
}

fn compile_xticks(ticks: &Ticks, t: &AxisTransform) -> PlotResult<Vec<MarkupNode>> {
    let (x_min, x_max, _, _) = t.limits();
    let (x_lo, x_hi) = ordered(x_min, x_max);
    let bottom = t.to_image_y(1.0);

    let mut nodes = Vec::new();
    for &position in &ticks.positions {
        // Out-of-range positions are silently skipped.
        if position < x_lo || position > x_hi {
            continue;
        }
        let px = t.to_image_x(t.norm_x(position));
        let mut mark = MarkupNode::leaf("line")
            .attr("x1", fmt(px))
            .attr("y1", fmt(bottom))
            .attr("x2", fmt(px))
            .attr("y2", fmt(bottom + TICK_LENGTH))
            .attr("stroke", "black");
        merge_style(&mut mark.attributes, &ticks.style);
        nodes.push(mark);

        let mut label = MarkupNode::element("text")
            .attr("x", fmt(px))
            .attr("y", fmt(bottom + TICK_LENGTH + TICK_LABEL_GAP + TICK_FONT_SIZE))
            .attr("font-size", fmt(TICK_FONT_SIZE))
            .attr("text-anchor", "middle");
        label.push_text(format!("{}", position));
        nodes.push(label);
    }
    Ok(nodes)
}

fn compile_yticks(ticks: &Ticks, t: &AxisTransform) -> PlotResult<Vec<MarkupNode>> {
    let (_, _, y_min, y_max) = t.limits();
    let (y_lo, y_hi) = ordered(y_min, y_max);
    let left = t.to_image_x(0.0);

    let mut nodes = Vec::new();
    for &position in &ticks.positions {
        if position < y_lo || position > y_hi {
            continue;
        }
        let py = t.to_image_y(t.norm_y(position));
        let mut mark = MarkupNode::leaf("line")
            .attr("x1", fmt(left - TICK_LENGTH))
            .attr("y1", fmt(py))
            .attr("x2", fmt(left))
            .attr("y2", fmt(py))
            .attr("stroke", "black");
        merge_style(&mut mark.attributes, &ticks.style);
        nodes.push(mark);

        let mut label = MarkupNode::element("text")
            .attr("x", fmt(left - TICK_LENGTH - TICK_LABEL_GAP))
            .attr("y", fmt(py))
            .attr("font-size", fmt(TICK_FONT_SIZE))
            .attr("text-anchor", "end")
            .attr("dominant-baseline", "middle");
        label.push_text(format!("{}", position));
        nodes.push(label);
    }
    Ok(nodes)
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
