//! Labelled edges and SVG marker generation.
//!
//! A [`LabeledArrow`] is a directed edge with a stroke, a path shape and an
//! optional label drawn at the middle of the path. The [`ArrowDrawer`] renders
//! arrows and remembers which marker colors were used so the `<defs>` block
//! can be emitted once for the whole document.

use std::{collections::BTreeMap, str};

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, LayeredOutput, RenderLayer, StrokeDefinition, Text, TextDefinition},
    geometry::Point,
};

/// Perpendicular bulge of curved paths, relative to the segment length.
const CURVE_BULGE: f32 = 0.25;

/// Shape of the path between the two endpoints.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ArrowPath {
    #[default]
    Straight,
    /// Cubic curve bending to the left of the travel direction. Two curved
    /// arrows between the same nodes in opposite directions never overlap.
    Curved,
}

impl str::FromStr for ArrowPath {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "straight" => Ok(Self::Straight),
            "curved" => Ok(Self::Curved),
            _ => Err("Invalid arrow path"),
        }
    }
}

impl ArrowPath {
    /// Returns the SVG path data from `start` to `end`.
    pub fn path_data(self, start: Point, end: Point) -> String {
        match self {
            Self::Straight => {
                format!("M {} {} L {} {}", start.x(), start.y(), end.x(), end.y())
            }
            Self::Curved => {
                let (ctrl1, ctrl2) = Self::control_points(start, end);
                format!(
                    "M {} {} C {} {}, {} {}, {} {}",
                    start.x(),
                    start.y(),
                    ctrl1.x(),
                    ctrl1.y(),
                    ctrl2.x(),
                    ctrl2.y(),
                    end.x(),
                    end.y()
                )
            }
        }
    }

    /// Returns the point halfway along the path, where the label goes.
    pub fn midpoint(self, start: Point, end: Point) -> Point {
        match self {
            Self::Straight => start.midpoint(end),
            Self::Curved => {
                // Cubic bezier at t = 0.5
                let (ctrl1, ctrl2) = Self::control_points(start, end);
                Point::new(
                    (start.x() + 3.0 * ctrl1.x() + 3.0 * ctrl2.x() + end.x()) / 8.0,
                    (start.y() + 3.0 * ctrl1.y() + 3.0 * ctrl2.y() + end.y()) / 8.0,
                )
            }
        }
    }

    fn control_points(start: Point, end: Point) -> (Point, Point) {
        let delta = end.sub_point(start);
        let length = delta.hypot();
        if length < 0.001 {
            return (start, end);
        }

        let normal = Point::new(delta.y() / length, -delta.x() / length);
        let offset = normal.scale(length * CURVE_BULGE);

        let ctrl1 = start.add_point(delta.scale(1.0 / 3.0)).add_point(offset);
        let ctrl2 = start.add_point(delta.scale(2.0 / 3.0)).add_point(offset);
        (ctrl1, ctrl2)
    }
}

/// A directed edge with an optional label.
#[derive(Debug, Clone)]
pub struct LabeledArrow<'a> {
    stroke: &'a StrokeDefinition,
    path: ArrowPath,
    label: Option<(&'a TextDefinition, &'a str)>,
    edge_id: Option<&'a str>,
}

impl<'a> LabeledArrow<'a> {
    pub fn new(stroke: &'a StrokeDefinition, path: ArrowPath) -> Self {
        Self {
            stroke,
            path,
            label: None,
            edge_id: None,
        }
    }

    pub fn with_label(mut self, text: &'a TextDefinition, label: &'a str) -> Self {
        self.label = Some((text, label));
        self
    }

    /// Tags the path with `data-edge="<id>"`.
    pub fn with_edge_id(mut self, id: &'a str) -> Self {
        self.edge_id = Some(id);
        self
    }

    pub fn stroke(&self) -> &StrokeDefinition {
        self.stroke
    }

    pub fn path(&self) -> ArrowPath {
        self.path
    }

    fn marker_id(color: Color) -> String {
        format!("arrow-right-{}", color.to_id_safe_string())
    }

    fn render(&self, source: Point, destination: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let path = svg_element::Path::new()
            .set("d", self.path.path_data(source, destination))
            .set("fill", "none")
            .set(
                "marker-end",
                format!("url(#{})", Self::marker_id(self.stroke.color())),
            );
        let mut path = crate::apply_stroke!(path, self.stroke);
        if let Some(id) = self.edge_id {
            path = path.set("data-edge", id);
        }
        output.add_to_layer(RenderLayer::Arrow, Box::new(path));

        if let Some((text_def, label)) = self.label {
            let center = self.path.midpoint(source, destination);
            output.merge(Text::new(text_def, label).render_to_layers(center));
        }

        output
    }

    fn create_marker(color: Color) -> svg_element::Marker {
        svg_element::Marker::new()
            .set("id", Self::marker_id(color))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                svg_element::Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string())
                    .set("fill-opacity", color.alpha()),
            )
    }
}

/// Renders arrows and collects the marker definitions they reference.
///
/// ```
/// # use showcase_core::color::Color;
/// # use showcase_core::draw::{ArrowDrawer, ArrowPath, LabeledArrow, StrokeDefinition};
/// # use showcase_core::geometry::Point;
/// let stroke = StrokeDefinition::new(Color::new("green").unwrap(), 3.0);
/// let traffic = LabeledArrow::new(&stroke, ArrowPath::Straight);
///
/// let mut drawer = ArrowDrawer::default();
/// let output = drawer.draw_arrow(&traffic, Point::new(0.0, 100.0), Point::new(250.0, 100.0));
/// assert!(!output.is_empty());
/// assert_eq!(drawer.marker_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ArrowDrawer {
    markers: BTreeMap<String, Color>,
}

impl ArrowDrawer {
    /// Renders an arrow and registers its marker color.
    pub fn draw_arrow(
        &mut self,
        arrow: &LabeledArrow<'_>,
        source: Point,
        destination: Point,
    ) -> LayeredOutput {
        let color = arrow.stroke.color();
        self.markers
            .entry(LabeledArrow::marker_id(color))
            .or_insert(color);
        arrow.render(source, destination)
    }

    /// Number of distinct markers registered so far.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// Generates a `<defs>` block with one marker per registered color.
    pub fn draw_marker_definitions(&self) -> Box<dyn svg::Node> {
        let mut defs = svg_element::Definitions::new();
        for color in self.markers.values() {
            defs = defs.add(LabeledArrow::create_marker(*color));
        }
        defs.into()
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_arrow_path_from_str() {
        assert_eq!("straight".parse::<ArrowPath>(), Ok(ArrowPath::Straight));
        assert_eq!("curved".parse::<ArrowPath>(), Ok(ArrowPath::Curved));
        assert!("orthogonal".parse::<ArrowPath>().is_err());
    }

    #[test]
    fn test_straight_path_data() {
        let data = ArrowPath::Straight.path_data(Point::new(0.0, 100.0), Point::new(250.0, 100.0));
        assert_eq!(data, "M 0 100 L 250 100");
    }

    #[test]
    fn test_curved_path_is_cubic() {
        let data = ArrowPath::Curved.path_data(Point::new(0.0, 0.0), Point::new(100.0, 0.0));
        assert!(data.starts_with("M 0 0 C "));
        assert!(data.ends_with("100 0"));
    }

    #[test]
    fn test_opposite_curves_bend_apart() {
        let waf = Point::new(250.0, 100.0);
        let profiler = Point::new(250.0, 250.0);

        let down = ArrowPath::Curved.midpoint(waf, profiler);
        let up = ArrowPath::Curved.midpoint(profiler, waf);
        let straight = ArrowPath::Straight.midpoint(waf, profiler);

        assert_approx_eq!(f32, down.y(), straight.y(), epsilon = 0.01);
        assert_approx_eq!(f32, up.y(), straight.y(), epsilon = 0.01);
        assert!((down.x() - straight.x()) * (up.x() - straight.x()) < 0.0);
    }

    #[test]
    fn test_degenerate_curve() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(ArrowPath::Curved.midpoint(p, p), p);
    }

    #[test]
    fn test_drawer_deduplicates_markers() {
        let green = StrokeDefinition::new(Color::new("green").unwrap(), 3.0);
        let purple = StrokeDefinition::new(Color::new("purple").unwrap(), 3.0);
        let mut drawer = ArrowDrawer::default();

        for stroke in [&green, &green, &purple] {
            let arrow = LabeledArrow::new(stroke, ArrowPath::Straight);
            drawer.draw_arrow(&arrow, Point::default(), Point::new(10.0, 0.0));
        }
        assert_eq!(drawer.marker_count(), 2);

        let defs = drawer.draw_marker_definitions().to_string();
        assert_eq!(defs.matches("<marker").count(), 2);
    }

    #[test]
    fn test_label_and_edge_id() {
        let stroke = StrokeDefinition::new(Color::new("purple").unwrap(), 3.0);
        let text = TextDefinition::new();
        let arrow = LabeledArrow::new(&stroke, ArrowPath::Straight)
            .with_label(&text, "Telemetry feed")
            .with_edge_id("e3");

        let mut drawer = ArrowDrawer::default();
        let output = drawer.draw_arrow(&arrow, Point::default(), Point::new(0.0, 150.0));
        assert_eq!(output.count(RenderLayer::Arrow), 1);
        assert_eq!(output.count(RenderLayer::Text), 1);

        let svg: String = output.render().iter().map(|n| n.to_string()).collect();
        assert!(svg.contains("data-edge=\"e3\""));
        assert!(svg.contains("Telemetry feed"));
        assert!(svg.contains("marker-end=\"url(#arrow-right-"));
    }
}
