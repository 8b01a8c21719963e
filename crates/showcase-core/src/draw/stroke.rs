//! Stroke definitions for card borders and edges.
//!
//! A [`StrokeDefinition`] bundles color, width and dash pattern. Edge styles in
//! the catalog are written as CSS-like dash strings (`"3,3"`, `"5,5"`) and
//! parsed through [`StrokeStyle::from_str`](std::str::FromStr).
//!
//! | Property | SVG Attribute |
//! |----------|---------------|
//! | `color` | `stroke`, `stroke-opacity` |
//! | `width` | `stroke-width` |
//! | `style` | `stroke-dasharray` |

use std::str::FromStr;

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// 5px dash, 5px gap
    Dashed,
    /// 2px dot, 3px gap
    Dotted,
    /// Raw SVG dasharray, e.g. `"3,3"`
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" | "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            pattern => {
                let valid = pattern
                    .split([',', ' '])
                    .filter(|part| !part.is_empty())
                    .all(|part| part.parse::<f32>().is_ok_and(|len| len >= 0.0));
                if valid {
                    Ok(Self::Custom(pattern.to_string()))
                } else {
                    Err(format!("invalid stroke pattern `{pattern}`"))
                }
            }
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value, or `None` for solid lines.
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// Color, width and pattern of a line or border.
///
/// ```
/// use showcase_core::color::Color;
/// use showcase_core::draw::{StrokeDefinition, StrokeStyle};
///
/// let mut telemetry = StrokeDefinition::new(Color::new("purple").unwrap(), 3.0);
/// telemetry.set_style("3,3".parse().unwrap());
/// assert_eq!(telemetry.style().to_svg_value().as_deref(), Some("3,3"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
}

impl StrokeDefinition {
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
        }
    }

    pub fn dashed(color: Color, width: f32) -> Self {
        let mut stroke = Self::new(color, width);
        stroke.set_style(StrokeStyle::Dashed);
        stroke
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self::new(Color::default(), 1.0)
    }
}

/// Applies color, opacity, width and dash pattern of a stroke to an SVG element.
///
/// ```
/// use showcase_core::color::Color;
/// use showcase_core::draw::StrokeDefinition;
/// use svg::node::element as svg_element;
///
/// let stroke = StrokeDefinition::dashed(Color::new("orange").unwrap(), 3.0);
/// let line = showcase_core::apply_stroke!(svg_element::Line::new(), &stroke);
/// assert!(line.to_string().contains("stroke-dasharray"));
/// ```
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_default() {
        let stroke = StrokeDefinition::default();
        assert_eq!(stroke.width(), 1.0);
        assert_eq!(stroke.color().to_string(), "black");
        assert_eq!(*stroke.style(), StrokeStyle::Solid);
    }

    #[test]
    fn test_stroke_setters() {
        let mut stroke = StrokeDefinition::default();
        stroke.set_color(Color::new("green").unwrap());
        stroke.set_width(1.5);
        stroke.set_style(StrokeStyle::Dotted);

        assert_eq!(stroke.color().to_string(), "green");
        assert_eq!(stroke.width(), 1.5);
        assert_eq!(*stroke.style(), StrokeStyle::Dotted);
    }

    #[test]
    fn test_stroke_style_from_str() {
        assert_eq!("solid".parse::<StrokeStyle>().unwrap(), StrokeStyle::Solid);
        assert_eq!("".parse::<StrokeStyle>().unwrap(), StrokeStyle::Solid);
        assert_eq!(
            "dashed".parse::<StrokeStyle>().unwrap(),
            StrokeStyle::Dashed
        );
        assert_eq!(
            "3,3".parse::<StrokeStyle>().unwrap(),
            StrokeStyle::Custom("3,3".to_string())
        );
        assert_eq!(
            "10 5 2".parse::<StrokeStyle>().unwrap(),
            StrokeStyle::Custom("10 5 2".to_string())
        );

        let err = "zigzag".parse::<StrokeStyle>().unwrap_err();
        assert!(err.contains("zigzag"));
    }

    #[test]
    fn test_stroke_style_dasharray() {
        assert_eq!(StrokeStyle::Solid.to_svg_value(), None);
        assert_eq!(StrokeStyle::Dashed.to_svg_value().as_deref(), Some("5,5"));
        assert_eq!(StrokeStyle::Dotted.to_svg_value().as_deref(), Some("2,3"));
    }
}
