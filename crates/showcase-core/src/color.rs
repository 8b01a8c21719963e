//! Color handling for showcase diagrams
//!
//! This module provides the [`Color`] type which wraps the `DynamicColor` type
//! from the color crate. Every color in the showcase (category palettes, edge
//! strokes, panel backgrounds) goes through it so that invalid CSS strings are
//! caught once, at construction.

use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

use color::DynamicColor;

/// A parsed CSS color.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Parses a CSS color string such as `"#3B82F6"`, `"rgb(0, 0, 0)"` or `"purple"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use showcase_core::color::Color;
    ///
    /// let blue = Color::new("#3B82F6").unwrap();
    /// let green = Color::new("green").unwrap();
    /// assert_ne!(blue, green);
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        DynamicColor::from_str(color_str)
            .map(|color| Self { color })
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))
    }

    /// Parses a color literal that is part of the static catalog.
    ///
    /// Falls back to [`Color::default`] if the literal does not parse; catalog
    /// literals are covered by tests so the fallback is never taken in practice.
    pub fn from_static(color_str: &'static str) -> Self {
        Self::new(color_str).unwrap_or_default()
    }

    /// Returns a string usable inside an SVG `id` attribute.
    ///
    /// The result only contains alphanumeric characters and underscores and
    /// always starts with a letter.
    ///
    /// # Examples
    ///
    /// ```
    /// use showcase_core::color::Color;
    ///
    /// let id = Color::new("#8B5CF6").unwrap().to_id_safe_string();
    /// assert!(id.chars().all(|c| c.is_alphanumeric() || c == '_'));
    /// ```
    pub fn to_id_safe_string(self) -> String {
        let sanitized = self
            .to_string()
            .replace('#', "hex")
            .replace(['(', ')', ',', ' ', ';', '.', '%', '/'], "_");

        if sanitized.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            format!("c_{sanitized}")
        } else {
            sanitized
        }
    }

    /// Returns a copy of this color with the given alpha in `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
        }
    }

    /// Returns the alpha component of this color.
    pub fn alpha(&self) -> f32 {
        self.color.components[3]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<Color> for svg::node::Value {
    fn from(color: Color) -> Self {
        Self::from(color.to_string())
    }
}
