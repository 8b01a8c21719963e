//! Drawable components for rendering the showcase.
//!
//! All drawables implement the [`Drawable`] trait, which renders to a
//! [`LayeredOutput`] and reports a size. Layers are ordered when the final SVG
//! document is assembled, so a drawable never needs to know what else is on
//! the page.

mod arrow;
mod card;
mod layer;
mod stroke;
mod text;

pub use arrow::{ArrowDrawer, ArrowPath, LabeledArrow};
pub use card::{Card, CardDefinition, find_intersection};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextAnchor, TextDefinition, wrap_text};

use crate::geometry::{Point, Size};

/// Trait for elements that can be rendered to SVG layers.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable centered on `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;

    /// Returns the outer size of this drawable.
    fn size(&self) -> Size;
}
