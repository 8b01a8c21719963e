//! Showcase Core Drawing Primitives
//!
//! This crate provides the drawing building blocks used to render the
//! adaptive profiling showcase. It includes:
//!
//! - **Colors**: CSS color parsing and SVG-safe identifiers ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and insets ([`geometry`] module)
//! - **Draw**: Layered SVG output, strokes, measured text, node cards and
//!   labelled arrows ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
