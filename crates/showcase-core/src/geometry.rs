//! Geometric primitives for diagram layout and positioning.
//!
//! - [`Point`] - A 2D coordinate in diagram space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - An axis-aligned rectangle defined by its minimum and maximum corners
//! - [`Insets`] - Padding values for four sides
//!
//! # Coordinate System
//!
//! Coordinates follow SVG conventions:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```

/// A 2D point in diagram coordinate space.
///
/// # Examples
///
/// ```
/// # use showcase_core::geometry::Point;
/// let waf = Point::new(250.0, 100.0);
/// let app = Point::new(600.0, 100.0);
///
/// let mid = waf.midpoint(app);
/// assert_eq!(mid.x(), 425.0);
/// assert_eq!(mid.y(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn x(self) -> f32 {
        self.x
    }

    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point.
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Euclidean distance from the origin.
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// Layout uses this to stretch the compact position hints of the
    /// architecture view into diagram space.
    ///
    /// ```
    /// # use showcase_core::geometry::Point;
    /// let hint = Point::new(150.0, 5.0);
    /// let scaled = hint.scale(2.0);
    /// assert_eq!(scaled, Point::new(300.0, 10.0));
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Treats this point as the center of a rectangle of the given size.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

/// Width and height of an element.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f32 {
        self.width
    }

    pub fn height(self) -> f32 {
        self.height
    }

    /// Component-wise maximum of two sizes.
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Stacks two sizes vertically: heights add up, the wider width wins.
    pub fn merge_vertical(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height + other.height,
        }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    pub fn min_x(self) -> f32 {
        self.min_x
    }

    pub fn min_y(self) -> f32 {
        self.min_y
    }

    pub fn max_x(self) -> f32 {
        self.max_x
    }

    pub fn max_y(self) -> f32 {
        self.max_y
    }

    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    pub fn min_point(self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Smallest bounds containing both `self` and `other`.
    ///
    /// ```
    /// # use showcase_core::geometry::{Bounds, Point, Size};
    /// let user = Bounds::new_from_top_left(Point::new(0.0, 100.0), Size::new(120.0, 40.0));
    /// let app = Bounds::new_from_top_left(Point::new(600.0, 100.0), Size::new(120.0, 40.0));
    ///
    /// let both = user.merge(&app);
    /// assert_eq!(both.width(), 720.0);
    /// assert_eq!(both.height(), 40.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Grows the bounds outwards by the given insets.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left,
            min_y: self.min_y - insets.top,
            max_x: self.max_x + insets.right,
            max_y: self.max_y + insets.bottom,
        }
    }

    /// Returns `true` if the point lies inside or on the edge of the bounds.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x
            && point.x <= self.max_x
            && point.y >= self.min_y
            && point.y <= self.max_y
    }

    /// Returns `true` if the two bounds share interior area. Touching edges
    /// do not count.
    pub fn intersects(&self, other: &Self) -> bool {
        self.min_x < other.max_x
            && other.min_x < self.max_x
            && self.min_y < other.max_y
            && other.min_y < self.max_y
    }
}

/// Spacing around an element, one value per side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(5.0, 8.0);
        let b = Point::new(2.0, 3.0);
        assert_eq!(a.add_point(b), Point::new(7.0, 11.0));
        assert_eq!(a.sub_point(b), Point::new(3.0, 5.0));
        assert_approx_eq!(f32, Point::new(3.0, 4.0).hypot(), 5.0);
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(50.0, 60.0), Size::new(20.0, 30.0));

        assert_approx_eq!(f32, bounds.min_x(), 40.0);
        assert_approx_eq!(f32, bounds.min_y(), 45.0);
        assert_approx_eq!(f32, bounds.max_x(), 60.0);
        assert_approx_eq!(f32, bounds.max_y(), 75.0);
        assert_eq!(bounds.center(), Point::new(50.0, 60.0));
    }

    #[test]
    fn test_bounds_add_padding_and_translate() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 10.0), Size::new(10.0, 10.0))
            .add_padding(Insets::new(1.0, 2.0, 3.0, 4.0))
            .translate(Point::new(100.0, 0.0));

        assert_approx_eq!(f32, bounds.min_x(), 106.0);
        assert_approx_eq!(f32, bounds.min_y(), 9.0);
        assert_approx_eq!(f32, bounds.width(), 16.0);
        assert_approx_eq!(f32, bounds.height(), 14.0);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        assert!(bounds.contains(Point::new(0.0, 0.0)));
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(5.0, 5.0)));
        assert!(!bounds.contains(Point::new(10.5, 5.0)));
        assert!(!bounds.contains(Point::new(5.0, -0.1)));
    }

    #[test]
    fn test_bounds_intersects() {
        let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let overlapping = Bounds::new_from_top_left(Point::new(5.0, 5.0), Size::new(10.0, 10.0));
        let touching = Bounds::new_from_top_left(Point::new(10.0, 0.0), Size::new(10.0, 10.0));

        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
        assert!(!a.intersects(&touching));
    }

    #[test]
    fn test_size_merge_vertical() {
        let merged = Size::new(40.0, 10.0).merge_vertical(Size::new(60.0, 5.0));
        assert_eq!(merged, Size::new(60.0, 15.0));
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        let corner = (-500.0f32..500.0, -500.0f32..500.0);
        let size = (0.0f32..300.0, 0.0f32..300.0);
        (corner, size).prop_map(|((x, y), (w, h))| {
            Bounds::new_from_top_left(Point::new(x, y), Size::new(w, h))
        })
    }

    proptest! {
        #[test]
        fn merge_contains_both_centers(a in bounds_strategy(), b in bounds_strategy()) {
            let merged = a.merge(&b);
            prop_assert!(merged.contains(a.center()));
            prop_assert!(merged.contains(b.center()));
        }
    }
}
