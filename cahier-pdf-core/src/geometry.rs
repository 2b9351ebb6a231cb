//! Basic geometric types and units

/// Points per millimetre.
pub const MM: f64 = 72.0 / 25.4;

/// Convert millimetres to PDF points.
pub fn mm(value: f64) -> f64 {
    value * MM
}

/// A point in 2D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A rectangle defined by two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Lower-left corner
    pub lower_left: Point,
    /// Upper-right corner
    pub upper_right: Point,
}

impl Rectangle {
    /// Create a new rectangle from two points
    pub fn new(lower_left: Point, upper_right: Point) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// Create a rectangle from its lower-left position and size
    pub fn from_position_and_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            lower_left: Point::new(x, y),
            upper_right: Point::new(x + width, y + height),
        }
    }

    /// Create a rectangle hanging down from a top-left origin
    pub fn from_top_left(x: f64, y_top: f64, width: f64, height: f64) -> Self {
        Self::from_position_and_size(x, y_top - height, width, height)
    }

    /// Get the width
    pub fn width(&self) -> f64 {
        self.upper_right.x - self.lower_left.x
    }

    /// Get the height
    pub fn height(&self) -> f64 {
        self.upper_right.y - self.lower_left.y
    }

    /// Get the center point
    pub fn center(&self) -> Point {
        Point::new(
            (self.lower_left.x + self.upper_right.x) / 2.0,
            (self.lower_left.y + self.upper_right.y) / 2.0,
        )
    }

    /// True when the interiors overlap. Rectangles sharing only an edge do not.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.lower_left.x < other.upper_right.x
            && other.lower_left.x < self.upper_right.x
            && self.lower_left.y < other.upper_right.y
            && other.lower_left.y < self.upper_right.y
    }

    /// True when `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.lower_left.x >= self.lower_left.x
            && other.lower_left.y >= self.lower_left.y
            && other.upper_right.x <= self.upper_right.x
            && other.upper_right.y <= self.upper_right.y
    }
}
