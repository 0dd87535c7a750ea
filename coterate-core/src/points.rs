use serde::{Deserialize, Serialize};

/// A 2D point, used for both screen-space and canvas-space coordinates.
///
/// The two spaces are related by the viewport transform
/// (`screen = canvas * scale + offset`); conversion between them is always
/// explicit, see [`crate::viewport::Viewport`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_construction_and_accessors() {
        let p = Point::new(10.5, 20.5);
        assert_eq!(p.x, 10.5);
        assert_eq!(p.y, 20.5);
    }

    #[test]
    fn add_and_sub_are_componentwise() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(10.0, 20.0);
        assert_eq!(a.add(&b), Point::new(11.0, 22.0));
        assert_eq!(b.sub(&a), Point::new(9.0, 18.0));
    }

    #[test]
    fn scale_multiplies_both_components() {
        let p = Point::new(3.0, -4.0).scale(0.5);
        assert_eq!(p, Point::new(1.5, -2.0));
    }

    #[test]
    fn serialization_roundtrip() {
        let p = Point::new(-12.25, 400.0);
        let json = serde_json::to_string(&p).unwrap();
        let restored: Point = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, p);
    }
}
