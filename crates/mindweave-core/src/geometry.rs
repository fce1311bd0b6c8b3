use serde::{Deserialize, Serialize};

/// A 2D point in content or screen coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn minus(&self, other: &Point) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub min: Point,
    pub max: Point,
}

impl BBox {
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Point::new(x + width, y + height))
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn union(&self, other: &BBox) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Grow the box by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: self.min.translate(-margin, -margin),
            max: self.max.translate(margin, margin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bbox_union() {
        let a = BBox::from_origin_size(0.0, 0.0, 10.0, 10.0);
        let b = BBox::from_origin_size(-5.0, 20.0, 2.0, 2.0);
        let u = a.union(&b);
        assert_eq!(u.min, Point::new(-5.0, 0.0));
        assert_eq!(u.max, Point::new(10.0, 22.0));
    }

    #[test]
    fn test_bbox_expand_keeps_center() {
        let bb = BBox::from_origin_size(-80.0, -22.0, 160.0, 44.0).expand(40.0);
        assert!((bb.width() - 240.0).abs() < 1e-10);
        assert!((bb.height() - 124.0).abs() < 1e-10);
        assert_eq!(bb.center(), Point::ORIGIN);
    }
}
