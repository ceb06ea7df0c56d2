//! Annotation geometry.
//!
//! Records carry their bounds as a PDF rectangle `[x0, y0, x1, y1]`. The
//! layer only ever needs the spans of that rectangle and, for text
//! annotation icons, a corrected copy that is at least a minimum size.

use serde::{Deserialize, Serialize};

/// An annotation rectangle in layout units, stored as two corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 4]", into = "[f32; 4]")]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Bottom edge
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Top edge
    pub y1: f32,
}

impl Rect {
    /// Create a rectangle from two corner points.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_annotation_layer::geometry::Rect;
    ///
    /// let rect = Rect::from_points(10.0, 20.0, 110.0, 70.0);
    /// assert_eq!(rect.width(), 100.0);
    /// assert_eq!(rect.height(), 50.0);
    /// ```
    pub fn from_points(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Horizontal span (`x1 - x0`).
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Vertical span (`y1 - y0`).
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Return a copy grown to at least `min` units on each side.
    ///
    /// Height is corrected first. An undersized width is then forced square
    /// against the (possibly corrected) height, so a degenerate `[0, 0, 3, 3]`
    /// icon becomes `10 × 10`. Some producers (OpenOffice in particular)
    /// write text annotations with near-zero bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdf_annotation_layer::geometry::Rect;
    ///
    /// let rect = Rect::from_points(0.0, 0.0, 3.0, 3.0).with_min_size(10.0);
    /// assert_eq!(rect.height(), 10.0);
    /// assert_eq!(rect.width(), 10.0);
    /// ```
    pub fn with_min_size(&self, min: f32) -> Rect {
        let mut rect = *self;
        if rect.height() < min {
            rect.y1 = rect.y0 + min;
        }
        if rect.width() < min {
            rect.x1 = rect.x0 + rect.height();
        }
        if rect != *self {
            log::debug!(
                "Corrected undersized annotation rect {:?} to {:?}",
                self.to_array(),
                rect.to_array()
            );
        }
        rect
    }

    /// Return a copy with corners ordered so both spans are non-negative.
    pub fn normalized(&self) -> Rect {
        Rect {
            x0: self.x0.min(self.x1),
            y0: self.y0.min(self.y1),
            x1: self.x0.max(self.x1),
            y1: self.y0.max(self.y1),
        }
    }

    /// The rectangle as `[x0, y0, x1, y1]`.
    pub fn to_array(&self) -> [f32; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }
}

impl From<[f32; 4]> for Rect {
    fn from(arr: [f32; 4]) -> Self {
        Self::from_points(arr[0], arr[1], arr[2], arr[3])
    }
}

impl From<Rect> for [f32; 4] {
    fn from(rect: Rect) -> Self {
        rect.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_points() {
        let r = Rect::from_points(10.0, 20.0, 110.0, 70.0);
        assert_eq!(r.x0, 10.0);
        assert_eq!(r.y0, 20.0);
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
    }

    #[test]
    fn test_min_size_squares_degenerate_rect() {
        let r = Rect::from_points(0.0, 0.0, 3.0, 3.0).with_min_size(10.0);
        assert_eq!(r.to_array(), [0.0, 0.0, 10.0, 10.0]);
    }

    #[test]
    fn test_min_size_width_uses_existing_height() {
        // Tall but narrow: width is forced to the (already large) height.
        let r = Rect::from_points(5.0, 5.0, 7.0, 30.0).with_min_size(10.0);
        assert_eq!(r.height(), 25.0);
        assert_eq!(r.width(), 25.0);
    }

    #[test]
    fn test_min_size_only_height() {
        let r = Rect::from_points(0.0, 0.0, 40.0, 2.0).with_min_size(10.0);
        assert_eq!(r.width(), 40.0);
        assert_eq!(r.height(), 10.0);
    }

    #[test]
    fn test_min_size_leaves_large_rect() {
        let r = Rect::from_points(1.0, 2.0, 50.0, 60.0);
        assert_eq!(r.with_min_size(10.0), r);
    }

    #[test]
    fn test_normalized() {
        let r = Rect::from_points(50.0, 40.0, 10.0, 20.0).normalized();
        assert_eq!(r.to_array(), [10.0, 20.0, 50.0, 40.0]);
        assert_eq!(r.normalized(), r);
    }

    #[test]
    fn test_rect_deserializes_from_array() {
        let r: Rect = serde_json::from_str("[1, 2, 3, 4]").unwrap();
        assert_eq!(r, Rect::from_points(1.0, 2.0, 3.0, 4.0));
    }
}
