use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel space, stored edge-wise.
///
/// Layout code mostly unions label footprints and constrains the result back
/// inside an outer bound, which is why edges are kept directly instead of an
/// origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    /// Smallest rectangle enclosing both `self` and `other`.
    #[must_use]
    pub fn grow(self, other: Rect) -> Rect {
        Rect {
            top: self.top.min(other.top),
            left: self.left.min(other.left),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Shrinks `self` by however far `outer` spills past `bounds` on each
    /// side. The overflow of the grown outer box is exactly the room labels
    /// need, so the inner canvas gives it up edge for edge.
    #[must_use]
    pub fn outer_constrain(self, bounds: Rect, outer: Rect) -> Rect {
        let mut constrained = self;
        if outer.top < bounds.top {
            constrained.top = self.top + (bounds.top - outer.top);
        }
        if outer.left < bounds.left {
            constrained.left = self.left + (bounds.left - outer.left);
        }
        if outer.right > bounds.right {
            constrained.right = self.right - (outer.right - bounds.right);
        }
        if outer.bottom > bounds.bottom {
            constrained.bottom = self.bottom - (outer.bottom - bounds.bottom);
        }
        constrained
    }
}
