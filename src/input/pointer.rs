//! Pointer Source Normalization
//!
//! Mouse and touch deliver coordinates in different shapes; both are
//! reduced here to a single optional [`Point`] per event. Only the
//! first touch point counts — multi-touch beyond the first is ignored.

/// A point in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal page coordinate
    pub x: f64,
    /// Vertical page coordinate
    pub y: f64,
}

impl Point {
    /// Construct a point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset from another point.
    pub fn delta_from(&self, start: Point) -> Delta {
        Delta {
            x: self.x - start.x,
            y: self.y - start.y,
        }
    }
}

/// Displacement from a gesture's start position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Delta {
    /// Horizontal displacement
    pub x: f64,
    /// Vertical displacement
    pub y: f64,
}

impl Delta {
    /// Construct a delta.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The zero delta, returned by inert tracker calls.
    pub const ZERO: Delta = Delta { x: 0.0, y: 0.0 };
}

/// A raw pointer event from either input source.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    /// Mouse event with page coordinates
    Mouse {
        /// Horizontal page coordinate
        x: f64,
        /// Vertical page coordinate
        y: f64,
    },

    /// Touch event carrying zero or more contact points
    Touch {
        /// Active contact points, first one wins
        points: Vec<Point>,
    },
}

impl PointerInput {
    /// Unified position of this event.
    ///
    /// Mouse events always carry a position. Touch events yield the
    /// first contact point; an empty touch list yields `None` and the
    /// caller treats the sample as a no-op.
    pub fn position(&self) -> Option<Point> {
        match self {
            PointerInput::Mouse { x, y } => Some(Point::new(*x, *y)),
            PointerInput::Touch { points } => points.first().copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mouse_position() {
        let input = PointerInput::Mouse { x: 12.0, y: -3.5 };
        assert_eq!(input.position(), Some(Point::new(12.0, -3.5)));
    }

    #[test]
    fn test_touch_uses_first_point_only() {
        let input = PointerInput::Touch {
            points: vec![Point::new(1.0, 2.0), Point::new(100.0, 200.0)],
        };
        assert_eq!(input.position(), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_empty_touch_has_no_position() {
        let input = PointerInput::Touch { points: vec![] };
        assert_eq!(input.position(), None);
    }

    #[test]
    fn test_delta_from_start() {
        let start = Point::new(100.0, 50.0);
        let current = Point::new(130.0, 20.0);
        assert_eq!(current.delta_from(start), Delta::new(30.0, -30.0));
    }
}
