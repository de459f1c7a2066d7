#![forbid(unsafe_code)]

//! Swipe directions and direction sets.

use bitflags::bitflags;

use crate::geometry::Offset;

/// Dominant axis of a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Dominant axis of `d`. Horizontal wins only when strictly larger.
    #[must_use]
    pub fn dominant(d: Offset) -> Self {
        if d.x.abs() > d.y.abs() {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }

    /// Component of `d` along this axis.
    #[inline]
    #[must_use]
    pub fn component(self, d: Offset) -> f64 {
        match self {
            Self::Horizontal => d.x,
            Self::Vertical => d.y,
        }
    }
}

/// Cardinal direction of a swipe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    Right,
    Left,
    Up,
    Down,
}

impl SwipeDirection {
    /// All directions, horizontal first.
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Up, Self::Down];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns true for vertical directions.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Returns true for horizontal directions.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        if self.is_vertical() {
            Axis::Vertical
        } else {
            Axis::Horizontal
        }
    }

    /// Unit offset in screen coordinates (`Up` is negative `y`).
    #[must_use]
    pub const fn unit(self) -> Offset {
        match self {
            Self::Right => Offset::new(1.0, 0.0),
            Self::Left => Offset::new(-1.0, 0.0),
            Self::Up => Offset::new(0.0, -1.0),
            Self::Down => Offset::new(0.0, 1.0),
        }
    }

    /// Direction on `axis` matching the sign of `component`.
    ///
    /// Zero maps to `Left` / `Down`, matching the `dx > 0` / `dy < 0` tests
    /// the classifier and resolver use.
    #[must_use]
    pub fn from_sign(axis: Axis, component: f64) -> Self {
        match axis {
            Axis::Horizontal if component > 0.0 => Self::Right,
            Axis::Horizontal => Self::Left,
            Axis::Vertical if component < 0.0 => Self::Up,
            Axis::Vertical => Self::Down,
        }
    }

    /// Stable lowercase name for logs and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// Set of directions with a registered outcome handler.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct DirectionSet: u8 {
        const RIGHT = 0b0001;
        const LEFT = 0b0010;
        const UP = 0b0100;
        const DOWN = 0b1000;
        const HORIZONTAL = Self::RIGHT.bits() | Self::LEFT.bits();
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
    }
}

impl DirectionSet {
    /// Whether `direction` is in the set.
    #[inline]
    #[must_use]
    pub fn has(self, direction: SwipeDirection) -> bool {
        self.contains(Self::from(direction))
    }
}

impl From<SwipeDirection> for DirectionSet {
    fn from(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::Right => Self::RIGHT,
            SwipeDirection::Left => Self::LEFT,
            SwipeDirection::Up => Self::UP,
            SwipeDirection::Down => Self::DOWN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dominant_axis_prefers_horizontal_only_when_strictly_larger() {
        assert_eq!(Axis::dominant(Offset::new(5.0, 4.0)), Axis::Horizontal);
        assert_eq!(Axis::dominant(Offset::new(-5.0, 4.0)), Axis::Horizontal);
        assert_eq!(Axis::dominant(Offset::new(4.0, 4.0)), Axis::Vertical);
        assert_eq!(Axis::dominant(Offset::ZERO), Axis::Vertical);
    }

    #[test]
    fn sign_mapping() {
        assert_eq!(
            SwipeDirection::from_sign(Axis::Horizontal, 3.0),
            SwipeDirection::Right
        );
        assert_eq!(
            SwipeDirection::from_sign(Axis::Horizontal, -3.0),
            SwipeDirection::Left
        );
        assert_eq!(
            SwipeDirection::from_sign(Axis::Vertical, -3.0),
            SwipeDirection::Up
        );
        assert_eq!(
            SwipeDirection::from_sign(Axis::Vertical, 3.0),
            SwipeDirection::Down
        );
    }

    #[test]
    fn unit_matches_axis_and_opposite() {
        for dir in SwipeDirection::ALL {
            let u = dir.unit();
            assert_eq!(u + dir.opposite().unit(), Offset::ZERO);
            assert_eq!(dir.axis().component(u).abs(), 1.0);
            assert_eq!(dir.is_vertical(), dir.axis() == Axis::Vertical);
        }
    }

    #[test]
    fn direction_set_membership() {
        let set = DirectionSet::RIGHT | DirectionSet::DOWN;
        assert!(set.has(SwipeDirection::Right));
        assert!(set.has(SwipeDirection::Down));
        assert!(!set.has(SwipeDirection::Left));
        assert!(!set.has(SwipeDirection::Up));
        assert!(DirectionSet::HORIZONTAL.has(SwipeDirection::Left));
    }
}
