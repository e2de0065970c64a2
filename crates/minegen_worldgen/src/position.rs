//! Integer cell addressing for the voxel grid.

/// A unit cell in the infinite voxel grid.
///
/// Neighbour steps wrap at the `i32` boundary instead of panicking, so any
/// position (including `i32::MIN` on Y) can be queried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// X coordinate (east/west).
    pub x: i32,
    /// Y coordinate (height).
    pub y: i32,
    /// Z coordinate (north/south).
    pub z: i32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell at -X.
    #[inline]
    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.x.wrapping_sub(1), self.y, self.z)
    }

    /// The cell at +X.
    #[inline]
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.x.wrapping_add(1), self.y, self.z)
    }

    /// The cell at +Y.
    #[inline]
    #[must_use]
    pub const fn up(self) -> Self {
        Self::new(self.x, self.y.wrapping_add(1), self.z)
    }

    /// The cell at -Y.
    #[inline]
    #[must_use]
    pub const fn down(self) -> Self {
        Self::new(self.x, self.y.wrapping_sub(1), self.z)
    }

    /// The cell at +Z.
    #[inline]
    #[must_use]
    pub const fn front(self) -> Self {
        Self::new(self.x, self.y, self.z.wrapping_add(1))
    }

    /// The cell at -Z.
    #[inline]
    #[must_use]
    pub const fn back(self) -> Self {
        Self::new(self.x, self.y, self.z.wrapping_sub(1))
    }
}

impl From<(i32, i32, i32)> for Position {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbours() {
        let p = Position::new(3, -4, 7);

        assert_eq!(p.left(), Position::new(2, -4, 7));
        assert_eq!(p.right(), Position::new(4, -4, 7));
        assert_eq!(p.up(), Position::new(3, -3, 7));
        assert_eq!(p.down(), Position::new(3, -5, 7));
        assert_eq!(p.front(), Position::new(3, -4, 8));
        assert_eq!(p.back(), Position::new(3, -4, 6));
    }

    #[test]
    fn test_opposite_steps_cancel() {
        let p = Position::new(-10, 20, -30);

        assert_eq!(p.left().right(), p);
        assert_eq!(p.up().down(), p);
        assert_eq!(p.front().back(), p);
    }

    #[test]
    fn test_down_at_bottom_wraps() {
        let p = Position::new(0, i32::MIN, 0);
        assert_eq!(p.down().y, i32::MAX);
    }

    #[test]
    fn test_from_tuple() {
        assert_eq!(Position::from((1, 2, 3)), Position::new(1, 2, 3));
    }
}
