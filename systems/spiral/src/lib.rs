#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Square spiral walker that yields board points outward from a center.
//!
//! The walk starts on the center facing north. Every completed arm turns the
//! heading clockwise. Reaching the end of a northbound arm steps once more
//! along it before turning and widens the next ring by two cells, so the
//! first `(2k + 1)^2` points cover the square of half-width `k` exactly once.

use spiral_hazards_core::Point;

/// Cursor over an unbounded square spiral.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpiralWalker {
    position: Point,
    direction: Point,
    amplitude: i32,
    arm_length: i32,
}

impl SpiralWalker {
    /// Creates a walker whose first emitted point is `center`.
    #[must_use]
    pub const fn new(center: Point) -> Self {
        Self {
            position: center,
            direction: Point::NORTH,
            amplitude: 0,
            arm_length: -1,
        }
    }

    /// Point that the next call to [`SpiralWalker::next_point`] will emit.
    #[must_use]
    pub const fn position(&self) -> Point {
        self.position
    }

    /// Unit vector the walker is currently travelling along.
    #[must_use]
    pub const fn direction(&self) -> Point {
        self.direction
    }

    /// Arm length bound of the current ring.
    #[must_use]
    pub const fn amplitude(&self) -> i32 {
        self.amplitude
    }

    /// Steps taken along the current arm since the last corner.
    #[must_use]
    pub const fn arm_length(&self) -> i32 {
        self.arm_length
    }

    /// Emits the current point and advances the cursor by one cell.
    pub fn next_point(&mut self) -> Point {
        let emitted = self.position;

        self.arm_length += 1;
        if self.arm_length == self.amplitude {
            self.arm_length = 0;
            if self.direction == Point::NORTH {
                self.position.translate(self.direction);
                self.direction.rotate_cw();
                self.amplitude += 2;
            } else {
                self.direction.rotate_cw();
                self.position.translate(self.direction);
            }
        } else {
            self.position.translate(self.direction);
        }

        emitted
    }
}

impl Iterator for SpiralWalker {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_point())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_walker_sits_on_center_facing_north() {
        let walker = SpiralWalker::new(Point::new(4, 7));
        assert_eq!(walker.position(), Point::new(4, 7));
        assert_eq!(walker.direction(), Point::NORTH);
        assert_eq!(walker.amplitude(), 0);
        assert_eq!(walker.arm_length(), -1);
    }

    #[test]
    fn first_step_crosses_the_north_seam() {
        let mut walker = SpiralWalker::new(Point::new(0, 0));
        assert_eq!(walker.next_point(), Point::new(0, 0));
        assert_eq!(walker.position(), Point::new(0, 1));
        assert_eq!(walker.direction(), Point::new(1, 0));
        assert_eq!(walker.amplitude(), 2);
        assert_eq!(walker.arm_length(), 0);
    }

    #[test]
    fn plain_corner_turns_before_translating() {
        let mut walker = SpiralWalker::new(Point::new(0, 0));
        for _ in 0..3 {
            let _ = walker.next_point();
        }
        // Second east step completes the arm, so the walker turns south first.
        assert_eq!(walker.position(), Point::new(1, 0));
        assert_eq!(walker.direction(), Point::new(0, -1));
        assert_eq!(walker.amplitude(), 2);
        assert_eq!(walker.arm_length(), 0);
    }
}
