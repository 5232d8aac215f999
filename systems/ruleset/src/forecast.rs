use spiral_hazards_core::Point;
use spiral_hazards_system_spiral::SpiralWalker;

/// Number of spiral points attempted on `turn`, including the center.
///
/// The spiral gains one point every three turns. Division truncates toward
/// zero, and the count never drops below zero for turns before the start.
#[must_use]
pub fn spiral_length(turn: i32) -> usize {
    usize::try_from(turn / 3 + 1).unwrap_or(0)
}

/// Hazards a spiral centered on `center` covers on `turn` for the given board.
///
/// Points are returned in walk order with off-board points dropped, which is
/// exactly the list the spiral ruleset writes once the center is known.
#[must_use]
pub fn spiral_footprint(center: Point, turn: i32, width: i32, height: i32) -> Vec<Point> {
    SpiralWalker::new(center)
        .take(spiral_length(turn))
        .filter(|point| (0..width).contains(&point.x) && (0..height).contains(&point.y))
        .collect()
}

/// Recovers the spiral center from a hazard list produced by the spiral ruleset.
///
/// The center always lies on the board and is emitted first.
#[must_use]
pub fn infer_spiral_center(hazards: &[Point]) -> Option<Point> {
    hazards.first().copied()
}

/// Predicts spiral hazards for future turns from a known center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardForecast {
    center: Point,
    width: i32,
    height: i32,
}

impl HazardForecast {
    /// Creates a forecast for a spiral centered on `center`.
    #[must_use]
    pub const fn new(center: Point, width: i32, height: i32) -> Self {
        Self {
            center,
            width,
            height,
        }
    }

    /// Builds a forecast from hazards observed on a board, if any are present.
    #[must_use]
    pub fn from_hazards(hazards: &[Point], width: i32, height: i32) -> Option<Self> {
        infer_spiral_center(hazards).map(|center| Self::new(center, width, height))
    }

    /// Center the forecast walks from.
    #[must_use]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// Hazards present on `turn`.
    #[must_use]
    pub fn hazards_at(&self, turn: i32) -> Vec<Point> {
        spiral_footprint(self.center, turn, self.width, self.height)
    }

    /// Hazards that appear on `turn` but were absent on the turn before.
    #[must_use]
    pub fn newly_hazardous(&self, turn: i32) -> Vec<Point> {
        let previous = spiral_footprint(
            self.center,
            turn.saturating_sub(1),
            self.width,
            self.height,
        )
        .len();
        let mut current = self.hazards_at(turn);
        current.split_off(previous.min(current.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_steps_every_third_turn() {
        let lengths: Vec<usize> = (0..10).map(spiral_length).collect();
        assert_eq!(lengths, vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4]);
    }

    #[test]
    fn length_truncates_toward_zero_before_the_first_turn() {
        assert_eq!(spiral_length(-1), 1);
        assert_eq!(spiral_length(-2), 1);
        assert_eq!(spiral_length(-3), 0);
        assert_eq!(spiral_length(i32::MIN), 0);
    }

    #[test]
    fn footprint_drops_off_board_points() {
        // Corner center: the first ring mostly falls off the board.
        let hazards = spiral_footprint(Point::new(0, 0), 24, 3, 3);
        assert_eq!(
            hazards,
            vec![Point::new(0, 0), Point::new(0, 1), Point::new(1, 1), Point::new(1, 0)]
        );
    }

    #[test]
    fn newly_hazardous_is_empty_between_growth_turns() {
        let forecast = HazardForecast::new(Point::new(5, 5), 11, 11);
        assert!(forecast.newly_hazardous(4).is_empty());
        assert_eq!(forecast.newly_hazardous(3), vec![Point::new(5, 6)]);
        assert_eq!(forecast.newly_hazardous(6), vec![Point::new(6, 6)]);
    }

    #[test]
    fn infer_center_reads_first_hazard() {
        assert_eq!(infer_spiral_center(&[]), None);
        assert_eq!(
            infer_spiral_center(&[Point::new(2, 3), Point::new(2, 4)]),
            Some(Point::new(2, 3))
        );
    }
}
