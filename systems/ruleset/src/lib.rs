#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Spiral hazard ruleset layered over a base turn-transition ruleset.
//!
//! The wrapped ruleset resolves the turn first. The spiral layer then
//! rebuilds the hazard list of the resulting board from scratch: a freshly
//! seeded generator picks the spiral center, and the spiral is walked for a
//! length that grows by one cell every three turns. Re-seeding on every call
//! keeps earlier turns' hazards a prefix of later turns' hazards.

mod forecast;

pub use forecast::{infer_spiral_center, spiral_footprint, spiral_length, HazardForecast};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use spiral_hazards_core::{BoardState, Point, Ruleset, RulesetConfig, RulesetError, SnakeMove};
use spiral_hazards_system_spiral::SpiralWalker;
use tracing::debug;

/// Identifier reported by [`SpiralHazardRuleset::name`].
pub const RULESET_NAME: &str = "wrapped+spiral";

/// Ruleset decorator that replaces the hazards of every new board with a spiral.
#[derive(Clone, Debug)]
pub struct SpiralHazardRuleset<R> {
    base: R,
    seed: i64,
}

impl<R: Ruleset> SpiralHazardRuleset<R> {
    /// Wraps `base`, placing hazards reproducibly for the provided seed.
    #[must_use]
    pub fn new(base: R, seed: i64) -> Self {
        Self { base, seed }
    }

    /// Wraps `base` using the seed stored in the configuration.
    #[must_use]
    pub fn from_config(base: R, config: &RulesetConfig) -> Self {
        Self::new(base, config.seed)
    }

    /// Seed used to derive the spiral center.
    #[must_use]
    pub const fn seed(&self) -> i64 {
        self.seed
    }

    /// Ruleset that resolves turns before hazards are applied.
    #[must_use]
    pub fn base(&self) -> &R {
        &self.base
    }

    /// Draws the spiral center for a board of the given size.
    ///
    /// The generator is re-created from the seed on every call, so the same
    /// seed and dimensions always yield the same center.
    pub fn spiral_center(&self, width: i32, height: i32) -> Result<Point, RulesetError> {
        if width <= 0 || height <= 0 {
            return Err(RulesetError::InvalidDimensions { width, height });
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed as u64);
        let x = rng.gen_range(0..width);
        let y = rng.gen_range(0..height);
        Ok(Point::new(x, y))
    }

    /// Replaces the hazards on `board` with the spiral footprint for `turn`.
    ///
    /// Points falling outside the board are skipped, so the board may hold
    /// fewer hazards than the number of spiral points attempted. Boards with
    /// a non-positive dimension are rejected before any hazard is touched.
    pub fn populate_hazards(
        &self,
        board: &mut BoardState,
        turn: i32,
    ) -> Result<(), RulesetError> {
        let center = self.spiral_center(board.width, board.height)?;
        board.hazards.clear();

        let attempts = spiral_length(turn);
        for point in SpiralWalker::new(center).take(attempts) {
            if board.contains(point) {
                board.hazards.push(point);
            }
        }

        debug!(
            seed = self.seed,
            turn,
            center_x = center.x,
            center_y = center.y,
            attempts,
            placed = board.hazards.len(),
            "populated spiral hazards"
        );
        Ok(())
    }
}

impl<R: Ruleset> Ruleset for SpiralHazardRuleset<R> {
    fn name(&self) -> &str {
        RULESET_NAME
    }

    fn create_next_board_state(
        &self,
        prev: &BoardState,
        moves: &[SnakeMove],
    ) -> Result<BoardState, RulesetError> {
        let mut next = self.base.create_next_board_state(prev, moves)?;
        self.populate_hazards(&mut next, prev.turn + 1)?;
        Ok(next)
    }
}
