#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the spiral hazard engine.
//!
//! This crate defines the value types that flow between rulesets. A
//! [`Ruleset`] consumes the previous [`BoardState`] together with the
//! [`SnakeMove`] batch submitted for the step and answers with the next
//! board state. Hazard strategies wrap a base ruleset, delegate the turn
//! transition to it, and then rewrite the hazard cells of the result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Integer coordinate of a single board cell.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    /// Column of the cell, increasing toward the right edge.
    pub x: i32,
    /// Row of the cell, increasing toward the top edge.
    pub y: i32,
}

impl Point {
    /// Unit vector pointing toward increasing rows.
    pub const NORTH: Point = Point::new(0, 1);

    /// Creates a new point from explicit components.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rotates the point a quarter turn clockwise around the origin.
    pub fn rotate_cw(&mut self) {
        *self = Self::new(self.y, self.x.wrapping_neg());
    }

    /// Moves the point by the provided offset.
    ///
    /// Components wrap around at the `i32` limits instead of overflowing.
    pub fn translate(&mut self, by: Point) {
        self.x = self.x.wrapping_add(by.x);
        self.y = self.y.wrapping_add(by.y);
    }
}

/// Direction submitted by a snake for a single step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Toward increasing rows.
    Up,
    /// Toward decreasing rows.
    Down,
    /// Toward decreasing columns.
    Left,
    /// Toward increasing columns.
    Right,
}

/// Move requested by a single snake for the current step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeMove {
    /// Identifier of the snake issuing the move.
    pub id: String,
    /// Direction the snake wants to travel.
    pub direction: Move,
}

impl SnakeMove {
    /// Creates a move for the identified snake.
    #[must_use]
    pub fn new(id: impl Into<String>, direction: Move) -> Self {
        Self {
            id: id.into(),
            direction,
        }
    }
}

/// Snake participating in a game, as tracked by the board state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Unique identifier of the snake within the game.
    pub id: String,
    /// Body segments ordered from head to tail.
    pub body: Vec<Point>,
    /// Remaining health points.
    pub health: i32,
    /// Reason the snake left the game, if it was eliminated.
    pub eliminated_cause: Option<String>,
}

/// Complete board state for a single turn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// Number of columns on the board.
    pub width: i32,
    /// Number of rows on the board.
    pub height: i32,
    /// Index of the turn this state describes.
    pub turn: i32,
    /// Cells currently holding food.
    pub food: Vec<Point>,
    /// Snakes taking part in the game.
    pub snakes: Vec<Snake>,
    /// Hazardous cells in the order they were produced.
    pub hazards: Vec<Point>,
}

impl BoardState {
    /// Creates an empty board with the provided dimensions at turn zero.
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Reports whether the point lies within the board bounds.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        (0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
    }

    /// Reports whether the point is currently marked hazardous.
    #[must_use]
    pub fn is_hazard(&self, point: Point) -> bool {
        self.hazards.contains(&point)
    }
}

/// Failures reported while advancing a board state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesetError {
    /// A snake on the board did not submit a move.
    #[error("no move found for snake `{snake_id}`")]
    NoMoveFound {
        /// Identifier of the snake missing a move.
        snake_id: String,
    },
    /// A snake without body segments cannot be advanced.
    #[error("snake `{snake_id}` has no body segments")]
    ZeroLengthSnake {
        /// Identifier of the malformed snake.
        snake_id: String,
    },
    /// The board has a non-positive width or height.
    #[error("board dimensions must be positive, got {width}x{height}")]
    InvalidDimensions {
        /// Width reported by the board.
        width: i32,
        /// Height reported by the board.
        height: i32,
    },
}

/// Turn transition contract implemented by every ruleset.
pub trait Ruleset {
    /// Identifier under which the ruleset is registered.
    fn name(&self) -> &str;

    /// Computes the board state that follows `prev` once `moves` are applied.
    fn create_next_board_state(
        &self,
        prev: &BoardState,
        moves: &[SnakeMove],
    ) -> Result<BoardState, RulesetError>;
}

impl<R: Ruleset + ?Sized> Ruleset for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn create_next_board_state(
        &self,
        prev: &BoardState,
        moves: &[SnakeMove],
    ) -> Result<BoardState, RulesetError> {
        (**self).create_next_board_state(prev, moves)
    }
}

/// Configuration shared by seeded rulesets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetConfig {
    /// Seed that makes hazard placement reproducible for a game.
    pub seed: i64,
}

impl RulesetConfig {
    /// Creates a configuration using the provided seed.
    #[must_use]
    pub const fn new(seed: i64) -> Self {
        Self { seed }
    }
}
