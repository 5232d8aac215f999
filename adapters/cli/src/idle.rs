use spiral_hazards_core::{BoardState, Ruleset, RulesetError, SnakeMove};

/// Base ruleset for previews: advances the turn counter and changes nothing else.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct IdleRuleset;

impl Ruleset for IdleRuleset {
    fn name(&self) -> &str {
        "idle"
    }

    fn create_next_board_state(
        &self,
        prev: &BoardState,
        _moves: &[SnakeMove],
    ) -> Result<BoardState, RulesetError> {
        let mut next = prev.clone();
        next.turn += 1;
        Ok(next)
    }
}
