//! Turn protocol: phase and one-action-per-turn accounting.

use crate::core::{EngineError, EngineResult, Side};

/// Where the game stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    InProgress,
    /// A side guessed the opponent's secret. Terminal.
    Won(Side),
    /// Explicitly ended by the caller. Terminal.
    Ended,
}

impl Phase {
    /// Terminal phases accept no further mutating operations.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

/// Whose turn it is and whether the one allowed action was spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnState {
    active: Side,
    acted: bool,
    turn_number: u32,
}

impl TurnState {
    /// Start at turn 0 with the given side to act.
    #[must_use]
    pub fn new(starting: Side) -> Self {
        Self {
            active: starting,
            acted: false,
            turn_number: 0,
        }
    }

    /// The side whose turn it is.
    #[must_use]
    pub fn active(&self) -> Side {
        self.active
    }

    /// Whether the active side has already used its action this turn.
    #[must_use]
    pub fn has_acted(&self) -> bool {
        self.acted
    }

    /// Monotonically increasing turn counter, starting at 0.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Claim the turn's single action.
    ///
    /// Fails with `AlreadyActedThisTurn` on a second claim without an
    /// intervening `pass`, leaving state unchanged.
    pub(crate) fn begin_action(&mut self) -> EngineResult<()> {
        if self.acted {
            return Err(EngineError::AlreadyActedThisTurn);
        }
        self.acted = true;
        Ok(())
    }

    /// Hand the turn to the other side.
    pub(crate) fn pass(&mut self) {
        self.active = self.active.opponent();
        self.acted = false;
        self.turn_number += 1;
    }
}
