//! Game state: board, its path network, the quest and the move count.
//!
//! A `GameState` is never edited in place. The
//! [`MoveProcessor`](crate::rules::MoveProcessor) is the only producer of
//! new states, and each processed move yields a fresh one. Cloning is
//! cheap: the board is a small array and the quest shares its `im`
//! vectors.

use crate::paths::PathNetwork;
use crate::quests::Quest;
use crate::tiles::Board;

/// Immutable snapshot of a puzzle in progress.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    network: PathNetwork,
    quest: Quest,
    move_count: u32,
}

impl GameState {
    pub(crate) fn new(board: Board, network: PathNetwork, quest: Quest, move_count: u32) -> Self {
        Self {
            board,
            network,
            quest,
            move_count,
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Path network of the current board.
    #[must_use]
    pub fn network(&self) -> &PathNetwork {
        &self.network
    }

    /// Quest being played.
    #[must_use]
    pub fn quest(&self) -> &Quest {
        &self.quest
    }

    /// Number of valid moves applied since the initial state.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }
}
