//! Move processing: the only place new game states are produced.
//!
//! [`MoveProcessor::process_move`] runs the whole pipeline for one move:
//! 1. apply the move to the board (precondition failures reject the move
//!    and hand back the prior state untouched);
//! 2. rebuild the path network from the new board;
//! 3. validate connection degrees and evaluate the quest;
//! 4. package everything in a [`MoveResult`].

use tracing::debug;

use crate::core::{GameState, Move, Topology};
use crate::error::{Result, RulesError};
use crate::paths::{PathCalculator, PathNetwork};
use crate::quests::{Quest, QuestEvaluator, QuestResult};
use crate::tiles::Board;
use crate::validation::{ConnectionValidator, ValidationResult};

/// What happened to a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The move was applied; the new board was validated and evaluated.
    Applied {
        validation: ValidationResult,
        quest: QuestResult,
    },
    /// The move broke a precondition and was not applied.
    Rejected { error: RulesError },
}

/// Result of processing one move.
///
/// Holds the resulting state: the new state for applied moves, or a copy of
/// the prior state for rejected ones. Committing it is up to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    state: GameState,
    played: Move,
    outcome: MoveOutcome,
}

impl MoveResult {
    /// Resulting state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Take ownership of the resulting state.
    #[must_use]
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// The move that was processed.
    #[must_use]
    pub fn played(&self) -> Move {
        self.played
    }

    /// Applied or rejected, with details.
    #[must_use]
    pub fn outcome(&self) -> &MoveOutcome {
        &self.outcome
    }

    /// Whether the move passed its preconditions and was applied.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, MoveOutcome::Applied { .. })
    }

    /// Applied and the resulting board passes degree validation.
    #[must_use]
    pub fn is_legal_move(&self) -> bool {
        self.validation().is_some_and(ValidationResult::is_valid)
    }

    /// A legal move that also completes the quest.
    #[must_use]
    pub fn is_winning_move(&self) -> bool {
        self.is_legal_move() && self.quest_result().is_some_and(QuestResult::is_successful)
    }

    /// Degree validation of the resulting board, for applied moves.
    #[must_use]
    pub fn validation(&self) -> Option<&ValidationResult> {
        match &self.outcome {
            MoveOutcome::Applied { validation, .. } => Some(validation),
            MoveOutcome::Rejected { .. } => None,
        }
    }

    /// Quest status of the resulting board, for applied moves.
    #[must_use]
    pub fn quest_result(&self) -> Option<&QuestResult> {
        match &self.outcome {
            MoveOutcome::Applied { quest, .. } => Some(quest),
            MoveOutcome::Rejected { .. } => None,
        }
    }

    /// Why the move was rejected, for rejected moves.
    #[must_use]
    pub fn error(&self) -> Option<&RulesError> {
        match &self.outcome {
            MoveOutcome::Applied { .. } => None,
            MoveOutcome::Rejected { error } => Some(error),
        }
    }

    /// Rejection message, for rejected moves.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error().map(ToString::to_string)
    }
}

/// Applies moves and evaluates the result.
///
/// ```
/// use tile_link::core::Move;
/// use tile_link::quests::Quest;
/// use tile_link::rules::MoveProcessor;
/// use tile_link::tiles::{Board, Tile, TileType};
///
/// let processor = MoveProcessor::default();
/// let board = Board::empty().with_tile(0, Tile::unrotated(TileType::Curve)).unwrap();
/// let state = processor.initial_state(board, Quest::default());
///
/// let result = processor.process_move(&state, Move::rotate(0, 3));
/// assert!(result.is_valid());
/// assert_eq!(result.state().move_count(), 1);
///
/// let rejected = processor.process_move(&state, Move::rotate(0, 4));
/// assert!(!rejected.is_valid());
/// assert_eq!(rejected.state(), &state);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MoveProcessor {
    calculator: PathCalculator,
    validator: ConnectionValidator,
    evaluator: QuestEvaluator,
}

impl MoveProcessor {
    /// Create a processor over `topology`.
    #[must_use]
    pub fn new(topology: Topology) -> Self {
        Self {
            calculator: PathCalculator::new(topology.clone()),
            validator: ConnectionValidator::new(topology.clone()),
            evaluator: QuestEvaluator::new(topology),
        }
    }

    /// The topology in use.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        self.calculator.topology()
    }

    /// Starting state for `board` and `quest`, at move count 0.
    #[must_use]
    pub fn initial_state(&self, board: Board, quest: Quest) -> GameState {
        let network = self.calculator.calculate(&board);
        GameState::new(board, network, quest, 0)
    }

    fn apply(&self, board: &Board, played: Move) -> Result<(Board, PathNetwork)> {
        match played {
            Move::Rotate { slot, rotation } => {
                let next = board.with_rotation(slot, rotation)?;
                let network = self.calculator.update_for_rotation(&next, slot);
                Ok((next, network))
            }
            Move::Swap { slot_a, slot_b } => {
                let next = board.with_swap(slot_a, slot_b)?;
                let network = self.calculator.update_for_swap(&next, slot_a, slot_b);
                Ok((next, network))
            }
        }
    }

    /// Apply `played` to `state` and evaluate the result.
    ///
    /// `state` itself is never modified. A rejected move returns a copy of
    /// it with the error.
    #[must_use]
    pub fn process_move(&self, state: &GameState, played: Move) -> MoveResult {
        let (slot, other_slot) = played.slots();
        let (board, network) = match self.apply(state.board(), played) {
            Ok(applied) => applied,
            Err(error) => {
                debug!(%played, slot, ?other_slot, %error, "rejected move");
                return MoveResult {
                    state: state.clone(),
                    played,
                    outcome: MoveOutcome::Rejected { error },
                };
            }
        };

        let next = GameState::new(
            board,
            network,
            state.quest().clone(),
            state.move_count() + 1,
        );
        let validation = self.validator.validate(next.network());
        let quest = self.evaluator.evaluate(next.quest(), next.network());

        debug!(
            %played,
            slot,
            ?other_slot,
            move_count = next.move_count(),
            legal = validation.is_valid(),
            quest = %quest,
            "applied move"
        );

        MoveResult {
            state: next,
            played,
            outcome: MoveOutcome::Applied { validation, quest },
        }
    }

    /// Same computation as [`Self::process_move`], for look-ahead. Whether
    /// to commit the returned state is the caller's decision.
    #[must_use]
    pub fn preview_move(&self, state: &GameState, played: Move) -> MoveResult {
        self.process_move(state, played)
    }

    /// Every candidate move: each other rotation of each placed tile, then
    /// each unordered pair of occupied slots as a swap.
    #[must_use]
    pub fn possible_moves(&self, state: &GameState) -> Vec<Move> {
        let occupied: Vec<_> = state.board().occupied_slots().collect();
        let mut moves = Vec::new();

        for &(slot, tile) in &occupied {
            for rotation in 0..tile.max_rotations() {
                if rotation != tile.rotation() {
                    moves.push(Move::rotate(slot, rotation));
                }
            }
        }

        for (i, &(slot_a, _)) in occupied.iter().enumerate() {
            for &(slot_b, _) in &occupied[i + 1..] {
                moves.push(Move::swap(slot_a, slot_b));
            }
        }

        moves
    }

    /// Candidate moves whose result passes degree validation.
    #[must_use]
    pub fn legal_moves(&self, state: &GameState) -> Vec<Move> {
        self.possible_moves(state)
            .into_iter()
            .filter(|&played| self.preview_move(state, played).is_legal_move())
            .collect()
    }

    /// Degree validation of `state`'s network.
    #[must_use]
    pub fn validate(&self, state: &GameState) -> ValidationResult {
        self.validator.validate(state.network())
    }

    /// Quest status of `state`.
    #[must_use]
    pub fn evaluate_quest(&self, state: &GameState) -> QuestResult {
        self.evaluator.evaluate(state.quest(), state.network())
    }

    /// Fraction of `state`'s quest objectives met.
    #[must_use]
    pub fn completion_progress(&self, state: &GameState) -> f32 {
        self.evaluator.completion_progress(state.quest(), state.network())
    }
}
