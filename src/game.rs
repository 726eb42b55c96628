//! A game session: the persistent board plus everything the rules engine
//! does not track (journal, per-side move counts, turn limit).

use std::time::{Duration, Instant};

use crate::board::{
    best_move, Board, Color, Move, MoveError, MoveRecord, Outcome, SearchResult,
};

/// Session settings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// End the game as a draw once both sides have made this many moves
    pub max_turns: Option<u32>,
}

impl GameConfig {
    #[must_use]
    pub fn with_max_turns(mut self, turns: u32) -> Self {
        self.max_turns = Some(turns);
        self
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    outcome: Outcome,
    history: Vec<MoveRecord>,
    moves_made: [u32; 2],
    config: GameConfig,
}

impl Default for Game {
    fn default() -> Self {
        Game::new(GameConfig::default())
    }
}

impl Game {
    /// Start a new game from the initial position.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Game::from_board(Board::new(), config)
    }

    /// Start a session from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, config: GameConfig) -> Self {
        let mut game = Game {
            outcome: board.outcome(),
            board,
            history: Vec::new(),
            moves_made: [0; 2],
            config,
        };
        game.settle_outcome();
        game
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_terminal()
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Every committed move, oldest first
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Moves committed by one side
    #[must_use]
    pub fn moves_made(&self, color: Color) -> u32 {
        self.moves_made[color.index()]
    }

    /// 1-based number of the current full turn.
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.moves_made(Color::White) + 1
    }

    #[must_use]
    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Apply a move to the persistent board.
    ///
    /// # Errors
    /// `MoveError::GameOver` once the session has ended, or any rejection
    /// from [`Board::apply_move`]. The session is unchanged on error.
    pub fn commit(&mut self, mv: Move) -> Result<&MoveRecord, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver {
                outcome: self.outcome,
            });
        }
        let transition = self.board.apply_move(mv)?;
        let mover = transition.record.color;

        self.board = transition.board;
        self.outcome = transition.outcome;
        self.moves_made[mover.index()] += 1;
        self.history.push(transition.record);
        self.settle_outcome();

        Ok(&self.history[self.history.len() - 1])
    }

    /// Search the current position for the side to move.
    ///
    /// Runs on a copy; the session is not touched.
    #[must_use]
    pub fn think(&self, time_limit: Duration) -> SearchResult {
        best_move(
            &self.board,
            self.board.side_to_move(),
            Instant::now() + time_limit,
        )
    }

    /// Let the engine choose and commit a move for the side to move.
    ///
    /// Returns `Ok(None)` when the side to move has no legal move; the
    /// session then ends as a loss for that side.
    ///
    /// # Errors
    /// `MoveError::GameOver` if the session has already ended.
    pub fn play_ai_turn(&mut self, time_limit: Duration) -> Result<Option<MoveRecord>, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver {
                outcome: self.outcome,
            });
        }
        let result = self.think(time_limit);
        match result.best_move {
            Some(mv) => self.commit(mv).map(|record| Some(*record)),
            None => {
                self.finish(Outcome::win_for(self.board.side_to_move().opponent()));
                Ok(None)
            }
        }
    }

    /// Apply the session-level rules on top of the board outcome: the turn
    /// limit, and a side with no legal move losing.
    fn settle_outcome(&mut self) {
        if self.outcome.is_terminal() {
            self.finish(self.outcome);
            return;
        }
        if let Some(limit) = self.config.max_turns {
            if Color::BOTH.iter().all(|&c| self.moves_made(c) >= limit) {
                self.finish(Outcome::Draw);
                return;
            }
        }
        if self.board.generate_moves().is_empty() {
            self.finish(Outcome::win_for(self.board.side_to_move().opponent()));
        }
    }

    fn finish(&mut self, outcome: Outcome) {
        self.outcome = outcome;
        log::info!(
            "game over after {} moves: {outcome}",
            self.history.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, Piece, Square};

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    fn mv(s: &str) -> Move {
        s.parse().unwrap()
    }

    #[test]
    fn test_commit_updates_counters_and_history() {
        let mut game = Game::default();
        let record = *game.commit(mv("B2 B3")).unwrap();
        assert_eq!(record.to_string(), "White: wp B2 -> B3");
        assert_eq!(game.moves_made(Color::White), 1);
        assert_eq!(game.moves_made(Color::Black), 0);
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_rejected_move_leaves_session_unchanged() {
        let mut game = Game::default();
        let before = game.board().clone();
        assert!(game.commit(mv("B2 B1")).is_err());
        assert_eq!(game.board(), &before);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_king_capture_ends_session() {
        let board = BoardBuilder::new()
            .piece(sq("E1"), Color::White, Piece::King)
            .piece(sq("A5"), Color::Black, Piece::King)
            .piece(sq("E4"), Color::Black, Piece::Queen)
            .side_to_move(Color::Black)
            .build();
        let mut game = Game::from_board(board, GameConfig::default());
        let record = *game.commit(mv("E4 E1")).unwrap();
        assert_eq!(record.captured, Some((Color::White, Piece::King)));
        assert_eq!(game.outcome(), Outcome::BlackWins);
        assert!(matches!(
            game.commit(mv("A5 A4")),
            Err(MoveError::GameOver {
                outcome: Outcome::BlackWins
            })
        ));
    }

    #[test]
    fn test_turn_limit_draws() {
        let mut game = Game::new(GameConfig::default().with_max_turns(1));
        game.commit(mv("B2 B3")).unwrap();
        assert!(!game.is_over());
        game.commit(mv("D4 D3")).unwrap();
        assert_eq!(game.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_no_legal_moves_is_a_loss() {
        // King in the corner boxed in by its own pawns, none of which can
        // advance or capture.
        let board = BoardBuilder::new()
            .piece(sq("A5"), Color::White, Piece::King)
            .piece(sq("B5"), Color::White, Piece::Pawn)
            .piece(sq("A4"), Color::White, Piece::Pawn)
            .piece(sq("B4"), Color::White, Piece::Pawn)
            .piece(sq("E1"), Color::Black, Piece::King)
            .build();
        assert!(board.generate_moves().is_empty());
        let game = Game::from_board(board, GameConfig::default());
        assert_eq!(game.outcome(), Outcome::BlackWins);
    }

    #[test]
    fn test_ai_turn_commits_a_legal_move() {
        let mut game = Game::default();
        let record = game
            .play_ai_turn(Duration::from_millis(500))
            .unwrap()
            .expect("white has moves");
        assert_eq!(record.color, Color::White);
        assert_eq!(game.moves_made(Color::White), 1);
    }
}
