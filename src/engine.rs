// Thin adapter over shakmaty: the only place that knows about chess rules.

use shakmaty::fen::Fen;
use shakmaty::uci::UciMove;
use shakmaty::{Board, Chess, EnPassantMode, Piece, Position, Square};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("malformed move descriptor: {0}")]
    Malformed(String),
    #[error("illegal move: {0}")]
    Illegal(String),
}

/// What the input controller needs from a rules engine.
pub trait Rules {
    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Validates and applies a move given as concatenated coordinates ("e2e4").
    /// The position is left untouched on error.
    fn play_uci(&mut self, uci: &str) -> Result<(), MoveError>;

    /// Current position in Forsyth-Edwards notation.
    fn fen(&self) -> String;
}

#[derive(Debug, Clone, Default)]
pub struct Game {
    position: Chess,
    last_move: Option<(Square, Square)>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        self.position.board()
    }

    pub fn last_move(&self) -> Option<(Square, Square)> {
        self.last_move
    }

    /// King of the side to move, if it is in check.
    pub fn checked_king(&self) -> Option<Square> {
        if self.position.is_check() {
            self.board().king_of(self.position.turn())
        } else {
            None
        }
    }

    pub fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    pub fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }
}

impl Rules for Game {
    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board().piece_at(square)
    }

    fn play_uci(&mut self, uci: &str) -> Result<(), MoveError> {
        let parsed: UciMove = uci
            .parse()
            .map_err(|_| MoveError::Malformed(uci.to_owned()))?;
        let m = parsed
            .to_move(&self.position)
            .map_err(|_| MoveError::Illegal(uci.to_owned()))?;

        self.position = self
            .position
            .clone()
            .play(m)
            .map_err(|_| MoveError::Illegal(uci.to_owned()))?;

        // Castling is highlighted by where the king was sent, not by the rook.
        self.last_move = match parsed {
            UciMove::Normal { from, to, .. } => Some((from, to)),
            _ => None,
        };
        log::debug!("played {uci}");
        Ok(())
    }

    fn fen(&self) -> String {
        Fen::from_position(&self.position, EnPassantMode::Legal).to_string()
    }
}
