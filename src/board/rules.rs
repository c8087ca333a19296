//! Legality filtering and terminal-state detection.

use super::{ActionList, CastleSide, Color, History, Piece, ResultFlags, RulesError, Square, State};

impl State {
    /// Exactly one king of each color.
    pub(crate) fn validate_kings(&self) -> Result<(), RulesError> {
        for color in Color::BOTH {
            match self.count(color, Piece::King) {
                0 => return Err(RulesError::MissingKing { color }),
                1 => {}
                count => return Err(RulesError::TooManyKings { color, count }),
            }
        }
        Ok(())
    }

    /// Legal actions of the side to move, in generation order.
    ///
    /// An empty list means checkmate or stalemate.
    pub fn legal_actions(&self) -> Result<ActionList, RulesError> {
        self.validate_kings()?;
        Ok(self.legal_actions_for(self.turn))
    }

    /// Pseudo-legal actions of `color` that do not leave its king attacked.
    /// Castling also needs the king out of check and the square it crosses
    /// unattacked. Kings are not validated here.
    pub(crate) fn legal_actions_for(&self, color: Color) -> ActionList {
        let opponent = color.opponent();
        let mut actions = self.pseudo_legal_actions_for(color);
        actions.retain(|action| {
            if let Some(side) = action.castling {
                let rank = color.back_rank();
                let crossed = match side {
                    CastleSide::Kingside => 5,
                    CastleSide::Queenside => 3,
                };
                if self.is_square_attacked(action.from, opponent)
                    || self.is_square_attacked(Square(rank, crossed), opponent)
                {
                    return false;
                }
            }
            !self.make(action).is_check(color)
        });
        actions
    }

    /// Returns true if the king of `color` is attacked. A missing king is
    /// never in check.
    #[must_use]
    pub fn is_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|sq| self.is_square_attacked(sq, color.opponent()))
    }

    /// `color` is in check and has no legal action.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_check(color) && self.legal_actions_for(color).is_empty()
    }

    /// The side to move is not in check and has no legal action.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_check(self.turn) && self.legal_actions_for(self.turn).is_empty()
    }

    /// Only the two kings remain, or this position occurred at least three
    /// times in `history`.
    #[must_use]
    pub fn is_draw(&self, history: &History) -> bool {
        self.is_bare_kings() || history.is_threefold(self)
    }

    pub(crate) fn compute_flags(&self) -> ResultFlags {
        ResultFlags {
            white_check: self.is_check(Color::White),
            black_check: self.is_check(Color::Black),
            white_checkmate: self.is_checkmate(Color::White),
            black_checkmate: self.is_checkmate(Color::Black),
            draw: self.is_bare_kings() || self.is_stalemate(),
        }
    }

    /// Number of leaf positions of the legal move tree `depth` plies deep.
    pub fn perft(&self, depth: usize) -> Result<u64, RulesError> {
        self.validate_kings()?;
        Ok(self.perft_inner(depth))
    }

    fn perft_inner(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }
        let actions = self.legal_actions_for(self.turn);
        if depth == 1 {
            return actions.len() as u64;
        }
        actions
            .iter()
            .map(|action| self.make(action).perft_inner(depth - 1))
            .sum()
    }

    /// Leaf counts below each legal root action, for move generator
    /// debugging.
    pub fn perft_divide(&self, depth: usize) -> Result<Vec<(super::Action, u64)>, RulesError> {
        let actions = self.legal_actions()?;
        Ok(actions
            .into_iter()
            .map(|action| {
                let nodes = self.make(&action).perft_inner(depth.saturating_sub(1));
                (action, nodes)
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{codec, CastlingRights, Color, Piece, RulesError, Square, State, StateBuilder};

    #[test]
    fn test_start_position_legal_actions() {
        let state = State::new();
        let actions = state.legal_actions().unwrap();
        assert_eq!(actions.len(), 20);
        assert!(!state.is_check(Color::White));
        assert!(!state.is_check(Color::Black));
        assert!(!state.is_checkmate(Color::White));
        assert!(!state.is_stalemate());
    }

    #[test]
    fn test_missing_king_is_error() {
        let state = codec::decode(concat!(
            "    ♚   ", "        ", "        ", "        ",
            "        ", "        ", "        ", "        ",
        ))
        .unwrap();
        assert_eq!(
            state.legal_actions(),
            Err(RulesError::MissingKing {
                color: Color::White
            })
        );
        assert!(!state.is_check(Color::White));
    }

    #[test]
    fn test_two_kings_is_error() {
        let state = codec::decode(concat!(
            "    ♚   ", "        ", "        ", "        ",
            "        ", "        ", "        ", "♔   ♔   ",
        ))
        .unwrap();
        assert_eq!(
            state.legal_actions(),
            Err(RulesError::TooManyKings {
                color: Color::White,
                count: 2
            })
        );
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        // White knight on e2 pinned by the rook on e8
        let state = StateBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(1, 4), Color::White, Piece::Knight)
            .piece(Square(7, 4), Color::Black, Piece::Rook)
            .piece(Square(7, 0), Color::Black, Piece::King)
            .build()
            .unwrap();
        let actions = state.legal_actions().unwrap();
        assert!(actions.iter().all(|a| a.piece() != Piece::Knight));
    }

    #[test]
    fn test_castling_through_attack_rejected() {
        // Black rook on f8 covers f1, the square the king crosses
        let state = StateBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(0, 7), Color::White, Piece::Rook)
            .piece(Square(7, 5), Color::Black, Piece::Rook)
            .piece(Square(7, 0), Color::Black, Piece::King)
            .castling_rights(CastlingRights::all())
            .build()
            .unwrap();
        assert!(state.pseudo_legal_actions().iter().any(|a| a.castling().is_some()));
        assert!(state.legal_actions().unwrap().iter().all(|a| a.castling().is_none()));
    }

    #[test]
    fn test_castling_out_of_check_rejected() {
        let state = StateBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(0, 7), Color::White, Piece::Rook)
            .piece(Square(7, 4), Color::Black, Piece::Rook)
            .piece(Square(7, 0), Color::Black, Piece::King)
            .castling_rights(CastlingRights::all())
            .build()
            .unwrap();
        assert!(state.is_check(Color::White));
        assert!(state.legal_actions().unwrap().iter().all(|a| a.castling().is_none()));
    }

    #[test]
    fn test_stalemate() {
        // Black king a8, white queen c7, white king c6; Black to move
        let state = StateBuilder::new()
            .piece(Square(7, 0), Color::Black, Piece::King)
            .piece(Square(6, 2), Color::White, Piece::Queen)
            .piece(Square(5, 2), Color::White, Piece::King)
            .side_to_move(Color::Black)
            .build()
            .unwrap();
        assert!(state.is_stalemate());
        assert!(!state.is_checkmate(Color::Black));
        assert!(state.flags().draw);
        assert!(state.legal_actions().unwrap().is_empty());
    }

    #[test]
    fn test_perft_start_shallow() {
        let state = State::new();
        assert_eq!(state.perft(0).unwrap(), 1);
        assert_eq!(state.perft(1).unwrap(), 20);
        assert_eq!(state.perft(2).unwrap(), 400);
    }

    #[test]
    fn test_perft_divide_sums() {
        let state = State::new();
        let divided = state.perft_divide(2).unwrap();
        assert_eq!(divided.len(), 20);
        assert_eq!(divided.iter().map(|(_, n)| n).sum::<u64>(), 400);
    }
}
