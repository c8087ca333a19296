//! Board text transforms: rotations, flips and color swap.
//!
//! All transforms work on 64-glyph board text (see `codec`) and reject text
//! of the wrong length. Rotations are counterclockwise as seen with a8 at the
//! top left.

use super::codec::square_to_text_index;
use super::{CastleSide, CastlingRights, CodecError, Color, Piece, Square, State};

fn glyphs(text: &str) -> Result<Vec<char>, CodecError> {
    let symbols: Vec<char> = text.chars().collect();
    if symbols.len() != 64 {
        return Err(CodecError::InvalidLength { len: symbols.len() });
    }
    Ok(symbols)
}

fn remap(text: &str, source: impl Fn(usize, usize) -> usize) -> Result<String, CodecError> {
    let symbols = glyphs(text)?;
    Ok((0..64).map(|idx| symbols[source(idx / 8, idx % 8)]).collect())
}

/// Rotate the board by `k` quarter turns counterclockwise. Negative `k`
/// turns clockwise.
pub fn rotate90(text: &str, k: i32) -> Result<String, CodecError> {
    match k.rem_euclid(4) {
        0 => remap(text, |row, col| row * 8 + col),
        1 => remap(text, |row, col| col * 8 + (7 - row)),
        2 => remap(text, |row, col| (7 - row) * 8 + (7 - col)),
        _ => remap(text, |row, col| (7 - col) * 8 + row),
    }
}

/// Mirror top to bottom: rank 8 swaps with rank 1.
pub fn flip_vertical(text: &str) -> Result<String, CodecError> {
    remap(text, |row, col| (7 - row) * 8 + col)
}

/// Mirror left to right: the a-file swaps with the h-file.
pub fn flip_horizontal(text: &str) -> Result<String, CodecError> {
    remap(text, |row, col| row * 8 + (7 - col))
}

/// Exchange white and black glyphs; empty squares and unknown glyphs are
/// kept as they are.
pub fn swap_colors(text: &str) -> Result<String, CodecError> {
    let symbols = glyphs(text)?;
    Ok(symbols
        .into_iter()
        .map(|symbol| match Piece::from_glyph(symbol) {
            Some((color, piece)) => piece.glyph(color.opponent()),
            None => symbol,
        })
        .collect())
}

impl State {
    /// The same position seen from the other side: board flipped top to
    /// bottom, colors swapped, side to move, castling rights and en-passant
    /// target mirrored. Legal action counts are preserved.
    #[must_use]
    pub fn color_mirror(&self) -> State {
        let mut mirrored = State::empty();
        for sq in self.occupied().iter() {
            if let Some((color, piece)) = self.piece_at(sq) {
                mirrored.set_piece(mirror_square(sq), color.opponent(), piece);
            }
        }
        mirrored.turn = self.turn.opponent();
        let mut rights = CastlingRights::none();
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                if self.castling_rights.has(color, side) {
                    rights.set(color.opponent(), side);
                }
            }
        }
        mirrored.castling_rights = rights;
        mirrored.en_passant = self.en_passant.map(mirror_square);
        mirrored.ply = self.ply;
        mirrored.flags = mirrored.compute_flags();
        mirrored
    }
}

fn mirror_square(sq: Square) -> Square {
    Square(7 - sq.rank(), sq.file())
}

/// Text position of `sq` after `rotate90(_, k)`; used to relocate squares
/// alongside rotated board text.
#[must_use]
pub fn rotated_text_index(sq: Square, k: i32) -> usize {
    let idx = square_to_text_index(sq);
    let (mut row, mut col) = (idx / 8, idx % 8);
    for _ in 0..k.rem_euclid(4) {
        (row, col) = (7 - col, row);
    }
    row * 8 + col
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::codec::{decode, START_BOARD};

    #[test]
    fn test_rotate_four_times_is_identity() {
        let mut text = START_BOARD.to_string();
        for _ in 0..4 {
            text = rotate90(&text, 1).unwrap();
        }
        assert_eq!(text, START_BOARD);
        assert_eq!(rotate90(START_BOARD, -1).unwrap(), rotate90(START_BOARD, 3).unwrap());
    }

    #[test]
    fn test_rotate_moves_corner() {
        // A lone king on a8 (text index 0) ends on a1 after one
        // counterclockwise quarter turn
        let mut text = vec![' '; 64];
        text[0] = '♔';
        let text: String = text.into_iter().collect();
        let rotated: Vec<char> = rotate90(&text, 1).unwrap().chars().collect();
        assert_eq!(rotated[56], '♔');
        assert_eq!(rotated_text_index(Square(7, 0), 1), 56);
    }

    #[test]
    fn test_rotated_text_index_matches_rotation() {
        let text = START_BOARD;
        for k in 0..4 {
            let rotated: Vec<char> = rotate90(text, k).unwrap().chars().collect();
            let original: Vec<char> = text.chars().collect();
            for idx in 0..64 {
                let sq = Square(7 - idx / 8, idx % 8);
                assert_eq!(rotated[rotated_text_index(sq, k)], original[idx]);
            }
        }
    }

    #[test]
    fn test_flip_vertical_and_swap_restore_start() {
        let flipped = flip_vertical(START_BOARD).unwrap();
        assert_ne!(flipped, START_BOARD);
        assert_eq!(swap_colors(&flipped).unwrap(), START_BOARD);
    }

    #[test]
    fn test_flip_horizontal_twice() {
        let once = flip_horizontal(START_BOARD).unwrap();
        assert_eq!(flip_horizontal(&once).unwrap(), START_BOARD);
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(
            swap_colors("♔"),
            Err(CodecError::InvalidLength { len: 1 })
        );
        assert!(rotate90("", 1).is_err());
    }

    #[test]
    fn test_color_mirror_start_position() {
        let state = State::new();
        let mirrored = state.color_mirror();
        assert_eq!(mirrored.pieces, state.pieces);
        assert_eq!(mirrored.turn(), Color::Black);
        assert_eq!(mirrored.castling_rights(), state.castling_rights());
        assert_eq!(
            mirrored.legal_actions().unwrap().len(),
            state.legal_actions().unwrap().len()
        );
    }

    #[test]
    fn test_color_mirror_maps_en_passant() {
        let state = decode(START_BOARD).unwrap();
        let mut with_ep = state.clone();
        with_ep.en_passant = Some(Square(2, 4));
        assert_eq!(with_ep.color_mirror().en_passant(), Some(Square(5, 4)));
    }
}
