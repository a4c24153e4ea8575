//! Board portion of FEN: piece placement, rank 8 first.

use super::{Board, Colour, Coord, FenError, PieceKind};

impl Board {
    /// FEN encoding of one rank, files A to H, empty runs as digits.
    #[must_use]
    pub fn to_fen_row(&self, rank: u8) -> String {
        let mut row = String::new();
        let mut empty = 0;
        for file in 0..8 {
            match self.kind_at(Coord::from_parts(file, rank)) {
                Some((colour, kind)) => {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(kind.to_fen_char(colour));
                }
                None => empty += 1,
            }
        }
        if empty > 0 {
            row.push_str(&empty.to_string());
        }
        row
    }

    /// Piece placement field: ranks 8 down to 1 joined by `/`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        (0..8)
            .rev()
            .map(|rank| self.to_fen_row(rank))
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// Decode a piece placement field into `(tile, colour, kind)` triples,
/// rank 1 first. Uppercase letters are White.
pub(crate) fn parse_placement(field: &str) -> Result<Vec<(Coord, Colour, PieceKind)>, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut placed = Vec::new();
    for (rank, row) in ranks.iter().rev().enumerate() {
        let mut file = 0usize;
        for c in row.chars() {
            if let Some(run) = c.to_digit(10) {
                file += run as usize;
                continue;
            }
            let kind = PieceKind::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
            let colour = if c.is_ascii_uppercase() {
                Colour::White
            } else {
                Colour::Black
            };
            if file < 8 {
                placed.push((Coord::from_parts(file as u8, rank as u8), colour, kind));
            }
            file += 1;
        }
        if file != 8 {
            return Err(FenError::WrongFileCount {
                rank: rank + 1,
                files: file,
            });
        }
    }
    Ok(placed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_rows() {
        let board = Board::empty();
        assert_eq!(board.to_fen_row(0), "8");
        assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn test_row_run_lengths() {
        let mut board = Board::empty();
        board.place_piece("B3".parse().unwrap(), Colour::White, PieceKind::Knight);
        board.place_piece("G3".parse().unwrap(), Colour::Black, PieceKind::Queen);
        assert_eq!(board.to_fen_row(2), "1N4q1");
        assert_eq!(board.to_fen(), "8/8/8/8/8/1N4q1/8/8");
    }

    #[test]
    fn test_parse_placement_orders_rank_one_first() {
        let placed = parse_placement("7k/Q7/6K1/8/8/8/8/8").unwrap();
        assert_eq!(
            placed,
            vec![
                ("G6".parse().unwrap(), Colour::White, PieceKind::King),
                ("A7".parse().unwrap(), Colour::White, PieceKind::Queen),
                ("H8".parse().unwrap(), Colour::Black, PieceKind::King),
            ]
        );
    }

    #[test]
    fn test_parse_placement_errors() {
        assert_eq!(
            parse_placement("8/8/8"),
            Err(FenError::WrongRankCount { found: 3 })
        );
        assert_eq!(
            parse_placement("7x/8/8/8/8/8/8/8"),
            Err(FenError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            parse_placement("9/8/8/8/8/8/8/8"),
            Err(FenError::WrongFileCount { rank: 8, files: 9 })
        );
        assert_eq!(
            parse_placement("8/8/8/8/8/8/8/7"),
            Err(FenError::WrongFileCount { rank: 1, files: 7 })
        );
    }
}
