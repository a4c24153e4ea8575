use std::fmt;

use super::{Board, Coord};

/// Plain text grid, rank 8 at the top, `-` for empty tiles.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let symbol = self
                    .kind_at(Coord::from_parts(file, rank))
                    .map_or('-', |(colour, kind)| kind.to_fen_char(colour));
                if file > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  A B C D E F G H")
    }
}
