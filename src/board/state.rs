use super::{Colour, Coord, PieceKind, TileError};

/// Stable identity of a piece within its board's piece arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

impl PieceId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// A piece and its back-reference to the tile it stands on.
///
/// `tile` is `None` once the piece has been captured. Captured pieces stay in
/// the arena so that player collections keep every piece ever dealt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub(crate) kind: PieceKind,
    pub(crate) colour: Colour,
    pub(crate) tile: Option<Coord>,
    pub(crate) has_moved: bool,
}

impl Piece {
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn colour(&self) -> Colour {
        self.colour
    }

    #[inline]
    #[must_use]
    pub const fn tile(&self) -> Option<Coord> {
        self.tile
    }

    #[inline]
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.tile.is_some()
    }

    /// Only tracked for pawns; governs the two-step forward move.
    #[inline]
    #[must_use]
    pub const fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// FEN letter, uppercase for White
    #[must_use]
    pub fn symbol(&self) -> char {
        self.kind.to_fen_char(self.colour)
    }
}

/// One of the 64 board tiles and its optional occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub(crate) coord: Coord,
    pub(crate) occupant: Option<PieceId>,
}

impl Tile {
    #[inline]
    #[must_use]
    pub const fn coord(&self) -> Coord {
        self.coord
    }

    /// Two-character name such as `"E4"`
    #[must_use]
    pub fn name(&self) -> String {
        self.coord.to_string()
    }

    #[inline]
    #[must_use]
    pub const fn occupant(&self) -> Option<PieceId> {
        self.occupant
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Fixed 8x8 grid of tiles plus the arena of every piece placed on it.
///
/// Tiles hold piece ids and pieces hold tile coordinates; both ends are only
/// ever updated together by `enter`/`vacate` in `make_move.rs`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) tiles: [Tile; 64],
    pub(crate) pieces: Vec<Piece>,
}

impl Board {
    /// A board with 64 empty tiles and no pieces.
    #[must_use]
    pub fn empty() -> Self {
        let mut tiles = [Tile {
            coord: Coord::from_index(0),
            occupant: None,
        }; 64];
        for (index, tile) in tiles.iter_mut().enumerate() {
            tile.coord = Coord::from_index(index);
        }
        Board {
            tiles,
            pieces: Vec::new(),
        }
    }

    /// Tile at `(file, rank)`, or `None` off the board.
    ///
    /// Ray casting relies on the `None` to find the board edge.
    #[inline]
    #[must_use]
    pub fn get_tile(&self, file: i8, rank: i8) -> Option<&Tile> {
        Coord::new(file, rank).map(|coord| self.tile(coord))
    }

    #[inline]
    #[must_use]
    pub fn tile(&self, coord: Coord) -> &Tile {
        &self.tiles[coord.index()]
    }

    /// Tile with the given two-character name (either case), or `None`.
    #[must_use]
    pub fn get_tile_by_name(&self, name: &str) -> Option<&Tile> {
        name.parse::<Coord>().ok().map(|coord| self.tile(coord))
    }

    /// Like `get_tile_by_name` but reports why the lookup failed.
    pub fn try_tile_by_name(&self, name: &str) -> Result<&Tile, TileError> {
        let coord = name.parse::<Coord>()?;
        Ok(self.tile(coord))
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile; 64] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// Every piece ever placed, alive or captured, with its id.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(index, piece)| (PieceId(index), piece))
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, coord: Coord) -> Option<PieceId> {
        self.tile(coord).occupant
    }

    /// Kind and colour of the piece on `coord`.
    #[must_use]
    pub fn kind_at(&self, coord: Coord) -> Option<(Colour, PieceKind)> {
        self.piece_at(coord).map(|id| {
            let piece = self.piece(id);
            (piece.colour, piece.kind)
        })
    }

    /// Create a piece and install it on `coord`. A piece already standing
    /// there is captured.
    pub fn place_piece(&mut self, coord: Coord, colour: Colour, kind: PieceKind) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece {
            kind,
            colour,
            tile: None,
            has_moved: false,
        });
        self.enter(coord, id);
        id
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_tile_bounds() {
        let board = Board::empty();
        for file in -2..10 {
            for rank in -2..10 {
                let on_board = (0..8).contains(&file) && (0..8).contains(&rank);
                assert_eq!(board.get_tile(file, rank).is_some(), on_board);
            }
        }
    }

    #[test]
    fn test_tile_coordinates_match_position() {
        let board = Board::empty();
        let tile = board.get_tile(4, 1).unwrap();
        assert_eq!(tile.name(), "E2");
        assert!(tile.is_empty());
    }

    #[test]
    fn test_get_tile_by_name() {
        let board = Board::empty();
        assert_eq!(board.get_tile_by_name("c5").unwrap().name(), "C5");
        assert!(board.get_tile_by_name("J1").is_none());
        assert!(matches!(
            board.try_tile_by_name("J1"),
            Err(TileError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_place_piece_links_both_ends() {
        let mut board = Board::empty();
        let coord: Coord = "D4".parse().unwrap();
        let id = board.place_piece(coord, Colour::White, PieceKind::Queen);
        assert_eq!(board.piece_at(coord), Some(id));
        assert_eq!(board.piece(id).tile(), Some(coord));
        assert!(board.piece(id).is_alive());
        assert_eq!(board.piece(id).symbol(), 'Q');
    }
}
