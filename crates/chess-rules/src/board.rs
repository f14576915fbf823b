//! Authoritative board state.

use std::fmt;

use chess_core::{Color, PieceKind, Square};
use tracing::debug;

use crate::attacks::is_square_attacked;
use crate::grid::{Grid, Occupant};
use crate::piece::BoardId;
use crate::{rules, setup, BoardError, Piece, PieceId};

#[derive(Debug, Clone, Copy)]
struct PieceRecord {
    piece: Piece,
    /// Mirror of grid occupancy; `None` while the piece is off the board.
    square: Option<Square>,
}

/// The board: occupancy grid, side to move, and an index from every piece to
/// its square.
///
/// The board issues a [`PieceId`] for every piece it creates. The per-piece
/// square index and the kings' handles are kept in step with the grid on
/// every mutation; the grid is the source of truth.
///
/// [`can_move`](Self::can_move) borrows the board immutably and evaluates
/// hypothetical moves on a scratch copy of the grid, so it never changes
/// state. [`attempt_move`](Self::attempt_move) is the only play-time
/// mutation.
#[derive(Debug, Clone)]
pub struct Board {
    id: BoardId,
    grid: Grid,
    records: Vec<PieceRecord>,
    turn: Color,
    /// Handles of the two kings, indexed by [`Color::index`].
    kings: [PieceId; 2],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates a board holding only the two kings, on e1 and e8, with White
    /// to move.
    pub fn new() -> Self {
        let id = BoardId::fresh();
        let mut board = Board {
            id,
            grid: Grid::empty(),
            records: Vec::with_capacity(32),
            turn: Color::White,
            kings: [PieceId { board: id, index: 0 }; 2],
        };
        for color in Color::ALL {
            let home = setup::king_home(color);
            board.kings[color.index()] = board.spawn(Piece::new(color, PieceKind::King), home);
        }
        board
    }

    /// Resets to the standard starting position with White to move.
    ///
    /// The kings keep their handles. Every other piece previously on this
    /// board is left off the grid and a fresh army is created.
    pub fn setup_game(&mut self) {
        self.clear_board();
        for (color, kind, sq) in setup::standard_layout() {
            if kind == PieceKind::King {
                self.relocate(self.king(color), sq);
            } else {
                self.spawn(Piece::new(color, kind), sq);
            }
        }
        self.turn = Color::White;
        debug!(pieces = self.grid.count(), "game set up");
    }

    /// Empties all 64 cells. The side to move is unchanged and king handles
    /// stay valid, though the kings are off the board until placed again.
    pub fn clear_board(&mut self) {
        self.grid = Grid::empty();
        for record in &mut self.records {
            record.square = None;
        }
    }

    /// Moves `piece` to (`rank`, `file`) if it is that piece's turn and the
    /// move is legal. Returns `Ok(true)` when the move was committed; on
    /// `Ok(false)` the board is untouched.
    ///
    /// A captured piece leaves the grid. The turn passes to the other side
    /// after every committed move.
    pub fn attempt_move(&mut self, piece: PieceId, rank: i32, file: i32) -> Result<bool, BoardError> {
        let info = self.piece(piece)?;
        if info.color != self.turn {
            debug!(%piece, %info, rank, file, turn = %self.turn, "rejected: not this side's turn");
            return Ok(false);
        }

        if !self.can_move(piece, rank, file)? {
            debug!(%piece, %info, rank, file, "rejected: illegal move");
            return Ok(false);
        }

        let from = self.square_of(piece)?;
        let Ok(to) = Square::from_coords(rank, file) else {
            return Ok(false);
        };
        let captured = self.relocate(piece, to);
        self.turn = self.turn.opposite();

        debug!(%piece, %info, %from, %to, ?captured, "move committed");
        Ok(true)
    }

    /// Returns true if `piece` may legally move to (`rank`, `file`).
    ///
    /// Turn order is not considered. Off-board targets are simply illegal;
    /// an off-board or foreign `piece` is an error, as is asking while the
    /// mover's own king is off the board.
    pub fn can_move(&self, piece: PieceId, rank: i32, file: i32) -> Result<bool, BoardError> {
        let (mover, from) = self.locate(piece)?;
        let own_king = self.square_of(self.king(mover.color()))?;
        Ok(rules::can_move(&self.grid, mover, from, own_king, rank, file))
    }

    /// Every square `piece` may legally move to, a1 first.
    pub fn legal_targets(&self, piece: PieceId) -> Result<Vec<Square>, BoardError> {
        let (mover, from) = self.locate(piece)?;
        let own_king = self.square_of(self.king(mover.color()))?;
        Ok(Square::all()
            .filter(|to| {
                rules::can_move(&self.grid, mover, from, own_king, to.rank() as i32, to.file() as i32)
            })
            .collect())
    }

    /// True if `color`'s king is attacked. Computed on every call.
    pub fn is_in_check(&self, color: Color) -> Result<bool, BoardError> {
        let sq = self.square_of(self.king(color))?;
        Ok(is_square_attacked(&self.grid, sq, color))
    }

    /// The side to move.
    #[inline]
    pub fn turn_color(&self) -> Color {
        self.turn
    }

    /// Handle of `color`'s king.
    #[inline]
    pub fn king(&self, color: Color) -> PieceId {
        self.kings[color.index()]
    }

    /// Color and kind of `piece`.
    pub fn piece(&self, piece: PieceId) -> Result<Piece, BoardError> {
        Ok(self.record(piece)?.piece)
    }

    /// The piece standing on `sq`, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<PieceId> {
        self.grid.get(sq).map(|o| o.id)
    }

    /// The square `piece` stands on.
    pub fn square_of(&self, piece: PieceId) -> Result<Square, BoardError> {
        self.record(piece)?
            .square
            .ok_or(BoardError::PieceOffBoard(piece))
    }

    /// Iterates over the pieces on the grid in creation order.
    pub fn pieces(&self) -> impl Iterator<Item = (PieceId, Piece, Square)> + '_ {
        self.records.iter().enumerate().filter_map(move |(i, r)| {
            r.square
                .map(|sq| (PieceId { board: self.id, index: i as u32 }, r.piece, sq))
        })
    }

    /// Read access to occupancy.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Setup primitive: creates a new piece on an empty square.
    ///
    /// Kings cannot be added; each side's king exists from construction.
    pub fn add_piece(&mut self, color: Color, kind: PieceKind, sq: Square) -> Result<PieceId, BoardError> {
        if kind == PieceKind::King {
            return Err(BoardError::ExtraKing(color));
        }
        if !self.grid.is_empty(sq) {
            return Err(BoardError::SquareOccupied(sq));
        }
        Ok(self.spawn(Piece::new(color, kind), sq))
    }

    /// Setup primitive: puts an existing piece on `sq` without any legality
    /// check, returning the piece it displaced (now off the board).
    pub fn place(&mut self, piece: PieceId, sq: Square) -> Result<Option<PieceId>, BoardError> {
        self.record(piece)?;
        Ok(self.relocate(piece, sq))
    }

    /// Setup primitive: takes whatever stands on `sq` off the board.
    pub fn lift(&mut self, sq: Square) -> Option<PieceId> {
        let removed = self.grid.set(sq, None)?;
        self.records[removed.id.index as usize].square = None;
        Some(removed.id)
    }

    /// True if the square index agrees exactly with grid occupancy.
    pub fn is_consistent(&self) -> bool {
        let index_matches_grid = self.pieces().all(|(id, piece, sq)| {
            self.grid.get(sq) == Some(Occupant { id, piece })
        });
        let grid_matches_index = self.grid.occupied().all(|(sq, o)| {
            o.id.board == self.id
                && self
                    .records
                    .get(o.id.index as usize)
                    .is_some_and(|r| r.square == Some(sq) && r.piece == o.piece)
        });
        index_matches_grid && grid_matches_index
    }

    fn record(&self, piece: PieceId) -> Result<&PieceRecord, BoardError> {
        if piece.board != self.id {
            return Err(BoardError::ForeignPiece(piece));
        }
        self.records
            .get(piece.index as usize)
            .ok_or(BoardError::ForeignPiece(piece))
    }

    fn locate(&self, piece: PieceId) -> Result<(Occupant, Square), BoardError> {
        let record = self.record(piece)?;
        let sq = record.square.ok_or(BoardError::PieceOffBoard(piece))?;
        Ok((
            Occupant {
                id: piece,
                piece: record.piece,
            },
            sq,
        ))
    }

    /// Creates a record and puts the piece on `sq`, which must be empty.
    fn spawn(&mut self, piece: Piece, sq: Square) -> PieceId {
        let id = PieceId {
            board: self.id,
            index: self.records.len() as u32,
        };
        self.records.push(PieceRecord { piece, square: None });
        self.relocate(id, sq);
        id
    }

    /// Moves a known piece to `to`, keeping grid and index in step. Returns
    /// the piece displaced from `to`, if any.
    fn relocate(&mut self, id: PieceId, to: Square) -> Option<PieceId> {
        let idx = id.index as usize;
        let piece = self.records[idx].piece;
        if let Some(from) = self.records[idx].square.take() {
            self.grid.set(from, None);
        }

        let displaced = self
            .grid
            .set(to, Some(Occupant { id, piece }))
            .map(|o| o.id)
            .filter(|&other| other != id);
        if let Some(other) = displaced {
            self.records[other.index as usize].square = None;
        }

        self.records[idx].square = Some(to);
        displaced
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8u8 {
                let c = Square::new(rank, file)
                    .and_then(|sq| self.grid.get(sq))
                    .map_or('.', |o| o.kind().to_char(o.color()));
                if file < 7 {
                    write!(f, "{} ", c)?;
                } else {
                    writeln!(f, "{}", c)?;
                }
            }
        }
        write!(f, "  a b c d e f g h")
    }
}
