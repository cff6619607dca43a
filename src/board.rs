use crate::error::MoveError;
use std::fmt;

/// The mark a player places on the board. `First` always opens the game.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mark {
    /// Plays `X` and moves first.
    First,
    /// Plays `O`.
    Second,
}

impl Mark {
    /// Returns the mark of the other player.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// Returns the symbol used when rendering or hashing the board.
    pub fn symbol(self) -> char {
        Occupant::from(self).symbol()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// What a single cell currently holds.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Occupant {
    #[default]
    Empty,
    First,
    Second,
}

impl Occupant {
    pub fn symbol(self) -> char {
        match self {
            Occupant::Empty => '_',
            Occupant::First => 'X',
            Occupant::Second => 'O',
        }
    }

    pub fn is_empty(self) -> bool {
        self == Occupant::Empty
    }

    /// Returns the mark occupying the cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Occupant::Empty => None,
            Occupant::First => Some(Mark::First),
            Occupant::Second => Some(Mark::Second),
        }
    }
}

impl From<Mark> for Occupant {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::First => Occupant::First,
            Mark::Second => Occupant::Second,
        }
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Zero-based board coordinates. This is the move type of the game.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A single board position together with its occupant.
///
/// Two cells are equal when their coordinates are equal, whatever they hold.
#[derive(Debug, Copy, Clone)]
pub struct Cell {
    position: Position,
    occupant: Occupant,
}

impl Cell {
    fn new(row: usize, col: usize) -> Self {
        Self {
            position: Position::new(row, col),
            occupant: Occupant::Empty,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn col(&self) -> usize {
        self.position.col
    }

    pub fn occupant(&self) -> Occupant {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_empty()
    }
}

impl PartialEq<Self> for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cell {}

impl std::hash::Hash for Cell {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.position.hash(state);
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            write!(f, "({},{})", self.row(), self.col())
        } else {
            write!(f, "({},{},{})", self.row(), self.col(), self.occupant)
        }
    }
}

/// A square N x N Tic-Tac-Toe board.
///
/// The grid is allocated once and mutated in place. Cells are stored in row-major
/// order, which is also the order [`Board::empty_cells`] yields them in, so move
/// selection ties are broken towards the top-left corner.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
    occupied: usize,
}

impl Board {
    /// Creates an empty board of `size` x `size` cells.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        let cells = (0..size)
            .flat_map(|row| (0..size).map(move |col| Cell::new(row, col)))
            .collect();
        Self {
            size,
            cells,
            occupied: 0,
        }
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells, N².
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied cells.
    pub fn moves_made(&self) -> usize {
        self.occupied
    }

    /// `true` while no cell has been played.
    pub fn is_pristine(&self) -> bool {
        self.occupied == 0
    }

    pub fn is_full(&self) -> bool {
        self.occupied == self.cells.len()
    }

    /// Validates coordinates coming from outside the engine.
    pub fn position(&self, row: usize, col: usize) -> Result<Position, MoveError> {
        if row >= self.size || col >= self.size {
            return Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(Position::new(row, col))
    }

    /// Returns the cell at `at`. Coordinates must be in bounds.
    pub fn cell(&self, at: Position) -> &Cell {
        &self.cells[self.index(at)]
    }

    /// Returns the occupant at (`row`, `col`). Coordinates must be in bounds.
    pub fn occupant(&self, row: usize, col: usize) -> Occupant {
        self.cell(Position::new(row, col)).occupant
    }

    pub fn is_empty_at(&self, at: Position) -> bool {
        self.cell(at).is_empty()
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells.iter().filter(|c| c.is_empty()).copied().collect()
    }

    /// Places `mark` on an empty cell and returns the updated cell.
    pub fn apply_move(&mut self, at: Position, mark: Mark) -> Result<Cell, MoveError> {
        let cell = self.cell(at);
        if !cell.is_empty() {
            return Err(MoveError::IllegalMove {
                row: at.row,
                col: at.col,
                occupant: cell.occupant,
            });
        }
        Ok(self.place(at, mark))
    }

    /// Places `mark` on a cell the caller knows to be empty.
    pub(crate) fn place(&mut self, at: Position, mark: Mark) -> Cell {
        let index = self.index(at);
        debug_assert!(self.cells[index].is_empty(), "{at} is already occupied");
        self.cells[index].occupant = mark.into();
        self.occupied += 1;
        self.cells[index]
    }

    /// Clears a cell played by [`Board::apply_move`]. Undo must mirror apply in
    /// reverse order while searching.
    pub fn undo_move(&mut self, at: Position) {
        let index = self.index(at);
        if !self.cells[index].is_empty() {
            self.cells[index].occupant = Occupant::Empty;
            self.occupied -= 1;
        }
    }

    /// Canonical encoding of the board: every occupant symbol in row-major order.
    ///
    /// Two boards share a hash if and only if their occupant layouts are equal.
    pub fn hash(&self) -> String {
        self.cells.iter().map(|c| c.occupant.symbol()).collect()
    }

    fn index(&self, at: Position) -> usize {
        at.row * self.size + at.col
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            let symbols: Vec<String> = row.iter().map(|c| c.occupant.to_string()).collect();
            writeln!(f, "{}", symbols.join(" "))?;
        }
        Ok(())
    }
}
