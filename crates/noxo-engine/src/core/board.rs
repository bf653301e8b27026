use std::fmt;

use serde::{Deserialize, Serialize};

use crate::IllegalMoveError;

use super::{line::LINES, outcome::Outcome, side::Side};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

const FULL_MASK: u16 = (1 << CELL_COUNT) - 1;

/// 3×3 board stored as one 9-bit occupancy mask per side.
///
/// Bit N corresponds to cell N, row-major:
///
/// ```text
///  0 | 1 | 2
/// ---+---+---
///  3 | 4 | 5
/// ---+---+---
///  6 | 7 | 8
/// ```
///
/// The two masks are disjoint by construction: [`Board::place`] is the only
/// mutator and refuses occupied cells. Copying a board is two `u16` loads,
/// which is what makes hypothetical move exploration in the search engine
/// allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    x_bits: u16,
    o_bits: u16,
}

impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: nine cells row-major, e.g. "XX.OO...."
        let mut cells = String::with_capacity(CELL_COUNT);
        for cell in 0..CELL_COUNT {
            cells.push(self.get(cell).map_or('.', Side::as_char));
        }
        serializer.serialize_str(&cells)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if s.chars().count() != CELL_COUNT {
            return Err(serde::de::Error::custom(format!(
                "expected {CELL_COUNT} cells, got {}",
                s.chars().count()
            )));
        }

        let mut board = Self::EMPTY;
        for (cell, ch) in s.chars().enumerate() {
            match ch {
                'X' => board.x_bits |= 1 << cell,
                'O' => board.o_bits |= 1 << cell,
                '.' => {}
                _ => {
                    return Err(serde::de::Error::custom(format!(
                        "invalid cell at index {cell}: {ch:?}"
                    )));
                }
            }
        }
        Ok(board)
    }
}

impl Board {
    pub const EMPTY: Self = Self {
        x_bits: 0,
        o_bits: 0,
    };

    /// Returns the side occupying `cell`, or `None` when the cell is empty
    /// or out of range.
    #[must_use]
    pub fn get(self, cell: usize) -> Option<Side> {
        if cell >= CELL_COUNT {
            return None;
        }
        let bit = 1 << cell;
        if self.x_bits & bit != 0 {
            Some(Side::X)
        } else if self.o_bits & bit != 0 {
            Some(Side::O)
        } else {
            None
        }
    }

    /// A move is legal iff the cell exists and is unoccupied.
    #[must_use]
    pub fn is_empty_cell(self, cell: usize) -> bool {
        cell < CELL_COUNT && (self.x_bits | self.o_bits) & (1 << cell) == 0
    }

    /// Marks `cell` for `side`.
    ///
    /// This is the sole mutator of board state; on error the board is left
    /// untouched.
    pub fn place(&mut self, cell: usize, side: Side) -> Result<(), IllegalMoveError> {
        if cell >= CELL_COUNT {
            return Err(IllegalMoveError::OutOfRange { cell });
        }
        if (self.x_bits | self.o_bits) & (1 << cell) != 0 {
            return Err(IllegalMoveError::CellOccupied { cell });
        }
        match side {
            Side::X => self.x_bits |= 1 << cell,
            Side::O => self.o_bits |= 1 << cell,
        }
        Ok(())
    }

    /// Iterates over the empty cells in ascending index order.
    ///
    /// The order is load-bearing for the search engine's deterministic
    /// tie-break: equal-scored moves resolve to the lowest index.
    pub fn empty_cells(self) -> impl Iterator<Item = usize> {
        let occupied = self.x_bits | self.o_bits;
        (0..CELL_COUNT).filter(move |cell| occupied & (1 << cell) == 0)
    }

    #[must_use]
    pub fn count(self, side: Side) -> u32 {
        match side {
            Side::X => self.x_bits.count_ones(),
            Side::O => self.o_bits.count_ones(),
        }
    }

    #[must_use]
    pub fn move_count(self) -> u32 {
        (self.x_bits | self.o_bits).count_ones()
    }

    #[must_use]
    pub fn is_full(self) -> bool {
        (self.x_bits | self.o_bits) & FULL_MASK == FULL_MASK
    }

    /// Derives the outcome by scanning the eight lines in fixed order
    /// (rows, then columns, then diagonals).
    ///
    /// The first decided line in scan order is reported; simultaneous wins
    /// for both sides cannot arise from alternating legal play, so the scan
    /// order only matters for boards constructed out of sequence.
    #[must_use]
    pub fn evaluate(self) -> Outcome {
        debug_assert_eq!(self.x_bits & self.o_bits, 0, "side masks overlap");
        for line in LINES {
            if self.x_bits & line.mask() == line.mask() {
                return Outcome::Win {
                    side: Side::X,
                    line,
                };
            }
            if self.o_bits & line.mask() == line.mask() {
                return Outcome::Win {
                    side: Side::O,
                    line,
                };
            }
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Creates a `Board` from ASCII art for tests and fixtures.
    ///
    /// `X` and `O` mark occupied cells, `.` marks empty ones; every other
    /// character is ignored, so the nine cells can be laid out over three
    /// lines.
    #[must_use]
    pub fn from_ascii(art: &str) -> Self {
        let cells: Vec<char> = art
            .chars()
            .filter(|ch| matches!(ch, 'X' | 'O' | '.'))
            .collect();
        assert_eq!(
            cells.len(),
            CELL_COUNT,
            "expected exactly {CELL_COUNT} cells, got {}",
            cells.len()
        );

        let mut board = Self::EMPTY;
        for (cell, ch) in cells.into_iter().enumerate() {
            match ch {
                'X' => board.x_bits |= 1 << cell,
                'O' => board.o_bits |= 1 << cell,
                _ => {}
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "---+---+---")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                let mark = self.get(row * 3 + col).map_or('.', Side::as_char);
                write!(f, " {mark} ")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
