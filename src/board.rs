use super::*;

/// The encoded contents of one square.
/// `NOT_VISITED` means no path has reached the square yet;
/// any other value is one more than the move count that first reached it.
pub type Cell = u16;

pub const NOT_VISITED: Cell = 0;

/// Errors from writing to a board directly
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkError {
    /// The square lies outside the board
    #[error("Square ({x}, {y}) is outside the {width}x{height} board")]
    OffBoard {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    /// The move count does not fit in a board cell
    #[error("Move count {moves} is too large to record")]
    MoveCountTooLarge { moves: u32 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u16,
    height: u16,
    /// Column-major: the cell for `(x, y)` lives at `x * height + y`.
    raw: Box<[Cell]>,
}

impl Board {
    /// Returns a board where every square is unvisited
    /// except the knight's starting square, which is marked as reached at move 0.
    pub fn initialize(config: &TourConfig) -> TourResult<Board> {
        config.validate()?;

        let mut board = Board {
            width: config.width,
            height: config.height,
            raw: vec![NOT_VISITED; config.square_count()].into_boxed_slice(),
        };
        let Some(start) = board.index(config.start) else {
            return Err(ConfigError::StartOutOfBounds {
                x: config.start.x,
                y: config.start.y,
                width: config.width,
                height: config.height,
            });
        };
        board.raw[start] = NOT_VISITED + 1;

        Ok(board)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Squares off the board are never unvisited.
    pub fn is_unvisited(&self, square: Square) -> bool {
        self.index(square).is_some_and(|index| self.raw[index] == NOT_VISITED)
    }

    /// Records that `square` was first reached after `moves` moves.
    ///
    /// The square must currently be unvisited.
    /// Marking a square twice silently overwrites the first value in release builds.
    pub fn mark(&mut self, square: Square, moves: u32) -> Result<(), MarkError> {
        let Some(index) = self.index(square) else {
            return Err(MarkError::OffBoard {
                x: square.x,
                y: square.y,
                width: self.width,
                height: self.height,
            });
        };

        let encoded = moves
            .checked_add(1)
            .and_then(|encoded| Cell::try_from(encoded).ok())
            .ok_or(MarkError::MoveCountTooLarge { moves })?;

        debug_assert!(
            self.raw[index] == NOT_VISITED,
            "square {square:?} was already reached"
        );

        self.raw[index] = encoded;
        Ok(())
    }

    /// The move count at which `square` was first reached, if it has been.
    pub fn moves_at(&self, square: Square) -> Option<u32> {
        match self.raw[self.index(square)?] {
            NOT_VISITED => None,
            encoded => Some(u32::from(encoded) - 1),
        }
    }

    pub fn square_count(&self) -> usize {
        self.raw.len()
    }

    /// Visits every square in render order (row by row, `y` outer, `x` inner).
    pub fn visit(&self, mut visitor: impl FnMut(Square, Option<u32>)) {
        for y in 0..self.height {
            for x in 0..self.width {
                let square = Square::new(x, y);
                visitor(square, self.moves_at(square));
            }
        }
    }

    pub fn reached_count(&self) -> usize {
        self.raw.iter().filter(|&&cell| cell != NOT_VISITED).count()
    }

    pub fn unreached_squares(&self) -> Vec<Square> {
        let mut out = vec![];
        self.visit(|square, moves| {
            if moves.is_none() {
                out.push(square);
            }
        });
        out
    }

    /// The largest move count on the board.
    pub fn max_moves(&self) -> u32 {
        self.raw
            .iter()
            .copied()
            .max()
            .map_or(0, |encoded| u32::from(encoded).saturating_sub(1))
    }

    pub fn render(&self, glyph: char) -> String {
        self.pretty(glyph).to_string()
    }

    fn index(&self, square: Square) -> Option<usize> {
        if !square.is_on_board(self.width, self.height) {
            return None;
        }

        Some(usize::from(square.x) * usize::from(self.height) + usize::from(square.y))
    }
}
