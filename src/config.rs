use super::*;

pub const DEFAULT_DIM: u16 = 8;
pub const DEFAULT_START: Square = Square::new(6, 0);
pub const DEFAULT_UNVISITED_GLYPH: char = '*';

/// Everything a tour needs to know before it starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TourConfig {
    pub width: u16,
    pub height: u16,
    pub start: Square,
    pub unvisited_glyph: char,
}

/// Errors that can occur while setting up a tour
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// One of the board dimensions is zero
    #[error("Board must have at least one square, got {width}x{height}")]
    EmptyBoard { width: u16, height: u16 },

    /// The knight would start off the board
    #[error("Start square ({x}, {y}) is outside the {width}x{height} board")]
    StartOutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    /// More squares than a board cell can count up to
    #[error("Board of {width}x{height} has more than {max} squares")]
    BoardTooLarge { width: u16, height: u16, max: usize },

    /// The placeholder would be confused with a move number or with padding
    #[error("Unvisited glyph {glyph:?} must not be whitespace or a digit")]
    AmbiguousGlyph { glyph: char },
}

/// Result type alias for tour setup
pub type TourResult<T> = Result<T, ConfigError>;

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DIM,
            height: DEFAULT_DIM,
            start: DEFAULT_START,
            unvisited_glyph: DEFAULT_UNVISITED_GLYPH,
        }
    }
}

impl TourConfig {
    /// A `dim` by `dim` board with the knight in the `(0, 0)` corner.
    pub fn square(dim: u16) -> Self {
        Self::rectangle(dim, dim)
    }

    pub fn rectangle(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            start: Square::new(0, 0),
            unvisited_glyph: DEFAULT_UNVISITED_GLYPH,
        }
    }

    pub fn with_start(self, start: Square) -> Self {
        Self { start, ..self }
    }

    pub fn with_glyph(self, unvisited_glyph: char) -> Self {
        Self {
            unvisited_glyph,
            ..self
        }
    }

    pub fn square_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }

    pub fn validate(&self) -> TourResult<()> {
        let Self {
            width,
            height,
            start,
            unvisited_glyph,
        } = *self;

        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyBoard { width, height });
        }

        // The largest encoded value is the square count itself,
        // since no square is further than `square_count - 1` moves away.
        let max = usize::from(Cell::MAX);
        if self.square_count() > max {
            return Err(ConfigError::BoardTooLarge { width, height, max });
        }

        if !start.is_on_board(width, height) {
            return Err(ConfigError::StartOutOfBounds {
                x: start.x,
                y: start.y,
                width,
                height,
            });
        }

        if unvisited_glyph.is_whitespace() || unvisited_glyph.is_ascii_digit() {
            return Err(ConfigError::AmbiguousGlyph {
                glyph: unvisited_glyph,
            });
        }

        Ok(())
    }
}
