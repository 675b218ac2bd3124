use super::*;

use std::fmt::{self, Debug, Display, Formatter};

#[derive(Clone, Copy)]
pub struct Pretty<T> {
    pub value: T,
    pub glyph: char,
}

pub trait IntoPretty: Sized {
    fn pretty(self, glyph: char) -> Pretty<Self>;
}

impl IntoPretty for &Board {
    fn pretty(self, glyph: char) -> Pretty<Self> {
        Pretty { value: self, glyph }
    }
}

impl IntoPretty for &Wave {
    fn pretty(self, glyph: char) -> Pretty<Self> {
        Pretty { value: self, glyph }
    }
}

impl IntoPretty for &[Wave] {
    fn pretty(self, glyph: char) -> Pretty<Self> {
        Pretty { value: self, glyph }
    }
}

impl Display for Pretty<&Board> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let board = self.value;
        // No move count reaches the square count.
        let cell_width = digit_count(board.square_count().saturating_sub(1));

        for y in 0..board.height() {
            if y > 0 {
                writeln!(f)?;
            }

            for x in 0..board.width() {
                match board.moves_at(Square::new(x, y)) {
                    Some(moves) => write!(f, " {moves:>cell_width$}")?,
                    None => write!(f, " {:>cell_width$}", self.glyph)?,
                }
            }
        }

        Ok(())
    }
}

impl Debug for Pretty<&Board> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self, f)
    }
}

impl Display for Pretty<&Wave> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Wave { moves, board } = self.value;
        let board = board.pretty(self.glyph);
        write!(
            f,
            "Move iteration number {moves}\nBoard at current iteration:\n{board}"
        )
    }
}

impl Debug for Pretty<&Wave> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self, f)
    }
}

impl Display for Pretty<&[Wave]> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, wave) in self.value.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", wave.pretty(self.glyph))?;
        }

        Ok(())
    }
}

impl Debug for Pretty<&[Wave]> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self, f)
    }
}

fn digit_count(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
