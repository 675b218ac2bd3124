/// The eight knight jumps, in the order a square's neighbors are enqueued.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square {
    pub x: u16,
    pub y: u16,
}

impl Square {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    pub const fn is_on_board(self, width: u16, height: u16) -> bool {
        self.x < width && self.y < height
    }

    /// Returns the square reached by jumping `offset` from `self`,
    /// or `None` if that square would fall off a `width` by `height` board.
    pub fn knight_move(self, offset: (i8, i8), width: u16, height: u16) -> Option<Square> {
        let x = i32::from(self.x) + i32::from(offset.0);
        let y = i32::from(self.y) + i32::from(offset.1);

        if x < 0 || y < 0 || x >= i32::from(width) || y >= i32::from(height) {
            return None;
        }

        Some(Square::new(x as u16, y as u16))
    }

    pub fn knight_moves(self, width: u16, height: u16) -> impl Iterator<Item = Square> {
        KNIGHT_OFFSETS
            .into_iter()
            .filter_map(move |offset| self.knight_move(offset, width, height))
    }
}
